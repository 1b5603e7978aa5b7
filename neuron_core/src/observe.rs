use serde::{Deserialize, Serialize};

use crate::gradient::gradients;
use crate::neuron::{forward, loss};
use crate::state::{ModelState, Sample};

/// Everything derived from the current state and sample: the prediction,
/// its loss, and the two partials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub y: f64,
    pub loss: f64,
    pub dl_dw: f64,
    pub dl_db: f64,
}

/// Recomputes the derived values for a state/sample pair.
///
/// Every mutator calls this synchronously after touching the state, so a
/// reader never sees an observation that predates the state it describes.
pub fn observe(state: &ModelState, sample: &Sample) -> Observation {
    let fwd = forward(state.w, state.b, sample.x);
    let grads = gradients(fwd.y, sample.y_true, sample.x);

    Observation {
        y: fwd.y,
        loss: loss(fwd.y, sample.y_true),
        dl_dw: grads.dl_dw,
        dl_db: grads.dl_db,
    }
}
