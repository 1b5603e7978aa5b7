use serde::{Deserialize, Serialize};

/// Partial derivatives of the loss with respect to each trainable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    pub dl_dw: f64,
    pub dl_db: f64,
}

/// Chain-rule gradients for the squared-error sigmoid neuron.
///
/// Takes the activation `y` from an already-computed forward pass instead of
/// re-evaluating it:
/// `dL/dy = -2(y_true - y)`, `dy/dz = y(1 - y)`, `dz/dw = x`, `dz/db = 1`.
///
/// # Arguments
/// * `y` - Activation produced by [`forward`](crate::forward).
/// * `y_true` - Target output for the training example.
/// * `x` - Input of the training example.
///
/// # Returns
/// The two partials `dL/dw` and `dL/db`.
pub fn gradients(y: f64, y_true: f64, x: f64) -> Gradients {
    let dl_dz = -2.0 * (y_true - y) * y * (1.0 - y);

    Gradients {
        dl_dw: dl_dz * x,
        dl_db: dl_dz,
    }
}
