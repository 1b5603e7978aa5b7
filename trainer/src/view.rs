use serde::Serialize;

use neuron_core::{ModelState, Observation, Sample, TrainingConfig};

use crate::session::TrainerSession;

/// Snapshot handed to the rendering layer: the full parameter tuple, the
/// derived values, the scheduler flag and the step count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionView {
    pub state: ModelState,
    pub sample: Sample,
    pub config: TrainingConfig,
    pub observation: Observation,
    pub running: bool,
    pub steps: u64,
}

impl SessionView {
    pub(crate) fn capture(session: &TrainerSession, running: bool) -> Self {
        Self {
            state: session.state(),
            sample: session.sample(),
            config: session.config(),
            observation: session.observation(),
            running,
            steps: session.steps(),
        }
    }

    /// Serializes the snapshot for a JSON consumer.
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
