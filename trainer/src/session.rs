use log::debug;
use rand::Rng;

use neuron_core::{
    CurveData, Gradients, INPUT_BOUNDS, LEARNING_RATE_BOUNDS, ModelState, Observation,
    PARAM_BOUNDS, Sample, TARGET_BOUNDS, TrainingConfig, curves, observe,
};

/// Applies one gradient-descent step to the parameters.
///
/// The raw update `p - α·dL/dp` may transiently leave the trainable range;
/// the result is clamped back before it becomes the new state, so the step
/// is total for any learning rate.
///
/// # Arguments
/// * `state` - Parameters before the step.
/// * `grads` - Partials evaluated at `state`.
/// * `learning_rate` - Step length `α`.
///
/// # Returns
/// The stepped, clamped parameters.
pub fn apply_step(state: ModelState, grads: &Gradients, learning_rate: f64) -> ModelState {
    ModelState {
        w: PARAM_BOUNDS.clamp(state.w - learning_rate * grads.dl_dw),
        b: PARAM_BOUNDS.clamp(state.b - learning_rate * grads.dl_db),
    }
}

/// The owned aggregate of everything the trainer mutates: parameters, the
/// training example, the update-rule settings and the derived observation.
///
/// This is the sole mutator of [`ModelState`]; every mutator refreshes the
/// observation before returning, so reads are never stale.
pub struct TrainerSession {
    state: ModelState,
    sample: Sample,
    config: TrainingConfig,
    obs: Observation,
    steps: u64,
}

impl TrainerSession {
    /// Returns a new session at the reset point with the default sample.
    pub fn new() -> Self {
        let state = ModelState::default();
        let sample = Sample::default();

        Self {
            obs: observe(&state, &sample),
            state,
            sample,
            config: TrainingConfig::default(),
            steps: 0,
        }
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn sample(&self) -> Sample {
        self.sample
    }

    pub fn config(&self) -> TrainingConfig {
        self.config
    }

    /// Returns the derived values for the current state and sample.
    pub fn observation(&self) -> Observation {
        self.obs
    }

    /// Number of gradient-descent steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Regenerates the three plot datasets from the current state.
    pub fn curves(&self) -> CurveData {
        curves(&self.state, &self.sample)
    }

    fn refresh(&mut self) {
        self.obs = observe(&self.state, &self.sample);
    }

    pub fn set_w(&mut self, w: f64) {
        self.state.w = PARAM_BOUNDS.clamp(w);
        self.refresh();
    }

    pub fn set_b(&mut self, b: f64) {
        self.state.b = PARAM_BOUNDS.clamp(b);
        self.refresh();
    }

    pub fn set_x(&mut self, x: f64) {
        self.sample.x = INPUT_BOUNDS.clamp(x);
        self.refresh();
    }

    pub fn set_y_true(&mut self, y_true: f64) {
        self.sample.y_true = TARGET_BOUNDS.clamp(y_true);
        self.refresh();
    }

    /// The observation does not depend on the learning rate, so no refresh.
    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.config.learning_rate = LEARNING_RATE_BOUNDS.clamp(learning_rate);
    }

    /// Takes one gradient-descent step using the gradients of the current
    /// observation.
    pub fn step(&mut self) {
        let grads = Gradients {
            dl_dw: self.obs.dl_dw,
            dl_db: self.obs.dl_db,
        };

        self.state = apply_step(self.state, &grads, self.config.learning_rate);
        self.steps += 1;
        self.refresh();

        debug!(
            "step {}: w={:.4} b={:.4} loss={:.6}",
            self.steps, self.state.w, self.state.b, self.obs.loss
        );
    }

    /// Puts the parameters back at the fixed reset point, leaving the
    /// sample and the learning rate untouched.
    pub fn reset(&mut self) {
        self.state = ModelState::default();
        self.refresh();
        debug!("reset: w={} b={}", self.state.w, self.state.b);
    }

    /// Draws `w`, `b`, `x` and `y_true` uniformly from their ranges.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.state.w = PARAM_BOUNDS.sample(rng);
        self.state.b = PARAM_BOUNDS.sample(rng);
        self.sample.x = INPUT_BOUNDS.sample(rng);
        self.sample.y_true = TARGET_BOUNDS.sample(rng);
        self.refresh();
    }
}

impl Default for TrainerSession {
    fn default() -> Self {
        Self::new()
    }
}
