mod bounds;
mod gradient;
mod neuron;
mod observe;
mod sampler;
mod state;

pub use bounds::{Bounds, INPUT_BOUNDS, LEARNING_RATE_BOUNDS, PARAM_BOUNDS, TARGET_BOUNDS};
pub use gradient::{Gradients, gradients};
pub use neuron::{Forward, forward, loss, sigmoid};
pub use observe::{Observation, observe};
pub use sampler::{
    CurveData, CurvePoint, PERTURBATION_SAMPLES, PerturbationCurves, RESPONSE_SAMPLES,
    ResponseCurve, curves, perturbation_curves, response_curve,
};
pub use state::{ModelState, Sample, TrainingConfig};
