use serde::{Deserialize, Serialize};

use crate::bounds::{INPUT_BOUNDS, LEARNING_RATE_BOUNDS, PARAM_BOUNDS, TARGET_BOUNDS};

/// The two trainable parameters of the neuron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub w: f64,
    pub b: f64,
}

impl ModelState {
    /// Returns a new `ModelState` with both parameters clamped into the
    /// trainable range.
    pub fn new(w: f64, b: f64) -> Self {
        Self {
            w: PARAM_BOUNDS.clamp(w),
            b: PARAM_BOUNDS.clamp(b),
        }
    }
}

impl Default for ModelState {
    /// The fixed reset point `w = 0.5, b = 0.1`.
    fn default() -> Self {
        Self { w: 0.5, b: 0.1 }
    }
}

/// The single training example the neuron is fit against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y_true: f64,
}

impl Sample {
    /// Returns a new `Sample` with both fields clamped into their ranges.
    pub fn new(x: f64, y_true: f64) -> Self {
        Self {
            x: INPUT_BOUNDS.clamp(x),
            y_true: TARGET_BOUNDS.clamp(y_true),
        }
    }
}

impl Default for Sample {
    fn default() -> Self {
        Self { x: 2.5, y_true: 0.9 }
    }
}

/// Settings for the gradient-descent update rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub learning_rate: f64,
}

impl TrainingConfig {
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate: LEARNING_RATE_BOUNDS.clamp(learning_rate),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { learning_rate: 0.1 }
    }
}
