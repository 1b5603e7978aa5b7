use rand::Rng;
use serde::{Deserialize, Serialize};

/// A closed interval a value is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Trainable range for both `w` and `b`.
pub const PARAM_BOUNDS: Bounds = Bounds {
    min: -2.0,
    max: 2.0,
};

/// Range of the training input `x`.
pub const INPUT_BOUNDS: Bounds = Bounds {
    min: -10.0,
    max: 10.0,
};

/// Range of the target output `y_true`.
pub const TARGET_BOUNDS: Bounds = Bounds { min: 0.0, max: 1.0 };

/// Range of the gradient-descent learning rate.
pub const LEARNING_RATE_BOUNDS: Bounds = Bounds {
    min: 0.001,
    max: 1.0,
};

impl Bounds {
    /// Saturates `v` at the nearer bound.
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Draws uniformly from the closed interval.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max)
    }
}
