use serde::{Deserialize, Serialize};

/// The logistic function `1 / (1 + e^-z)`.
///
/// Branches on the sign of `z` so `exp` only ever sees a non-positive
/// argument; the curve sampler evaluates this at swept parameter values
/// well outside the trainable range.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Result of a single forward pass through the neuron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forward {
    /// Weighted sum `w·x + b`.
    pub z: f64,
    /// Activation `sigmoid(z)`.
    pub y: f64,
}

/// Computes `z = w·x + b` and `y = sigmoid(z)`.
pub fn forward(w: f64, b: f64, x: f64) -> Forward {
    let z = w * x + b;
    Forward { z, y: sigmoid(z) }
}

/// Squared error of a prediction against the target.
pub fn loss(y: f64, y_true: f64) -> f64 {
    (y_true - y).powi(2)
}
