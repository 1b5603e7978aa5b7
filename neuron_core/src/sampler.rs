use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::bounds::{INPUT_BOUNDS, PARAM_BOUNDS};
use crate::gradient::gradients;
use crate::neuron::{forward, loss};
use crate::state::{ModelState, Sample};

/// Number of samples in each perturbation-indexed series, both ends of the
/// `[-2, 2]` sweep included.
pub const PERTURBATION_SAMPLES: usize = 41;

/// Number of samples in the output-vs-input series, both ends of the
/// `[-10, 10]` sweep included.
pub const RESPONSE_SAMPLES: usize = 101;

/// One point of a plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Loss and gradient as functions of a one-parameter perturbation `δ`,
/// varied for `w` and `b` independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerturbationCurves {
    /// `loss(w + δ, b)` against `δ`.
    pub loss_vs_dw: Vec<CurvePoint>,
    /// `loss(w, b + δ)` against `δ`.
    pub loss_vs_db: Vec<CurvePoint>,
    /// `dL/dw` evaluated at `(w + δ, b)` against `δ`.
    pub grad_vs_dw: Vec<CurvePoint>,
    /// `dL/db` evaluated at `(w, b + δ)` against `δ`.
    pub grad_vs_db: Vec<CurvePoint>,
}

/// The neuron's output over the input range at the current parameters,
/// with the training target and the current prediction marked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    pub points: Vec<CurvePoint>,
    /// The training example `(x, y_true)`.
    pub target: CurvePoint,
    /// The current prediction `(x, y)`.
    pub prediction: CurvePoint,
}

/// All plot data derived from one state/sample pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    pub perturbation: PerturbationCurves,
    pub response: ResponseCurve,
}

/// Sweeps `δ` over `[-2, 2]` and evaluates loss and gradients with one
/// parameter shifted by `δ` at a time.
///
/// `linspace` pins both endpoints, so floating-point drift cannot drop the
/// final sample. The shifted values are evaluated as-is: clamping them into
/// the trainable range would flatten the plotted curves at the boundary.
pub fn perturbation_curves(state: &ModelState, sample: &Sample) -> PerturbationCurves {
    let deltas = Array1::linspace(PARAM_BOUNDS.min, PARAM_BOUNDS.max, PERTURBATION_SAMPLES);

    let mut curves = PerturbationCurves {
        loss_vs_dw: Vec::with_capacity(PERTURBATION_SAMPLES),
        loss_vs_db: Vec::with_capacity(PERTURBATION_SAMPLES),
        grad_vs_dw: Vec::with_capacity(PERTURBATION_SAMPLES),
        grad_vs_db: Vec::with_capacity(PERTURBATION_SAMPLES),
    };

    for &delta in deltas.iter() {
        let fw = forward(state.w + delta, state.b, sample.x);
        let gw = gradients(fw.y, sample.y_true, sample.x);
        curves.loss_vs_dw.push(CurvePoint {
            x: delta,
            y: loss(fw.y, sample.y_true),
        });
        curves.grad_vs_dw.push(CurvePoint {
            x: delta,
            y: gw.dl_dw,
        });

        let fb = forward(state.w, state.b + delta, sample.x);
        let gb = gradients(fb.y, sample.y_true, sample.x);
        curves.loss_vs_db.push(CurvePoint {
            x: delta,
            y: loss(fb.y, sample.y_true),
        });
        curves.grad_vs_db.push(CurvePoint {
            x: delta,
            y: gb.dl_db,
        });
    }

    curves
}

/// Sweeps `x'` over `[-10, 10]` at the current, unperturbed parameters.
pub fn response_curve(state: &ModelState, sample: &Sample) -> ResponseCurve {
    let xs = Array1::linspace(INPUT_BOUNDS.min, INPUT_BOUNDS.max, RESPONSE_SAMPLES);

    let points = xs
        .iter()
        .map(|&x| CurvePoint {
            x,
            y: forward(state.w, state.b, x).y,
        })
        .collect();

    ResponseCurve {
        points,
        target: CurvePoint {
            x: sample.x,
            y: sample.y_true,
        },
        prediction: CurvePoint {
            x: sample.x,
            y: forward(state.w, state.b, sample.x).y,
        },
    }
}

/// Regenerates the full plot dataset for the current state and sample.
pub fn curves(state: &ModelState, sample: &Sample) -> CurveData {
    CurveData {
        perturbation: perturbation_curves(state, sample),
        response: response_curve(state, sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> (ModelState, Sample) {
        (
            ModelState { w: 0.5, b: 0.1 },
            Sample { x: 2.5, y_true: 0.9 },
        )
    }

    #[test]
    fn perturbation_series_have_41_points_spanning_the_sweep() {
        let (state, sample) = reference();
        let curves = perturbation_curves(&state, &sample);

        for series in [
            &curves.loss_vs_dw,
            &curves.loss_vs_db,
            &curves.grad_vs_dw,
            &curves.grad_vs_db,
        ] {
            assert_eq!(series.len(), PERTURBATION_SAMPLES);
            assert_eq!(series.first().map(|p| p.x), Some(-2.0));
            assert_eq!(series.last().map(|p| p.x), Some(2.0));

            for pair in series.windows(2) {
                assert!((pair[1].x - pair[0].x - 0.1).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn response_series_has_101_points_spanning_the_input_range() {
        let (state, sample) = reference();
        let curve = response_curve(&state, &sample);

        assert_eq!(curve.points.len(), RESPONSE_SAMPLES);
        assert_eq!(curve.points.first().map(|p| p.x), Some(-10.0));
        assert_eq!(curve.points.last().map(|p| p.x), Some(10.0));

        for pair in curve.points.windows(2) {
            assert!((pair[1].x - pair[0].x - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn response_marks_target_and_prediction() {
        let (state, sample) = reference();
        let curve = response_curve(&state, &sample);

        assert_eq!(curve.target.x, 2.5);
        assert_eq!(curve.target.y, 0.9);
        assert_eq!(curve.prediction.x, 2.5);
        assert!((curve.prediction.y - 0.7941).abs() < 1e-4);
    }

    #[test]
    fn sweep_values_are_not_clamped_at_the_parameter_boundary() {
        // With w already at the upper bound, δ = 2 evaluates at w = 4.
        let state = ModelState { w: 2.0, b: 0.0 };
        let sample = Sample { x: 2.5, y_true: 0.9 };
        let curves = perturbation_curves(&state, &sample);

        let last = curves.loss_vs_dw.last().unwrap();
        let expected = loss(forward(4.0, 0.0, 2.5).y, 0.9);
        assert_eq!(last.y, expected);

        // A clamped sweep would repeat the boundary loss; the real curve
        // keeps moving past δ = 0.
        let at_zero = curves.loss_vs_dw[20].y;
        assert_ne!(last.y, at_zero);
    }

    #[test]
    fn loss_curves_are_non_negative_everywhere() {
        let state = ModelState { w: -2.0, b: 2.0 };
        let sample = Sample { x: -10.0, y_true: 0.0 };
        let curves = perturbation_curves(&state, &sample);

        for p in curves.loss_vs_dw.iter().chain(&curves.loss_vs_db) {
            assert!(p.y >= 0.0);
        }
    }

    #[test]
    fn response_outputs_stay_in_the_open_unit_interval() {
        let state = ModelState { w: 2.0, b: -2.0 };
        let sample = Sample::default();
        let curve = response_curve(&state, &sample);

        for p in &curve.points {
            assert!(p.y > 0.0 && p.y < 1.0);
        }
    }
}
