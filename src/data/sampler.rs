//! Fixed-step sampling of a curve, with the observed Y range for auto-scaling.

use super::curve::SampledPoint;
use super::registry::ResolvedCurve;
use crate::error::{EvaluationError, SampleError};

/// Half-height of the range assumed when there is nothing to sample.
pub const EMPTY_RANGE_HALF_HEIGHT: f64 = 50.0;

/// Upper bound on points per sampling pass.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Output of [`sample`].
#[derive(Clone, Debug, Default)]
pub struct SampledCurve {
    pub points: Vec<SampledPoint>,
    pub min_y: f64,
    pub max_y: f64,
    /// Points that failed to evaluate and were replaced by the center line.
    pub diagnostics: Vec<EvaluationError>,
}

impl SampledCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Evaluate `curve` at `x_start, x_start + step, ...` up to and including `x_end`.
///
/// `x` is computed from the sample index so it never drifts. Evaluation faults
/// do not abort: the point gets `curve.center_y()` and the error is kept in
/// [`SampledCurve::diagnostics`]. An empty range reports `center_y ± 50`.
///
/// Non-finite bounds and ranges needing more than [`MAX_SAMPLES`] points are
/// rejected before anything is allocated.
pub fn sample(
    curve: &ResolvedCurve,
    x_start: f64,
    x_end: f64,
    step: f64,
) -> Result<SampledCurve, SampleError> {
    sample_with(|x| curve.evaluate(x), curve.center_y(), x_start, x_end, step)
}

/// [`sample`] over any fallible function, with an explicit fallback value.
pub fn sample_with<F>(
    mut f: F,
    fallback_y: f64,
    x_start: f64,
    x_end: f64,
    step: f64,
) -> Result<SampledCurve, SampleError>
where
    F: FnMut(f64) -> Result<f64, EvaluationError>,
{
    if !(step.is_finite() && step > 0.0) {
        return Err(SampleError::InvalidStep(step));
    }
    if !(x_start.is_finite() && x_end.is_finite()) {
        return Err(SampleError::NonFiniteRange { x_start, x_end });
    }

    let count = if x_end >= x_start {
        // Small tolerance so 0..=700 step 2 includes 700 despite rounding.
        let intervals = ((x_end - x_start) / step + 1e-9).floor();
        if !(intervals < MAX_SAMPLES as f64) {
            return Err(SampleError::TooManySamples {
                requested: intervals + 1.0,
                max: MAX_SAMPLES,
            });
        }
        intervals as usize + 1
    } else {
        0
    };

    let mut out = SampledCurve {
        points: Vec::with_capacity(count),
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
        diagnostics: Vec::new(),
    };
    for i in 0..count {
        let x = x_start + i as f64 * step;
        let y_raw = match f(x) {
            Ok(y) => y,
            Err(e) => {
                out.diagnostics.push(e);
                fallback_y
            }
        };
        out.min_y = out.min_y.min(y_raw);
        out.max_y = out.max_y.max(y_raw);
        out.points.push(SampledPoint { x, y_raw });
    }

    if out.points.is_empty() {
        out.min_y = fallback_y - EMPTY_RANGE_HALF_HEIGHT;
        out.max_y = fallback_y + EMPTY_RANGE_HALF_HEIGHT;
    }
    Ok(out)
}
