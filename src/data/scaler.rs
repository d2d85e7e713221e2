//! Fit a sampled Y range into the canvas height without magnifying.

/// Fraction of the canvas height kept free (split top and bottom).
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.1;

/// Linear map from raw curve values to canvas y coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleTransform {
    /// Always in `(0, 1]`.
    pub scale_factor: f64,
    pub offset_y: f64,
}

impl ScaleTransform {
    pub const IDENTITY: ScaleTransform = ScaleTransform {
        scale_factor: 1.0,
        offset_y: 0.0,
    };

    #[inline]
    pub fn apply(&self, y_raw: f64) -> f64 {
        y_raw * self.scale_factor + self.offset_y
    }
}

/// Derive the transform that centers `[min_y, max_y]` on the canvas and shrinks
/// it, if needed, to fit `canvas_height * (1 - margin_fraction)`.
///
/// `margin_fraction` is clamped into `[0, 1)`; ranges narrower than one unit are
/// treated as one unit wide.
pub fn compute(min_y: f64, max_y: f64, canvas_height: f64, margin_fraction: f64) -> ScaleTransform {
    let margin = if margin_fraction.is_finite() {
        margin_fraction.clamp(0.0, 0.99)
    } else {
        DEFAULT_MARGIN_FRACTION
    };
    let y_range = (max_y - min_y).max(1.0);
    let available = canvas_height * (1.0 - margin);
    let mut scale_factor = (available / y_range).min(1.0);
    if !(scale_factor > 0.0) {
        // Only reachable with a degenerate canvas height.
        scale_factor = f64::MIN_POSITIVE;
    }
    let new_center = (min_y + max_y) / 2.0;
    ScaleTransform {
        scale_factor,
        offset_y: canvas_height / 2.0 - new_center * scale_factor,
    }
}
