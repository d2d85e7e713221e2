//! Resolution of a [`FunctionKind`] plus parameters into an evaluable curve.

use std::f64::consts::PI;

use super::curve::{CurveParameters, FunctionKind};
use crate::error::{EvaluationError, PluginError};
use crate::plugin::{CurveArgs, CurvePlugin, FunctionStore};

/// A curve ready to be sampled.
///
/// Built-in kinds are pure functions of `x`. `Custom` wraps a freshly loaded
/// script and may fail per point.
pub enum ResolvedCurve {
    Builtin {
        kind: FunctionKind,
        width: f64,
        center_y: f64,
        amplitude: f64,
        frequency: f64,
    },
    Custom {
        plugin: Box<dyn CurvePlugin>,
        width: f64,
        center_y: f64,
        amplitude: f64,
        frequency: f64,
    },
}

impl ResolvedCurve {
    /// Raw y value at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        match self {
            ResolvedCurve::Builtin {
                kind,
                width,
                center_y,
                amplitude,
                frequency,
            } => Ok(builtin_value(*kind, x, *width, *center_y, *amplitude, *frequency)),
            ResolvedCurve::Custom {
                plugin,
                width,
                center_y,
                amplitude,
                frequency,
            } => plugin.call(CurveArgs {
                x,
                width: *width,
                center_y: *center_y,
                amplitude: *amplitude,
                frequency: *frequency,
            }),
        }
    }

    /// Value substituted for points that fail to evaluate.
    pub fn center_y(&self) -> f64 {
        match self {
            ResolvedCurve::Builtin { center_y, .. } | ResolvedCurve::Custom { center_y, .. } => {
                *center_y
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ResolvedCurve::Builtin { kind, .. } => kind.to_string(),
            ResolvedCurve::Custom { plugin, .. } => format!("custom '{}'", plugin.name()),
        }
    }
}

fn builtin_value(
    kind: FunctionKind,
    x: f64,
    width: f64,
    center_y: f64,
    amplitude: f64,
    frequency: f64,
) -> f64 {
    match kind {
        FunctionKind::Sine => center_y + amplitude * (frequency * PI * x / width * 2.0).sin(),
        FunctionKind::Cosine => center_y + amplitude * (frequency * PI * x / width * 2.0).cos(),
        FunctionKind::Parabola => {
            let half = width / 2.0;
            let normalized = (x - half) / half;
            center_y + amplitude * normalized * normalized
        }
        // Custom never reaches here; a failed resolve never produces a curve.
        FunctionKind::Linear | FunctionKind::Custom => center_y,
    }
}

/// Maps function selectors to curves, loading custom ones from a [`FunctionStore`].
#[derive(Clone, Debug)]
pub struct FunctionRegistry {
    store: FunctionStore,
}

impl FunctionRegistry {
    pub fn new(store: FunctionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FunctionStore {
        &self.store
    }

    /// Resolve `params.function_kind` into a curve.
    ///
    /// For [`FunctionKind::Custom`] this reads and executes the script named by
    /// `params.custom_function_name`; see [`crate::plugin`] for the trust model.
    pub fn resolve(&self, params: &CurveParameters) -> Result<ResolvedCurve, PluginError> {
        let width = params.canvas_width;
        let center_y = params.center_y();
        let amplitude = params.amplitude;
        let frequency = params.frequency;
        match params.function_kind {
            FunctionKind::Custom => {
                let name = params.custom_function_name.as_deref().unwrap_or_default();
                let plugin = self.store.load(name)?;
                Ok(ResolvedCurve::Custom {
                    plugin: Box::new(plugin),
                    width,
                    center_y,
                    amplitude,
                    frequency,
                })
            }
            kind => Ok(ResolvedCurve::Builtin {
                kind,
                width,
                center_y,
                amplitude,
                frequency,
            }),
        }
    }
}
