//! Plain data types describing one auto-draw run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Which curve generator an auto-draw run uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    #[default]
    Sine,
    Cosine,
    Parabola,
    Linear,
    Custom,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 5] = [
        FunctionKind::Sine,
        FunctionKind::Cosine,
        FunctionKind::Parabola,
        FunctionKind::Linear,
        FunctionKind::Custom,
    ];

    /// Human-readable label for radio buttons.
    pub fn label(self) -> &'static str {
        match self {
            FunctionKind::Sine => "Sine wave",
            FunctionKind::Cosine => "Cosine wave",
            FunctionKind::Parabola => "Parabola",
            FunctionKind::Linear => "Straight line",
            FunctionKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FunctionKind::Sine => "sine",
            FunctionKind::Cosine => "cosine",
            FunctionKind::Parabola => "parabola",
            FunctionKind::Linear => "linear",
            FunctionKind::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FunctionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sine" | "sin" => Ok(FunctionKind::Sine),
            "cosine" | "cos" => Ok(FunctionKind::Cosine),
            "parabola" => Ok(FunctionKind::Parabola),
            "linear" | "line" => Ok(FunctionKind::Linear),
            "custom" => Ok(FunctionKind::Custom),
            other => Err(format!("unknown function kind '{}'", other)),
        }
    }
}

/// Inputs of one auto-draw run. Immutable once the run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveParameters {
    pub function_kind: FunctionKind,
    pub amplitude: f64,
    pub frequency: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub custom_function_name: Option<String>,
}

impl CurveParameters {
    /// Validated constructor; all numeric inputs must be positive and finite.
    pub fn new(
        function_kind: FunctionKind,
        amplitude: f64,
        frequency: f64,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<Self, ParameterError> {
        for (field, value) in [
            ("amplitude", amplitude),
            ("frequency", frequency),
            ("canvas_width", canvas_width),
            ("canvas_height", canvas_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParameterError { field, value });
            }
        }
        Ok(Self {
            function_kind,
            amplitude,
            frequency,
            canvas_width,
            canvas_height,
            custom_function_name: None,
        })
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_function_name = Some(name.into());
        self
    }

    /// Vertical center line of the canvas; curves oscillate around it.
    pub fn center_y(&self) -> f64 {
        self.canvas_height / 2.0
    }
}

/// Raw (unscaled) evaluation of a curve at `x`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampledPoint {
    pub x: f64,
    pub y_raw: f64,
}

/// A straight piece of a stroke in canvas coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub length: f64,
}

impl Segment {
    pub fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        Self {
            from,
            to,
            length: (dx * dx + dy * dy).sqrt(),
        }
    }
}

/// Who produced a segment on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrokeSource {
    Manual,
    Auto,
}
