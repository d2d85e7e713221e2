//! Error types shared by the curve core, the plugin store and the config layer.
//!
//! Every fallible operation returns one of these as a typed result; none of
//! them is fatal to the application. The session turns them into status text.

use std::path::PathBuf;

/// Failure to resolve a custom curve function from its script file.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("invalid function name '{0}': expected an identifier")]
    InvalidName(String),
    #[error("function '{name}' not found in {path:?}; available functions: {}", list_or_none(.available))]
    FunctionNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },
    #[error("failed to load {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: LoadFault,
    },
}

impl PluginError {
    /// `true` when the script file itself is absent.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            PluginError::Load {
                source: LoadFault::Io(e),
                ..
            } if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Underlying cause of a [`PluginError::Load`].
#[derive(Debug, thiserror::Error)]
pub enum LoadFault {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("syntax error: {0}")]
    Parse(#[from] rhai::ParseError),
    #[error("script error: {0}")]
    Runtime(#[from] Box<rhai::EvalAltResult>),
}

/// A single sample point could not be evaluated.
///
/// Caught per point by the sampler and replaced with the curve's center line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("evaluation failed at x = {x}: {message}")]
pub struct EvaluationError {
    pub x: f64,
    pub message: String,
}

impl EvaluationError {
    pub fn new(x: f64, message: impl Into<String>) -> Self {
        Self {
            x,
            message: message.into(),
        }
    }
}

/// Writing a custom function file failed.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("function name must not be empty")]
    EmptyName,
    #[error("function code must not be empty")]
    EmptyCode,
    #[error(transparent)]
    InvalidName(#[from] PluginError),
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    #[error("an auto-draw run is already in progress; cancel it first")]
    AlreadyRunning,
    #[error("no sample points to animate")]
    NoSamples,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("sampling range must be finite, got [{x_start}, {x_end}]")]
    NonFiniteRange { x_start: f64, x_end: f64 },
    #[error("range needs about {requested:.0} samples, more than the limit of {max}")]
    TooManySamples { requested: f64, max: usize },
}

/// Rejected [`CurveParameters`](crate::data::curve::CurveParameters).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} must be positive and finite, got {value}")]
pub struct ParameterError {
    pub field: &'static str,
    pub value: f64,
}

/// Why an auto-draw run did not start animating.
#[derive(Debug, thiserror::Error)]
pub enum AutoDrawError {
    #[error("set a custom function name first")]
    MissingCustomName,
    #[error(transparent)]
    Parameters(#[from] ParameterError),
    #[error(transparent)]
    Plugin(#[from] PluginError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Animator(#[from] AnimatorError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOME env var not set: {0}")]
    Home(#[from] std::env::VarError),
    #[error("config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
