//! SlideCanvas crate root: re-exports and module wiring.
//!
//! An interactive drawing canvas built on egui/eframe. Freehand strokes and
//! animated, auto-scaled curves (built-in or user-scripted) both add to a
//! cumulative "slide distance".
//!
//! - `data`: the UI-free core (curve resolution, sampling, scaling, stroke
//!   animation, the drawing session)
//! - `plugin`: custom curve functions loaded from Rhai scripts
//! - `events`: subscription hub for canvas events
//! - `config`: YAML-backed configuration and hotkeys
//! - `app`: the eframe window

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod plugin;

// Public re-exports for a compact external API
pub use app::{run_slidecanvas, SlideCanvasApp};
pub use config::CanvasConfig;
pub use data::animator::{AnimatorState, DrawRunState, StrokeAnimator, StrokeEvent};
pub use data::curve::{CurveParameters, FunctionKind, SampledPoint, Segment, StrokeSource};
pub use data::registry::{FunctionRegistry, ResolvedCurve};
pub use data::sampler::{sample, SampledCurve};
pub use data::scaler::{compute as compute_scale, ScaleTransform};
pub use data::session::{AutoDrawRequest, CanvasSession};
pub use error::{AnimatorError, AutoDrawError, EvaluationError, PluginError, SaveError};
pub use events::{CanvasEvent, EventController, EventKind, EventPayload};
pub use plugin::{CurveArgs, CurvePlugin, FunctionStore};
