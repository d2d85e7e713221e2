//! Custom curve functions loaded from user script files.
//!
//! # Trust boundary
//!
//! A custom function is a [Rhai](https://rhai.rs) script written by the user
//! and stored as `<name>.rhai` in the functions directory. Loading it runs the
//! script's top-level statements, and sampling calls the named function once
//! per sample point. The script is **not sandboxed**: it can loop forever or
//! burn CPU, and whatever it computes is trusted as a curve value. Only load
//! scripts you wrote or have read.
//!
//! The contract every custom function follows is fixed by [`CurvePlugin`]:
//! five numeric arguments (`x, width, center_y, amp, freq`) in, one number out.

mod script;
mod store;

pub use script::ScriptFunction;
pub use store::{FunctionStore, SCRIPT_EXTENSION};

use crate::error::{EvaluationError, PluginError};

/// Arguments passed to a custom curve function for one sample point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveArgs {
    pub x: f64,
    pub width: f64,
    pub center_y: f64,
    pub amplitude: f64,
    pub frequency: f64,
}

/// A dynamically resolved curve generator.
pub trait CurvePlugin {
    /// Name the function was resolved by.
    fn name(&self) -> &str;
    /// Evaluate the curve at `args.x`. Errors are per-point and recoverable.
    fn call(&self, args: CurveArgs) -> Result<f64, EvaluationError>;
}

/// Check that `name` can be both a script function name and a file stem.
///
/// Only ASCII identifiers are accepted, which also keeps names from
/// escaping the functions directory.
pub fn validate_name(name: &str) -> Result<&str, PluginError> {
    let name = name.trim();
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(PluginError::InvalidName(name.to_string()))
    }
}

const PARAM_NOTES: &str = "    // x: current x coordinate
    // width: canvas width
    // center_y: vertical center of the canvas
    // amp: amplitude
    // freq: frequency
";

/// Editor seed text for a new function: a plain sine wave.
pub fn default_template(name: &str) -> String {
    format!(
        "fn {name}(x, width, center_y, amp, freq) {{\n{PARAM_NOTES}    center_y + amp * sin(freq * PI() * x / width * 2.0)\n}}\n"
    )
}

/// Editor text after "reset": returns `x * PI()`.
pub fn reset_template(name: &str) -> String {
    format!("fn {name}(x, width, center_y, amp, freq) {{\n{PARAM_NOTES}    x * PI()\n}}\n")
}
