//! Rhai-backed [`CurvePlugin`].

use std::cell::Cell;
use std::path::{Path, PathBuf};

use rhai::{Dynamic, Engine, Scope, AST};

use super::{CurveArgs, CurvePlugin};
use crate::error::{EvaluationError, LoadFault, PluginError};

/// Number of parameters a curve function must declare.
const ARITY: usize = 5;

/// A compiled custom curve function.
///
/// Built fresh for every auto-draw run; nothing is cached across runs, so edits
/// to the script file take effect on the next run.
pub struct ScriptFunction {
    name: String,
    path: PathBuf,
    engine: Engine,
    /// Function definitions only; top-level statements ran once at load time.
    ast: AST,
    warned_complex: Cell<bool>,
}

impl ScriptFunction {
    /// Compile `source`, execute its top-level statements, and look up `name`.
    pub fn from_source(name: &str, path: &Path, source: &str) -> Result<Self, PluginError> {
        let load_err = |fault: LoadFault| PluginError::Load {
            path: path.to_path_buf(),
            source: fault,
        };

        let engine = Engine::new();
        let ast = engine
            .compile(source)
            .map_err(|e| load_err(LoadFault::from(e)))?;
        let mut scope = Scope::new();
        engine
            .run_ast_with_scope(&mut scope, &ast)
            .map_err(|e| load_err(LoadFault::from(e)))?;

        let found = ast
            .iter_functions()
            .any(|f| f.name == name && f.params.len() == ARITY);
        if !found {
            let mut available: Vec<String> = ast
                .iter_functions()
                .map(|f| f.name.to_string())
                .filter(|n| !n.starts_with('_'))
                .collect();
            available.sort();
            available.dedup();
            return Err(PluginError::FunctionNotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
                available,
            });
        }

        Ok(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            engine,
            ast: ast.clone_functions_only(),
            warned_complex: Cell::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurvePlugin for ScriptFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, args: CurveArgs) -> Result<f64, EvaluationError> {
        let mut scope = Scope::new();
        let value: Dynamic = self
            .engine
            .call_fn(
                &mut scope,
                &self.ast,
                &self.name,
                (args.x, args.width, args.center_y, args.amplitude, args.frequency),
            )
            .map_err(|e| EvaluationError::new(args.x, e.to_string()))?;

        let (y, was_complex) = real_part(&value).ok_or_else(|| {
            EvaluationError::new(
                args.x,
                format!("expected a number, got {}", value.type_name()),
            )
        })?;
        if was_complex && !self.warned_complex.replace(true) {
            // Silent loss of the imaginary part can hide mistakes in the script.
            tracing::warn!(
                function = %self.name,
                "complex result coerced to its real part"
            );
        }
        if !y.is_finite() {
            return Err(EvaluationError::new(args.x, format!("non-finite result {y}")));
        }
        Ok(y)
    }
}

/// Numeric value of a script result, plus whether it was complex-like.
///
/// Rhai has no complex type, so `[re, im]` arrays and maps with a `re` field
/// stand in for complex numbers; only the real component is kept.
fn real_part(value: &Dynamic) -> Option<(f64, bool)> {
    if let Some(y) = scalar(value) {
        return Some((y, false));
    }
    if value.is_array() {
        let parts = value.clone().into_array().ok()?;
        if parts.len() == 2 {
            return scalar(&parts[0]).map(|re| (re, true));
        }
        return None;
    }
    if value.is_map() {
        let map = value.clone().try_cast::<rhai::Map>()?;
        return map.get("re").and_then(scalar).map(|re| (re, true));
    }
    None
}

fn scalar(value: &Dynamic) -> Option<f64> {
    value
        .as_float()
        .ok()
        .or_else(|| value.as_int().ok().map(|i| i as f64))
}
