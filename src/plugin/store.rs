//! Flat directory of `<name>.rhai` function files.

use std::fs;
use std::path::{Path, PathBuf};

use super::{validate_name, ScriptFunction};
use crate::error::{LoadFault, PluginError, SaveError};

/// File extension of custom function scripts.
pub const SCRIPT_EXTENSION: &str = "rhai";

/// Locates, loads, lists and saves custom function scripts in one directory.
#[derive(Clone, Debug)]
pub struct FunctionStore {
    dir: PathBuf,
}

impl FunctionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Script path for `name`, after validating the name.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, PluginError> {
        let name = validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{SCRIPT_EXTENSION}")))
    }

    /// Read and compile `<name>.rhai`, returning the function named `name`.
    pub fn load(&self, name: &str) -> Result<ScriptFunction, PluginError> {
        let path = self.path_for(name)?;
        let source = self.read_path(&path)?;
        let function = ScriptFunction::from_source(name.trim(), &path, &source)?;
        tracing::info!(function = %name.trim(), path = %path.display(), "loaded custom function");
        Ok(function)
    }

    /// Raw script text, for showing in the editor.
    pub fn read_source(&self, name: &str) -> Result<String, PluginError> {
        let path = self.path_for(name)?;
        self.read_path(&path)
    }

    /// Write `code` verbatim (surrounding whitespace trimmed) to `<name>.rhai`.
    ///
    /// Overwrites any existing file. The code is not checked for syntax errors.
    pub fn save(&self, name: &str, code: &str) -> Result<PathBuf, SaveError> {
        if name.trim().is_empty() {
            return Err(SaveError::EmptyName);
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(SaveError::EmptyCode);
        }
        let path = self.path_for(name)?;
        fs::write(&path, code).map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = code.len(), "saved custom function");
        Ok(path)
    }

    /// Sorted stems of every usable script in the directory.
    ///
    /// Unreadable directories yield an empty list; stems that are not valid
    /// function names are skipped.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list function files");
                return Vec::new();
            }
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .filter(|stem| validate_name(stem).is_ok())
            .collect();
        names.sort();
        names
    }

    fn read_path(&self, path: &Path) -> Result<String, PluginError> {
        fs::read_to_string(path).map_err(|e| PluginError::Load {
            path: path.to_path_buf(),
            source: LoadFault::Io(e),
        })
    }
}
