//! Application configuration.
//!
//! Loaded from `~/.slidecanvas/config.yaml` when present; every field has a
//! default so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::curve::FunctionKind;
use crate::data::hotkeys::Hotkeys;
use crate::data::scaler::DEFAULT_MARGIN_FRACTION;
use crate::error::ConfigError;

/// Range of the Y-limit spin box.
pub const Y_LIMIT_RANGE: (f64, f64) = (50.0, 500.0);

/// Defaults of the auto-draw controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoDrawDefaults {
    pub function: FunctionKind,
    pub amplitude: f64,
    pub amplitude_range: [f64; 2],
    pub frequency: f64,
    pub frequency_range: [f64; 2],
    /// Name pre-filled in the custom function editor.
    pub custom_function_name: String,
}

impl Default for AutoDrawDefaults {
    fn default() -> Self {
        Self {
            function: FunctionKind::Sine,
            amplitude: 100.0,
            amplitude_range: [10.0, 200.0],
            frequency: 2.0,
            frequency_range: [0.5, 10.0],
            custom_function_name: "custom_func".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Native window title.
    pub title: String,
    /// Initial canvas size in points; the canvas follows the window afterwards.
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Initial position of the Y-limit line.
    pub y_limit: f64,
    /// Distance between auto-draw samples along x.
    pub sample_step: f64,
    /// Fraction of the canvas height left free when auto-scaling.
    pub margin_fraction: f64,
    /// Delay between animation steps, in milliseconds.
    pub tick_interval_ms: u64,
    /// Where `<name>.rhai` custom functions live.
    pub functions_dir: PathBuf,
    pub auto_draw: AutoDrawDefaults,
    pub hotkeys: Hotkeys,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "SlideCanvas".to_string(),
            canvas_width: 700.0,
            canvas_height: 500.0,
            y_limit: 300.0,
            sample_step: 2.0,
            margin_fraction: DEFAULT_MARGIN_FRACTION,
            tick_interval_ms: 10,
            functions_dir: PathBuf::from("functions"),
            auto_draw: AutoDrawDefaults::default(),
            hotkeys: Hotkeys::default(),
        }
    }
}

impl CanvasConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// `~/.slidecanvas/config.yaml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".slidecanvas").join("config.yaml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let s = serde_yaml::to_string(self)?;
        fs::write(path, s).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from [`default_path`](Self::default_path), or defaults if the file is absent.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "no config location; using defaults");
                return Self::default();
            }
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent; using defaults");
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save_to_default_path(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }
}
