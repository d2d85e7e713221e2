//! UI-free drawing session: everything the canvas window does, minus the window.
//!
//! [`CanvasSession`] owns the strokes on the canvas, the cumulative slide
//! distance, the Y-limit line and the status line. It enforces that manual
//! drawing and auto-draw never run at the same time, and it reports every
//! change through an optional [`EventController`].

use std::path::PathBuf;

use super::animator::{StrokeAnimator, StrokeEvent};
use super::curve::{CurveParameters, FunctionKind, Segment, StrokeSource};
use super::registry::FunctionRegistry;
use super::sampler;
use super::scaler;
use super::stroke::FreehandStroke;
use crate::config::{CanvasConfig, Y_LIMIT_RANGE};
use crate::error::{AutoDrawError, PluginError, SaveError};
use crate::events::{CanvasEvent, EventController, EventKind, EventPayload};
use crate::plugin::FunctionStore;

/// A segment on the canvas together with its origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawnSegment {
    pub segment: Segment,
    pub source: StrokeSource,
}

/// User choices for one auto-draw run.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoDrawRequest {
    pub kind: FunctionKind,
    pub amplitude: f64,
    pub frequency: f64,
    /// Only used when `kind` is [`FunctionKind::Custom`].
    pub custom_name: String,
}

impl AutoDrawRequest {
    pub fn builtin(kind: FunctionKind, amplitude: f64, frequency: f64) -> Self {
        Self {
            kind,
            amplitude,
            frequency,
            custom_name: String::new(),
        }
    }

    pub fn custom(name: impl Into<String>, amplitude: f64, frequency: f64) -> Self {
        Self {
            kind: FunctionKind::Custom,
            amplitude,
            frequency,
            custom_name: name.into(),
        }
    }
}

pub fn format_distance(distance: f64) -> String {
    format!("{:.2}", distance)
}

pub struct CanvasSession {
    registry: FunctionRegistry,
    animator: StrokeAnimator,
    freehand: Option<FreehandStroke>,
    segments: Vec<DrawnSegment>,
    markers: Vec<[f64; 2]>,
    slide_distance: f64,
    y_limit: f64,
    canvas_size: [f64; 2],
    sample_step: f64,
    margin_fraction: f64,
    status: String,
    events: Option<EventController>,
}

impl CanvasSession {
    pub fn new(registry: FunctionRegistry, config: &CanvasConfig) -> Self {
        Self {
            registry,
            animator: StrokeAnimator::new(),
            freehand: None,
            segments: Vec::new(),
            markers: Vec::new(),
            slide_distance: 0.0,
            y_limit: config.y_limit.clamp(Y_LIMIT_RANGE.0, Y_LIMIT_RANGE.1),
            canvas_size: [config.canvas_width, config.canvas_height],
            sample_step: config.sample_step,
            margin_fraction: config.margin_fraction,
            status: "Ready | click and drag to draw".to_string(),
            events: None,
        }
    }

    /// Session whose custom functions come from `config.functions_dir`.
    pub fn from_config(config: &CanvasConfig) -> Self {
        let store = FunctionStore::new(config.functions_dir.clone());
        Self::new(FunctionRegistry::new(store), config)
    }

    pub fn set_event_controller(&mut self, ctrl: Option<EventController>) {
        self.events = ctrl;
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn animator(&self) -> &StrokeAnimator {
        &self.animator
    }

    pub fn segments(&self) -> &[DrawnSegment] {
        &self.segments
    }

    pub fn markers(&self) -> &[[f64; 2]] {
        &self.markers
    }

    pub fn slide_distance(&self) -> f64 {
        self.slide_distance
    }

    pub fn y_limit(&self) -> f64 {
        self.y_limit
    }

    pub fn canvas_size(&self) -> [f64; 2] {
        self.canvas_size
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_auto_drawing(&self) -> bool {
        self.animator.is_running()
    }

    pub fn is_manual_drawing(&self) -> bool {
        self.freehand.as_ref().is_some_and(FreehandStroke::is_active)
    }

    // ── Manual drawing ───────────────────────────────────────────────────────

    /// Start a freehand stroke at `pos`, stopping any running auto-draw first.
    pub fn begin_manual(&mut self, pos: [f64; 2]) {
        if self.animator.is_running() {
            self.stop();
        }
        self.freehand = Some(FreehandStroke::begin(pos));
    }

    /// Extend the current freehand stroke to `pos`.
    pub fn drag_manual(&mut self, pos: [f64; 2]) -> Option<Segment> {
        let segment = self.freehand.as_mut()?.extend(pos)?;
        self.push_segment(segment, StrokeSource::Manual);
        self.set_status(format!(
            "Drawing | position: ({:.0}, {:.0}) | slide distance: {}",
            pos[0],
            pos[1],
            format_distance(self.slide_distance)
        ));
        Some(segment)
    }

    pub fn end_manual(&mut self) {
        if let Some(mut stroke) = self.freehand.take() {
            stroke.end();
            self.set_status(format!(
                "Stroke finished | total slide distance: {}",
                format_distance(self.slide_distance)
            ));
        }
    }

    // ── Auto-draw ────────────────────────────────────────────────────────────

    /// Clear the canvas, then resolve, sample and scale the requested curve and
    /// start animating it. Call [`tick`](Self::tick) to advance the animation.
    ///
    /// Failures leave the animator idle and are reported in the status line.
    pub fn auto_draw(&mut self, request: &AutoDrawRequest) -> Result<(), AutoDrawError> {
        self.clear();
        self.set_status("Auto-drawing...".to_string());
        let result = self.start_run(request);
        if let Err(e) = &result {
            let message = describe_failure(e);
            tracing::warn!(function = %request.kind, error = %e, "auto-draw aborted");
            self.emit(EventKind::ERROR, EventPayload::Error(message.clone()));
            self.set_status(message);
        }
        result
    }

    fn start_run(&mut self, request: &AutoDrawRequest) -> Result<(), AutoDrawError> {
        let [width, height] = self.canvas_size;
        let mut params = CurveParameters::new(
            request.kind,
            request.amplitude,
            request.frequency,
            width,
            height,
        )?;
        let mut loaded_msg = None;
        if request.kind == FunctionKind::Custom {
            let name = request.custom_name.trim();
            if name.is_empty() {
                return Err(AutoDrawError::MissingCustomName);
            }
            params = params.with_custom_name(name);
            loaded_msg = Some(format!("Loaded function '{}'", name));
        }

        let curve = self.registry.resolve(&params)?;
        let sampled = sampler::sample(&curve, 0.0, width, self.sample_step)?;
        let transform = scaler::compute(sampled.min_y, sampled.max_y, height, self.margin_fraction);
        tracing::info!(
            function = %curve.describe(),
            amplitude = params.amplitude,
            frequency = params.frequency,
            samples = sampled.points.len(),
            scale = transform.scale_factor,
            "auto-draw started"
        );

        let samples = sampled.points.len();
        if let StrokeEvent::Marker { x, y } = self.animator.start(sampled.points, transform)? {
            self.markers.push([x, y]);
            self.emit(EventKind::MARKER, EventPayload::Marker { x, y });
        }
        self.emit(
            EventKind::RUN_STARTED,
            EventPayload::RunStarted {
                function: curve.describe(),
                samples,
            },
        );

        let mut status = match loaded_msg {
            Some(m) => format!("{} | auto-drawing...", m),
            None => "Auto-drawing...".to_string(),
        };
        if let Some(first) = sampled.diagnostics.first() {
            let n = sampled.diagnostics.len();
            tracing::warn!(failed_points = n, first = %first, "custom function evaluation errors");
            let message = format!(
                "Function evaluation error: {} ({} point(s) drawn on the center line)",
                first, n
            );
            self.emit(EventKind::ERROR, EventPayload::Error(message.clone()));
            status = message;
        }
        self.set_status(status);
        Ok(())
    }

    /// Advance the auto-draw animation by one step.
    pub fn tick(&mut self) -> Option<StrokeEvent> {
        let event = self.animator.step()?;
        match event {
            StrokeEvent::Segment(segment) => self.push_segment(segment, StrokeSource::Auto),
            StrokeEvent::Completed { distance } => {
                tracing::debug!(run_distance = distance, "auto-draw completed");
                self.emit(EventKind::RUN_COMPLETED, EventPayload::RunFinished { distance });
                self.set_status(format!(
                    "Auto-draw finished | slide distance: {}",
                    format_distance(self.slide_distance)
                ));
            }
            StrokeEvent::Marker { .. } => {}
        }
        Some(event)
    }

    /// Run up to `steps` ticks; returns how many produced an event.
    pub fn advance(&mut self, steps: u32) -> u32 {
        let mut done = 0;
        for _ in 0..steps {
            if self.tick().is_none() {
                break;
            }
            done += 1;
        }
        done
    }

    // ── Stop / clear / reset ─────────────────────────────────────────────────

    /// Stop manual and automatic drawing; strokes and distance stay.
    pub fn stop(&mut self) {
        if let Some(mut stroke) = self.freehand.take() {
            stroke.end();
        }
        self.cancel_run();
        self.set_status(format!(
            "Drawing stopped | slide distance: {}",
            format_distance(self.slide_distance)
        ));
    }

    /// Stop all drawing, erase every stroke and reset the slide distance.
    pub fn clear(&mut self) {
        self.freehand = None;
        self.cancel_run();
        self.animator.reset();
        self.segments.clear();
        self.markers.clear();
        self.slide_distance = 0.0;
        self.emit(EventKind::CLEARED | EventKind::DISTANCE, EventPayload::Cleared);
        self.set_status("Canvas cleared".to_string());
    }

    pub fn reset_slide(&mut self) {
        self.slide_distance = 0.0;
        self.emit(EventKind::DISTANCE, EventPayload::Distance(0.0));
        self.set_status("Slide distance reset".to_string());
    }

    fn cancel_run(&mut self) {
        if self.animator.cancel() {
            let distance = self.animator.accumulated_distance();
            tracing::debug!(run_distance = distance, "auto-draw cancelled");
            self.emit(EventKind::RUN_CANCELLED, EventPayload::RunFinished { distance });
        }
    }

    // ── Canvas geometry ──────────────────────────────────────────────────────

    /// Move the Y-limit line; the value is clamped into [`Y_LIMIT_RANGE`].
    pub fn set_y_limit(&mut self, y: f64) -> f64 {
        if y.is_finite() {
            self.y_limit = y.clamp(Y_LIMIT_RANGE.0, Y_LIMIT_RANGE.1);
        }
        self.y_limit
    }

    /// Track the canvas size; used by the next auto-draw run.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.canvas_size = [width, height];
        }
    }

    // ── Custom function files ────────────────────────────────────────────────

    pub fn function_candidates(&self) -> Vec<String> {
        self.registry.store().list()
    }

    pub fn save_function(&mut self, name: &str, code: &str) -> Result<PathBuf, SaveError> {
        match self.registry.store().save(name, code) {
            Ok(path) => {
                self.set_status(format!(
                    "Custom function '{}' saved to {}",
                    name.trim(),
                    path.display()
                ));
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "saving custom function failed");
                let message = format!("Save failed: {}", e);
                self.emit(EventKind::ERROR, EventPayload::Error(message.clone()));
                self.set_status(message);
                Err(e)
            }
        }
    }

    pub fn load_function_source(&mut self, name: &str) -> Result<String, PluginError> {
        match self.registry.store().read_source(name) {
            Ok(source) => {
                self.set_status(format!("Loaded file '{}'", name.trim()));
                Ok(source)
            }
            Err(e) => {
                let message = format!("Failed to read file: {}", e);
                self.emit(EventKind::ERROR, EventPayload::Error(message.clone()));
                self.set_status(message);
                Err(e)
            }
        }
    }

    /// Set a status message coming from the UI layer.
    pub fn report(&mut self, message: impl Into<String>) {
        self.set_status(message.into());
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn push_segment(&mut self, segment: Segment, source: StrokeSource) {
        self.segments.push(DrawnSegment { segment, source });
        self.slide_distance += segment.length;
        self.emit(EventKind::SEGMENT, EventPayload::Segment { segment, source });
        self.emit(EventKind::DISTANCE, EventPayload::Distance(self.slide_distance));
    }

    fn set_status(&mut self, status: String) {
        if status != self.status {
            self.emit(EventKind::STATUS, EventPayload::Status(status.clone()));
        }
        self.status = status;
    }

    fn emit(&self, kinds: EventKind, payload: EventPayload) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(CanvasEvent::new(kinds, payload));
        }
    }
}

/// User-facing status text for a run that could not start.
fn describe_failure(e: &AutoDrawError) -> String {
    match e {
        AutoDrawError::MissingCustomName => "Error: set a custom function name first".to_string(),
        AutoDrawError::Plugin(p) if p.is_missing_file() => match p {
            PluginError::Load { path, .. } => format!("Error: file '{}' does not exist", path.display()),
            _ => format!("Error: {}", p),
        },
        AutoDrawError::Plugin(PluginError::Load { .. }) => format!("Load failed: {}", e),
        other => format!("Error: {}", other),
    }
}
