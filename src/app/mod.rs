//! eframe front-end for the drawing canvas.
//!
//! The window is a thin shell around [`CanvasSession`]: it collects control
//! values, forwards pointer input and button presses, paints the session's
//! strokes, and drives the auto-draw animation from the frame loop.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`canvas_ui`]   | Painting strokes and the Y-limit line; pointer input |
//! | [`controls_ui`] | Slide distance, Y limit, function choice, action buttons |
//! | [`function_ui`] | Custom function name, file picker and code editor |
//! | [`help_ui`]     | Scripting reference window |
//! | [`run`]         | [`run_slidecanvas()`] entry point and icon loading |

mod canvas_ui;
mod controls_ui;
mod function_ui;
mod help_ui;
mod run;

pub use run::run_slidecanvas;

use std::time::Instant;

use eframe::egui;

use crate::config::CanvasConfig;
use crate::data::curve::FunctionKind;
use crate::data::hotkeys::{Hotkey, HotkeyName, Modifier};
use crate::data::session::{AutoDrawRequest, CanvasSession};
use crate::data::ticker::Ticker;
use crate::events::EventController;
use crate::plugin;

/// Standalone canvas application implementing [`eframe::App`].
pub struct SlideCanvasApp {
    pub session: CanvasSession,
    config: CanvasConfig,
    ticker: Ticker,

    // ── Auto-draw controls ───────────────────────────────────────────────────
    function_kind: FunctionKind,
    amplitude: f64,
    frequency: f64,
    y_limit_input: f64,

    // ── Custom function editor ───────────────────────────────────────────────
    custom_name: String,
    custom_code: String,
    candidates: Vec<String>,
    selected_candidate: Option<String>,

    show_help: bool,
}

impl SlideCanvasApp {
    pub fn new(config: CanvasConfig) -> Self {
        let session = CanvasSession::from_config(&config);
        let candidates = session.function_candidates();
        let defaults = config.auto_draw.clone();
        Self {
            ticker: Ticker::new(config.tick_interval()),
            function_kind: defaults.function,
            amplitude: defaults.amplitude,
            frequency: defaults.frequency,
            y_limit_input: session.y_limit(),
            custom_code: plugin::default_template(&defaults.custom_function_name),
            custom_name: defaults.custom_function_name,
            selected_candidate: candidates.first().cloned(),
            candidates,
            show_help: false,
            session,
            config,
        }
    }

    /// Forward session events to `ctrl` subscribers.
    pub fn with_event_controller(mut self, ctrl: EventController) -> Self {
        self.session.set_event_controller(Some(ctrl));
        self
    }

    fn auto_draw_request(&self) -> AutoDrawRequest {
        AutoDrawRequest {
            kind: self.function_kind,
            amplitude: self.amplitude,
            frequency: self.frequency,
            custom_name: self.custom_name.clone(),
        }
    }

    fn start_auto_draw(&mut self) {
        let request = self.auto_draw_request();
        // Failures are already reported in the status line.
        if self.session.auto_draw(&request).is_ok() {
            self.ticker.reset();
        }
    }

    fn save_function(&mut self) {
        let name = self.custom_name.clone();
        let code = self.custom_code.clone();
        if self.session.save_function(&name, &code).is_ok() {
            self.refresh_candidates();
        }
    }

    fn refresh_candidates(&mut self) {
        self.candidates = self.session.function_candidates();
        if let Some(sel) = &self.selected_candidate {
            if !self.candidates.contains(sel) {
                self.selected_candidate = None;
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        let hotkeys = self.config.hotkeys.clone();
        for name in HotkeyName::ALL {
            if !hotkey_pressed(ctx, hotkeys.get(name)) {
                continue;
            }
            match name {
                HotkeyName::AutoDraw => self.start_auto_draw(),
                HotkeyName::Clear => self.session.clear(),
                HotkeyName::Stop => self.session.stop(),
                HotkeyName::ResetSlide => self.session.reset_slide(),
                HotkeyName::SaveFunction => self.save_function(),
                HotkeyName::Help => self.show_help = !self.show_help,
            }
        }
    }

    /// Run the animation steps that are due and schedule the next frame.
    fn drive_animation(&mut self, ctx: &egui::Context) {
        if !self.session.is_auto_drawing() {
            self.ticker.reset();
            return;
        }
        let due = self.ticker.due(Instant::now());
        self.session.advance(due);
        ctx.request_repaint_after(self.ticker.interval());
    }
}

impl eframe::App for SlideCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);
        self.drive_animation(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.session.status());
        });
        egui::SidePanel::left("custom_function_panel")
            .default_width(260.0)
            .show(ctx, |ui| self.render_function_panel(ui));
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .exact_width(190.0)
            .show(ctx, |ui| self.render_controls(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.render_canvas(ui));

        help_ui::show_help_window(ctx, &mut self.show_help);
    }
}

fn hotkey_pressed(ctx: &egui::Context, hotkey: &Hotkey) -> bool {
    let Some(key) = egui::Key::from_name(&hotkey.key.to_string()) else {
        return false;
    };
    let modifiers = match hotkey.modifier {
        Modifier::None => egui::Modifiers::NONE,
        Modifier::Ctrl => egui::Modifiers::COMMAND,
        Modifier::Alt => egui::Modifiers::ALT,
        Modifier::Shift => egui::Modifiers::SHIFT,
        Modifier::CtrlShift => egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    };
    ctx.input_mut(|i| i.consume_key(modifiers, key))
}
