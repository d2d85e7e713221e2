//! Control panel: slide distance, Y limit, auto-draw settings and actions.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::config::Y_LIMIT_RANGE;
use crate::data::curve::FunctionKind;
use crate::data::hotkeys::{format_button_tooltip, HotkeyName};
use crate::data::session::format_distance;

use super::SlideCanvasApp;

impl SlideCanvasApp {
    pub(super) fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.separator();

        ui.group(|ui| {
            ui.strong("Slide distance");
            ui.label(format!(
                "Distance: {}",
                format_distance(self.session.slide_distance())
            ));
            if self
                .action_button(ui, icons::ARROW_COUNTER_CLOCKWISE, "Reset", HotkeyName::ResetSlide)
                .clicked()
            {
                self.session.reset_slide();
            }
        });

        ui.group(|ui| {
            ui.strong("Y limit");
            let resp = ui.add(
                egui::DragValue::new(&mut self.y_limit_input)
                    .range(Y_LIMIT_RANGE.0..=Y_LIMIT_RANGE.1)
                    .speed(1.0),
            );
            if resp.changed() {
                self.y_limit_input = self.session.set_y_limit(self.y_limit_input);
            }
            ui.label(format!("Current limit: {:.0}", self.session.y_limit()));
        });

        ui.group(|ui| {
            ui.strong("Auto-draw function");
            for kind in FunctionKind::ALL {
                ui.radio_value(&mut self.function_kind, kind, kind.label());
            }
            let [amp_lo, amp_hi] = self.config.auto_draw.amplitude_range;
            ui.label("Amplitude");
            ui.add(egui::Slider::new(&mut self.amplitude, amp_lo..=amp_hi));
            let [freq_lo, freq_hi] = self.config.auto_draw.frequency_range;
            ui.label("Frequency");
            ui.add(egui::Slider::new(&mut self.frequency, freq_lo..=freq_hi));
        });

        ui.add_space(8.0);
        ui.vertical_centered_justified(|ui| {
            if self
                .action_button(ui, icons::TRASH, "Clear", HotkeyName::Clear)
                .clicked()
            {
                self.session.clear();
            }
            if self
                .action_button(ui, icons::PLAY, "Auto draw", HotkeyName::AutoDraw)
                .clicked()
            {
                self.start_auto_draw();
            }
            if self
                .action_button(ui, icons::STOP, "Stop drawing", HotkeyName::Stop)
                .clicked()
            {
                self.session.stop();
            }
            if self
                .action_button(ui, icons::QUESTION, "Help", HotkeyName::Help)
                .clicked()
            {
                self.show_help = !self.show_help;
            }
        });
    }

    pub(super) fn action_button(
        &self,
        ui: &mut egui::Ui,
        icon: &str,
        label: &str,
        hotkey: HotkeyName,
    ) -> egui::Response {
        let tooltip = format_button_tooltip(label, Some(self.config.hotkeys.get(hotkey)));
        ui.button(format!("{icon} {label}")).on_hover_text(tooltip)
    }
}
