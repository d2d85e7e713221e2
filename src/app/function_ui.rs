//! Custom function editor: name, file list, code, save and reset.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::data::hotkeys::HotkeyName;
use crate::plugin::{self, SCRIPT_EXTENSION};

use super::SlideCanvasApp;

impl SlideCanvasApp {
    pub(super) fn render_function_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Custom function");
        ui.separator();

        ui.label("Function name:");
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.custom_name).desired_width(120.0));
            self.render_file_picker(ui);
        });

        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Refresh", icons::ARROWS_CLOCKWISE))
                .on_hover_text(format!("Rescan {} for .{SCRIPT_EXTENSION} files", self.config.functions_dir.display()))
                .clicked()
            {
                self.refresh_candidates();
            }
            if ui.button(format!("{} Open…", icons::FOLDER_OPEN)).clicked() {
                self.import_function_file();
            }
        });

        ui.label("Function code:");
        let bottom_bar_height = 36.0;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - bottom_bar_height).max(80.0))
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.custom_code)
                        .code_editor()
                        .desired_rows(15)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.horizontal(|ui| {
            if self
                .action_button(ui, icons::FLOPPY_DISK, "Save function", HotkeyName::SaveFunction)
                .clicked()
            {
                self.save_function();
            }
            if ui.button(format!("{} Reset code", icons::ERASER)).clicked() {
                self.custom_code = plugin::reset_template(&self.custom_name);
                self.session
                    .report("Custom function code reset to x * PI()");
            }
        });
    }

    fn render_file_picker(&mut self, ui: &mut egui::Ui) {
        let mut picked = None;
        egui::ComboBox::from_id_salt("function_files")
            .width(100.0)
            .selected_text(self.selected_candidate.as_deref().unwrap_or("files"))
            .show_ui(ui, |ui| {
                for name in &self.candidates {
                    let selected = self.selected_candidate.as_deref() == Some(name.as_str());
                    if ui.selectable_label(selected, name).clicked() {
                        picked = Some(name.clone());
                    }
                }
            });
        if let Some(name) = picked {
            if let Ok(source) = self.session.load_function_source(&name) {
                self.custom_code = source;
                self.custom_name = name.clone();
            }
            self.selected_candidate = Some(name);
        }
    }

    /// Copy a script from anywhere on disk into the editor.
    fn import_function_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Rhai script", &[SCRIPT_EXTENSION])
            .set_directory(&self.config.functions_dir)
            .pick_file()
        else {
            return;
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    self.custom_name = stem.to_string();
                }
                self.custom_code = source;
                self.session.report(format!(
                    "Imported '{}'; save it to use it for auto-draw",
                    path.display()
                ));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "import failed");
                self.session.report(format!("Failed to read file: {}", e));
            }
        }
    }
}
