//! The drawing surface.

use eframe::egui;
use egui::{Align2, Color32, FontId, Stroke};

use crate::data::curve::StrokeSource;

use super::SlideCanvasApp;

const MANUAL_COLOR: Color32 = Color32::from_rgb(0x1f, 0x4f, 0xd8);
const AUTO_COLOR: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a);
const LIMIT_COLOR: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
const STROKE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 3.0;

impl SlideCanvasApp {
    pub(super) fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let response = response.on_hover_cursor(egui::CursorIcon::Crosshair);
        let rect = response.rect;
        self.session
            .resize(f64::from(rect.width()), f64::from(rect.height()));

        // Canvas coordinates: origin at the top-left corner, y growing downwards.
        let to_canvas = |p: egui::Pos2| [f64::from(p.x - rect.min.x), f64::from(p.y - rect.min.y)];
        let to_screen = |p: [f64; 2]| rect.min + egui::vec2(p[0] as f32, p[1] as f32);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.begin_manual(to_canvas(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.drag_manual(to_canvas(pos));
            }
        }
        if response.drag_stopped() {
            self.session.end_manual();
        }

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let limit_y = rect.min.y + self.session.y_limit() as f32;
        painter.extend(egui::Shape::dashed_line(
            &[egui::pos2(rect.min.x, limit_y), egui::pos2(rect.max.x, limit_y)],
            Stroke::new(1.0, LIMIT_COLOR),
            5.0,
            5.0,
        ));
        painter.text(
            egui::pos2(rect.min.x + 10.0, limit_y - 10.0),
            Align2::LEFT_CENTER,
            format!("Y limit: {:.0}", self.session.y_limit()),
            FontId::proportional(12.0),
            LIMIT_COLOR,
        );

        for drawn in self.session.segments() {
            let color = match drawn.source {
                StrokeSource::Manual => MANUAL_COLOR,
                StrokeSource::Auto => AUTO_COLOR,
            };
            painter.line_segment(
                [to_screen(drawn.segment.from), to_screen(drawn.segment.to)],
                Stroke::new(STROKE_WIDTH, color),
            );
        }
        for marker in self.session.markers() {
            painter.circle_filled(to_screen(*marker), MARKER_RADIUS, AUTO_COLOR);
        }
    }
}
