//! Top-level entry point for running the canvas as a native window.

use eframe::egui;

use crate::config::CanvasConfig;
use crate::events::EventController;

use super::SlideCanvasApp;

/// Open the canvas window and block until it is closed.
///
/// When `events` is given, every session event is forwarded to its subscribers.
pub fn run_slidecanvas(config: CanvasConfig, events: Option<EventController>) -> eframe::Result<()> {
    let title = config.title.clone();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(&title)
        .with_inner_size(egui::vec2(
            config.canvas_width as f32 + 500.0,
            config.canvas_height as f32 + 200.0,
        ));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app = SlideCanvasApp::new(config);
    if let Some(ctrl) = events {
        app = app.with_event_controller(ctrl);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Phosphor glyphs are used on the action buttons.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
