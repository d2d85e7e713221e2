//! Scripting reference for custom functions.

use eframe::egui;

const HELP_TEXT: &str = r#"Custom functions are Rhai scripts
=================================

A custom function lives in <name>.rhai inside the functions directory
and must define a function with the same name and five parameters:

    fn <name>(x, width, center_y, amp, freq) {
        center_y + amp * sin(freq * PI() * x / width * 2.0)
    }

The last expression is the return value. Use float literals (2.0, not 2)
when mixing with the parameters.

WARNING: scripts run unsandboxed. Only load scripts you trust.

1. Constants
------------
PI()         - pi, about 3.14159
E()          - base of the natural logarithm, about 2.71828

2. Trigonometry (radians)
-------------------------
sin(x)  cos(x)  tan(x)
asin(x) acos(x) atan(x)  atan(x, y)
to_radians(deg)          to_degrees(rad)

3. Exponentials and logarithms
------------------------------
exp(x)       - e to the power x
ln(x)        - natural logarithm
log(x)       - base-10 logarithm
x ** y       - x to the power y
sqrt(x)      - square root

4. Other
--------
abs(x)  floor(x)  ceiling(x)  round(x)
max(a, b)  min(a, b)

5. Results
----------
Return a number. Integers are accepted. An array [re, im] or a map
#{ re: .., im: .. } is treated as a complex number and only the real
part is drawn. Points that throw or return anything else are drawn on
the center line and reported in the status bar.

6. Examples
-----------
// Spiral-like wave whose amplitude grows along x
fn spiral(x, width, center_y, amp, freq) {
    let angle = freq * 2.0 * PI() * x / width;
    let radius = amp * x / width;
    center_y + radius * sin(angle)
}

// Compound wave
fn complex_wave(x, width, center_y, amp, freq) {
    center_y + amp * (sin(freq * PI() * x / width * 2.0)
                      + 0.5 * cos(freq * 4.0 * PI() * x / width * 2.0))
}
"#;

pub(super) fn show_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Function scripting help")
        .open(open)
        .default_size([500.0, 400.0])
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(egui::Label::new(egui::RichText::new(HELP_TEXT).monospace()).wrap());
            });
        });
}
