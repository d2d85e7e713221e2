use std::path::PathBuf;

use slidecanvas::config::CanvasConfig;
use slidecanvas::data::animator::AnimatorState;
use slidecanvas::data::curve::{FunctionKind, StrokeSource};
use slidecanvas::data::session::{format_distance, AutoDrawRequest, CanvasSession};
use slidecanvas::error::{AutoDrawError, PluginError, SampleError};
use slidecanvas::events::{EventController, EventKind, EventPayload};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("slidecanvas-session-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn session(tag: &str) -> CanvasSession {
    let config = CanvasConfig {
        functions_dir: scratch_dir(tag),
        ..CanvasConfig::default()
    };
    CanvasSession::from_config(&config)
}

fn sine() -> AutoDrawRequest {
    AutoDrawRequest::builtin(FunctionKind::Sine, 100.0, 2.0)
}

#[test]
fn manual_stroke_accumulates_distance() {
    let mut s = session("manual");
    s.begin_manual([0.0, 0.0]);
    assert!(s.is_manual_drawing());
    s.drag_manual([3.0, 4.0]).unwrap();
    s.drag_manual([3.0, 10.0]).unwrap();
    s.end_manual();

    assert!(!s.is_manual_drawing());
    assert_eq!(s.slide_distance(), 11.0);
    assert_eq!(s.segments().len(), 2);
    assert!(s.segments().iter().all(|d| d.source == StrokeSource::Manual));
    assert_eq!(s.status(), "Stroke finished | total slide distance: 11.00");

    // Dragging without a pressed button draws nothing.
    assert!(s.drag_manual([50.0, 50.0]).is_none());
}

#[test]
fn auto_draw_runs_to_completion() {
    let mut s = session("auto");
    s.auto_draw(&sine()).unwrap();
    assert!(s.is_auto_drawing());
    assert_eq!(s.markers().len(), 1);
    assert_eq!(s.status(), "Auto-drawing...");

    let steps = s.advance(10_000);
    // 351 samples: 350 segments plus the completion step.
    assert_eq!(steps, 351);
    assert_eq!(s.animator().state(), AnimatorState::Completed);
    assert_eq!(s.segments().len(), 350);
    assert!(s.segments().iter().all(|d| d.source == StrokeSource::Auto));

    let total: f64 = s.segments().iter().map(|d| d.segment.length).sum();
    assert!((s.slide_distance() - total).abs() < 1e-9);
    assert_eq!(
        s.status(),
        format!("Auto-draw finished | slide distance: {}", format_distance(total))
    );
}

#[test]
fn pacing_does_not_change_the_result() {
    let mut fast = session("pace-fast");
    fast.auto_draw(&sine()).unwrap();
    fast.advance(u32::MAX);

    let mut slow = session("pace-slow");
    slow.auto_draw(&sine()).unwrap();
    while slow.advance(3) > 0 {}

    assert_eq!(fast.segments(), slow.segments());
    assert_eq!(fast.slide_distance(), slow.slide_distance());
}

#[test]
fn auto_draw_clears_previous_strokes() {
    let mut s = session("autoclear");
    s.begin_manual([0.0, 0.0]);
    s.drag_manual([10.0, 0.0]);
    s.end_manual();
    s.auto_draw(&AutoDrawRequest::builtin(FunctionKind::Linear, 100.0, 2.0))
        .unwrap();
    assert!(s.segments().is_empty());
    assert_eq!(s.slide_distance(), 0.0);

    s.advance(u32::MAX);
    // A flat line across the 700-wide canvas.
    assert!((s.slide_distance() - 700.0).abs() < 1e-9);
}

#[test]
fn manual_drawing_cancels_auto_draw() {
    let mut s = session("cancel");
    s.auto_draw(&sine()).unwrap();
    s.advance(5);
    let drawn = s.slide_distance();

    s.begin_manual([1.0, 1.0]);
    assert!(!s.is_auto_drawing());
    assert_eq!(s.animator().state(), AnimatorState::Cancelled);
    assert_eq!(s.advance(10), 0);
    assert_eq!(s.slide_distance(), drawn);

    s.drag_manual([1.0, 2.0]);
    assert_eq!(s.slide_distance(), drawn + 1.0);
}

#[test]
fn stop_keeps_strokes_and_clear_removes_them() {
    let mut s = session("stopclear");
    s.auto_draw(&sine()).unwrap();
    s.advance(20);
    s.stop();
    assert!(!s.is_auto_drawing());
    assert_eq!(s.segments().len(), 20);
    assert!(s.status().starts_with("Drawing stopped"));

    s.clear();
    assert!(s.segments().is_empty());
    assert!(s.markers().is_empty());
    assert_eq!(s.slide_distance(), 0.0);
    assert_eq!(s.animator().state(), AnimatorState::Idle);
    assert_eq!(s.status(), "Canvas cleared");
}

#[test]
fn reset_slide_keeps_strokes() {
    let mut s = session("reset");
    s.begin_manual([0.0, 0.0]);
    s.drag_manual([0.0, 5.0]);
    s.reset_slide();
    assert_eq!(s.slide_distance(), 0.0);
    assert_eq!(s.segments().len(), 1);
    s.drag_manual([0.0, 7.0]);
    assert_eq!(s.slide_distance(), 2.0);
}

#[test]
fn missing_custom_file_starts_nothing() {
    let mut s = session("missing");
    let err = s
        .auto_draw(&AutoDrawRequest::custom("nonexistent", 100.0, 2.0))
        .unwrap_err();
    match err {
        AutoDrawError::Plugin(p) => assert!(p.is_missing_file()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!s.is_auto_drawing());
    assert_eq!(s.animator().state(), AnimatorState::Idle);
    assert_eq!(s.animator().accumulated_distance(), 0.0);
    assert_eq!(s.slide_distance(), 0.0);
    assert!(s.segments().is_empty());
    assert!(s.markers().is_empty());
    assert_eq!(s.advance(10), 0);
    assert!(s.status().starts_with("Error: file '"), "{}", s.status());
    assert!(s.status().ends_with("nonexistent.rhai' does not exist"), "{}", s.status());
}

#[test]
fn missing_function_in_file_starts_nothing() {
    let mut s = session("nofunc");
    s.save_function(
        "shape",
        "fn helper(x, width, center_y, amp, freq) { x }\nfn other(x) { x }",
    )
    .unwrap();
    let err = s
        .auto_draw(&AutoDrawRequest::custom("shape", 100.0, 2.0))
        .unwrap_err();
    assert!(matches!(err, AutoDrawError::Plugin(PluginError::FunctionNotFound { .. })), "{err}");

    assert_eq!(s.animator().state(), AnimatorState::Idle);
    assert_eq!(s.animator().accumulated_distance(), 0.0);
    assert_eq!(s.slide_distance(), 0.0);
    assert!(s.segments().is_empty());
    assert!(s.markers().is_empty());
    assert!(s.status().starts_with("Error: function 'shape' not found"), "{}", s.status());
    assert!(s.status().ends_with("available functions: helper, other"), "{}", s.status());
}

#[test]
fn oversized_sampling_is_reported_not_fatal() {
    let config = CanvasConfig {
        functions_dir: scratch_dir("tinystep"),
        sample_step: 1e-9,
        ..CanvasConfig::default()
    };
    let mut s = CanvasSession::from_config(&config);
    let err = s.auto_draw(&sine()).unwrap_err();
    assert!(matches!(err, AutoDrawError::Sample(SampleError::TooManySamples { .. })), "{err}");
    assert!(!s.is_auto_drawing());
    assert!(s.status().starts_with("Error: range needs about"), "{}", s.status());
}

#[test]
fn blank_custom_name_is_reported() {
    let mut s = session("blank");
    let err = s.auto_draw(&AutoDrawRequest::custom("  ", 100.0, 2.0)).unwrap_err();
    assert!(matches!(err, AutoDrawError::MissingCustomName));
    assert_eq!(s.status(), "Error: set a custom function name first");
}

#[test]
fn broken_script_reports_load_failure() {
    let mut s = session("broken");
    s.save_function("oops", "fn oops(x, width { ").unwrap();
    assert!(s.auto_draw(&AutoDrawRequest::custom("oops", 100.0, 2.0)).is_err());
    assert!(s.status().starts_with("Load failed:"), "{}", s.status());
    assert!(!s.is_auto_drawing());
}

#[test]
fn faulty_points_are_drawn_on_center_line() {
    let mut s = session("faulty");
    s.save_function(
        "half",
        "fn half(x, width, center_y, amp, freq) { if x > 350.0 { throw \"out of range\"; } center_y + 10.0 }",
    )
    .unwrap();
    s.auto_draw(&AutoDrawRequest::custom("half", 100.0, 2.0)).unwrap();
    assert!(s.status().starts_with("Function evaluation error:"), "{}", s.status());
    assert!(s.status().contains("(175 point(s) drawn on the center line)"));

    s.advance(u32::MAX);
    assert_eq!(s.animator().state(), AnimatorState::Completed);
    assert_eq!(s.segments().len(), 350);
}

#[test]
fn custom_function_animates() {
    let mut s = session("custom");
    s.save_function("tilt", "fn tilt(x, width, center_y, amp, freq) { center_y + x / 10.0 }")
        .unwrap();
    assert_eq!(s.function_candidates(), vec!["tilt".to_string()]);
    s.auto_draw(&AutoDrawRequest::custom("tilt", 100.0, 2.0)).unwrap();
    assert_eq!(s.status(), "Loaded function 'tilt' | auto-drawing...");
    assert!(s.advance(u32::MAX) > 0);
    assert!(s.slide_distance() > 700.0);
}

#[test]
fn save_and_load_update_status() {
    let mut s = session("files");
    assert!(s.save_function("", "x").is_err());
    assert!(s.status().starts_with("Save failed:"));

    let path = s.save_function("wave", "fn wave(x, width, center_y, amp, freq) { x }").unwrap();
    assert!(s.status().starts_with("Custom function 'wave' saved to"));
    assert!(path.exists());

    let code = s.load_function_source("wave").unwrap();
    assert!(code.contains("fn wave"));
    assert_eq!(s.status(), "Loaded file 'wave'");

    assert!(s.load_function_source("absent").is_err());
    assert!(s.status().starts_with("Failed to read file:"));
}

#[test]
fn y_limit_is_clamped() {
    let mut s = session("ylimit");
    assert_eq!(s.y_limit(), 300.0);
    assert_eq!(s.set_y_limit(10.0), 50.0);
    assert_eq!(s.set_y_limit(1000.0), 500.0);
    assert_eq!(s.set_y_limit(f64::NAN), 500.0);
    assert_eq!(s.set_y_limit(123.0), 123.0);
}

#[test]
fn resize_affects_next_run() {
    let mut s = session("resize");
    s.resize(100.0, 200.0);
    assert_eq!(s.canvas_size(), [100.0, 200.0]);
    s.resize(0.0, 50.0);
    assert_eq!(s.canvas_size(), [100.0, 200.0]);

    s.auto_draw(&AutoDrawRequest::builtin(FunctionKind::Linear, 100.0, 2.0))
        .unwrap();
    s.advance(u32::MAX);
    assert_eq!(s.segments().len(), 50);
    assert!(s.segments().iter().all(|d| d.segment.from[1] == 100.0));
}

#[test]
fn events_follow_the_run() {
    let ctrl = EventController::new();
    let runs = ctrl.subscribe(EventKind::RUN_STARTED | EventKind::RUN_COMPLETED | EventKind::RUN_CANCELLED);
    let segments = ctrl.subscribe(EventKind::SEGMENT);

    let mut s = session("events");
    s.set_event_controller(Some(ctrl.clone()));
    s.auto_draw(&AutoDrawRequest::builtin(FunctionKind::Linear, 100.0, 2.0))
        .unwrap();
    s.advance(u32::MAX);
    s.auto_draw(&sine()).unwrap();
    s.advance(3);
    s.stop();

    let got: Vec<EventPayload> = runs.try_iter().map(|e| e.payload).collect();
    assert_eq!(got.len(), 4);
    assert!(matches!(&got[0], EventPayload::RunStarted { function, samples: 351 } if function == "linear"));
    assert!(matches!(got[1], EventPayload::RunFinished { distance } if (distance - 700.0).abs() < 1e-9));
    assert!(matches!(&got[2], EventPayload::RunStarted { function, .. } if function == "sine"));
    assert!(matches!(got[3], EventPayload::RunFinished { .. }));

    assert_eq!(segments.try_iter().count(), 353);
}
