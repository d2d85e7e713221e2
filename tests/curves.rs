use slidecanvas::data::curve::{CurveParameters, FunctionKind};
use slidecanvas::data::registry::FunctionRegistry;
use slidecanvas::data::sampler::{sample, sample_with, EMPTY_RANGE_HALF_HEIGHT, MAX_SAMPLES};
use slidecanvas::data::scaler::{compute, DEFAULT_MARGIN_FRACTION};
use slidecanvas::error::{EvaluationError, SampleError};
use slidecanvas::plugin::FunctionStore;

fn registry() -> FunctionRegistry {
    FunctionRegistry::new(FunctionStore::new(std::env::temp_dir()))
}

fn params(kind: FunctionKind) -> CurveParameters {
    CurveParameters::new(kind, 100.0, 2.0, 700.0, 500.0).unwrap()
}

#[test]
fn builtin_curves_are_pure() {
    let reg = registry();
    for kind in [
        FunctionKind::Sine,
        FunctionKind::Cosine,
        FunctionKind::Parabola,
        FunctionKind::Linear,
    ] {
        let curve = reg.resolve(&params(kind)).unwrap();
        for x in [0.0, 13.0, 350.0, 699.5] {
            assert_eq!(curve.evaluate(x).unwrap(), curve.evaluate(x).unwrap(), "{kind} at {x}");
        }
    }
}

#[test]
fn default_sine_fits_without_scaling() {
    let curve = registry().resolve(&params(FunctionKind::Sine)).unwrap();
    let sampled = sample(&curve, 0.0, 700.0, 2.0).unwrap();

    assert_eq!(sampled.points.len(), 351);
    assert_eq!(sampled.points.first().unwrap().x, 0.0);
    assert_eq!(sampled.points.last().unwrap().x, 700.0);
    assert!(sampled.min_y >= 150.0 - 1e-9 && sampled.max_y <= 350.0 + 1e-9);
    assert!(sampled.diagnostics.is_empty());

    let t = compute(sampled.min_y, sampled.max_y, 500.0, DEFAULT_MARGIN_FRACTION);
    assert_eq!(t.scale_factor, 1.0);
    for p in &sampled.points {
        let y = t.apply(p.y_raw);
        assert!((0.0..=500.0).contains(&y));
    }
}

#[test]
fn parabola_bottoms_out_at_center() {
    let curve = registry().resolve(&params(FunctionKind::Parabola)).unwrap();
    assert_eq!(curve.evaluate(350.0).unwrap(), 250.0);
    assert!((curve.evaluate(0.0).unwrap() - 350.0).abs() < 1e-9);
    assert!((curve.evaluate(700.0).unwrap() - 350.0).abs() < 1e-9);
}

#[test]
fn cosine_starts_at_peak() {
    let curve = registry().resolve(&params(FunctionKind::Cosine)).unwrap();
    assert!((curve.evaluate(0.0).unwrap() - 350.0).abs() < 1e-9);
}

#[test]
fn linear_is_flat_and_lands_on_center_line() {
    let curve = registry().resolve(&params(FunctionKind::Linear)).unwrap();
    let sampled = sample(&curve, 0.0, 700.0, 2.0).unwrap();
    assert_eq!(sampled.min_y, 250.0);
    assert_eq!(sampled.max_y, 250.0);

    let t = compute(sampled.min_y, sampled.max_y, 500.0, 0.1);
    assert_eq!(t.apply(250.0), 250.0);
}

#[test]
fn invalid_parameters_are_rejected() {
    let err = CurveParameters::new(FunctionKind::Sine, 0.0, 2.0, 700.0, 500.0).unwrap_err();
    assert_eq!(err.field, "amplitude");
    assert!(CurveParameters::new(FunctionKind::Sine, 100.0, f64::NAN, 700.0, 500.0).is_err());
    assert!(CurveParameters::new(FunctionKind::Sine, 100.0, 2.0, 700.0, -1.0).is_err());
}

#[test]
fn empty_range_reports_center_band() {
    let curve = registry().resolve(&params(FunctionKind::Sine)).unwrap();
    let sampled = sample(&curve, 10.0, 0.0, 2.0).unwrap();
    assert!(sampled.is_empty());
    assert_eq!(sampled.min_y, 250.0 - EMPTY_RANGE_HALF_HEIGHT);
    assert_eq!(sampled.max_y, 250.0 + EMPTY_RANGE_HALF_HEIGHT);
}

#[test]
fn non_positive_step_is_rejected() {
    let curve = registry().resolve(&params(FunctionKind::Sine)).unwrap();
    assert_eq!(sample(&curve, 0.0, 700.0, 0.0).unwrap_err(), SampleError::InvalidStep(0.0));
    assert!(sample(&curve, 0.0, 700.0, -2.0).is_err());
}

#[test]
fn non_finite_range_is_rejected() {
    let err = sample_with(Ok, 0.0, 0.0, f64::INFINITY, 2.0).unwrap_err();
    assert!(matches!(err, SampleError::NonFiniteRange { .. }), "{err}");
    assert!(sample_with(Ok, 0.0, f64::NAN, 10.0, 2.0).is_err());
    assert!(sample_with(Ok, 0.0, f64::NEG_INFINITY, 0.0, 2.0).is_err());
}

#[test]
fn oversized_ranges_are_rejected() {
    let err = sample_with(Ok, 0.0, 0.0, 1e300, 2.0).unwrap_err();
    assert!(matches!(err, SampleError::TooManySamples { max: MAX_SAMPLES, .. }), "{err}");

    // A tiny but valid step over a normal canvas width.
    let err = sample_with(Ok, 0.0, 0.0, 700.0, 1e-9).unwrap_err();
    assert!(matches!(err, SampleError::TooManySamples { .. }), "{err}");

    // Right at the limit is still fine.
    let sampled = sample_with(Ok, 0.0, 0.0, (MAX_SAMPLES - 1) as f64, 1.0).unwrap();
    assert_eq!(sampled.points.len(), MAX_SAMPLES);
}

#[test]
fn failing_points_use_fallback_and_are_recorded() {
    let sampled = sample_with(
        |x| {
            if x == 4.0 {
                Err(EvaluationError::new(x, "nope"))
            } else {
                Ok(x)
            }
        },
        -1.0,
        0.0,
        6.0,
        2.0,
    )
    .unwrap();
    let ys: Vec<f64> = sampled.points.iter().map(|p| p.y_raw).collect();
    assert_eq!(ys, vec![0.0, 2.0, -1.0, 6.0]);
    assert_eq!(sampled.diagnostics.len(), 1);
    assert_eq!(sampled.diagnostics[0].x, 4.0);
    assert_eq!(sampled.min_y, -1.0);
}

#[test]
fn scale_never_magnifies_and_fits_band() {
    let cases = [
        (0.0, 0.0),
        (-5.0, 5.0),
        (100.0, 400.0),
        (-1.0e6, 3.0e6),
        (249.9, 250.1),
    ];
    for height in [100.0, 500.0, 1080.0] {
        for margin in [0.0, 0.1, 0.5] {
            for (min_y, max_y) in cases {
                let t = compute(min_y, max_y, height, margin);
                assert!(t.scale_factor > 0.0 && t.scale_factor <= 1.0);

                let center = (min_y + max_y) / 2.0;
                assert!((t.apply(center) - height / 2.0).abs() < 1e-6);

                let band = height * (1.0 - margin);
                let span = (t.apply(max_y) - t.apply(min_y)).abs();
                assert!(span <= band + 1e-6, "span {span} > band {band}");
            }
        }
    }
}

#[test]
fn out_of_range_margin_is_clamped() {
    let t = compute(0.0, 1000.0, 500.0, 2.0);
    assert!(t.scale_factor > 0.0);
    let t = compute(0.0, 1000.0, 500.0, -1.0);
    assert!((t.scale_factor - 0.5).abs() < 1e-12);
}
