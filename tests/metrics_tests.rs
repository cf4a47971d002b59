use gazekit::config::BindingSettings;
use gazekit::core_types::Fixation;
use gazekit::layout::{compute_layout, FixedAdvanceMeasure, TextLayoutConfig, TextLayoutResult};
use gazekit::metrics::{
    bind_fixations, compute_line_metrics, compute_saccade_metrics, compute_word_metrics,
    FixationTextBinding, SaccadeKind,
};
use gazekit::metrics::saccades::classify;

const EPS: f64 = 1e-9;

/// Two lines, three words each, 10px font:
/// line 0: one(0..18) two(24..42) three(48..78), centers x 9/33/63, y 5
/// line 1: four(0..24) five(30..54) six(60..78), centers x 12/42/69, y 15
fn two_line_layout() -> TextLayoutResult {
    let cfg = TextLayoutConfig {
        text: "one two three\nfour five six".to_string(),
        font_size_px: 10.0,
        ..Default::default()
    };
    compute_layout(&cfg, 96.0, &FixedAdvanceMeasure::default())
}

fn fix_at(x: f64, y: f64, start: f64, dur: f64) -> Fixation {
    Fixation {
        start_sec: start,
        dur_sec: dur,
        x_px: x,
        y_px: y,
    }
}

fn bind_on_words(word_xs: &[(f64, f64, f64)], layout: &TextLayoutResult) -> Vec<FixationTextBinding> {
    // (x, y, dur) triples, chained in time.
    let mut t = 0.0;
    let fixations: Vec<Fixation> = word_xs
        .iter()
        .map(|&(x, y, dur)| {
            let f = fix_at(x, y, t, dur);
            t += dur + 0.03;
            f
        })
        .collect();
    bind_fixations(&fixations, layout, &BindingSettings::default())
}

#[test]
fn test_binding_nearest_word_within_cutoff() {
    let layout = two_line_layout();
    let fixations = vec![
        fix_at(9.0, 5.0, 0.0, 0.2),     // dead center of "one"
        fix_at(35.0, 6.0, 0.3, 0.2),    // near "two"
        fix_at(1000.0, 500.0, 0.6, 0.2), // far outside everything
    ];
    let bindings = bind_fixations(&fixations, &layout, &BindingSettings::default());

    assert_eq!(bindings[0].word_index, Some(0));
    assert_eq!(bindings[0].line_index, Some(0));
    assert!(bindings[0].distance_px.unwrap() < EPS);

    assert_eq!(bindings[1].word_index, Some(1));

    // Beyond the cutoff: unbound word, but the line band fallback still
    // resolves a line for line-level context.
    assert_eq!(bindings[2].word_index, None);
    assert_eq!(bindings[2].line_index, Some(1));
    assert!(bindings[2].distance_px.unwrap() > 100.0);
}

#[test]
fn test_binding_empty_layout() {
    let empty = compute_layout(
        &TextLayoutConfig::default(),
        96.0,
        &FixedAdvanceMeasure::default(),
    );
    let bindings = bind_fixations(&[fix_at(5.0, 5.0, 0.0, 0.1)], &empty, &BindingSettings::default());
    assert_eq!(bindings[0].word_index, None);
    assert_eq!(bindings[0].line_index, None);
    assert_eq!(bindings[0].distance_px, None);
}

#[test]
fn test_binding_without_words_round_trips_as_json() {
    let empty = compute_layout(
        &TextLayoutConfig::default(),
        96.0,
        &FixedAdvanceMeasure::default(),
    );
    let bindings = bind_fixations(&[fix_at(5.0, 5.0, 0.0, 0.1)], &empty, &BindingSettings::default());

    let json = serde_json::to_string(&bindings).unwrap();
    assert!(json.contains("\"distancePx\":null"));
    let back: Vec<FixationTextBinding> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bindings);
}

#[test]
fn test_word_first_pass_and_second_pass() {
    let layout = two_line_layout();
    // Word sequence 0, 0, 1, 0, 2 with known durations.
    let bindings = bind_on_words(
        &[
            (9.0, 5.0, 0.2),
            (9.0, 5.0, 0.1),
            (33.0, 5.0, 0.3),
            (9.0, 5.0, 0.2),
            (63.0, 5.0, 0.25),
        ],
        &layout,
    );
    let words = compute_word_metrics(&bindings, &layout);

    let w0 = &words[0];
    assert_eq!(w0.fixation_count, 3);
    assert!((w0.total_dur_sec - 0.5).abs() < EPS);
    // First pass is the initial two-fixation run only.
    assert!((w0.first_fixation_dur_sec - 0.2).abs() < EPS);
    assert!((w0.gaze_dur_sec - 0.3).abs() < EPS);
    // Re-entry after visiting "two" is second pass.
    assert!((w0.second_pass_dur_sec - 0.2).abs() < EPS);
    // Gaze moved past immediately after the first run.
    assert!((w0.go_past_dur_sec - 0.3).abs() < EPS);
    assert_eq!(w0.regression_in_count, 1);

    let w1 = &words[1];
    assert_eq!(w1.fixation_count, 1);
    assert!((w1.gaze_dur_sec - 0.3).abs() < EPS);
    // Go-past spans the regression back to "one" before reaching "three".
    assert!((w1.go_past_dur_sec - 0.5).abs() < EPS);
    assert!((w1.second_pass_dur_sec - 0.0).abs() < EPS);

    // Never-fixated words stay zeroed.
    let w5 = &words[5];
    assert_eq!(w5.fixation_count, 0);
    assert_eq!(w5.total_dur_sec, 0.0);
    assert_eq!(words.len(), layout.words.len());
}

#[test]
fn test_unbound_fixation_breaks_first_pass_run() {
    let layout = two_line_layout();
    // on "one", off-text, back on "one".
    let bindings = bind_on_words(
        &[
            (9.0, 5.0, 0.2),
            (2000.0, 5.0, 0.1),
            (9.0, 5.0, 0.3),
        ],
        &layout,
    );
    let words = compute_word_metrics(&bindings, &layout);
    let w0 = &words[0];
    assert_eq!(w0.fixation_count, 2);
    assert!((w0.gaze_dur_sec - 0.2).abs() < EPS);
    assert!((w0.second_pass_dur_sec - 0.3).abs() < EPS);
}

#[test]
fn test_saccade_classification() {
    let layout = two_line_layout();
    // one -> two -> one -> three -> four(next line) -> five
    let bindings = bind_on_words(
        &[
            (9.0, 5.0, 0.1),
            (33.0, 5.0, 0.1),
            (9.0, 5.0, 0.1),
            (63.0, 5.0, 0.1),
            (12.0, 15.0, 0.1),
            (42.0, 15.0, 0.1),
        ],
        &layout,
    );

    assert_eq!(classify(&bindings[0], &bindings[1]), Some(SaccadeKind::Progressive));
    assert_eq!(classify(&bindings[1], &bindings[2]), Some(SaccadeKind::Regressive));
    assert_eq!(classify(&bindings[2], &bindings[3]), Some(SaccadeKind::Progressive));
    assert_eq!(classify(&bindings[3], &bindings[4]), Some(SaccadeKind::Sweep));
    // Same word twice is a refixation, not a saccade class.
    assert_eq!(classify(&bindings[4], &bindings[4]), None);

    let metrics = compute_saccade_metrics(&bindings);
    assert_eq!(metrics.saccade_count, 5);
    assert_eq!(metrics.progressive_count, 3);
    assert_eq!(metrics.regressive_count, 1);
    assert_eq!(metrics.sweep_count, 1);
    assert!(metrics.mean_amplitude_px > 0.0);
}

#[test]
fn test_regressive_line_change() {
    let layout = two_line_layout();
    // five (line 1) back up to two (line 0).
    let bindings = bind_on_words(&[(42.0, 15.0, 0.1), (33.0, 5.0, 0.1)], &layout);
    assert_eq!(classify(&bindings[0], &bindings[1]), Some(SaccadeKind::Regressive));
}

#[test]
fn test_line_metrics() {
    let layout = two_line_layout();
    // Two fixations line 0, sweep to line 1, regression back to line 0.
    let bindings = bind_on_words(
        &[
            (9.0, 5.0, 0.2),
            (33.0, 5.0, 0.2),
            (12.0, 15.0, 0.4),
            (9.0, 5.0, 0.2),
        ],
        &layout,
    );
    let lines = compute_line_metrics(&bindings, &layout);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].fixation_count, 3);
    assert!((lines[0].total_dur_sec - 0.6).abs() < EPS);
    assert!((lines[0].mean_fixation_dur_sec - 0.2).abs() < EPS);
    // The regression back up lands on line 0.
    assert_eq!(lines[0].regression_count, 1);

    assert_eq!(lines[1].fixation_count, 1);
    assert!((lines[1].mean_fixation_dur_sec - 0.4).abs() < EPS);
    assert_eq!(lines[1].regression_count, 0);
}
