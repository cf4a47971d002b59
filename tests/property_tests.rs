use gazekit::config::DetectorSettings;
use gazekit::core_types::{Fixation, GazeSample};
use gazekit::detector::detect_idt;
use gazekit::drift::{auto_correct, correct_drift, DriftMethod};
use gazekit::layout::{compute_layout, FixedAdvanceMeasure, TextLayoutConfig};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    /// Monotonic gaze recording: cumulative positive time steps, coordinates
    /// anywhere on (and slightly off) the normalized screen.
    fn arb_samples()(
        steps in proptest::collection::vec((0.001..0.05f64, 0.0..1.0f64, 0.0..1.0f64), 0..200)
    ) -> Vec<GazeSample> {
        let mut t = 0.0;
        steps
            .into_iter()
            .map(|(dt, x, y)| {
                t += dt;
                GazeSample::new(t, x, y)
            })
            .collect()
    }
}

prop_compose! {
    fn arb_fixations()(
        raw in proptest::collection::vec((0.08..0.6f64, 0.0..1000.0f64, -100.0..1100.0f64), 0..60)
    ) -> Vec<Fixation> {
        let mut t = 0.0;
        raw.into_iter()
            .map(|(dur, x, y)| {
                let f = Fixation { start_sec: t, dur_sec: dur, x_px: x, y_px: y };
                t += dur + 0.02;
                f
            })
            .collect()
    }
}

prop_compose! {
    fn arb_layout_config()(
        word_count in 1usize..40,
        font_size in 8.0..32.0f64,
        max_width in prop_oneof![Just(0.0f64), 80.0..600.0f64],
        spacing in 1.0..2.0f64
    ) -> TextLayoutConfig {
        let text = (0..word_count)
            .map(|i| "word"[..1 + i % 4].to_string())
            .collect::<Vec<_>>()
            .join(" ");
        TextLayoutConfig {
            text,
            font_size_px: font_size,
            line_spacing: spacing,
            max_width_px: max_width,
            ..Default::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // No emitted fixation may ever undercut the minimum duration, and its
    // contributing sample window must respect the dispersion bound at the
    // moment it was sealed.
    #[test]
    fn prop_idt_duration_and_dispersion_bounds(samples in arb_samples()) {
        let settings = DetectorSettings::default();
        let fixations = detect_idt(&samples, 1920.0, 1080.0, &settings);

        for f in &fixations {
            prop_assert!(f.dur_sec >= settings.min_fix_dur_sec);

            // Timestamps are strictly increasing, so the window is exactly
            // the samples inside [start, start + dur].
            let window: Vec<(f64, f64)> = samples
                .iter()
                .filter(|s| {
                    s.time_sec >= f.start_sec && s.time_sec <= f.start_sec + f.dur_sec + 1e-9
                })
                .map(|s| (s.x_norm * 1920.0, s.y_norm * 1080.0))
                .collect();
            prop_assert!(window.len() >= 2);

            let min_x = window.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let max_x = window.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
            let min_y = window.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let max_y = window.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(
                (max_x - min_x) + (max_y - min_y) <= settings.dispersion_threshold_px + 1e-9
            );
        }

        // Fixations come out ordered and non-overlapping.
        for pair in fixations.windows(2) {
            prop_assert!(pair[0].start_sec + pair[0].dur_sec <= pair[1].start_sec);
        }
    }

    #[test]
    fn prop_layout_idempotent_and_arena_consistent(cfg in arb_layout_config()) {
        let measure = FixedAdvanceMeasure::default();
        let a = compute_layout(&cfg, 96.0, &measure);
        let b = compute_layout(&cfg, 96.0, &measure);
        prop_assert_eq!(&a.words, &b.words);
        prop_assert_eq!(&a.lines, &b.lines);

        // Flat arena is the concatenation of the per-line ranges.
        let mut next = 0;
        for line in &a.lines {
            prop_assert_eq!(line.word_range.start, next);
            next = line.word_range.end;
            for w in a.line_words(line) {
                prop_assert_eq!(w.line_index, line.index);
            }
        }
        prop_assert_eq!(next, a.words.len());
        for (i, w) in a.words.iter().enumerate() {
            prop_assert_eq!(w.index, i);
        }

        // Every materialized line holds at least one word.
        for line in &a.lines {
            prop_assert!(line.word_count() >= 1);
        }
    }

    #[test]
    fn prop_drift_kappa_in_unit_interval(
        fixations in arb_fixations(),
        cfg in arb_layout_config()
    ) {
        let layout = compute_layout(&cfg, 96.0, &FixedAdvanceMeasure::default());
        let centers: Vec<f64> = layout.lines.iter().map(|l| l.center_y()).collect();

        for method in [DriftMethod::None, DriftMethod::Slice, DriftMethod::Cluster] {
            let result = correct_drift(&fixations, &layout, method);
            prop_assert!(result.kappa >= 0.0 && result.kappa <= 1.0);
            prop_assert_eq!(result.fixations.len(), fixations.len());

            // Slice and Cluster land every fixation on some line center.
            if method != DriftMethod::None && !fixations.is_empty() && !centers.is_empty() {
                for f in &result.fixations {
                    prop_assert!(centers.iter().any(|&c| (f.y_px - c).abs() < 1e-9));
                }
            }
        }

        let auto = auto_correct(&fixations, &layout);
        prop_assert!(auto.kappa >= 0.0 && auto.kappa <= 1.0);
    }
}
