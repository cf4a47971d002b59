use crate::config::AnalysisConfig;
use crate::core_types::GazeSample;
use crate::detector;
use crate::drift::{self, DriftCorrectionResult};
use crate::error::{GazeKitError, GkResult};
use crate::layout::{compute_layout, TextLayoutConfig, TextLayoutResult, TextMeasure};
use crate::metrics::{
    bind_fixations, compute_line_metrics, compute_saccade_metrics, compute_word_metrics,
    ReadingAnalysisResult,
};
use tracing::{debug, info};

/// Boundary validation. Everything past this point is fail-soft: degenerate
/// data yields empty or pass-through results, never errors.
pub fn validate_config(
    screen_w_px: f64,
    screen_h_px: f64,
    layout: &TextLayoutConfig,
    analysis: &AnalysisConfig,
    dpi: f64,
) -> GkResult<()> {
    let fail = |msg: String| Err(GazeKitError::InvalidConfiguration(msg));

    if !(screen_w_px > 0.0) || !(screen_h_px > 0.0) {
        return fail(format!(
            "screen must have positive area, got {screen_w_px}x{screen_h_px}"
        ));
    }
    if !(layout.font_size_px > 0.0) {
        return fail(format!("font size must be > 0, got {}", layout.font_size_px));
    }
    if layout.line_spacing < 1.0 {
        return fail(format!(
            "line spacing must be >= 1, got {}",
            layout.line_spacing
        ));
    }
    if layout.max_width_px < 0.0 {
        return fail(format!(
            "max width must be >= 0 (0 = unconstrained), got {}",
            layout.max_width_px
        ));
    }
    if layout.padding_left < 0.0 || layout.padding_top < 0.0 {
        return fail(format!(
            "padding must be >= 0, got ({}, {})",
            layout.padding_left, layout.padding_top
        ));
    }
    if !(dpi > 0.0) {
        return fail(format!("dpi must be > 0, got {dpi}"));
    }
    if !(analysis.detector.min_fix_dur_sec > 0.0) {
        return fail(format!(
            "minimum fixation duration must be > 0, got {}",
            analysis.detector.min_fix_dur_sec
        ));
    }
    if !(analysis.detector.dispersion_threshold_px > 0.0) {
        return fail(format!(
            "dispersion threshold must be > 0, got {}",
            analysis.detector.dispersion_threshold_px
        ));
    }
    if !(analysis.detector.velocity_threshold_px_per_sec > 0.0) {
        return fail(format!(
            "velocity threshold must be > 0, got {}",
            analysis.detector.velocity_threshold_px_per_sec
        ));
    }
    if !(analysis.binding.max_binding_distance_px > 0.0) {
        return fail(format!(
            "binding distance cutoff must be > 0, got {}",
            analysis.binding.max_binding_distance_px
        ));
    }

    Ok(())
}

/// Run the whole pipeline over one immutable input snapshot:
/// detection -> layout -> drift correction -> binding -> metrics.
///
/// The only error is `InvalidConfiguration`, raised before any work begins.
/// Empty samples or empty text are normal degenerate inputs and produce an
/// empty (but complete) result.
pub fn analyze_reading(
    samples: &[GazeSample],
    screen_w_px: f64,
    screen_h_px: f64,
    layout_config: &TextLayoutConfig,
    analysis: &AnalysisConfig,
    dpi: f64,
    measure: &impl TextMeasure,
) -> GkResult<ReadingAnalysisResult> {
    validate_config(screen_w_px, screen_h_px, layout_config, analysis, dpi)?;

    let fixations = detector::detect(samples, screen_w_px, screen_h_px, &analysis.detector);
    info!(
        "Analysis: {} samples -> {} fixations ({})",
        samples.len(),
        fixations.len(),
        analysis.detector.method
    );

    let layout = compute_layout(layout_config, dpi, measure);
    debug!(
        "Analysis: layout has {} words over {} lines ({}x{} content)",
        layout.words.len(),
        layout.lines.len(),
        layout.content_width,
        layout.content_height
    );

    let drift = correct(&fixations, &layout, analysis);
    info!(
        "Analysis: drift correction via {} (kappa {:.3}, mean delta {:.1}px)",
        drift.method, drift.kappa, drift.delta
    );

    let bindings = bind_fixations(&drift.fixations, &layout, &analysis.binding);
    let word_metrics = compute_word_metrics(&bindings, &layout);
    let line_metrics = compute_line_metrics(&bindings, &layout);
    let saccades = compute_saccade_metrics(&bindings);

    Ok(ReadingAnalysisResult {
        drift,
        bindings,
        word_metrics,
        line_metrics,
        saccades,
    })
}

fn correct(
    fixations: &[crate::core_types::Fixation],
    layout: &TextLayoutResult,
    analysis: &AnalysisConfig,
) -> DriftCorrectionResult {
    if analysis.drift.auto_select {
        drift::auto_correct(fixations, layout)
    } else {
        drift::correct_drift(fixations, layout, analysis.drift.method)
    }
}
