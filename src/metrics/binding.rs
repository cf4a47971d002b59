use super::types::FixationTextBinding;
use crate::config::BindingSettings;
use crate::core_types::Fixation;
use crate::layout::TextLayoutResult;

/// Bind each fixation to at most one word: nearest center within the
/// configured cutoff. The line index is resolved through the layout's
/// vertical bands even when no word binds, so line-level metrics still see
/// off-word fixations.
pub fn bind_fixations(
    fixations: &[Fixation],
    layout: &TextLayoutResult,
    settings: &BindingSettings,
) -> Vec<FixationTextBinding> {
    fixations
        .iter()
        .map(|f| bind_one(f, layout, settings))
        .collect()
}

fn bind_one(
    fixation: &Fixation,
    layout: &TextLayoutResult,
    settings: &BindingSettings,
) -> FixationTextBinding {
    let mut best: Option<(usize, f64)> = None;
    for word in &layout.words {
        let dx = fixation.x_px - word.center_x();
        let dy = fixation.y_px - word.center_y();
        let d = (dx * dx + dy * dy).sqrt();
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((word.index, d));
        }
    }

    let distance_px = best.map(|(_, d)| d);
    let word_index = best
        .filter(|&(_, d)| d <= settings.max_binding_distance_px)
        .map(|(i, _)| i);

    let line_index = match word_index {
        Some(wi) => Some(layout.words[wi].line_index),
        None => layout.find_line_at(fixation.y_px).map(|l| l.index),
    };

    FixationTextBinding {
        fixation: *fixation,
        word_index,
        line_index,
        distance_px,
        corrected_y: fixation.y_px,
    }
}
