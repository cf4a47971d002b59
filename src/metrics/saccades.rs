use super::types::{FixationTextBinding, SaccadeKind, TextSaccadeMetrics};

/// Classify the saccade between two consecutive bound fixations.
/// Returns `None` when either endpoint is unbound or both land on the same
/// word (a refixation, not a between-word saccade).
pub fn classify(prev: &FixationTextBinding, next: &FixationTextBinding) -> Option<SaccadeKind> {
    let pw = prev.word_index?;
    let nw = next.word_index?;
    let pl = prev.line_index?;
    let nl = next.line_index?;

    if nl > pl {
        return Some(SaccadeKind::Sweep);
    }
    if nl < pl {
        return Some(SaccadeKind::Regressive);
    }
    match nw.cmp(&pw) {
        std::cmp::Ordering::Greater => Some(SaccadeKind::Progressive),
        std::cmp::Ordering::Less => Some(SaccadeKind::Regressive),
        std::cmp::Ordering::Equal => None,
    }
}

/// Aggregate over every consecutive fixation pair. Unclassifiable pairs
/// still count toward `saccade_count` and the amplitude mean.
pub fn compute_saccade_metrics(bindings: &[FixationTextBinding]) -> TextSaccadeMetrics {
    let mut metrics = TextSaccadeMetrics::default();
    let mut amplitude_sum = 0.0;

    for pair in bindings.windows(2) {
        metrics.saccade_count += 1;
        let dx = pair[1].fixation.x_px - pair[0].fixation.x_px;
        let dy = pair[1].fixation.y_px - pair[0].fixation.y_px;
        amplitude_sum += (dx * dx + dy * dy).sqrt();

        match classify(&pair[0], &pair[1]) {
            Some(SaccadeKind::Progressive) => metrics.progressive_count += 1,
            Some(SaccadeKind::Regressive) => metrics.regressive_count += 1,
            Some(SaccadeKind::Sweep) => metrics.sweep_count += 1,
            None => {}
        }
    }

    if metrics.saccade_count > 0 {
        metrics.mean_amplitude_px = amplitude_sum / metrics.saccade_count as f64;
    }
    metrics
}
