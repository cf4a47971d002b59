use super::saccades::classify;
use super::types::{FixationTextBinding, LineReadingMetrics, SaccadeKind, WordReadingMetrics};
use crate::layout::TextLayoutResult;

/// Per-word reading metrics over the temporally ordered bindings.
///
/// Every layout word gets an entry; words never fixated stay at zero.
/// First-pass metrics (FFD, gaze duration) come only from the first
/// contiguous run of fixations on the word; an unbound fixation in between
/// counts as the gaze leaving the word's span.
pub fn compute_word_metrics(
    bindings: &[FixationTextBinding],
    layout: &TextLayoutResult,
) -> Vec<WordReadingMetrics> {
    let mut out: Vec<WordReadingMetrics> = layout
        .words
        .iter()
        .map(|w| WordReadingMetrics {
            word_index: w.index,
            ..Default::default()
        })
        .collect();

    let mut prev_word: Option<usize> = None;
    for b in bindings {
        if let Some(wi) = b.word_index {
            let m = &mut out[wi];
            m.fixation_count += 1;
            m.total_dur_sec += b.fixation.dur_sec;
            if let Some(pw) = prev_word {
                if pw > wi {
                    m.regression_in_count += 1;
                }
            }
        }
        prev_word = b.word_index;
    }

    for wi in 0..out.len() {
        if out[wi].fixation_count == 0 {
            continue;
        }
        let Some(first) = bindings.iter().position(|b| b.word_index == Some(wi)) else {
            continue;
        };

        let mut gaze = 0.0;
        let mut j = first;
        while j < bindings.len() && bindings[j].word_index == Some(wi) {
            gaze += bindings[j].fixation.dur_sec;
            j += 1;
        }

        // Go-Past: everything from first entry until the gaze first lands
        // on a later word, regressions included.
        let mut go_past = 0.0;
        for b in &bindings[first..] {
            if let Some(bw) = b.word_index {
                if bw > wi {
                    break;
                }
            }
            go_past += b.fixation.dur_sec;
        }

        let m = &mut out[wi];
        m.first_fixation_dur_sec = bindings[first].fixation.dur_sec;
        m.gaze_dur_sec = gaze;
        m.go_past_dur_sec = go_past;
        m.second_pass_dur_sec = m.total_dur_sec - gaze;
    }

    out
}

/// Per-line reading metrics; regression counts attribute a regressive
/// saccade to its destination line.
pub fn compute_line_metrics(
    bindings: &[FixationTextBinding],
    layout: &TextLayoutResult,
) -> Vec<LineReadingMetrics> {
    let mut out: Vec<LineReadingMetrics> = layout
        .lines
        .iter()
        .map(|l| LineReadingMetrics {
            line_index: l.index,
            ..Default::default()
        })
        .collect();

    for b in bindings {
        if let Some(li) = b.line_index {
            let m = &mut out[li];
            m.fixation_count += 1;
            m.total_dur_sec += b.fixation.dur_sec;
        }
    }

    for pair in bindings.windows(2) {
        if classify(&pair[0], &pair[1]) == Some(SaccadeKind::Regressive) {
            if let Some(li) = pair[1].line_index {
                out[li].regression_count += 1;
            }
        }
    }

    for m in &mut out {
        if m.fixation_count > 0 {
            m.mean_fixation_dur_sec = m.total_dur_sec / m.fixation_count as f64;
        }
    }

    out
}
