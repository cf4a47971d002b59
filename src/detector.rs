use crate::config::DetectorSettings;
use crate::core_types::{Fixation, GazeSample};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    #[default]
    Idt,
    Ivt,
}

/// Detect fixations using the method selected in `settings`.
pub fn detect(
    samples: &[GazeSample],
    screen_w_px: f64,
    screen_h_px: f64,
    settings: &DetectorSettings,
) -> Vec<Fixation> {
    match settings.method {
        DetectionMethod::Idt => detect_idt(samples, screen_w_px, screen_h_px, settings),
        DetectionMethod::Ivt => detect_ivt(samples, screen_w_px, screen_h_px, settings),
    }
}

/// Dispersion-threshold (I-DT) fixation detection.
///
/// Classic window-growing: grow a window until it spans the minimum
/// duration, test its Manhattan bounding-box dispersion
/// ((max_x - min_x) + (max_y - min_y)), and while under threshold extend
/// greedily one sample at a time. Emits the arithmetic mean of the sealed
/// window. Degenerate input (fewer than 2 samples, non-positive screen)
/// yields an empty sequence, not an error.
pub fn detect_idt(
    samples: &[GazeSample],
    screen_w_px: f64,
    screen_h_px: f64,
    settings: &DetectorSettings,
) -> Vec<Fixation> {
    if samples.len() < 2 || screen_w_px <= 0.0 || screen_h_px <= 0.0 {
        return Vec::new();
    }

    // Pixel conversion is local to detection; samples stay normalized.
    let px: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.x_norm * screen_w_px, s.y_norm * screen_h_px))
        .collect();

    let n = samples.len();
    let threshold = settings.dispersion_threshold_px;
    let mut fixations = Vec::new();
    let mut i = 0;

    while i < n {
        // Grow j until the window [i, j] spans the minimum duration.
        let mut j = i;
        while j < n && samples[j].time_sec - samples[i].time_sec < settings.min_fix_dur_sec {
            j += 1;
        }
        if j >= n {
            break;
        }

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &px[i..=j] {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        // Inclusive comparison both on entry and on extension.
        if (max_x - min_x) + (max_y - min_y) <= threshold {
            let mut k = j;
            while k + 1 < n {
                let (x, y) = px[k + 1];
                let nmin_x = min_x.min(x);
                let nmax_x = max_x.max(x);
                let nmin_y = min_y.min(y);
                let nmax_y = max_y.max(y);
                if (nmax_x - nmin_x) + (nmax_y - nmin_y) > threshold {
                    break;
                }
                min_x = nmin_x;
                max_x = nmax_x;
                min_y = nmin_y;
                max_y = nmax_y;
                k += 1;
            }

            let dur = samples[k].time_sec - samples[i].time_sec;
            if dur >= settings.min_fix_dur_sec {
                let count = (k - i + 1) as f64;
                let (sum_x, sum_y) = px[i..=k]
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
                fixations.push(Fixation {
                    start_sec: samples[i].time_sec,
                    dur_sec: dur,
                    x_px: sum_x / count,
                    y_px: sum_y / count,
                });
            }
            i = k + 1;
        } else {
            // Dispersion too large: slide the window start by one sample.
            i += 1;
        }
    }

    fixations
}

/// Velocity-threshold (I-VT) fixation detection.
///
/// Samples on either end of a slow interval (point-to-point velocity at or
/// below the threshold) are fixation samples; maximal runs of fixation
/// samples spanning at least the minimum duration are emitted as fixations.
pub fn detect_ivt(
    samples: &[GazeSample],
    screen_w_px: f64,
    screen_h_px: f64,
    settings: &DetectorSettings,
) -> Vec<Fixation> {
    if samples.len() < 2 || screen_w_px <= 0.0 || screen_h_px <= 0.0 {
        return Vec::new();
    }

    let px: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.x_norm * screen_w_px, s.y_norm * screen_h_px))
        .collect();

    let n = samples.len();
    let mut slow = vec![false; n];
    for w in 0..n - 1 {
        let dt = samples[w + 1].time_sec - samples[w].time_sec;
        if dt <= 0.0 {
            continue;
        }
        let dx = px[w + 1].0 - px[w].0;
        let dy = px[w + 1].1 - px[w].1;
        let velocity = (dx * dx + dy * dy).sqrt() / dt;
        if velocity <= settings.velocity_threshold_px_per_sec {
            slow[w] = true;
            slow[w + 1] = true;
        }
    }

    let mut fixations = Vec::new();
    let mut i = 0;
    while i < n {
        if !slow[i] {
            i += 1;
            continue;
        }
        let mut k = i;
        while k + 1 < n && slow[k + 1] {
            k += 1;
        }
        let dur = samples[k].time_sec - samples[i].time_sec;
        if dur >= settings.min_fix_dur_sec {
            let count = (k - i + 1) as f64;
            let (sum_x, sum_y) = px[i..=k]
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            fixations.push(Fixation {
                start_sec: samples[i].time_sec,
                dur_sec: dur,
                x_px: sum_x / count,
                y_px: sum_y / count,
            });
        }
        i = k + 1;
    }

    fixations
}
