pub mod kmeans;

use crate::consts::{KAPPA_DRIFT_SPREAD_PX, KMEANS_MAX_ROUNDS};
use crate::core_types::Fixation;
use crate::layout::TextLayoutResult;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DriftMethod {
    #[default]
    None,
    Slice,
    Cluster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftCorrectionResult {
    pub fixations: Vec<Fixation>,
    /// Mean signed Y shift applied.
    pub delta: f64,
    /// Reliability of the correction, clamped to [0, 1].
    pub kappa: f64,
    pub method: DriftMethod,
}

/// Correct vertical drift with the requested method.
///
/// Degenerate input (no fixations or an empty layout) passes through
/// uncorrected with the requested method reported. Cluster falls back to
/// Slice when there are fewer fixations than text lines; the result then
/// reports Slice, the method that actually ran.
pub fn correct_drift(
    fixations: &[Fixation],
    layout: &TextLayoutResult,
    method: DriftMethod,
) -> DriftCorrectionResult {
    if fixations.is_empty() || layout.lines.is_empty() {
        return pass_through(fixations, method);
    }
    match method {
        DriftMethod::None => pass_through(fixations, DriftMethod::None),
        DriftMethod::Slice => slice_correct(fixations, layout),
        DriftMethod::Cluster => cluster_correct(fixations, layout),
    }
}

/// Run Slice and Cluster and keep whichever scores the higher kappa.
/// Slice wins exact ties; Cluster must strictly exceed it to be chosen.
pub fn auto_correct(fixations: &[Fixation], layout: &TextLayoutResult) -> DriftCorrectionResult {
    if fixations.is_empty() || layout.lines.is_empty() {
        return pass_through(fixations, DriftMethod::None);
    }
    let slice = slice_correct(fixations, layout);
    let cluster = cluster_correct(fixations, layout);
    if cluster.kappa > slice.kappa {
        cluster
    } else {
        slice
    }
}

fn pass_through(fixations: &[Fixation], method: DriftMethod) -> DriftCorrectionResult {
    DriftCorrectionResult {
        fixations: fixations.to_vec(),
        delta: 0.0,
        kappa: 1.0,
        method,
    }
}

/// Snap each fixation independently to the vertical center of the nearest
/// text line; X is untouched.
fn slice_correct(fixations: &[Fixation], layout: &TextLayoutResult) -> DriftCorrectionResult {
    let centers: Vec<f64> = layout.lines.iter().map(|l| l.center_y()).collect();

    let mut corrected = Vec::with_capacity(fixations.len());
    let mut deltas = Vec::with_capacity(fixations.len());
    for f in fixations {
        let mut best = centers[0];
        let mut best_d = (f.y_px - centers[0]).abs();
        for &c in &centers[1..] {
            let d = (f.y_px - c).abs();
            if d < best_d {
                best_d = d;
                best = c;
            }
        }
        deltas.push(best - f.y_px);
        corrected.push(Fixation { y_px: best, ..*f });
    }

    DriftCorrectionResult {
        fixations: corrected,
        delta: mean(&deltas),
        kappa: kappa_from_deltas(&deltas),
        method: DriftMethod::Slice,
    }
}

/// 1-D k-means over fixation Y with k = line count, clusters matched to
/// lines by Y rank order (k-th smallest cluster mean pairs with the k-th
/// smallest line center), then snap each fixation to its matched line.
fn cluster_correct(fixations: &[Fixation], layout: &TextLayoutResult) -> DriftCorrectionResult {
    let k = layout.lines.len();
    if k < 1 || fixations.len() < k {
        return slice_correct(fixations, layout);
    }

    let ys: Vec<f64> = fixations.iter().map(|f| f.y_px).collect();
    let km = kmeans::cluster_1d(&ys, k, KMEANS_MAX_ROUNDS);

    let mut cluster_order: Vec<usize> = (0..k).collect();
    cluster_order.sort_by(|&a, &b| km.centers[a].total_cmp(&km.centers[b]));
    let mut line_order: Vec<usize> = (0..k).collect();
    line_order.sort_by(|&a, &b| layout.lines[a].center_y().total_cmp(&layout.lines[b].center_y()));

    let mut target = vec![0.0f64; k];
    for rank in 0..k {
        target[cluster_order[rank]] = layout.lines[line_order[rank]].center_y();
    }

    let mut corrected = Vec::with_capacity(fixations.len());
    let mut deltas = Vec::with_capacity(fixations.len());
    for (fi, f) in fixations.iter().enumerate() {
        let snapped = target[km.assignments[fi]];
        deltas.push(snapped - f.y_px);
        corrected.push(Fixation {
            y_px: snapped,
            ..*f
        });
    }

    DriftCorrectionResult {
        fixations: corrected,
        delta: mean(&deltas),
        kappa: kappa_from_deltas(&deltas),
        method: DriftMethod::Cluster,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Reliability from the spread of the signed per-fixation shifts:
/// `max(0, 1 - stddev / 50px)`, population stddev. Fewer than two deltas
/// give no variance evidence, so kappa is 1.0.
fn kappa_from_deltas(deltas: &[f64]) -> f64 {
    if deltas.len() < 2 {
        return 1.0;
    }
    let m = mean(deltas);
    let var = deltas.iter().map(|d| (d - m) * (d - m)).sum::<f64>() / deltas.len() as f64;
    (1.0 - var.sqrt() / KAPPA_DRIFT_SPREAD_PX).clamp(0.0, 1.0)
}
