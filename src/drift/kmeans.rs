/// 1-D k-means with deterministic even-spaced initialization.
#[derive(Debug, Clone)]
pub struct Kmeans1d {
    pub centers: Vec<f64>,
    pub assignments: Vec<usize>,
}

/// Cluster `values` into `k` groups.
///
/// Centers start evenly spaced strictly inside [min, max]:
/// `center[i] = min + step * (i + 1)` with `step = (max - min) / (k + 1)`.
/// Each round assigns every value to its nearest center (strict `<`, so the
/// lowest center index wins ties) then recomputes means, stopping early once
/// no assignment changes. Empty clusters keep their previous center.
///
/// Preconditions (`k >= 1`, `values.len() >= k`) are the caller's to uphold.
pub fn cluster_1d(values: &[f64], k: usize, max_rounds: usize) -> Kmeans1d {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / (k as f64 + 1.0);

    let mut centers: Vec<f64> = (0..k).map(|i| min + step * (i as f64 + 1.0)).collect();
    let mut assignments = vec![0usize; values.len()];

    for _ in 0..max_rounds {
        let mut changed = false;
        for (vi, &v) in values.iter().enumerate() {
            let mut best = 0;
            let mut best_d = (v - centers[0]).abs();
            for (ci, &c) in centers.iter().enumerate().skip(1) {
                let d = (v - c).abs();
                if d < best_d {
                    best_d = d;
                    best = ci;
                }
            }
            if assignments[vi] != best {
                assignments[vi] = best;
                changed = true;
            }
        }

        let mut sums = vec![0.0; k];
        let mut counts = vec![0usize; k];
        for (vi, &v) in values.iter().enumerate() {
            sums[assignments[vi]] += v;
            counts[assignments[vi]] += 1;
        }
        for ci in 0..k {
            if counts[ci] > 0 {
                centers[ci] = sums[ci] / counts[ci] as f64;
            }
        }

        if !changed {
            break;
        }
    }

    Kmeans1d {
        centers,
        assignments,
    }
}
