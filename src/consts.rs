/// Default minimum fixation duration (seconds) for I-DT detection.
pub const DEFAULT_MIN_FIX_DUR_SEC: f64 = 0.08;

/// Default dispersion threshold (pixels) for I-DT detection.
/// Dispersion is the Manhattan bounding-box extent: (max_x - min_x) + (max_y - min_y).
pub const DEFAULT_DISPERSION_THRESHOLD_PX: f64 = 60.0;

/// Default velocity threshold (pixels/second) for the I-VT variant.
pub const DEFAULT_VELOCITY_THRESHOLD_PX_PER_SEC: f64 = 1000.0;

/// Normalization constant for drift-correction reliability:
/// kappa = max(0, 1 - stddev(deltas) / KAPPA_DRIFT_SPREAD_PX).
/// 50px represents the expected maximum vertical drift spread.
pub const KAPPA_DRIFT_SPREAD_PX: f64 = 50.0;

/// Maximum k-means refinement rounds for the Cluster drift method.
pub const KMEANS_MAX_ROUNDS: usize = 20;

/// Default cutoff (pixels) beyond which a fixation binds to no word.
pub const DEFAULT_MAX_BINDING_DISTANCE_PX: f64 = 100.0;

/// Default DPI assumed when the host does not supply one.
pub const DEFAULT_DPI: f64 = 96.0;
