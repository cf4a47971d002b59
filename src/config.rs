use crate::consts::{
    DEFAULT_DISPERSION_THRESHOLD_PX, DEFAULT_MAX_BINDING_DISTANCE_PX, DEFAULT_MIN_FIX_DUR_SEC,
    DEFAULT_VELOCITY_THRESHOLD_PX_PER_SEC,
};
use crate::detector::DetectionMethod;
use crate::drift::DriftMethod;
use crate::error::GkResult;
use serde::{Deserialize, Serialize};

/// Top-level settings for a full analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub detector: DetectorSettings,
    pub drift: DriftSettings,
    pub binding: BindingSettings,
}

impl AnalysisConfig {
    /// Parse a settings snapshot from JSON. Storage itself is the host's
    /// concern; unknown ranges are caught later by `api::validate_config`.
    pub fn from_json(raw: &str) -> GkResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    pub method: DetectionMethod,

    /// Minimum duration (seconds) a window must span to count as a fixation.
    pub min_fix_dur_sec: f64,

    /// I-DT: maximum Manhattan bounding-box dispersion (pixels).
    pub dispersion_threshold_px: f64,

    /// I-VT: maximum sample-to-sample velocity (pixels/second) inside a fixation.
    pub velocity_threshold_px_per_sec: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            method: DetectionMethod::Idt,
            min_fix_dur_sec: DEFAULT_MIN_FIX_DUR_SEC,
            dispersion_threshold_px: DEFAULT_DISPERSION_THRESHOLD_PX,
            velocity_threshold_px_per_sec: DEFAULT_VELOCITY_THRESHOLD_PX_PER_SEC,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftSettings {
    /// Method to apply. `None` skips correction entirely.
    pub method: DriftMethod,

    /// When true the method field is ignored and the slice/cluster result
    /// with the higher kappa is used.
    pub auto_select: bool,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            method: DriftMethod::Slice,
            auto_select: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingSettings {
    /// Fixations farther than this from every word center stay unbound.
    pub max_binding_distance_px: f64,
}

impl Default for BindingSettings {
    fn default() -> Self {
        Self {
            max_binding_distance_px: DEFAULT_MAX_BINDING_DISTANCE_PX,
        }
    }
}
