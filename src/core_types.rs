use serde::{Deserialize, Serialize};

/// One raw gaze sample as delivered by the tracker.
///
/// Coordinates are normalized to the screen: (0,0) top-left, (1,1)
/// bottom-right. Timestamps are seconds, strictly increasing within a
/// recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeSample {
    pub time_sec: f64,
    pub x_norm: f64,
    pub y_norm: f64,
}

impl GazeSample {
    pub fn new(time_sec: f64, x_norm: f64, y_norm: f64) -> Self {
        Self {
            time_sec,
            x_norm,
            y_norm,
        }
    }
}

/// A detected fixation in screen pixel space.
///
/// Only the detector produces these; `dur_sec` is always at least the
/// configured minimum fixation duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixation {
    pub start_sec: f64,
    pub dur_sec: f64,
    pub x_px: f64,
    pub y_px: f64,
}

impl Fixation {
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.dur_sec
    }
}
