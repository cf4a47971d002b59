use crate::core_types::Fixation;
use crate::drift::DriftCorrectionResult;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One drift-corrected fixation bound to the text it landed on.
/// `word_index == None` means the fixation fell outside any word (beyond the
/// binding cutoff).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixationTextBinding {
    pub fixation: Fixation,
    pub word_index: Option<usize>,
    pub line_index: Option<usize>,
    /// Distance to the nearest word center, bound or not. `None` only when
    /// the layout has no words at all (keeps the value finite for JSON).
    pub distance_px: Option<f64>,
    /// Y after drift correction (the Y the binding was resolved against).
    pub corrected_y: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SaccadeKind {
    /// Word index increases within the same line.
    Progressive,
    /// Word index decreases within the same line, or line index decreases.
    Regressive,
    /// Line index increases (typically the return sweep at line end).
    Sweep,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordReadingMetrics {
    pub word_index: usize,
    pub fixation_count: usize,

    /// First Fixation Duration: the first fixation of the first-pass run.
    pub first_fixation_dur_sec: f64,
    /// Gaze Duration: sum of the first contiguous run on the word, before
    /// the gaze first leaves its span.
    pub gaze_dur_sec: f64,
    /// Time from first entering the word until the gaze first lands on a
    /// later word, regressions in between included.
    pub go_past_dur_sec: f64,
    /// Everything after the first pass.
    pub second_pass_dur_sec: f64,
    pub total_dur_sec: f64,

    /// Entries into the word arriving from a word with a higher index.
    pub regression_in_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReadingMetrics {
    pub line_index: usize,
    pub fixation_count: usize,
    pub total_dur_sec: f64,
    pub mean_fixation_dur_sec: f64,
    /// Regressive saccades landing on this line.
    pub regression_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSaccadeMetrics {
    /// All consecutive fixation pairs.
    pub saccade_count: usize,
    pub progressive_count: usize,
    pub regressive_count: usize,
    pub sweep_count: usize,
    pub mean_amplitude_px: f64,
}

/// Complete immutable snapshot of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingAnalysisResult {
    pub drift: DriftCorrectionResult,
    pub bindings: Vec<FixationTextBinding>,
    pub word_metrics: Vec<WordReadingMetrics>,
    pub line_metrics: Vec<LineReadingMetrics>,
    pub saccades: TextSaccadeMetrics,
}
