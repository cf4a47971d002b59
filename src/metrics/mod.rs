pub mod binding;
pub mod reading;
pub mod saccades;
pub mod types;

pub use self::binding::bind_fixations;
pub use self::reading::{compute_line_metrics, compute_word_metrics};
pub use self::saccades::compute_saccade_metrics;
pub use self::types::{
    FixationTextBinding, LineReadingMetrics, ReadingAnalysisResult, SaccadeKind,
    TextSaccadeMetrics, WordReadingMetrics,
};
