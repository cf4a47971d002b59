pub mod engine;
pub mod measure;
pub mod query;
pub mod types;

pub use self::engine::compute_layout;
pub use self::measure::{FixedAdvanceMeasure, TextMeasure};
pub use self::query::distance_to_word;
pub use self::types::{TextAlignment, TextLayoutConfig, TextLayoutResult, TextLine, TextWord};
