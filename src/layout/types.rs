use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLayoutConfig {
    pub text: String,
    pub font_name: String,
    pub font_size_px: f64,

    /// Line height multiplier; values below 1.0 are clamped to 1.0.
    pub line_spacing: f64,

    /// Wrap width in pixels; 0 means unconstrained (no wrapping, no alignment).
    pub max_width_px: f64,

    pub padding_left: f64,
    pub padding_top: f64,
    pub alignment: TextAlignment,
}

impl Default for TextLayoutConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_name: "sans-serif".to_string(),
            font_size_px: 16.0,
            line_spacing: 1.0,
            max_width_px: 0.0,
            padding_left: 0.0,
            padding_top: 0.0,
            alignment: TextAlignment::Left,
        }
    }
}

/// One laid-out word. Derived, read-only after layout; bounds accessors are
/// computed rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWord {
    /// Position in the layout's flat word arena.
    pub index: usize,
    pub line_index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Byte offsets into the source text, on char boundaries.
    pub char_start: usize,
    pub char_end: usize,
}

impl TextWord {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// One laid-out line. Word storage is a range into the layout's flat word
/// arena, so line views and the flat list share a single owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    pub index: usize,
    pub y: f64,
    pub height: f64,
    pub word_range: Range<usize>,
    pub text: String,
}

impl TextLine {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn word_count(&self) -> usize {
        self.word_range.len()
    }
}

/// Complete layout snapshot.
///
/// Invariants: `words` is exactly the concatenation of each line's
/// `word_range` in line order; `word.index` equals its arena position;
/// `line.index` equals its position in `lines`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayoutResult {
    pub config: TextLayoutConfig,
    pub dpi: f64,
    pub words: Vec<TextWord>,
    pub lines: Vec<TextLine>,
    pub content_width: f64,
    pub content_height: f64,
    pub line_height: f64,
}

impl TextLayoutResult {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn line_words(&self, line: &TextLine) -> &[TextWord] {
        &self.words[line.word_range.clone()]
    }

    /// Left edge of a line, from its first word.
    pub fn line_x(&self, line: &TextLine) -> f64 {
        self.words[line.word_range.start].x
    }

    /// Distance from the first word's left edge to the last word's right edge.
    pub fn line_width(&self, line: &TextLine) -> f64 {
        let first = &self.words[line.word_range.start];
        let last = &self.words[line.word_range.end - 1];
        last.right() - first.x
    }
}
