use super::types::{TextLayoutResult, TextLine, TextWord};

/// Axis-aligned clamped Euclidean distance from a point to a word's box;
/// 0 when the point is inside.
pub fn distance_to_word(word: &TextWord, x: f64, y: f64) -> f64 {
    let dx = (word.x - x).max(x - word.right()).max(0.0);
    let dy = (word.y - y).max(y - word.bottom()).max(0.0);
    (dx * dx + dy * dy).sqrt()
}

impl TextLayoutResult {
    /// Nearest word whose tolerance-expanded box contains the point.
    /// Among containing candidates the smallest distance-to-box wins; ties
    /// resolve to the lowest word index (strict `<` keeps the first found).
    pub fn find_word_at(&self, x: f64, y: f64, tolerance: f64) -> Option<&TextWord> {
        let mut best: Option<(&TextWord, f64)> = None;
        for word in &self.words {
            let contains = x >= word.x - tolerance
                && x <= word.right() + tolerance
                && y >= word.y - tolerance
                && y <= word.bottom() + tolerance;
            if !contains {
                continue;
            }
            let d = distance_to_word(word, x, y);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((word, d));
            }
        }
        best.map(|(word, _)| word)
    }

    /// Line whose `[y, y + height)` band contains the point, else the line
    /// with the nearest vertical center.
    pub fn find_line_at(&self, y: f64) -> Option<&TextLine> {
        for line in &self.lines {
            if y >= line.y && y < line.y + line.height {
                return Some(line);
            }
        }
        let mut best: Option<(&TextLine, f64)> = None;
        for line in &self.lines {
            let d = (y - line.center_y()).abs();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((line, d));
            }
        }
        best.map(|(line, _)| line)
    }
}
