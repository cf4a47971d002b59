use super::measure::TextMeasure;
use super::types::{TextAlignment, TextLayoutConfig, TextLayoutResult, TextLine, TextWord};

enum Token<'a> {
    Word {
        text: &'a str,
        start: usize,
        end: usize,
    },
    Newline,
}

/// Split on whitespace runs. Every '\n' is a hard line break consumed as a
/// separator (never part of a word); all other whitespace is soft.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(Token::Word {
                    text: &text[start..idx],
                    start,
                    end: idx,
                });
            }
            if ch == '\n' {
                tokens.push(Token::Newline);
            }
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::Word {
            text: &text[start..],
            start,
            end: text.len(),
        });
    }

    tokens
}

fn seal_line(lines: &mut Vec<TextLine>, words: &[TextWord], line_start: usize, y: f64, height: f64) {
    let texts: Vec<&str> = words[line_start..].iter().map(|w| w.text.as_str()).collect();
    lines.push(TextLine {
        index: lines.len(),
        y,
        height,
        word_range: line_start..words.len(),
        text: texts.join(" "),
    });
}

/// Lay out `config.text` into positioned words and lines.
///
/// Pure and infallible; callers are expected to validate the config at the
/// boundary (see `api::validate_config`). Wrapping happens before a word when
/// the cursor plus the word's measured width would pass `padding_left +
/// max_width_px` and the line already holds at least one word; a word alone
/// on an empty line is never wrapped, even when wider than the wrap width.
///
/// The cursor advances by one measured space after every word, including the
/// last word of a line. That trailing gap is inert for line and content
/// width, which derive from word edges rather than the cursor.
pub fn compute_layout(
    config: &TextLayoutConfig,
    dpi: f64,
    measure: &impl TextMeasure,
) -> TextLayoutResult {
    let line_height = config.font_size_px * config.line_spacing.max(1.0);
    let space_width = measure.measure(" ", &config.font_name, config.font_size_px, dpi);
    let wrap_enabled = config.max_width_px > 0.0;

    let mut words: Vec<TextWord> = Vec::new();
    let mut lines: Vec<TextLine> = Vec::new();
    let mut x = config.padding_left;
    let mut y = config.padding_top;
    let mut line_start = 0usize;

    for token in tokenize(&config.text) {
        match token {
            Token::Newline => {
                if words.len() > line_start {
                    seal_line(&mut lines, &words, line_start, y, line_height);
                    line_start = words.len();
                }
                // Blank lines advance the cursor but produce no TextLine.
                y += line_height;
                x = config.padding_left;
            }
            Token::Word { text, start, end } => {
                let width = measure.measure(text, &config.font_name, config.font_size_px, dpi);

                if wrap_enabled
                    && words.len() > line_start
                    && x + width > config.padding_left + config.max_width_px
                {
                    seal_line(&mut lines, &words, line_start, y, line_height);
                    line_start = words.len();
                    y += line_height;
                    x = config.padding_left;
                }

                words.push(TextWord {
                    index: words.len(),
                    line_index: lines.len(),
                    text: text.to_string(),
                    x,
                    y,
                    width,
                    height: line_height,
                    char_start: start,
                    char_end: end,
                });
                x += width + space_width;
            }
        }
    }
    if words.len() > line_start {
        seal_line(&mut lines, &words, line_start, y, line_height);
    }

    if wrap_enabled && config.alignment != TextAlignment::Left {
        align_lines(config, &mut words, &lines);
    }

    let content_width = words
        .iter()
        .map(|w| w.right())
        .fold(f64::NEG_INFINITY, f64::max);
    let content_width = if words.is_empty() {
        0.0
    } else {
        content_width - config.padding_left
    };
    let content_height = lines
        .last()
        .map(|l| l.y + l.height - config.padding_top)
        .unwrap_or(0.0);

    TextLayoutResult {
        config: config.clone(),
        dpi,
        words,
        lines,
        content_width,
        content_height,
        line_height,
    }
}

/// Center/Right alignment as a per-line post-pass: shift every word of the
/// line right by the free space (halved for Center), only when that shift is
/// strictly positive.
fn align_lines(config: &TextLayoutConfig, words: &mut [TextWord], lines: &[TextLine]) {
    for line in lines {
        let first_x = words[line.word_range.start].x;
        let last = &words[line.word_range.end - 1];
        let line_width = last.right() - first_x;

        let shift = match config.alignment {
            TextAlignment::Center => (config.max_width_px - line_width) / 2.0,
            TextAlignment::Right => config.max_width_px - line_width,
            TextAlignment::Left => 0.0,
        };
        if shift > 0.0 {
            for word in &mut words[line.word_range.clone()] {
                word.x += shift;
            }
        }
    }
}

impl TextLayoutResult {
    /// Full re-layout with only the wrap width changed. Pure: returns the new
    /// snapshot and leaves `self` untouched; the host decides whether to
    /// replace its stored value.
    pub fn recalculate_for_size(
        &self,
        new_max_width_px: f64,
        measure: &impl TextMeasure,
    ) -> TextLayoutResult {
        let mut config = self.config.clone();
        config.max_width_px = new_max_width_px;
        compute_layout(&config, self.dpi, measure)
    }
}
