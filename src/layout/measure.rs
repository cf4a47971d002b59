use crate::consts::DEFAULT_DPI;

/// External text-measurement capability supplied by the host rendering
/// stack. Must be deterministic for identical inputs and callable from any
/// thread the analysis runs on.
pub trait TextMeasure {
    /// Rendered advance width (pixels) of `text` at the given font and size.
    fn measure(&self, text: &str, font_name: &str, font_size_px: f64, dpi: f64) -> f64;
}

/// Deterministic fixed-advance measurer: every char advances
/// `font_size_px * advance_em`, scaled by `dpi / 96`. This is the documented
/// measurement stub for reproducible layout tests and headless analysis.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    pub advance_em: f64,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, text: &str, _font_name: &str, font_size_px: f64, dpi: f64) -> f64 {
        text.chars().count() as f64 * font_size_px * self.advance_em * (dpi / DEFAULT_DPI)
    }
}
