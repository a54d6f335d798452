//! Label extent measurement (pass 1 of marker layout).

/// Measures rendered text extents in frame pixels.
///
/// Plug in a real shaping backend, or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` of `text` at `font_px`.
    fn measure(&self, text: &str, font_px: f64) -> (f64, f64);
}

/// Heuristic: an average glyph is ~0.6em wide and 1em tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_px: f64) -> (f64, f64) {
        (text.chars().count() as f64 * font_px * 0.60, font_px)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> (f64, f64),
{
    fn measure(&self, text: &str, font_px: f64) -> (f64, f64) {
        self(text, font_px)
    }
}

/// Largest extents across a set of axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct LabelMetrics {
    pub max_width: f64,
    pub max_height: f64,
}

impl LabelMetrics {
    /// Measure every label and keep the maxima. No labels measure as zero.
    pub fn measure<M: TextMeasurer + ?Sized>(labels: &[String], measurer: &M, font_px: f64) -> Self {
        labels
            .iter()
            .map(|l| measurer.measure(l, font_px))
            .fold(Self::default(), |acc, (w, h)| Self {
                max_width: acc.max_width.max(w),
                max_height: acc.max_height.max(h),
            })
    }
}
