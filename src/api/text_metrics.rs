use serde::{Deserialize, Serialize};

use crate::core::CoordinateSpace;
use crate::error::{ChartError, ChartResult};

/// Rendered size of a string in user units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Text measurement port.
///
/// Backends that touch a rendering environment must release whatever they
/// acquire before returning, including on the error path.
pub trait TextMetrics {
    fn measure(
        &self,
        text: &str,
        font_size_px: f64,
        space: &CoordinateSpace,
    ) -> ChartResult<TextExtent>;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure(
        &self,
        text: &str,
        font_size_px: f64,
        space: &CoordinateSpace,
    ) -> ChartResult<TextExtent> {
        (**self).measure(text, font_size_px, space)
    }
}

/// Glyph-free estimate: every character is `char_width_ratio` of the font
/// size wide and a line is `line_height_ratio` of it tall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTextMetrics {
    pub char_width_ratio: f64,
    pub line_height_ratio: f64,
}

impl Default for EstimatedTextMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMetrics for EstimatedTextMetrics {
    fn measure(
        &self,
        text: &str,
        font_size_px: f64,
        space: &CoordinateSpace,
    ) -> ChartResult<TextExtent> {
        if !font_size_px.is_finite() || font_size_px < 0.0 {
            return Err(ChartError::TextMeasurement(format!(
                "font size must be finite and >= 0, got {font_size_px}"
            )));
        }
        if text.is_empty() || font_size_px == 0.0 {
            return Ok(TextExtent::default());
        }

        let (units_x, units_y) = space.units_per_pixel();
        let chars = text.chars().count() as f64;
        Ok(TextExtent::new(
            chars * font_size_px * self.char_width_ratio * units_x,
            font_size_px * self.line_height_ratio * units_y,
        ))
    }
}

/// Constant-size stub for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedTextMetrics {
    pub extent: TextExtent,
}

impl FixedTextMetrics {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            extent: TextExtent::new(width, height),
        }
    }
}

impl TextMetrics for FixedTextMetrics {
    fn measure(
        &self,
        _text: &str,
        _font_size_px: f64,
        _space: &CoordinateSpace,
    ) -> ChartResult<TextExtent> {
        Ok(self.extent)
    }
}

/// Largest extent over all labels; zero for an empty list.
pub fn measure_labels<M: TextMetrics + ?Sized>(
    metrics: &M,
    labels: &[String],
    font_size_px: f64,
    space: &CoordinateSpace,
) -> ChartResult<TextExtent> {
    labels.iter().try_fold(TextExtent::default(), |widest, label| {
        Ok(widest.max(metrics.measure(label, font_size_px, space)?))
    })
}
