use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// `#rrggbb` hex form; alpha is emitted separately as an opacity.
    #[must_use]
    pub fn to_svg_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

/// Colors and strokes used by the SVG backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    pub axis_color: Color,
    pub text_color: Color,
    /// Cycled over series in tree order.
    pub series_colors: Vec<Color>,
    pub projection_fill: Color,
    pub separator_color: Color,
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.4, 0.4, 0.4),
            text_color: Color::rgb(0.2, 0.2, 0.2),
            series_colors: vec![
                Color::rgb(0.16, 0.38, 1.0),
                Color::rgb(0.94, 0.33, 0.31),
                Color::rgb(0.15, 0.65, 0.6),
                Color::rgb(1.0, 0.6, 0.0),
            ],
            projection_fill: Color::rgba(0.16, 0.38, 1.0, 0.2),
            separator_color: Color::rgba(0.4, 0.4, 0.4, 0.6),
            stroke_width: 1.0,
        }
    }
}

impl SvgStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.axis_color,
            self.text_color,
            self.projection_fill,
            self.separator_color,
        ]
        .into_iter()
        .chain(self.series_colors.iter().copied())
        {
            color.validate()?;
        }
        if self.series_colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "`series_colors` must not be empty".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "`stroke_width` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        self.series_colors
            .get(index % self.series_colors.len().max(1))
            .copied()
            .unwrap_or(self.axis_color)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, SvgStyle};

    #[test]
    fn hex_rounds_channels() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_svg_hex(), "#ff0080");
    }

    #[test]
    fn style_rejects_out_of_range_color() {
        let style = SvgStyle {
            axis_color: Color::rgb(1.5, 0.0, 0.0),
            ..SvgStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn series_colors_cycle() {
        let style = SvgStyle::default();
        assert_eq!(style.series_color(0), style.series_color(4));
    }
}
