use std::fmt::Write as _;

use tracing::debug;

use crate::api::{AxisGeometry, ChartLayout, SeriesGeometry};
use crate::core::{AxisCoordinates, AxisOrientation, AxisPosition, ViewBox, format_number};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer, SvgStyle};

/// Renders a layout into a standalone SVG document string.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    style: SvgStyle,
    view_box: Option<ViewBox>,
    output: String,
}

impl SvgRenderer {
    pub fn new(style: SvgStyle) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            view_box: None,
            output: String::new(),
        })
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    #[must_use]
    pub fn style(&self) -> &SvgStyle {
        &self.style
    }

    /// Document produced by the last successful render.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    fn write_document(&self, layout: &ChartLayout) -> Result<String, std::fmt::Error> {
        let view_box = self
            .view_box
            .unwrap_or_else(|| ViewBox::for_canvas(layout.canvas));
        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}">"#,
            format_number(layout.canvas.width),
            format_number(layout.canvas.height),
            view_box.to_attribute()
        )?;

        for (index, series) in layout.series.iter().enumerate() {
            let color = self.style.series_color(index);
            match series {
                SeriesGeometry::Line(line) => {
                    if let Some(projection) = &line.projection {
                        if !projection.shape_path.is_empty() {
                            writeln!(
                                svg,
                                r#"  <path d="{}" {} stroke="none"/>"#,
                                projection.shape_path,
                                fill_attributes(self.style.projection_fill)
                            )?;
                        }
                    }
                    if !line.path.is_empty() {
                        writeln!(
                            svg,
                            r#"  <path d="{}" fill="none" {}/>"#,
                            line.path,
                            self.stroke_attributes(color)
                        )?;
                    }
                }
                SeriesGeometry::Bar(bar) => {
                    for segment in bar.bars.iter().flat_map(|b| &b.segments) {
                        writeln!(
                            svg,
                            r#"  <path d="{}" {}/>"#,
                            segment.path,
                            fill_attributes(color)
                        )?;
                    }
                }
            }
        }

        for separator in &layout.separators {
            self.write_line(&mut svg, separator.coordinates, self.style.separator_color)?;
        }
        for axis in layout.x_axis.iter().chain(&layout.y_axis) {
            self.write_axis(&mut svg, axis)?;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Labels use the font size, offset and anchor the axis margins were
    /// measured with.
    fn write_axis(&self, svg: &mut String, axis: &AxisGeometry) -> std::fmt::Result {
        self.write_line(svg, axis.coordinates, self.style.axis_color)?;
        let label = axis.label_style;
        let anchor = label.anchor.as_svg();
        for tick in &axis.ticks {
            let (x, y, baseline) = match (axis.orientation, axis.position) {
                (AxisOrientation::Horizontal, AxisPosition::Top) => {
                    (tick.position, axis.coordinates.y1 - label.offset_px, "auto")
                }
                (AxisOrientation::Horizontal, _) => {
                    (tick.position, axis.coordinates.y1 + label.offset_px, "hanging")
                }
                (AxisOrientation::Vertical, AxisPosition::Right) => {
                    (axis.coordinates.x1 + label.offset_px, tick.position, "middle")
                }
                (AxisOrientation::Vertical, _) => {
                    (axis.coordinates.x1 - label.offset_px, tick.position, "middle")
                }
            };
            writeln!(
                svg,
                r#"  <text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" font-size="{}" {}>{}</text>"#,
                format_number(x),
                format_number(y),
                format_number(label.font_size_px),
                fill_attributes(self.style.text_color),
                escape_text(&tick.value)
            )?;
        }
        Ok(())
    }

    fn write_line(
        &self,
        svg: &mut String,
        line: AxisCoordinates,
        color: Color,
    ) -> std::fmt::Result {
        writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            format_number(line.x1),
            format_number(line.y1),
            format_number(line.x2),
            format_number(line.y2),
            self.stroke_attributes(color)
        )
    }

    fn stroke_attributes(&self, color: Color) -> String {
        format!(
            r#"stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            color.to_svg_hex(),
            format_number(color.alpha),
            format_number(self.style.stroke_width)
        )
    }
}

fn fill_attributes(color: Color) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        color.to_svg_hex(),
        format_number(color.alpha)
    )
}

/// Escapes the characters that are not allowed verbatim in SVG text nodes.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Renderer for SvgRenderer {
    fn render(&mut self, layout: &ChartLayout) -> ChartResult<()> {
        layout.validate()?;
        self.output = self
            .write_document(layout)
            .map_err(|e| ChartError::Serialization(format!("failed to write svg: {e}")))?;
        debug!(bytes = self.output.len(), "svg document rendered");
        Ok(())
    }
}
