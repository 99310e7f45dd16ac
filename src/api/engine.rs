use tracing::{debug, trace};

use crate::core::{
    AxisCoordinateInput, AxisCoordinates, AxisOrientation, AxisPosition, Canvas, DataPoint,
    Margins, PointLookup, TickPoint, map_number, map_value, resolve_axis_coordinates,
    resolve_tick_positions,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::series_builder::{SeriesContext, build_series, check_bar_groups_fit};
use super::spacing::axis_name;
use super::validation::{
    check_axis_length, check_canvas, check_dataset, check_series_key, check_ticks,
    fallback_dataset, fallback_tick_values, validate_engine_config,
};
use super::{
    AxisGeometry, ChartChild, ChartEngineConfig, ChartLayout, ChartSpacing, Diagnostic,
    DiagnosticCode, DiagnosticSink, Diagnostics, SeparatorGeometry, SpacingInput,
    SpacingResult, TextMetrics, compute_extra_spacing, derive_tick_values,
};

/// Layout engine: owns the declarative chart tree and turns it into
/// geometry, one full pass per call.
pub struct ChartEngine<M: TextMetrics> {
    metrics: M,
    config: ChartEngineConfig,
    data: Vec<DataPoint>,
    children: Vec<ChartChild>,
}

impl<M: TextMetrics> ChartEngine<M> {
    pub fn new(metrics: M, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = validate_engine_config(config)?;
        Ok(Self {
            metrics,
            config,
            data: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        self.config = validate_engine_config(config)?;
        Ok(())
    }

    /// Updates the output size; an unusable canvas is reported at layout time.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.config.canvas = canvas;
    }

    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        debug!(count = data.len(), "set chart data");
        self.data = data;
    }

    pub fn set_children(&mut self, children: Vec<ChartChild>) {
        debug!(count = children.len(), "set chart children");
        self.children = children;
    }

    pub fn push_child(&mut self, child: ChartChild) {
        self.children.push(child);
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn children(&self) -> &[ChartChild] {
        &self.children
    }

    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Runs a full layout pass. Diagnostics are attached to the result.
    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.run_layout()
    }

    /// Runs a full layout pass and delivers its diagnostics to `sink` once.
    pub fn layout_with_sink<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) -> ChartLayout {
        let layout = self.run_layout();
        sink.deliver(&layout.diagnostics);
        layout
    }

    /// Lays the chart out and hands the geometry to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<ChartLayout> {
        let layout = self.run_layout();
        renderer.render(&layout)?;
        Ok(layout)
    }

    fn run_layout(&self) -> ChartLayout {
        let config = &self.config;
        let mut diagnostics = Diagnostics::new();

        let canvas = check_canvas(config.canvas, &mut diagnostics);
        let data_is_valid = check_dataset(&self.data, &mut diagnostics);
        let fallback;
        let data: &[DataPoint] = if data_is_valid {
            &self.data
        } else {
            fallback = fallback_dataset(
                &config.primary_key,
                self.children
                    .iter()
                    .filter_map(ChartChild::as_series)
                    .map(|series| series.data_key.as_str()),
            );
            &fallback
        };

        let input = SpacingInput {
            children: &self.children,
            data,
            config,
            space: config.coordinate_space(canvas),
            use_fallback_ticks: !data_is_valid,
        };
        let spacing = compute_extra_spacing(&input, &self.metrics, &mut diagnostics);
        let margins = spacing.margins();

        let x_values = axis_tick_values(
            AxisOrientation::Horizontal,
            &spacing,
            &input,
            &mut diagnostics,
        );
        let y_values =
            axis_tick_values(AxisOrientation::Vertical, &spacing, &input, &mut diagnostics);
        let x_inset = margins.left.max(spacing.x.security_space / 2.0);
        let x_end_inset = margins.right.max(spacing.x.security_space / 2.0);
        let y_inset = margins.bottom.max(spacing.y.security_space / 2.0);
        let y_end_inset = margins.top.max(spacing.y.security_space / 2.0);
        let x_ticks = resolve_tick_positions(&x_values, x_inset, canvas.width - x_end_inset);
        let y_ticks = resolve_tick_positions(&y_values, canvas.height - y_inset, y_end_inset);
        trace!(
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            ?margins,
            "tick positions resolved"
        );

        let frame = AxisFrame { canvas, margins };
        let x_axis = spacing.x.declared.then(|| {
            frame.resolve_axis(
                AxisOrientation::Horizontal,
                &spacing.x,
                &y_ticks,
                &x_ticks,
                &mut diagnostics,
            )
        });
        let y_axis = spacing.y.declared.then(|| {
            frame.resolve_axis(
                AxisOrientation::Vertical,
                &spacing.y,
                &x_ticks,
                &y_ticks,
                &mut diagnostics,
            )
        });

        let category_orientation = config.bar_orientation.category_axis();
        let (category_ticks, value_ticks, value_axis_start) = match category_orientation {
            AxisOrientation::Horizontal => (&x_ticks, &y_ticks, canvas.height - y_inset),
            AxisOrientation::Vertical => (&y_ticks, &x_ticks, x_inset),
        };
        check_bar_groups_fit(
            &spacing.bars,
            config,
            frame.span(category_orientation),
            category_ticks.len(),
            &mut diagnostics,
        );

        let context = SeriesContext {
            data,
            config,
            canvas,
            category_ticks,
            value_ticks,
            value_axis_start,
            bars: &spacing.bars,
        };
        let mut series = Vec::new();
        for spec in self.children.iter().filter_map(ChartChild::as_series) {
            if data_is_valid && !check_series_key(spec, data, &mut diagnostics) {
                continue;
            }
            series.push(build_series(spec, &context, &mut diagnostics));
        }

        let separators = self
            .children
            .iter()
            .filter_map(ChartChild::as_separator)
            .filter_map(|separator| {
                let ticks = match separator.axis {
                    AxisOrientation::Horizontal => &x_ticks,
                    AxisOrientation::Vertical => &y_ticks,
                };
                let pixel = map_value(ticks, &separator.value, PointLookup::Interpolated);
                if !pixel.is_finite() {
                    diagnostics.record(
                        Diagnostic::new(
                            DiagnosticCode::SeparatorOutOfRange,
                            format!(
                                "separator value `{}` is outside the {} axis ticks",
                                separator.value.to_label(),
                                axis_name(separator.axis)
                            ),
                        )
                        .with_target(axis_name(separator.axis)),
                    );
                    return None;
                }
                Some(SeparatorGeometry {
                    axis: separator.axis,
                    value: separator.value.clone(),
                    coordinates: frame.separator_line(separator.axis, pixel),
                })
            })
            .collect();

        debug!(
            series = series.len(),
            diagnostics = diagnostics.len(),
            "layout pass finished"
        );
        ChartLayout {
            canvas,
            margins,
            spacing,
            x_axis,
            y_axis,
            series,
            separators,
            diagnostics,
        }
    }
}

/// Tick values used for mapping on one axis. Declared axes are validated and
/// replaced by the fallback pair when unusable; hidden axes are derived
/// without validation.
fn axis_tick_values(
    orientation: AxisOrientation,
    spacing: &ChartSpacing,
    input: &SpacingInput<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let result = spacing.axis(orientation);
    if !result.declared {
        return derive_tick_values(None, orientation, input);
    }
    if check_ticks(axis_name(orientation), &result.tick_values, diagnostics) {
        result.tick_values.clone()
    } else {
        fallback_tick_values()
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisFrame {
    canvas: Canvas,
    margins: Margins,
}

impl AxisFrame {
    fn span(self, orientation: AxisOrientation) -> f64 {
        match orientation {
            AxisOrientation::Horizontal => {
                self.canvas.width - self.margins.left - self.margins.right
            }
            AxisOrientation::Vertical => {
                self.canvas.height - self.margins.top - self.margins.bottom
            }
        }
    }

    fn resolve_axis(
        self,
        orientation: AxisOrientation,
        spacing: &SpacingResult,
        perpendicular_ticks: &[TickPoint],
        ticks: &[TickPoint],
        diagnostics: &mut Diagnostics,
    ) -> AxisGeometry {
        let name = axis_name(orientation);
        let mut position = spacing.axis_position;
        let mut break_pixel = f64::NAN;
        if position == AxisPosition::Custom {
            break_pixel = map_number(
                perpendicular_ticks,
                spacing.break_axis_value,
                PointLookup::Interpolated,
            );
            if !break_pixel.is_finite() {
                diagnostics.record(
                    Diagnostic::new(
                        DiagnosticCode::BreakValueOutOfRange,
                        format!(
                            "break-axis value {} is outside the perpendicular ticks",
                            spacing.break_axis_value
                        ),
                    )
                    .with_target(name),
                );
                position = SpacingResult::absent(orientation).axis_position;
            }
        }

        let coordinates = resolve_axis_coordinates(&AxisCoordinateInput {
            orientation,
            position,
            canvas: self.canvas,
            margins: self.margins,
            break_pixel,
        });
        check_axis_length(name, orientation, coordinates, diagnostics);
        trace!(axis = name, ?position, ?coordinates, "axis resolved");

        AxisGeometry {
            orientation,
            position,
            coordinates,
            ticks: ticks.to_vec(),
            label_style: spacing.label_style,
        }
    }

    /// Line across the plot area at `pixel` of the `axis` direction.
    fn separator_line(self, axis: AxisOrientation, pixel: f64) -> AxisCoordinates {
        match axis {
            AxisOrientation::Horizontal => AxisCoordinates::new(
                pixel,
                self.margins.top,
                pixel,
                self.canvas.height - self.margins.bottom,
            ),
            AxisOrientation::Vertical => AxisCoordinates::new(
                self.margins.left,
                pixel,
                self.canvas.width - self.margins.right,
                pixel,
            ),
        }
    }
}
