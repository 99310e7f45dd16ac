use tracing::trace;

use crate::core::{
    BarOrientation, BarShape, Canvas, DataPoint, LinePathOptions, PointLookup, TickPoint,
    build_line_path, build_projection, build_stacked_bar_paths, grouped_bar_offset, map_number,
    map_value,
};

use super::validation::{check_bar_value, check_projection};
use super::{
    BarGeometry, BarSeriesGeometry, BarsFootprint, ChartEngineConfig, Diagnostic,
    DiagnosticCode, Diagnostics, LineSeriesGeometry, SeriesGeometry, SeriesKind, SeriesSpec,
};

/// Resolved axes a series is placed on.
pub(super) struct SeriesContext<'a> {
    pub data: &'a [DataPoint],
    pub config: &'a ChartEngineConfig,
    pub canvas: Canvas,
    pub category_ticks: &'a [TickPoint],
    pub value_ticks: &'a [TickPoint],
    /// Pixel where the value axis begins; bars fall back to it when zero is
    /// outside the value ticks.
    pub value_axis_start: f64,
    pub bars: &'a BarsFootprint,
}

impl SeriesContext<'_> {
    fn orientation(&self) -> BarOrientation {
        self.config.bar_orientation
    }

    fn category_pixel(&self, point: &DataPoint) -> Option<f64> {
        let category = point.get(&self.config.primary_key)?;
        let pixel = map_value(self.category_ticks, category, PointLookup::Exact);
        pixel.is_finite().then_some(pixel)
    }
}

pub(super) fn build_series(
    series: &SeriesSpec,
    context: &SeriesContext<'_>,
    diagnostics: &mut Diagnostics,
) -> SeriesGeometry {
    match series.kind {
        SeriesKind::Line => SeriesGeometry::Line(build_line_series(series, context, diagnostics)),
        SeriesKind::Bar => SeriesGeometry::Bar(build_bar_series(series, context, diagnostics)),
    }
}

fn build_line_series(
    series: &SeriesSpec,
    context: &SeriesContext<'_>,
    diagnostics: &mut Diagnostics,
) -> LineSeriesGeometry {
    let mut points = Vec::with_capacity(context.data.len());
    let mut unmapped = 0usize;
    for point in context.data {
        let value_pixel = point
            .get(&series.data_key)
            .map(|value| map_value(context.value_ticks, value, PointLookup::Interpolated))
            .filter(|pixel| pixel.is_finite());
        match (context.category_pixel(point), value_pixel) {
            (Some(category_px), Some(value_px)) => {
                points.push(context.orientation().compose(category_px, value_px));
            }
            _ => unmapped += 1,
        }
    }
    report_unmapped(series, unmapped, diagnostics);

    let options = LinePathOptions {
        curved: series.curved,
        extend_to_bottom: series.extend_to_bottom.then_some(context.canvas.height),
    };
    let path = build_line_path(&points, options);
    let projection = series.projection.map(|spec| {
        let geometry = build_projection(&points, &spec, context.canvas.height);
        check_projection(&series.data_key, &geometry, context.canvas, diagnostics);
        geometry
    });

    trace!(
        data_key = series.data_key.as_str(),
        points = points.len(),
        "line series built"
    );
    LineSeriesGeometry {
        data_key: series.data_key.clone(),
        points,
        path,
        projection,
    }
}

fn build_bar_series(
    series: &SeriesSpec,
    context: &SeriesContext<'_>,
    diagnostics: &mut Diagnostics,
) -> BarSeriesGeometry {
    let config = context.config;
    let orientation = context.orientation();
    let offset = grouped_bar_offset(
        context.bars.bar_count(),
        context.bars.rank(series.order),
        series.width,
        config.gap_between_bars,
        orientation,
    );
    let zero = map_number(context.value_ticks, 0.0, PointLookup::Interpolated);
    let baseline = if zero.is_finite() {
        zero
    } else {
        context.value_axis_start
    };

    let mut bars = Vec::with_capacity(context.data.len());
    let mut unmapped = 0usize;
    for point in context.data {
        let category = point
            .get(&config.primary_key)
            .map(|value| value.to_label())
            .unwrap_or_default();
        let value = check_bar_value(
            &series.data_key,
            &category,
            point.get(&series.data_key),
            diagnostics,
        );
        let value_pixel = map_number(context.value_ticks, value, PointLookup::Interpolated);
        let Some(category_pixel) = context.category_pixel(point) else {
            unmapped += 1;
            continue;
        };
        if !value_pixel.is_finite() {
            unmapped += 1;
            continue;
        }

        let shape = BarShape {
            orientation,
            cross_center: category_pixel + offset,
            width: series.width,
            start: baseline,
            end: value_pixel,
        };
        bars.push(BarGeometry {
            category,
            value,
            cross_center: shape.cross_center,
            segments: build_stacked_bar_paths(
                &shape,
                &series.coverage,
                config.gap_between_segments,
                series.rounding,
            ),
        });
    }
    report_unmapped(series, unmapped, diagnostics);

    trace!(
        data_key = series.data_key.as_str(),
        bars = bars.len(),
        offset,
        "bar series built"
    );
    BarSeriesGeometry {
        data_key: series.data_key.clone(),
        order: series.order,
        width: series.width,
        bars,
    }
}

fn report_unmapped(series: &SeriesSpec, unmapped: usize, diagnostics: &mut Diagnostics) {
    if unmapped == 0 {
        return;
    }
    diagnostics.record(
        Diagnostic::new(
            DiagnosticCode::UnmappedValue,
            format!("{unmapped} point(s) do not match any tick and were skipped"),
        )
        .with_target(series.data_key.clone()),
    );
}

/// Bars-only check that every group fits in its category band.
pub(super) fn check_bar_groups_fit(
    bars: &BarsFootprint,
    config: &ChartEngineConfig,
    category_axis_length: f64,
    category_count: usize,
    diagnostics: &mut Diagnostics,
) {
    let count = bars.bar_count();
    if count == 0 {
        return;
    }
    let required = bars.total() + config.gap_between_bars * (count - 1) as f64;
    let available = category_axis_length / category_count.max(1) as f64;
    super::validation::check_bar_distribution(required, available, diagnostics);
}
