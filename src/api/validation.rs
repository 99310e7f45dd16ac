use crate::core::{
    AxisCoordinates, AxisOrientation, Canvas, DataPoint, DataValue, MAX_EXPANDED_TICKS,
    ProjectionGeometry,
};
use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, Diagnostic, DiagnosticCode, Diagnostics, SeriesSpec};

/// Substituted when the configured canvas cannot be laid out.
pub const FALLBACK_CANVAS: Canvas = Canvas {
    width: 300.0,
    height: 150.0,
};

/// Substituted for an axis whose ticks cannot be laid out.
pub const FALLBACK_TICK_VALUES: [&str; 2] = ["0", "1"];

#[must_use]
pub fn fallback_tick_values() -> Vec<String> {
    FALLBACK_TICK_VALUES
        .iter()
        .map(|value| (*value).to_owned())
        .collect()
}

/// Two-point dataset keyed by `0` and `1`, with every series valued `0`
/// then `1`, so it matches the fallback ticks on both axes.
#[must_use]
pub fn fallback_dataset<'a>(
    primary_key: &str,
    series_keys: impl IntoIterator<Item = &'a str> + Clone,
) -> Vec<DataPoint> {
    (0..2)
        .map(|index| {
            let value = f64::from(index);
            series_keys
                .clone()
                .into_iter()
                .fold(DataPoint::new().with(primary_key, value), |point, key| {
                    point.with(key, value)
                })
        })
        .collect()
}

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    for (name, value) in [
        ("font_size_px", config.font_size_px),
        ("x_label_offset_px", config.x_label_offset_px),
        ("y_label_offset_px", config.y_label_offset_px),
        ("gap_between_bars", config.gap_between_bars),
        ("gap_between_segments", config.gap_between_segments),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    if !(2..=MAX_EXPANDED_TICKS).contains(&config.target_tick_count) {
        return Err(ChartError::InvalidConfig(format!(
            "`target_tick_count` must be within [2, {MAX_EXPANDED_TICKS}]"
        )));
    }

    if config.primary_key.trim().is_empty() {
        return Err(ChartError::InvalidConfig(
            "`primary_key` must not be empty".to_owned(),
        ));
    }

    if let Some(view_box) = config.view_box {
        for (name, value) in [
            ("min_x", view_box.min_x),
            ("min_y", view_box.min_y),
            ("width", view_box.width),
            ("height", view_box.height),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "view box `{name}` must be finite"
                )));
            }
        }
    }

    Ok(config)
}

pub(super) fn check_canvas(canvas: Canvas, diagnostics: &mut Diagnostics) -> Canvas {
    if canvas.is_valid() {
        return canvas;
    }
    diagnostics.record(Diagnostic::new(
        DiagnosticCode::InvalidCanvas,
        format!(
            "canvas must have positive size, got {}x{}",
            canvas.width, canvas.height
        ),
    ));
    FALLBACK_CANVAS
}

/// Returns `true` when the dataset can be laid out as-is.
pub(super) fn check_dataset(data: &[DataPoint], diagnostics: &mut Diagnostics) -> bool {
    match data.len() {
        0 => {
            diagnostics.record(Diagnostic::new(
                DiagnosticCode::NoData,
                "dataset is empty",
            ));
            false
        }
        1 => {
            diagnostics.record(Diagnostic::new(
                DiagnosticCode::SingleDataPoint,
                "dataset needs at least two points",
            ));
            false
        }
        _ => true,
    }
}

/// Returns `true` when at least one point carries the series key.
pub(super) fn check_series_key(
    series: &SeriesSpec,
    data: &[DataPoint],
    diagnostics: &mut Diagnostics,
) -> bool {
    if data.iter().any(|point| point.contains_key(&series.data_key)) {
        return true;
    }
    diagnostics.record(
        Diagnostic::new(
            DiagnosticCode::MissingDataKey,
            format!("no data point has key `{}`", series.data_key),
        )
        .with_target(series.data_key.clone()),
    );
    false
}

/// Returns a usable bar length value; bad values become `0`.
pub(super) fn check_bar_value(
    series_key: &str,
    category: &str,
    value: Option<&DataValue>,
    diagnostics: &mut Diagnostics,
) -> f64 {
    match value.and_then(DataValue::as_f64) {
        Some(number) if number.is_finite() && number >= 0.0 => number,
        Some(number) if number.is_finite() => {
            diagnostics.record(
                Diagnostic::new(
                    DiagnosticCode::NegativeValue,
                    format!("bar value {number} at `{category}` is negative"),
                )
                .with_target(series_key),
            );
            0.0
        }
        _ => {
            diagnostics.record(
                Diagnostic::new(
                    DiagnosticCode::NonNumericValue,
                    format!("bar value at `{category}` is not a finite number"),
                )
                .with_target(series_key),
            );
            0.0
        }
    }
}

/// Returns `true` when the tick list can carry an axis.
pub(super) fn check_ticks(axis_name: &str, values: &[String], diagnostics: &mut Diagnostics) -> bool {
    if values.len() < 2 {
        diagnostics.record(
            Diagnostic::new(
                DiagnosticCode::InsufficientTicks,
                format!("axis resolved {} tick(s), needs at least 2", values.len()),
            )
            .with_target(axis_name),
        );
        return false;
    }
    if values.iter().all(|value| *value == values[0]) {
        diagnostics.record(
            Diagnostic::new(
                DiagnosticCode::DuplicateTicks,
                format!("all ticks share the value `{}`", values[0]),
            )
            .with_target(axis_name),
        );
        return false;
    }
    true
}

pub(super) fn check_axis_length(
    axis_name: &str,
    orientation: AxisOrientation,
    coordinates: AxisCoordinates,
    diagnostics: &mut Diagnostics,
) {
    if coordinates.is_degenerate(orientation) {
        diagnostics.record(
            Diagnostic::new(
                DiagnosticCode::DegenerateAxis,
                format!(
                    "axis has no length: ({}, {}) -> ({}, {})",
                    coordinates.x1, coordinates.y1, coordinates.x2, coordinates.y2
                ),
            )
            .with_target(axis_name),
        );
    }
}

pub(super) fn check_bar_distribution(
    required: f64,
    available: f64,
    diagnostics: &mut Diagnostics,
) {
    if required > available {
        diagnostics.record(Diagnostic::new(
            DiagnosticCode::BarDistribution,
            format!("bar groups need {required}px but only {available}px are available"),
        ));
    }
}

pub(super) fn check_projection(
    series_key: &str,
    projection: &ProjectionGeometry,
    canvas: Canvas,
    diagnostics: &mut Diagnostics,
) {
    let inverted = projection
        .upper_points
        .iter()
        .zip(&projection.lower_points)
        .any(|(upper, lower)| upper.y >= lower.y);
    if inverted {
        diagnostics.record(
            Diagnostic::new(
                DiagnosticCode::ProjectionInverted,
                "upper projection bound is not above the lower bound",
            )
            .with_target(series_key),
        );
    }

    let out_of_range = projection
        .upper_points
        .iter()
        .chain(&projection.lower_points)
        .any(|point| {
            !(0.0..=canvas.width).contains(&point.x) || !(0.0..=canvas.height).contains(&point.y)
        });
    if out_of_range {
        diagnostics.record(
            Diagnostic::new(
                DiagnosticCode::ProjectionOutOfRange,
                "projection bound leaves the canvas",
            )
            .with_target(series_key),
        );
    }
}
