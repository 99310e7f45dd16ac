use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AxisOrientation, AxisPosition, CoordinateSpace, DataPoint, DataValue, Margins,
    expand_tick_values, nice_tick_values,
};

use super::validation::fallback_tick_values;
use super::{
    AxisSpec, ChartChild, ChartEngineConfig, Diagnostic, DiagnosticCode, Diagnostics,
    TextAnchor, TextExtent, TextMetrics, measure_labels,
};

/// Tick label styling an axis was measured with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLabelStyle {
    pub font_size_px: f64,
    /// Gap between the axis line and its labels.
    pub offset_px: f64,
    pub anchor: TextAnchor,
}

/// Space one axis reserves, plus the tick values it resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingResult {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Clearance the axis keeps at both ends so bars and labels do not
    /// collide with the perpendicular axis.
    pub security_space: f64,
    pub axis_position: AxisPosition,
    pub break_axis_value: f64,
    pub tick_values: Vec<String>,
    pub text_extent: TextExtent,
    #[serde(default)]
    pub label_style: AxisLabelStyle,
    /// `false` when no axis of this orientation was declared.
    pub declared: bool,
}

impl SpacingResult {
    /// Result for an orientation without an axis child: no margins, no ticks.
    #[must_use]
    pub fn absent(orientation: AxisOrientation) -> Self {
        Self {
            top: 0.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
            security_space: 0.0,
            axis_position: match orientation {
                AxisOrientation::Horizontal => AxisPosition::Bottom,
                AxisOrientation::Vertical => AxisPosition::Left,
            },
            break_axis_value: 0.0,
            tick_values: Vec::new(),
            text_extent: TextExtent::default(),
            label_style: AxisLabelStyle::default(),
            declared: false,
        }
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        Margins::new(self.top, self.bottom, self.left, self.right)
    }
}

/// Declared bar widths keyed by group order; the first declaration of an
/// order wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarsFootprint {
    widths: IndexMap<usize, f64>,
}

impl BarsFootprint {
    #[must_use]
    pub fn from_children(children: &[ChartChild]) -> Self {
        children
            .iter()
            .filter_map(ChartChild::as_series)
            .filter(|series| series.is_bar())
            .fold(Self::default(), |mut footprint, series| {
                let width = if series.width.is_finite() {
                    series.width.max(0.0)
                } else {
                    0.0
                };
                footprint.widths.entry(series.order).or_insert(width);
                footprint
            })
    }

    /// Sum of all distinct bar widths of one group.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.widths.values().sum()
    }

    /// Number of distinct bar slots per group.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.widths.len()
    }

    /// 1-indexed rank of `order` among the declared orders; `0` if unknown.
    #[must_use]
    pub fn rank(&self, order: usize) -> usize {
        let mut orders: Vec<usize> = self.widths.keys().copied().collect();
        orders.sort_unstable();
        orders
            .iter()
            .position(|candidate| *candidate == order)
            .map_or(0, |index| index + 1)
    }
}

/// Margins and tick values of both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpacing {
    pub x: SpacingResult,
    pub y: SpacingResult,
    pub bars: BarsFootprint,
}

impl ChartSpacing {
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.x.margins().max(self.y.margins())
    }

    #[must_use]
    pub fn axis(&self, orientation: AxisOrientation) -> &SpacingResult {
        match orientation {
            AxisOrientation::Horizontal => &self.x,
            AxisOrientation::Vertical => &self.y,
        }
    }
}

pub struct SpacingInput<'a> {
    pub children: &'a [ChartChild],
    pub data: &'a [DataPoint],
    pub config: &'a ChartEngineConfig,
    pub space: CoordinateSpace,
    /// Replaces every derived tick list with the two-value fallback.
    pub use_fallback_ticks: bool,
}

/// Last declared axis of `orientation`; earlier ones are discarded.
#[must_use]
pub fn declared_axis(children: &[ChartChild], orientation: AxisOrientation) -> Option<&AxisSpec> {
    children
        .iter()
        .filter_map(|child| child.as_axis(orientation))
        .fold(None, |previous, axis| {
            if previous.is_some() {
                warn!(?orientation, "multiple axes declared, keeping the last one");
            }
            Some(axis)
        })
}

/// Resolves the tick values of one axis.
///
/// Explicit specs are expanded; otherwise the category axis takes one value
/// per data point from the primary key and the value axis takes nice
/// numbers over every non-key numeric cell.
#[must_use]
pub fn derive_tick_values(
    axis: Option<&AxisSpec>,
    orientation: AxisOrientation,
    input: &SpacingInput<'_>,
) -> Vec<String> {
    if input.use_fallback_ticks {
        return fallback_tick_values();
    }
    if let Some(spec) = axis.and_then(|axis| axis.tick_spec.as_ref()) {
        return expand_tick_values(spec, input.config.chart_kind);
    }

    let primary_key = input.config.primary_key.as_str();
    if orientation == input.config.bar_orientation.category_axis() {
        return input
            .data
            .iter()
            .filter_map(|point| point.get(primary_key))
            .map(DataValue::to_label)
            .collect();
    }

    let (min, max) = input
        .data
        .iter()
        .flat_map(DataPoint::iter)
        .filter(|(key, _)| *key != primary_key)
        .filter_map(|(_, value)| value.as_f64())
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if min > max {
        return Vec::new();
    }
    nice_tick_values(min, max, input.config.target_tick_count)
}

/// Reconciles the space every declared axis and bar series wants.
pub fn compute_extra_spacing<M: TextMetrics + ?Sized>(
    input: &SpacingInput<'_>,
    metrics: &M,
    diagnostics: &mut Diagnostics,
) -> ChartSpacing {
    let bars = BarsFootprint::from_children(input.children);
    let resolve = |orientation: AxisOrientation, diagnostics: &mut Diagnostics| {
        declared_axis(input.children, orientation).map_or_else(
            || SpacingResult::absent(orientation),
            |axis| axis_spacing(axis, orientation, input, metrics, &bars, diagnostics),
        )
    };
    let x = resolve(AxisOrientation::Horizontal, diagnostics);
    let y = resolve(AxisOrientation::Vertical, diagnostics);

    debug!(
        bars_footprint = bars.total(),
        bar_count = bars.bar_count(),
        x_security = x.security_space,
        y_security = y.security_space,
        "extra spacing resolved"
    );
    ChartSpacing { x, y, bars }
}

fn axis_spacing<M: TextMetrics + ?Sized>(
    axis: &AxisSpec,
    orientation: AxisOrientation,
    input: &SpacingInput<'_>,
    metrics: &M,
    bars: &BarsFootprint,
    diagnostics: &mut Diagnostics,
) -> SpacingResult {
    let config = input.config;
    let tick_values = derive_tick_values(Some(axis), orientation, input);
    let font_size_px = axis.text_style.font_size_px.unwrap_or(config.font_size_px);
    let text_extent = match measure_labels(metrics, &tick_values, font_size_px, &input.space) {
        Ok(extent) => extent,
        Err(err) => {
            diagnostics.record(
                Diagnostic::new(DiagnosticCode::TextMeasurementFailed, err.to_string())
                    .with_target(axis_name(orientation)),
            );
            TextExtent::default()
        }
    };
    let bars_footprint = if orientation == config.bar_orientation.category_axis() {
        bars.total()
    } else {
        0.0
    };

    let position = axis.position.normalized_for(orientation);
    let default_offset = match orientation {
        AxisOrientation::Horizontal => config.x_label_offset_px,
        AxisOrientation::Vertical => config.y_label_offset_px,
    };
    let label_style = AxisLabelStyle {
        font_size_px,
        offset_px: axis.text_style.offset_px.unwrap_or(default_offset),
        anchor: axis
            .text_style
            .anchor
            .unwrap_or_else(|| TextAnchor::for_axis(orientation, position)),
    };
    let mut result = SpacingResult {
        axis_position: position,
        break_axis_value: axis.resolved_break_axis_value(),
        tick_values,
        text_extent,
        label_style,
        declared: true,
        ..SpacingResult::absent(orientation)
    };

    match orientation {
        AxisOrientation::Horizontal => {
            let reserved = text_extent.height + label_style.offset_px;
            match position {
                AxisPosition::Bottom => result.bottom = reserved,
                AxisPosition::Top => result.top = reserved,
                _ => {}
            }
            result.security_space = bars_footprint.max(text_extent.width);
        }
        AxisOrientation::Vertical => {
            let reserved = text_extent.width + label_style.offset_px;
            match position {
                AxisPosition::Left => result.left = reserved,
                AxisPosition::Right => result.right = reserved,
                _ => {}
            }
            result.security_space = bars_footprint.max(text_extent.height);
        }
    }

    result
}

#[must_use]
pub(super) fn axis_name(orientation: AxisOrientation) -> &'static str {
    match orientation {
        AxisOrientation::Horizontal => "x",
        AxisOrientation::Vertical => "y",
    }
}
