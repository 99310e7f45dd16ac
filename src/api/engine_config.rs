use serde::{Deserialize, Serialize};

use crate::core::{BarOrientation, Canvas, ChartKind, CoordinateSpace, ViewBox};

/// Public engine configuration.
///
/// Serializable so chart documents can carry their own setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub canvas: Canvas,
    #[serde(default)]
    pub view_box: Option<ViewBox>,
    #[serde(default)]
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub bar_orientation: BarOrientation,
    /// Category column of every data point.
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    #[serde(default)]
    pub font_size_px: f64,
    /// Distance between the X axis line and its labels.
    #[serde(default)]
    pub x_label_offset_px: f64,
    /// Distance between the Y axis line and its labels.
    #[serde(default)]
    pub y_label_offset_px: f64,
    /// Spacing between bars of one group.
    #[serde(default)]
    pub gap_between_bars: f64,
    /// Spacing between stacked segments of one bar.
    #[serde(default)]
    pub gap_between_segments: f64,
    /// Target count for derived value-axis ticks.
    #[serde(default = "default_target_tick_count")]
    pub target_tick_count: usize,
}

impl ChartEngineConfig {
    /// Creates a line-chart config with default text and spacing settings.
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            view_box: None,
            chart_kind: ChartKind::default(),
            bar_orientation: BarOrientation::default(),
            primary_key: default_primary_key(),
            font_size_px: 0.0,
            x_label_offset_px: 0.0,
            y_label_offset_px: 0.0,
            gap_between_bars: 0.0,
            gap_between_segments: 0.0,
            target_tick_count: default_target_tick_count(),
        }
    }

    #[must_use]
    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    #[must_use]
    pub fn with_bar_orientation(mut self, orientation: BarOrientation) -> Self {
        self.bar_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    #[must_use]
    pub fn with_primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = key.into();
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_label_offsets(mut self, x_label_offset_px: f64, y_label_offset_px: f64) -> Self {
        self.x_label_offset_px = x_label_offset_px;
        self.y_label_offset_px = y_label_offset_px;
        self
    }

    #[must_use]
    pub fn with_gap_between_bars(mut self, gap: f64) -> Self {
        self.gap_between_bars = gap;
        self
    }

    #[must_use]
    pub fn with_gap_between_segments(mut self, gap: f64) -> Self {
        self.gap_between_segments = gap;
        self
    }

    #[must_use]
    pub fn with_target_tick_count(mut self, count: usize) -> Self {
        self.target_tick_count = count;
        self
    }

    /// Coordinate space for text measurement on `canvas`.
    #[must_use]
    pub fn coordinate_space(&self, canvas: Canvas) -> CoordinateSpace {
        let view_box = self.view_box.unwrap_or_else(|| ViewBox::for_canvas(canvas));
        CoordinateSpace::new(view_box, canvas.width, canvas.height)
    }
}

fn default_primary_key() -> String {
    "x".to_owned()
}

fn default_target_tick_count() -> usize {
    5
}
