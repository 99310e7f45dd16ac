use serde::{Deserialize, Serialize};

use crate::core::{
    AxisOrientation, AxisPosition, BarRounding, DataValue, ProjectionSpec, TickSpec,
};

/// One node of the declarative chart tree.
///
/// Nodes are classified by this tag alone; `Opaque` content is carried
/// through untouched and ignored by layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartChild {
    Series(SeriesSpec),
    XAxis(AxisSpec),
    YAxis(AxisSpec),
    Separator(SeparatorSpec),
    Opaque {
        #[serde(default)]
        name: String,
    },
}

impl ChartChild {
    #[must_use]
    pub fn opaque(name: impl Into<String>) -> Self {
        Self::Opaque { name: name.into() }
    }

    #[must_use]
    pub fn as_series(&self) -> Option<&SeriesSpec> {
        match self {
            Self::Series(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_axis(&self, orientation: AxisOrientation) -> Option<&AxisSpec> {
        match (self, orientation) {
            (Self::XAxis(axis), AxisOrientation::Horizontal)
            | (Self::YAxis(axis), AxisOrientation::Vertical) => Some(axis),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_separator(&self) -> Option<&SeparatorSpec> {
        match self {
            Self::Separator(separator) => Some(separator),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Centered under horizontal axes, pointing away from vertical ones.
    #[must_use]
    pub fn for_axis(orientation: AxisOrientation, position: AxisPosition) -> Self {
        match (orientation, position) {
            (AxisOrientation::Horizontal, _) => Self::Middle,
            (AxisOrientation::Vertical, AxisPosition::Right) => Self::Start,
            (AxisOrientation::Vertical, _) => Self::End,
        }
    }

    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Tick label styling relevant to layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Overrides the engine font size.
    #[serde(default)]
    pub font_size_px: Option<f64>,
    /// Defaults to `TextAnchor::for_axis`.
    #[serde(default)]
    pub anchor: Option<TextAnchor>,
    /// Overrides the engine label offset.
    #[serde(default)]
    pub offset_px: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub position: AxisPosition,
    /// Explicit tick values; derived from data when absent.
    #[serde(default)]
    pub tick_spec: Option<TickSpec>,
    #[serde(default)]
    pub text_style: TextStyle,
    /// Crossing value for `CUSTOM` placement when the ticks are a custom list.
    #[serde(default)]
    pub break_axis_value: Option<f64>,
}

impl AxisSpec {
    #[must_use]
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            tick_spec: None,
            text_style: TextStyle::default(),
            break_axis_value: None,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, tick_spec: TickSpec) -> Self {
        self.tick_spec = Some(tick_spec);
        self
    }

    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    #[must_use]
    pub fn with_break_axis_value(mut self, value: f64) -> Self {
        self.break_axis_value = Some(value);
        self
    }

    /// Numeric-range break value first, then the custom side-channel, then 0.
    #[must_use]
    pub fn resolved_break_axis_value(&self) -> f64 {
        self.tick_spec
            .as_ref()
            .and_then(TickSpec::break_axis_value)
            .or(self.break_axis_value)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
}

/// A bar or line series bound to one data column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub kind: SeriesKind,
    pub data_key: String,
    /// Bar thickness across the bar axis.
    #[serde(default)]
    pub width: f64,
    /// 1-indexed slot inside a bar group.
    #[serde(default = "default_order")]
    pub order: usize,
    /// Stacked segment coverages (percent of bar length).
    #[serde(default)]
    pub coverage: Vec<f64>,
    #[serde(default)]
    pub rounding: BarRounding,
    #[serde(default)]
    pub curved: bool,
    #[serde(default)]
    pub extend_to_bottom: bool,
    #[serde(default)]
    pub projection: Option<ProjectionSpec>,
}

impl SeriesSpec {
    #[must_use]
    pub fn line(data_key: impl Into<String>) -> Self {
        Self {
            kind: SeriesKind::Line,
            data_key: data_key.into(),
            width: 0.0,
            order: default_order(),
            coverage: Vec::new(),
            rounding: BarRounding::none(),
            curved: false,
            extend_to_bottom: false,
            projection: None,
        }
    }

    #[must_use]
    pub fn bar(data_key: impl Into<String>, width: f64, order: usize) -> Self {
        Self {
            kind: SeriesKind::Bar,
            width,
            order,
            ..Self::line(data_key)
        }
    }

    #[must_use]
    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    #[must_use]
    pub fn with_extend_to_bottom(mut self, extend: bool) -> Self {
        self.extend_to_bottom = extend;
        self
    }

    #[must_use]
    pub fn with_projection(mut self, projection: ProjectionSpec) -> Self {
        self.projection = Some(projection);
        self
    }

    #[must_use]
    pub fn with_coverage(mut self, coverage: Vec<f64>) -> Self {
        self.coverage = coverage;
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: BarRounding) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn is_bar(&self) -> bool {
        self.kind == SeriesKind::Bar
    }
}

fn default_order() -> usize {
    1
}

/// Reference line across the plot at `value` of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorSpec {
    pub axis: AxisOrientation,
    pub value: DataValue,
}

impl SeparatorSpec {
    #[must_use]
    pub fn new(axis: AxisOrientation, value: impl Into<DataValue>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }
}
