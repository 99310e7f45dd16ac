use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_number;

/// Output surface size in user units.
///
/// Stored as `f64` so non-positive or non-finite sizes can reach validation
/// instead of being rejected by the type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// SVG `viewBox` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self::new(0.0, 0.0, canvas.width, canvas.height)
    }

    #[must_use]
    pub fn to_attribute(self) -> String {
        format!(
            "{} {} {} {}",
            format_number(self.min_x),
            format_number(self.min_y),
            format_number(self.width),
            format_number(self.height)
        )
    }
}

/// Coordinate-space descriptor handed to text measurement: the user-unit
/// `viewBox` plus the output size it is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpace {
    pub view_box: ViewBox,
    pub width: f64,
    pub height: f64,
}

impl CoordinateSpace {
    #[must_use]
    pub fn new(view_box: ViewBox, width: f64, height: f64) -> Self {
        Self {
            view_box,
            width,
            height,
        }
    }

    #[must_use]
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self::new(ViewBox::for_canvas(canvas), canvas.width, canvas.height)
    }

    /// User units per output pixel along x and y.
    ///
    /// Degenerate spaces map one-to-one.
    #[must_use]
    pub fn units_per_pixel(self) -> (f64, f64) {
        let ratio = |units: f64, pixels: f64| {
            if units.is_finite() && pixels.is_finite() && units > 0.0 && pixels > 0.0 {
                units / pixels
            } else {
                1.0
            }
        };
        (
            ratio(self.view_box.width, self.width),
            ratio(self.view_box.height, self.height),
        )
    }
}

/// Primitive cell value of a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Label used for tick matching; numbers render the way tick values do.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of the chart dataset: ordered column name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint {
    values: IndexMap<String, DataValue>,
}

impl DataPoint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataValue>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Placement of an axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisPosition {
    Top,
    Bottom,
    Left,
    Right,
    /// Canvas midline.
    Center,
    /// Crosses the perpendicular axis at the break-axis value.
    Custom,
}

impl AxisPosition {
    /// Maps positions that make no sense for `orientation` onto its default edge.
    #[must_use]
    pub fn normalized_for(self, orientation: AxisOrientation) -> Self {
        match (orientation, self) {
            (AxisOrientation::Horizontal, Self::Left | Self::Right) => Self::Bottom,
            (AxisOrientation::Vertical, Self::Top | Self::Bottom) => Self::Left,
            (_, position) => position,
        }
    }
}

/// Direction an axis line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Chart family; drives the tick-expander fallback for oversized steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    #[default]
    Line,
}

/// Direction bars grow in. Vertical bars are grouped along the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl BarOrientation {
    /// Orientation of the axis that carries categories.
    #[must_use]
    pub fn category_axis(self) -> AxisOrientation {
        match self {
            Self::Vertical => AxisOrientation::Horizontal,
            Self::Horizontal => AxisOrientation::Vertical,
        }
    }

    /// Builds an `(x, y)` pixel pair from category- and value-axis coordinates.
    #[must_use]
    pub fn compose(self, category_px: f64, value_px: f64) -> PathPoint {
        match self {
            Self::Vertical => PathPoint::new(category_px, value_px),
            Self::Horizontal => PathPoint::new(value_px, category_px),
        }
    }
}

/// Reserved space on each canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Per-edge maximum of two margin sets.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
            right: self.right.max(other.right),
        }
    }
}

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
