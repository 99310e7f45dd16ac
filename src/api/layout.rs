use serde::{Deserialize, Serialize};

use crate::core::{
    AxisCoordinates, AxisOrientation, AxisPosition, BarSegmentGeometry, Canvas, DataValue,
    Margins, PathPoint, ProjectionGeometry, TickPoint,
};
use crate::error::{ChartError, ChartResult};

use super::{AxisLabelStyle, ChartSpacing, Diagnostics};

/// Resolved line and ticks of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub orientation: AxisOrientation,
    pub position: AxisPosition,
    pub coordinates: AxisCoordinates,
    pub ticks: Vec<TickPoint>,
    #[serde(default)]
    pub label_style: AxisLabelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesGeometry {
    pub data_key: String,
    pub points: Vec<PathPoint>,
    pub path: String,
    #[serde(default)]
    pub projection: Option<ProjectionGeometry>,
}

/// One bar of a series at one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub category: String,
    pub value: f64,
    pub cross_center: f64,
    pub segments: Vec<BarSegmentGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeriesGeometry {
    pub data_key: String,
    pub order: usize,
    pub width: f64,
    pub bars: Vec<BarGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesGeometry {
    Line(LineSeriesGeometry),
    Bar(BarSeriesGeometry),
}

impl SeriesGeometry {
    #[must_use]
    pub fn data_key(&self) -> &str {
        match self {
            Self::Line(line) => &line.data_key,
            Self::Bar(bar) => &bar.data_key,
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LineSeriesGeometry> {
        match self {
            Self::Line(line) => Some(line),
            Self::Bar(_) => None,
        }
    }

    #[must_use]
    pub fn as_bar(&self) -> Option<&BarSeriesGeometry> {
        match self {
            Self::Bar(bar) => Some(bar),
            Self::Line(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorGeometry {
    pub axis: AxisOrientation,
    pub value: DataValue,
    pub coordinates: AxisCoordinates,
}

/// Complete geometry of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Canvas actually laid out (the fallback canvas when the configured
    /// one was unusable).
    pub canvas: Canvas,
    pub margins: Margins,
    pub spacing: ChartSpacing,
    pub x_axis: Option<AxisGeometry>,
    pub y_axis: Option<AxisGeometry>,
    pub series: Vec<SeriesGeometry>,
    pub separators: Vec<SeparatorGeometry>,
    pub diagnostics: Diagnostics,
}

impl ChartLayout {
    #[must_use]
    pub fn axis(&self, orientation: AxisOrientation) -> Option<&AxisGeometry> {
        match orientation {
            AxisOrientation::Horizontal => self.x_axis.as_ref(),
            AxisOrientation::Vertical => self.y_axis.as_ref(),
        }
    }

    #[must_use]
    pub fn series_by_key(&self, data_key: &str) -> Option<&SeriesGeometry> {
        self.series
            .iter()
            .find(|series| series.data_key() == data_key)
    }

    /// Checks that every emitted coordinate is finite.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        for axis in self.x_axis.iter().chain(&self.y_axis) {
            if !axis.coordinates.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{:?} axis coordinates must be finite",
                    axis.orientation
                )));
            }
            if axis.ticks.iter().any(|tick| !tick.position.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "{:?} axis tick positions must be finite",
                    axis.orientation
                )));
            }
        }

        for series in &self.series {
            let finite = match series {
                SeriesGeometry::Line(line) => line.points.iter().all(|point| point.is_finite()),
                SeriesGeometry::Bar(bar) => bar.bars.iter().all(|bar| {
                    bar.cross_center.is_finite()
                        && bar
                            .segments
                            .iter()
                            .all(|s| s.segment.start.is_finite() && s.segment.end.is_finite())
                }),
            };
            if !finite {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` geometry must be finite",
                    series.data_key()
                )));
            }
        }

        for separator in &self.separators {
            if !separator.coordinates.is_finite() {
                return Err(ChartError::InvalidData(
                    "separator coordinates must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }
}
