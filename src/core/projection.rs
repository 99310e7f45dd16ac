use serde::{Deserialize, Serialize};

use crate::core::line_series::{LinePathOptions, build_line_path};
use crate::core::types::PathPoint;

/// Signed percentage offsets applied to a point's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionOffset {
    #[serde(default)]
    pub x_projection: f64,
    #[serde(default)]
    pub y_projection: f64,
}

impl ProjectionOffset {
    #[must_use]
    pub fn new(x_projection: f64, y_projection: f64) -> Self {
        Self {
            x_projection,
            y_projection,
        }
    }
}

/// Uncertainty band drawn around a line series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSpec {
    #[serde(default)]
    pub upper: Option<ProjectionOffset>,
    #[serde(default)]
    pub lower: Option<ProjectionOffset>,
    #[serde(default)]
    pub curved: bool,
}

impl ProjectionSpec {
    #[must_use]
    pub fn new(upper: Option<ProjectionOffset>, lower: Option<ProjectionOffset>) -> Self {
        Self {
            upper,
            lower,
            curved: false,
        }
    }

    #[must_use]
    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionGeometry {
    pub upper_points: Vec<PathPoint>,
    pub lower_points: Vec<PathPoint>,
    pub upper_path: String,
    pub lower_path: String,
    /// Closed band polygon between both bounds.
    pub shape_path: String,
}

/// Shifts a point by percentages of its own coordinates.
///
/// A point on `y == 0` uses `svg_height` as the reference magnitude, so
/// baseline points still move.
#[must_use]
pub fn project_point(point: PathPoint, offset: ProjectionOffset, svg_height: f64) -> PathPoint {
    let reference_y = if point.y == 0.0 { svg_height } else { point.y };
    PathPoint::new(
        point.x + point.x * offset.x_projection / 100.0,
        point.y + reference_y * offset.y_projection / 100.0,
    )
}

/// Builds both band boundaries and the filled shape between them.
///
/// The shape walks the upper bound forward, passes through the last raw
/// point when both bounds exist, walks the lower bound backward and closes
/// on the first raw point. A missing bound contributes no points.
#[must_use]
pub fn build_projection(
    points: &[PathPoint],
    spec: &ProjectionSpec,
    svg_height: f64,
) -> ProjectionGeometry {
    let shift = |offset: Option<ProjectionOffset>| -> Vec<PathPoint> {
        offset
            .map(|offset| {
                points
                    .iter()
                    .map(|point| project_point(*point, offset, svg_height))
                    .collect()
            })
            .unwrap_or_default()
    };
    let upper_points = shift(spec.upper);
    let lower_points = shift(spec.lower);
    let options = LinePathOptions {
        curved: spec.curved,
        extend_to_bottom: None,
    };

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return ProjectionGeometry::default();
    };
    if spec.upper.is_none() && spec.lower.is_none() {
        return ProjectionGeometry::default();
    }

    let mut outline = Vec::with_capacity(upper_points.len() + lower_points.len() + 2);
    outline.extend_from_slice(&upper_points);
    if spec.upper.is_some() && spec.lower.is_some() {
        outline.push(*last);
    }
    outline.extend(lower_points.iter().rev().copied());
    outline.push(*first);

    let mut shape_path = build_line_path(&outline, options);
    shape_path.push_str(" Z");

    ProjectionGeometry {
        upper_path: build_line_path(&upper_points, options),
        lower_path: build_line_path(&lower_points, options),
        upper_points,
        lower_points,
        shape_path,
    }
}
