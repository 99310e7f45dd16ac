use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::format_number;
use crate::core::types::{BarOrientation, PathPoint};

/// Along-axis extent of one stacked segment, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: f64,
    pub end: f64,
}

impl PathSegment {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

pub type SegmentList = SmallVec<[PathSegment; 4]>;

/// Which bar caps are drawn as pill ends.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarRounding {
    /// Cap at the bar origin (baseline side).
    #[serde(default)]
    pub start: bool,
    /// Cap at the bar tip.
    #[serde(default)]
    pub end: bool,
    /// Along-axis bulge of the cap; half the bar width when absent.
    #[serde(default)]
    pub radius: Option<f64>,
}

impl BarRounding {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn both() -> Self {
        Self {
            start: true,
            end: true,
            radius: None,
        }
    }

    #[must_use]
    pub fn tip() -> Self {
        Self {
            start: false,
            end: true,
            radius: None,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn is_rounded(self) -> bool {
        self.start || self.end
    }
}

/// One bar rectangle: `start`/`end` run along the bar, `cross_center` and
/// `width` across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    pub orientation: BarOrientation,
    pub cross_center: f64,
    pub width: f64,
    pub start: f64,
    pub end: f64,
}

/// Partitions `[start, end]` by cumulative coverage percentages.
///
/// Consecutive segments are separated by `gap`, half taken from each side of
/// every interior boundary, so the outer endpoints stay exactly on `start`
/// and `end`. Negative or non-finite coverages count as zero; cumulative
/// coverage saturates at 100. An empty coverage list yields the whole bar.
#[must_use]
pub fn partition_bar_segments(start: f64, end: f64, coverages: &[f64], gap: f64) -> SegmentList {
    let mut segments = SegmentList::new();
    if coverages.is_empty() {
        segments.push(PathSegment::new(start, end));
        return segments;
    }

    let length = end - start;
    let direction = if length < 0.0 { -1.0 } else { 1.0 };
    let half_gap = if gap.is_finite() { gap.max(0.0) / 2.0 } else { 0.0 };
    let last = coverages.len() - 1;

    let mut cumulative = 0.0;
    let mut boundary = start;
    for (index, coverage) in coverages.iter().enumerate() {
        let coverage = if coverage.is_finite() {
            coverage.max(0.0)
        } else {
            0.0
        };
        cumulative = (cumulative + coverage).min(100.0);
        let next_boundary = if cumulative >= 100.0 {
            end
        } else {
            start + length * cumulative / 100.0
        };

        let segment_start = if index > 0 {
            boundary + direction * half_gap
        } else {
            boundary
        };
        let segment_end = if index < last {
            next_boundary - direction * half_gap
        } else {
            next_boundary
        };
        segments.push(PathSegment::new(segment_start, segment_end));
        boundary = next_boundary;
    }

    segments
}

/// Signed offset of bar `order` (1-indexed) from its group's center.
///
/// Odd groups keep the middle bar centered and push the others out in whole
/// `bar_width + spacing` steps; even groups have no centered bar and start
/// half a step away from the center. Horizontal bars stack upward, so their
/// offsets are negated in pixel space.
#[must_use]
pub fn grouped_bar_offset(
    bar_count: usize,
    order: usize,
    bar_width: f64,
    spacing: f64,
    orientation: BarOrientation,
) -> f64 {
    if bar_count <= 1 || order == 0 {
        return 0.0;
    }

    let half_step = bar_width / 2.0 + spacing / 2.0;
    let step = half_step * 2.0;
    let offset = if bar_count % 2 == 1 {
        let middle = bar_count.div_ceil(2);
        if order == middle {
            0.0
        } else if order < middle {
            -((middle - order) as f64) * step
        } else {
            (order - middle) as f64 * step
        }
    } else {
        let half = bar_count / 2;
        if order <= half {
            -((half - order) as f64 * step + half_step)
        } else {
            (order - half - 1) as f64 * step + half_step
        }
    };

    match orientation {
        BarOrientation::Vertical => offset,
        BarOrientation::Horizontal => -offset,
    }
}

/// Builds the closed outline of one bar.
///
/// Rounded caps replace the straight cap edge with a quadratic curve whose
/// control point sits on the bar's center line, `radius` beyond the cap.
#[must_use]
pub fn build_bar_path(shape: &BarShape, rounding: BarRounding) -> String {
    let half = shape.width / 2.0;
    let near = shape.cross_center - half;
    let far = shape.cross_center + half;
    let direction = if shape.end < shape.start { -1.0 } else { 1.0 };
    let radius = rounding.radius.unwrap_or(half);
    let point = |along: f64, cross: f64| match shape.orientation {
        BarOrientation::Vertical => PathPoint::new(cross, along),
        BarOrientation::Horizontal => PathPoint::new(along, cross),
    };

    let origin = point(shape.start, near);
    let mut path = String::new();
    push_command(&mut path, "M", origin);
    push_command(&mut path, "L", point(shape.end, near));
    if rounding.end {
        push_quadratic(
            &mut path,
            point(shape.end + direction * radius, shape.cross_center),
            point(shape.end, far),
        );
    } else {
        push_command(&mut path, "L", point(shape.end, far));
    }
    push_command(&mut path, "L", point(shape.start, far));
    if rounding.start {
        push_quadratic(
            &mut path,
            point(shape.start - direction * radius, shape.cross_center),
            origin,
        );
    }
    path.push_str(" Z");
    path
}

fn push_command(path: &mut String, command: &str, point: PathPoint) {
    if !path.is_empty() {
        path.push(' ');
    }
    let _ = write!(
        path,
        "{command} {} {}",
        format_number(point.x),
        format_number(point.y)
    );
}

fn push_quadratic(path: &mut String, control: PathPoint, end: PathPoint) {
    let _ = write!(
        path,
        " Q {},{} {},{}",
        format_number(control.x),
        format_number(control.y),
        format_number(end.x),
        format_number(end.y)
    );
}

/// Outline of one stacked segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegmentGeometry {
    pub segment: PathSegment,
    pub path: String,
}

/// Partitions a bar and outlines every segment.
///
/// Only the outermost caps can be rounded: the first segment's start and
/// the last segment's end.
#[must_use]
pub fn build_stacked_bar_paths(
    shape: &BarShape,
    coverages: &[f64],
    gap: f64,
    rounding: BarRounding,
) -> Vec<BarSegmentGeometry> {
    let segments = partition_bar_segments(shape.start, shape.end, coverages, gap);
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let segment_shape = BarShape {
                start: segment.start,
                end: segment.end,
                ..*shape
            };
            let segment_rounding = BarRounding {
                start: rounding.start && index == 0,
                end: rounding.end && index == last,
                radius: rounding.radius,
            };
            BarSegmentGeometry {
                segment: *segment,
                path: build_bar_path(&segment_shape, segment_rounding),
            }
        })
        .collect()
}
