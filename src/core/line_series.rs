use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::primitives::format_number;
use crate::core::types::PathPoint;

/// Horizontal control-point offset, as a fraction of each segment's width.
pub const CURVE_TENSION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePathOptions {
    pub curved: bool,
    /// Closes the path down to this baseline so it can be filled as an area.
    pub extend_to_bottom: Option<f64>,
}

impl LinePathOptions {
    #[must_use]
    pub fn straight() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn curved() -> Self {
        Self {
            curved: true,
            extend_to_bottom: None,
        }
    }

    #[must_use]
    pub fn with_extend_to_bottom(mut self, svg_height: f64) -> Self {
        self.extend_to_bottom = Some(svg_height);
        self
    }
}

/// Builds an SVG path through `points`.
///
/// Straight paths use one `L` per point. Curved paths emit one `C` per
/// segment with both control points at their endpoint's y, shifted inward by
/// `CURVE_TENSION * dx`. An empty input yields an empty string.
#[must_use]
pub fn build_line_path(points: &[PathPoint], options: LinePathOptions) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M {} {}", format_number(first.x), format_number(first.y));
    let mut previous = *first;
    for point in rest {
        if options.curved {
            let dx = point.x - previous.x;
            let _ = write!(
                path,
                " C {} {}, {} {}, {} {}",
                format_number(previous.x + CURVE_TENSION * dx),
                format_number(previous.y),
                format_number(point.x - CURVE_TENSION * dx),
                format_number(point.y),
                format_number(point.x),
                format_number(point.y)
            );
        } else {
            let _ = write!(
                path,
                " L {} {}",
                format_number(point.x),
                format_number(point.y)
            );
        }
        previous = *point;
    }

    if let Some(baseline) = options.extend_to_bottom {
        let _ = write!(
            path,
            " L {} {} L {} {} Z",
            format_number(previous.x),
            format_number(baseline),
            format_number(first.x),
            format_number(baseline)
        );
    }

    path
}
