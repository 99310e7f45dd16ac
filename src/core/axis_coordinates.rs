use serde::{Deserialize, Serialize};

use crate::core::types::{AxisOrientation, AxisPosition, Canvas, Margins};

/// Endpoints of one axis line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCoordinates {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl AxisCoordinates {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Signed extent along the axis direction.
    #[must_use]
    pub fn length(self, orientation: AxisOrientation) -> f64 {
        match orientation {
            AxisOrientation::Horizontal => self.x2 - self.x1,
            AxisOrientation::Vertical => self.y2 - self.y1,
        }
    }

    /// Zero (or negative) length along the axis direction.
    #[must_use]
    pub fn is_degenerate(self, orientation: AxisOrientation) -> bool {
        let length = self.length(orientation);
        !length.is_finite() || length <= f64::EPSILON
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

/// Everything the coordinate resolver needs for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCoordinateInput {
    pub orientation: AxisOrientation,
    pub position: AxisPosition,
    pub canvas: Canvas,
    pub margins: Margins,
    /// Pixel coordinate used by `CUSTOM` placement, already mapped through
    /// the perpendicular axis.
    pub break_pixel: f64,
}

/// Resolves the axis line endpoints.
///
/// Horizontal axes span `[left, width - right]` and sit on the bottom/top
/// margin, the midline, or the break pixel. Vertical axes span
/// `[top, height - bottom]` symmetrically.
#[must_use]
pub fn resolve_axis_coordinates(input: &AxisCoordinateInput) -> AxisCoordinates {
    let AxisCoordinateInput {
        orientation,
        position,
        canvas,
        margins,
        break_pixel,
    } = *input;

    match orientation {
        AxisOrientation::Horizontal => {
            let y = match position.normalized_for(orientation) {
                AxisPosition::Top => margins.top,
                AxisPosition::Center => canvas.height / 2.0,
                AxisPosition::Custom => break_pixel,
                _ => canvas.height - margins.bottom,
            };
            AxisCoordinates::new(margins.left, y, canvas.width - margins.right, y)
        }
        AxisOrientation::Vertical => {
            let x = match position.normalized_for(orientation) {
                AxisPosition::Right => canvas.width - margins.right,
                AxisPosition::Center => canvas.width / 2.0,
                AxisPosition::Custom => break_pixel,
                _ => margins.left,
            };
            AxisCoordinates::new(x, margins.top, x, canvas.height - margins.bottom)
        }
    }
}
