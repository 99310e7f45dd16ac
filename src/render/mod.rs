mod null_renderer;
mod style;
mod svg_renderer;

pub use null_renderer::NullRenderer;
pub use style::{Color, SvgStyle};
pub use svg_renderer::{SvgRenderer, escape_text};

use crate::api::ChartLayout;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully resolved `ChartLayout` so drawing code stays
/// isolated from layout and diagnostics logic.
pub trait Renderer {
    fn render(&mut self, layout: &ChartLayout) -> ChartResult<()>;
}
