use crate::api::{ChartLayout, SeriesGeometry};
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates layout content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_axis_count: usize,
    pub last_path_count: usize,
    pub last_diagnostic_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, layout: &ChartLayout) -> ChartResult<()> {
        layout.validate()?;
        self.last_axis_count = layout.x_axis.iter().chain(&layout.y_axis).count();
        self.last_path_count = layout
            .series
            .iter()
            .map(|series| match series {
                SeriesGeometry::Line(_) => 1,
                SeriesGeometry::Bar(bar) => bar.bars.iter().map(|b| b.segments.len()).sum(),
            })
            .sum();
        self.last_diagnostic_count = layout.diagnostics.len();
        Ok(())
    }
}
