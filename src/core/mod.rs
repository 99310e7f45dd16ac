pub mod axis_coordinates;
pub mod bar_series;
pub mod line_series;
pub mod points;
pub mod primitives;
pub mod projection;
pub mod tick_positions;
pub mod tick_values;
pub mod types;

pub use axis_coordinates::{AxisCoordinateInput, AxisCoordinates, resolve_axis_coordinates};
pub use bar_series::{
    BarRounding, BarSegmentGeometry, BarShape, PathSegment, SegmentList, build_bar_path,
    build_stacked_bar_paths, grouped_bar_offset, partition_bar_segments,
};
pub use line_series::{CURVE_TENSION, LinePathOptions, build_line_path};
pub use points::{PointLookup, map_number, map_points, map_value};
pub use primitives::format_number;
pub use projection::{
    ProjectionGeometry, ProjectionOffset, ProjectionSpec, build_projection, project_point,
};
pub use tick_positions::{TickPoint, resolve_tick_positions};
pub use tick_values::{
    MAX_EXPANDED_TICKS, NumericTickRange, TickSpec, expand_numeric_range, expand_tick_values,
    nice_tick_values,
};
pub use types::{
    AxisOrientation, AxisPosition, BarOrientation, Canvas, ChartKind, CoordinateSpace, DataPoint,
    DataValue, Margins, PathPoint, ViewBox,
};
