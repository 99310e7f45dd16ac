//! chart-geometry: layout engine for Cartesian SVG charts.
//!
//! The crate turns a declarative chart tree (axes, bar and line series,
//! separators) plus tabular data into deterministic geometry: margins, axis
//! lines, tick positions and SVG path strings. Layout never fails; problems
//! are reported as structured diagnostics next to a usable fallback result.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
