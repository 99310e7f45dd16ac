mod chart_tree;
mod diagnostics;
mod engine;
mod engine_config;
mod json_contract;
mod layout;
mod series_builder;
mod spacing;
mod text_metrics;
mod validation;

pub use chart_tree::{
    AxisSpec, ChartChild, SeparatorSpec, SeriesKind, SeriesSpec, TextAnchor, TextStyle,
};
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticCode, DiagnosticSink, Diagnostics, Severity,
};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{ChartDocument, ChartLayoutJsonContractV1, LAYOUT_JSON_SCHEMA_V1};
pub use layout::{
    AxisGeometry, BarGeometry, BarSeriesGeometry, ChartLayout, LineSeriesGeometry,
    SeparatorGeometry, SeriesGeometry,
};
pub use spacing::{
    AxisLabelStyle, BarsFootprint, ChartSpacing, SpacingInput, SpacingResult,
    compute_extra_spacing, declared_axis, derive_tick_values,
};
pub use text_metrics::{
    EstimatedTextMetrics, FixedTextMetrics, TextExtent, TextMetrics, measure_labels,
};
pub use validation::{
    FALLBACK_CANVAS, FALLBACK_TICK_VALUES, fallback_dataset, fallback_tick_values,
};
