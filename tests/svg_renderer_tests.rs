use chart_geometry::api::{
    AxisSpec, ChartChild, ChartEngine, ChartEngineConfig, FixedTextMetrics, SeriesSpec,
    TextAnchor, TextStyle,
};
use chart_geometry::core::{
    AxisPosition, BarRounding, Canvas, ChartKind, DataPoint, ProjectionOffset, ProjectionSpec,
    TickSpec, ViewBox,
};
use chart_geometry::render::{Color, Renderer, SvgRenderer, SvgStyle, escape_text};

fn engine() -> ChartEngine<FixedTextMetrics> {
    engine_with_x_axis(AxisSpec::new(AxisPosition::Bottom))
}

fn engine_with_x_axis(x_axis: AxisSpec) -> ChartEngine<FixedTextMetrics> {
    let config = ChartEngineConfig::new(Canvas::new(320.0, 200.0))
        .with_chart_kind(ChartKind::Bar)
        .with_font_size(10.0)
        .with_label_offsets(4.0, 4.0);
    let mut engine =
        ChartEngine::new(FixedTextMetrics::new(18.0, 10.0), config).expect("engine init");
    engine.set_data(vec![
        DataPoint::new().with("x", "A&B").with("v", 3).with("trend", 2),
        DataPoint::new().with("x", "C").with("v", 6).with("trend", 5),
    ]);
    engine.set_children(vec![
        ChartChild::XAxis(x_axis),
        ChartChild::YAxis(
            AxisSpec::new(AxisPosition::Left).with_ticks(TickSpec::numeric(0.0, 6.0, 2.0)),
        ),
        ChartChild::Series(
            SeriesSpec::bar("v", 16.0, 1)
                .with_coverage(vec![40.0, 60.0])
                .with_rounding(BarRounding::tip()),
        ),
        ChartChild::Series(SeriesSpec::line("trend").with_projection(ProjectionSpec::new(
            Some(ProjectionOffset::new(0.0, -5.0)),
            Some(ProjectionOffset::new(0.0, 5.0)),
        ))),
    ]);
    engine
}

#[test]
fn svg_document_contains_axes_series_and_labels() {
    let engine = engine();
    let mut renderer = SvgRenderer::default();
    let layout = engine.render(&mut renderer).expect("render");
    assert!(layout.diagnostics.is_clean());

    let svg = renderer.output();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"320\" height=\"200\""));
    assert!(svg.contains("viewBox=\"0 0 320 200\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line ").count(), 2);
    // two stacked segments per bar, two bars, one band, one line
    assert_eq!(svg.matches("<path ").count(), 6);
    assert!(svg.contains(">A&amp;B</text>"));
    assert!(svg.contains("text-anchor=\"end\""));
    assert!(svg.contains(" Q "));
}

#[test]
fn labels_use_the_text_style_their_axis_was_measured_with() {
    let engine = engine_with_x_axis(AxisSpec::new(AxisPosition::Bottom).with_text_style(
        TextStyle {
            font_size_px: Some(14.0),
            anchor: Some(TextAnchor::Start),
            ..TextStyle::default()
        },
    ));
    let mut renderer = SvgRenderer::default();
    let layout = engine.render(&mut renderer).expect("render");
    let x_axis = layout.x_axis.as_ref().expect("x axis");
    assert_eq!(x_axis.label_style.font_size_px, 14.0);

    let svg = renderer.output();
    // x labels A&B and C, y labels 0 2 4 6
    assert_eq!(svg.matches("font-size=\"14\"").count(), 2);
    assert_eq!(svg.matches("font-size=\"10\"").count(), 4);
    assert_eq!(svg.matches("text-anchor=\"start\"").count(), 2);
    assert_eq!(svg.matches("text-anchor=\"end\"").count(), 4);
}

#[test]
fn zero_engine_font_renders_zero_sized_labels() {
    let config = ChartEngineConfig::new(Canvas::new(200.0, 100.0));
    let mut engine =
        ChartEngine::new(FixedTextMetrics::new(0.0, 0.0), config).expect("engine init");
    engine.set_data(vec![
        DataPoint::new().with("x", "a").with("v", 1),
        DataPoint::new().with("x", "b").with("v", 2),
    ]);
    engine.set_children(vec![ChartChild::XAxis(AxisSpec::new(AxisPosition::Bottom))]);

    let mut renderer = SvgRenderer::default();
    let layout = engine.render(&mut renderer).expect("render");
    assert_eq!(layout.margins.bottom, 0.0);
    assert_eq!(renderer.output().matches("font-size=\"0\"").count(), 2);
}

#[test]
fn custom_view_box_is_emitted() {
    let engine = engine();
    let mut renderer = SvgRenderer::new(SvgStyle::default())
        .expect("style")
        .with_view_box(ViewBox::new(0.0, 0.0, 640.0, 400.0));
    engine.render(&mut renderer).expect("render");
    assert!(renderer.output().contains("viewBox=\"0 0 640 400\""));
}

#[test]
fn invalid_style_is_rejected() {
    let style = SvgStyle {
        series_colors: Vec::new(),
        ..SvgStyle::default()
    };
    assert!(SvgRenderer::new(style).is_err());

    let style = SvgStyle {
        text_color: Color::rgba(0.0, 0.0, 0.0, 2.0),
        ..SvgStyle::default()
    };
    assert!(SvgRenderer::new(style).is_err());
}

#[test]
fn renderer_rejects_non_finite_layout() {
    let mut layout = engine().layout();
    if let Some(axis) = layout.x_axis.as_mut() {
        axis.coordinates.x1 = f64::NAN;
    }
    let mut renderer = SvgRenderer::default();
    assert!(renderer.render(&layout).is_err());
    assert!(renderer.output().is_empty());
}

#[test]
fn text_escaping_covers_quotes() {
    assert_eq!(escape_text("'q'"), "&apos;q&apos;");
    assert_eq!(escape_text("plain"), "plain");
}
