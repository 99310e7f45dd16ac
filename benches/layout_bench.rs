use chart_geometry::api::{
    AxisSpec, ChartChild, ChartEngine, ChartEngineConfig, EstimatedTextMetrics, SeriesSpec,
};
use chart_geometry::core::{
    AxisPosition, Canvas, ChartKind, DataPoint, LinePathOptions, PathPoint, TickSpec,
    build_line_path, resolve_tick_positions,
};
use chart_geometry::render::{NullRenderer, SvgRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn line_engine(points: usize) -> ChartEngine<EstimatedTextMetrics> {
    let config =
        ChartEngineConfig::new(Canvas::new(1600.0, 900.0)).with_chart_kind(ChartKind::Line);
    let mut engine =
        ChartEngine::new(EstimatedTextMetrics::default(), config).expect("engine init");

    let data = (0..points)
        .map(|i| {
            let t = i as f64;
            DataPoint::new()
                .with("x", t)
                .with("close", 500.0 + (t * 0.05).sin() * 200.0)
        })
        .collect();
    engine.set_data(data);
    engine.set_children(vec![
        ChartChild::XAxis(
            AxisSpec::new(AxisPosition::Bottom)
                .with_ticks(TickSpec::numeric(0.0, (points - 1) as f64, 1.0)),
        ),
        ChartChild::YAxis(
            AxisSpec::new(AxisPosition::Left).with_ticks(TickSpec::numeric(0.0, 1_000.0, 100.0)),
        ),
        ChartChild::Series(SeriesSpec::line("close").with_curved(true)),
    ]);
    engine
}

fn bench_tick_positions_10k(c: &mut Criterion) {
    let values: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();

    c.bench_function("tick_positions_10k", |b| {
        b.iter(|| {
            let _ = resolve_tick_positions(black_box(&values), black_box(40.0), black_box(1_560.0));
        })
    });
}

fn bench_curved_line_path_10k(c: &mut Criterion) {
    let points: Vec<PathPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            PathPoint::new(t * 0.15, 450.0 + (t * 0.01).cos() * 300.0)
        })
        .collect();

    c.bench_function("curved_line_path_10k", |b| {
        b.iter(|| {
            let _ = build_line_path(black_box(&points), LinePathOptions::curved());
        })
    });
}

fn bench_engine_layout_2k(c: &mut Criterion) {
    let engine = line_engine(2_000);
    let mut renderer = NullRenderer::default();

    c.bench_function("engine_layout_2k", |b| {
        b.iter(|| {
            let _ = engine
                .render(black_box(&mut renderer))
                .expect("layout should render");
        })
    });
}

fn bench_engine_svg_2k(c: &mut Criterion) {
    let engine = line_engine(2_000);

    c.bench_function("engine_svg_2k", |b| {
        b.iter(|| {
            let mut renderer = SvgRenderer::default();
            let _ = engine
                .render(black_box(&mut renderer))
                .expect("svg should render");
            black_box(renderer.into_output());
        })
    });
}

criterion_group!(
    benches,
    bench_tick_positions_10k,
    bench_curved_line_path_10k,
    bench_engine_layout_2k,
    bench_engine_svg_2k
);
criterion_main!(benches);
