use chart_geometry::core::{TickPoint, resolve_tick_positions};

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[test]
fn ticks_are_spread_evenly_between_start_and_end() {
    let ticks = resolve_tick_positions(&labels(&["1", "2", "3"]), 0.0, 500.0);
    assert_eq!(
        ticks,
        vec![
            TickPoint::new(0.0, "1"),
            TickPoint::new(250.0, "2"),
            TickPoint::new(500.0, "3"),
        ]
    );
}

#[test]
fn vertical_ticks_run_from_bottom_to_top() {
    let ticks = resolve_tick_positions(&labels(&["0", "10", "20", "30"]), 400.0, 100.0);
    let positions: Vec<f64> = ticks.iter().map(|tick| tick.position).collect();
    assert!((positions[0] - 400.0).abs() <= 1e-9);
    assert!((positions[1] - 300.0).abs() <= 1e-9);
    assert!((positions[2] - 200.0).abs() <= 1e-9);
    assert!((positions[3] - 100.0).abs() <= 1e-9);
}

#[test]
fn single_value_collapses_onto_start() {
    let ticks = resolve_tick_positions(&labels(&["only"]), 12.0, 80.0);
    assert_eq!(ticks, vec![TickPoint::new(12.0, "only")]);
}

#[test]
fn empty_values_produce_no_ticks() {
    assert!(resolve_tick_positions(&[], 0.0, 100.0).is_empty());
}

#[test]
fn last_tick_lands_exactly_on_end() {
    let ticks = resolve_tick_positions(&labels(&["a", "b", "c", "d", "e", "f", "g"]), 0.1, 0.7);
    assert_eq!(ticks.last().map(|tick| tick.position), Some(0.7));
    assert_eq!(ticks[0].position, 0.1);
}
