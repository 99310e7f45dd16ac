use chart_geometry::core::{
    ChartKind, MAX_EXPANDED_TICKS, NumericTickRange, TickSpec, expand_numeric_range,
    expand_tick_values, nice_tick_values,
};

#[test]
fn custom_tick_list_is_returned_verbatim() {
    let spec = TickSpec::custom(["Jan", "Feb", "Mar"]);
    assert_eq!(
        expand_tick_values(&spec, ChartKind::Line),
        vec!["Jan", "Feb", "Mar"]
    );
}

#[test]
fn numeric_range_steps_inclusively_from_min() {
    let values = expand_tick_values(&TickSpec::numeric(0.0, 10.0, 2.5), ChartKind::Line);
    assert_eq!(values, vec!["0", "2.5", "5", "7.5", "10"]);
}

#[test]
fn numeric_range_stops_before_overshooting_max() {
    let values = expand_numeric_range(NumericTickRange::new(0.0, 10.0, 3.0), ChartKind::Bar);
    assert_eq!(values, vec!["0", "3", "6", "9"]);
}

#[test]
fn oversized_step_collapses_differently_per_chart_kind() {
    let range = NumericTickRange::new(5.0, 8.0, 3.0);
    assert_eq!(expand_numeric_range(range, ChartKind::Bar), vec!["5"]);
    assert_eq!(expand_numeric_range(range, ChartKind::Line), vec!["5", "8"]);
}

#[test]
fn non_positive_step_collapses() {
    let range = NumericTickRange::new(0.0, 10.0, 0.0);
    assert_eq!(expand_numeric_range(range, ChartKind::Bar), vec!["0"]);
    let range = NumericTickRange::new(0.0, 10.0, -1.0);
    assert_eq!(expand_numeric_range(range, ChartKind::Line), vec!["0", "10"]);
}

#[test]
fn non_finite_range_expands_to_nothing() {
    let range = NumericTickRange::new(0.0, f64::INFINITY, 1.0);
    assert!(expand_numeric_range(range, ChartKind::Line).is_empty());
}

#[test]
fn break_axis_value_is_read_from_numeric_spec_only() {
    let numeric = TickSpec::Numeric(NumericTickRange::new(0.0, 4.0, 1.0).with_break_axis_value(2.0));
    assert_eq!(numeric.break_axis_value(), Some(2.0));
    assert_eq!(TickSpec::custom(["a", "b"]).break_axis_value(), None);
}

#[test]
fn nice_ticks_cover_zero_and_data_range() {
    assert_eq!(nice_tick_values(10.0, 30.0, 5), vec!["0", "10", "20", "30"]);
    assert_eq!(
        nice_tick_values(-7.0, 12.0, 5),
        vec!["-10", "-5", "0", "5", "10", "15"]
    );
}

#[test]
fn nice_ticks_have_no_float_drift() {
    let values = nice_tick_values(0.0, 0.25, 5);
    assert_eq!(values, vec!["0", "0.05", "0.1", "0.15", "0.2", "0.25"]);
}

#[test]
fn nice_ticks_for_all_zero_data_collapse_to_single_value() {
    assert_eq!(nice_tick_values(0.0, 0.0, 5), vec!["0"]);
}

#[test]
fn nice_ticks_are_capped_for_huge_targets() {
    let values = nice_tick_values(0.0, 30.0, usize::MAX);
    assert_eq!(values.len(), MAX_EXPANDED_TICKS);
    assert_eq!(values[0], "0");
}
