use chart_geometry::core::{DataValue, PointLookup, TickPoint, map_points, map_value};

fn category_ticks() -> Vec<TickPoint> {
    vec![
        TickPoint::new(0.0, "1"),
        TickPoint::new(250.0, "2"),
        TickPoint::new(500.0, "3"),
    ]
}

#[test]
fn exact_lookup_matches_number_labels() {
    let positions = map_points(
        &category_ticks(),
        &[DataValue::from(2.0), DataValue::from(3), DataValue::from("1")],
        PointLookup::Exact,
    );
    assert_eq!(positions, vec![250.0, 500.0, 0.0]);
}

#[test]
fn exact_lookup_returns_nan_for_unknown_values() {
    let position = map_value(&category_ticks(), &DataValue::from(2.5), PointLookup::Exact);
    assert!(position.is_nan());
}

#[test]
fn interpolated_lookup_prefers_exact_labels() {
    let ticks = vec![TickPoint::new(0.0, "a"), TickPoint::new(10.0, "b")];
    assert_eq!(
        map_value(&ticks, &DataValue::from("b"), PointLookup::Interpolated),
        10.0
    );
}

#[test]
fn interpolated_lookup_handles_descending_pixels() {
    let ticks = vec![
        TickPoint::new(500.0, "0"),
        TickPoint::new(250.0, "50"),
        TickPoint::new(0.0, "100"),
    ];
    let position = map_value(&ticks, &DataValue::from(75.0), PointLookup::Interpolated);
    approx::assert_abs_diff_eq!(position, 125.0, epsilon = 1e-9);
}

#[test]
fn text_values_never_interpolate() {
    let ticks = vec![TickPoint::new(0.0, "0"), TickPoint::new(10.0, "10")];
    assert!(map_value(&ticks, &DataValue::from("five"), PointLookup::Interpolated).is_nan());
}

#[test]
fn empty_tick_sequence_maps_everything_to_nan() {
    assert!(map_value(&[], &DataValue::from(1.0), PointLookup::Interpolated).is_nan());
}

#[test]
fn exponent_labels_match_extreme_numbers() {
    let ticks = vec![
        TickPoint::new(10.0, "1e-7"),
        TickPoint::new(20.0, "0.5"),
        TickPoint::new(30.0, "1e+21"),
    ];
    assert_eq!(map_value(&ticks, &DataValue::from(1e21), PointLookup::Exact), 30.0);
    assert_eq!(map_value(&ticks, &DataValue::from(1e-7), PointLookup::Exact), 10.0);
    assert!(map_value(&ticks, &DataValue::from(2e21), PointLookup::Exact).is_nan());
}
