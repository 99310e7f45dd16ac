use chart_geometry::core::{LinePathOptions, PathPoint, build_line_path};

fn diagonal() -> Vec<PathPoint> {
    vec![
        PathPoint::new(0.0, 0.0),
        PathPoint::new(100.0, 100.0),
        PathPoint::new(200.0, 200.0),
    ]
}

#[test]
fn straight_path_uses_line_commands() {
    assert_eq!(
        build_line_path(&diagonal(), LinePathOptions::straight()),
        "M 0 0 L 100 100 L 200 200"
    );
}

#[test]
fn curved_path_offsets_control_points_by_tension() {
    assert_eq!(
        build_line_path(&diagonal(), LinePathOptions::curved()),
        "M 0 0 C 30 0, 70 100, 100 100 C 130 100, 170 200, 200 200"
    );
}

#[test]
fn extend_to_bottom_closes_the_area() {
    let points = vec![PathPoint::new(10.0, 50.0), PathPoint::new(90.0, 20.0)];
    assert_eq!(
        build_line_path(&points, LinePathOptions::straight().with_extend_to_bottom(300.0)),
        "M 10 50 L 90 20 L 90 300 L 10 300 Z"
    );
}

#[test]
fn empty_points_produce_empty_path() {
    assert_eq!(build_line_path(&[], LinePathOptions::curved()), "");
}

#[test]
fn single_point_is_a_move_only() {
    let points = vec![PathPoint::new(4.5, -2.0)];
    assert_eq!(
        build_line_path(&points, LinePathOptions::straight()),
        "M 4.5 -2"
    );
}
