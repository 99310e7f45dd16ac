use chart_geometry::core::{
    BarOrientation, BarRounding, BarShape, PathSegment, build_bar_path, build_stacked_bar_paths,
    grouped_bar_offset, partition_bar_segments,
};

#[test]
fn single_segment_covers_whole_bar() {
    let segments = partition_bar_segments(300.0, 100.0, &[], 4.0);
    assert_eq!(segments.as_slice(), &[PathSegment::new(300.0, 100.0)]);
}

#[test]
fn coverages_split_bar_with_half_gap_on_each_side() {
    let segments = partition_bar_segments(0.0, 100.0, &[30.0, 70.0], 4.0);
    assert_eq!(
        segments.as_slice(),
        &[PathSegment::new(0.0, 28.0), PathSegment::new(32.0, 100.0)]
    );
}

#[test]
fn gap_follows_bar_direction() {
    let segments = partition_bar_segments(300.0, 100.0, &[50.0, 50.0], 10.0);
    assert_eq!(
        segments.as_slice(),
        &[PathSegment::new(300.0, 205.0), PathSegment::new(195.0, 100.0)]
    );
}

#[test]
fn coverage_beyond_hundred_saturates_at_bar_end() {
    let segments = partition_bar_segments(0.0, 50.0, &[80.0, 80.0], 0.0);
    assert_eq!(segments[1].end, 50.0);
}

#[test]
fn odd_group_keeps_middle_bar_centered() {
    let vertical = BarOrientation::Vertical;
    assert_eq!(grouped_bar_offset(3, 1, 20.0, 2.0, vertical), -22.0);
    assert_eq!(grouped_bar_offset(3, 2, 20.0, 2.0, vertical), 0.0);
    assert_eq!(grouped_bar_offset(3, 3, 20.0, 2.0, vertical), 22.0);
}

#[test]
fn even_group_starts_half_a_step_from_center() {
    let vertical = BarOrientation::Vertical;
    assert_eq!(grouped_bar_offset(2, 1, 20.0, 2.0, vertical), -11.0);
    assert_eq!(grouped_bar_offset(2, 2, 20.0, 2.0, vertical), 11.0);
    assert_eq!(grouped_bar_offset(4, 1, 20.0, 2.0, vertical), -33.0);
    assert_eq!(grouped_bar_offset(4, 4, 20.0, 2.0, vertical), 33.0);
}

#[test]
fn horizontal_groups_mirror_the_offset() {
    assert_eq!(
        grouped_bar_offset(2, 1, 20.0, 2.0, BarOrientation::Horizontal),
        11.0
    );
}

#[test]
fn lone_bar_has_no_offset() {
    assert_eq!(
        grouped_bar_offset(1, 1, 20.0, 2.0, BarOrientation::Vertical),
        0.0
    );
}

fn vertical_bar() -> BarShape {
    BarShape {
        orientation: BarOrientation::Vertical,
        cross_center: 50.0,
        width: 20.0,
        start: 200.0,
        end: 100.0,
    }
}

#[test]
fn square_bar_outline() {
    assert_eq!(
        build_bar_path(&vertical_bar(), BarRounding::none()),
        "M 40 200 L 40 100 L 60 100 L 60 200 Z"
    );
}

#[test]
fn rounded_tip_uses_quadratic_curve_beyond_the_cap() {
    assert_eq!(
        build_bar_path(&vertical_bar(), BarRounding::tip()),
        "M 40 200 L 40 100 Q 50,90 60,100 L 60 200 Z"
    );
}

#[test]
fn rounded_both_ends_with_explicit_radius() {
    assert_eq!(
        build_bar_path(&vertical_bar(), BarRounding::both().with_radius(4.0)),
        "M 40 200 L 40 100 Q 50,96 60,100 L 60 200 Q 50,204 40,200 Z"
    );
}

#[test]
fn horizontal_bar_swaps_axes() {
    let shape = BarShape {
        orientation: BarOrientation::Horizontal,
        cross_center: 50.0,
        width: 10.0,
        start: 0.0,
        end: 80.0,
    };
    assert_eq!(
        build_bar_path(&shape, BarRounding::none()),
        "M 0 45 L 80 45 L 80 55 L 0 55 Z"
    );
}

#[test]
fn stacked_bar_rounds_only_outer_caps() {
    let geometry =
        build_stacked_bar_paths(&vertical_bar(), &[50.0, 50.0], 0.0, BarRounding::both());
    assert_eq!(geometry.len(), 2);
    assert_eq!(geometry[0].segment, PathSegment::new(200.0, 150.0));
    assert_eq!(
        geometry[0].path,
        "M 40 200 L 40 150 L 60 150 L 60 200 Q 50,210 40,200 Z"
    );
    assert_eq!(
        geometry[1].path,
        "M 40 150 L 40 100 Q 50,90 60,100 L 60 150 Z"
    );
}
