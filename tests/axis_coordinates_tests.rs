use chart_geometry::core::{
    AxisCoordinateInput, AxisCoordinates, AxisOrientation, AxisPosition, Canvas, Margins,
    resolve_axis_coordinates,
};

fn input(
    orientation: AxisOrientation,
    position: AxisPosition,
    margins: Margins,
) -> AxisCoordinateInput {
    AxisCoordinateInput {
        orientation,
        position,
        canvas: Canvas::new(400.0, 300.0),
        margins,
        break_pixel: f64::NAN,
    }
}

#[test]
fn bottom_axis_sits_on_bottom_margin_and_spans_between_side_margins() {
    let margins = Margins::new(10.0, 20.0, 30.0, 40.0);
    let coordinates = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Bottom,
        margins,
    ));
    assert_eq!(coordinates, AxisCoordinates::new(30.0, 280.0, 360.0, 280.0));
}

#[test]
fn top_axis_sits_on_top_margin() {
    let margins = Margins::new(10.0, 20.0, 30.0, 40.0);
    let coordinates =
        resolve_axis_coordinates(&input(AxisOrientation::Horizontal, AxisPosition::Top, margins));
    assert_eq!(coordinates, AxisCoordinates::new(30.0, 10.0, 360.0, 10.0));
}

#[test]
fn left_and_right_axes_span_between_top_and_bottom_margins() {
    let margins = Margins::new(10.0, 20.0, 30.0, 40.0);
    let left =
        resolve_axis_coordinates(&input(AxisOrientation::Vertical, AxisPosition::Left, margins));
    let right =
        resolve_axis_coordinates(&input(AxisOrientation::Vertical, AxisPosition::Right, margins));
    assert_eq!(left, AxisCoordinates::new(30.0, 10.0, 30.0, 280.0));
    assert_eq!(right, AxisCoordinates::new(360.0, 10.0, 360.0, 280.0));
}

#[test]
fn center_axes_use_canvas_midlines() {
    let margins = Margins::default();
    let horizontal = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Center,
        margins,
    ));
    let vertical = resolve_axis_coordinates(&input(
        AxisOrientation::Vertical,
        AxisPosition::Center,
        margins,
    ));
    assert!((horizontal.y1 - 150.0).abs() <= 1e-9);
    assert!((vertical.x1 - 200.0).abs() <= 1e-9);
}

#[test]
fn custom_axis_uses_break_pixel() {
    let mut custom = input(
        AxisOrientation::Horizontal,
        AxisPosition::Custom,
        Margins::default(),
    );
    custom.break_pixel = 123.0;
    let coordinates = resolve_axis_coordinates(&custom);
    assert_eq!(coordinates.y1, 123.0);
    assert_eq!(coordinates.y2, 123.0);
}

#[test]
fn mismatched_position_falls_back_to_orientation_default() {
    let coordinates = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Left,
        Margins::default(),
    ));
    assert_eq!(coordinates, AxisCoordinates::new(0.0, 300.0, 400.0, 300.0));
}

#[test]
fn margins_swallowing_canvas_produce_degenerate_axis() {
    let coordinates = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Bottom,
        Margins::new(0.0, 0.0, 200.0, 200.0),
    ));
    assert!(coordinates.is_degenerate(AxisOrientation::Horizontal));
    assert_eq!(coordinates.length(AxisOrientation::Horizontal), 0.0);
}

#[test]
fn increasing_one_margin_moves_only_that_endpoint() {
    let base = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Bottom,
        Margins::new(0.0, 0.0, 10.0, 10.0),
    ));
    let wider_left = resolve_axis_coordinates(&input(
        AxisOrientation::Horizontal,
        AxisPosition::Bottom,
        Margins::new(0.0, 0.0, 25.0, 10.0),
    ));
    assert!((wider_left.x1 - base.x1 - 15.0).abs() <= 1e-9);
    assert_eq!(wider_left.x2, base.x2);
}
