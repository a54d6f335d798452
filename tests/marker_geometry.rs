use chartaxis::geometry::{
    AXIS_LABEL_PADDING, marker_line, position_center, position_on_axis, value_coordinate,
};
use chartaxis::{ChartKind, ChartOrientation, Point, RenderFrame};

const TOL: f64 = 1e-9;

const ALL: [(ChartOrientation, ChartKind); 4] = [
    (ChartOrientation::Vertical, ChartKind::Line),
    (ChartOrientation::Vertical, ChartKind::Bar),
    (ChartOrientation::Horizontal, ChartKind::Line),
    (ChartOrientation::Horizontal, ChartKind::Bar),
];

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < TOL && (a.y - b.y).abs() < TOL
}

#[test]
fn vertical_line_midpoint_maps_to_half_height() {
    let frame = RenderFrame::new(100.0, 200.0);
    let label_w = 30.0;
    let p = position_on_axis(
        frame,
        50.0,
        0.0,
        100.0,
        ChartOrientation::Vertical,
        ChartKind::Line,
        label_w,
    );
    assert_eq!(p, Point::new(-4.0 - label_w / 2.0, 100.0));
}

#[test]
fn vertical_axis_offset_clears_labels() {
    let frame = RenderFrame::new(100.0, 200.0);
    for kind in [ChartKind::Line, ChartKind::Bar] {
        let p = position_on_axis(frame, 10.0, 0.0, 100.0, ChartOrientation::Vertical, kind, 0.0);
        assert_eq!(p.x, -AXIS_LABEL_PADDING);
        let p = position_on_axis(frame, 10.0, 0.0, 100.0, ChartOrientation::Vertical, kind, 48.0);
        assert_eq!(p.x, -28.0);
    }
}

#[test]
fn vertical_line_and_bar_formulas() {
    let frame = RenderFrame::new(320.0, 240.0);
    // value 30 over [10, 10 + 80]
    let line = value_coordinate(frame, 30.0, 10.0, 80.0, ChartOrientation::Vertical, ChartKind::Line);
    let bar = value_coordinate(frame, 30.0, 10.0, 80.0, ChartOrientation::Vertical, ChartKind::Bar);
    assert!((line - ((30.0 - 10.0) * -(240.0 / 80.0) + 240.0)).abs() < TOL);
    assert!((bar - (240.0 - (30.0 - 10.0) / 80.0 * 240.0)).abs() < TOL);
    assert!((bar - 180.0).abs() < TOL);
}

#[test]
fn horizontal_maps_value_to_x() {
    let frame = RenderFrame::new(400.0, 100.0);
    for kind in [ChartKind::Line, ChartKind::Bar] {
        let axis = position_on_axis(frame, 75.0, 0.0, 100.0, ChartOrientation::Horizontal, kind, 20.0);
        assert!(close(axis, Point::new(300.0, -10.0)), "{axis:?}");
        let center = position_center(frame, 75.0, 0.0, 100.0, ChartOrientation::Horizontal, kind);
        assert!(close(center, Point::new(300.0, 50.0)), "{center:?}");
    }
}

#[test]
fn center_variant_uses_frame_middle() {
    let frame = RenderFrame::new(100.0, 200.0);
    for kind in [ChartKind::Line, ChartKind::Bar] {
        let p = position_center(frame, 25.0, 0.0, 100.0, ChartOrientation::Vertical, kind);
        assert!(close(p, Point::new(50.0, 150.0)), "{kind:?} {p:?}");
    }
}

#[test]
fn minimum_maps_to_baseline_edge() {
    let frame = RenderFrame::new(250.0, 180.0);
    for (orientation, kind) in ALL {
        let c = value_coordinate(frame, -3.0, -3.0, 12.0, orientation, kind);
        match orientation {
            ChartOrientation::Vertical => assert!((c - frame.height).abs() < TOL),
            ChartOrientation::Horizontal => assert!(c.abs() < TOL),
        }
    }
}

#[test]
fn marker_lines_span_the_frame() {
    let frame = RenderFrame::new(200.0, 100.0);
    let (a, b) = marker_line(frame, 50.0, 0.0, 100.0, ChartOrientation::Vertical, ChartKind::Bar);
    assert!(close(a, Point::new(0.0, 50.0)));
    assert!(close(b, Point::new(200.0, 50.0)));

    let (a, b) = marker_line(frame, 25.0, 0.0, 100.0, ChartOrientation::Horizontal, ChartKind::Line);
    assert!(close(a, Point::new(50.0, 0.0)));
    assert!(close(b, Point::new(50.0, 100.0)));
}

#[test]
fn mappings_are_bit_identical_on_repeat() {
    let frame = RenderFrame::new(123.4, 567.8);
    for (orientation, kind) in ALL {
        let a = position_on_axis(frame, 0.37, 0.01, 0.999, orientation, kind, 17.3);
        let b = position_on_axis(frame, 0.37, 0.01, 0.999, orientation, kind, 17.3);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}
