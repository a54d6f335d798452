//! Value-to-pixel mapping for point-of-interest markers.
//!
//! Vertical charts map a value to Y (inverted: screen Y grows downward),
//! horizontal charts map it to X. Each `(orientation, kind)` pair has its own
//! pure mapping, selected in [`value_coordinate`].

pub mod text;

pub use text::{HeuristicTextMeasurer, LabelMetrics, TextMeasurer};

use crate::models::{ChartKind, ChartOrientation, Point, RenderFrame};

/// Gap between the axis labels and a marker label placed on the axis edge.
pub const AXIS_LABEL_PADDING: f64 = 4.0;

fn vertical_line_y(frame: RenderFrame, value: f64, min_value: f64, range: f64) -> f64 {
    (value - min_value) * -(frame.height / range) + frame.height
}

fn vertical_bar_y(frame: RenderFrame, value: f64, min_value: f64, range: f64) -> f64 {
    frame.height - (value - min_value) / range * frame.height
}

fn horizontal_x(frame: RenderFrame, value: f64, min_value: f64, range: f64) -> f64 {
    (value - min_value) / range * frame.width
}

/// Pixel coordinate of `value` along the value axis: Y for vertical charts, X for horizontal.
pub fn value_coordinate(
    frame: RenderFrame,
    value: f64,
    min_value: f64,
    range: f64,
    orientation: ChartOrientation,
    kind: ChartKind,
) -> f64 {
    match (orientation, kind) {
        (ChartOrientation::Vertical, ChartKind::Line) => {
            vertical_line_y(frame, value, min_value, range)
        }
        (ChartOrientation::Vertical, ChartKind::Bar) => {
            vertical_bar_y(frame, value, min_value, range)
        }
        (ChartOrientation::Horizontal, _) => horizontal_x(frame, value, min_value, range),
    }
}

/// Anchor for a marker label drawn on the value axis, clear of the axis labels.
///
/// `max_label_width` is the widest axis label measured in the previous layout pass.
pub fn position_on_axis(
    frame: RenderFrame,
    value: f64,
    min_value: f64,
    range: f64,
    orientation: ChartOrientation,
    kind: ChartKind,
    max_label_width: f64,
) -> Point {
    let along = value_coordinate(frame, value, min_value, range, orientation, kind);
    match orientation {
        ChartOrientation::Vertical => {
            Point::new(-(max_label_width / 2.0) - AXIS_LABEL_PADDING, along)
        }
        ChartOrientation::Horizontal => Point::new(along, -(max_label_width / 2.0)),
    }
}

/// Anchor for a marker label drawn across the middle of the frame.
pub fn position_center(
    frame: RenderFrame,
    value: f64,
    min_value: f64,
    range: f64,
    orientation: ChartOrientation,
    kind: ChartKind,
) -> Point {
    let along = value_coordinate(frame, value, min_value, range, orientation, kind);
    match orientation {
        ChartOrientation::Vertical => Point::new(frame.width / 2.0, along),
        ChartOrientation::Horizontal => Point::new(along, frame.height / 2.0),
    }
}

/// Endpoints of the marker line spanning the frame at `value`.
pub fn marker_line(
    frame: RenderFrame,
    value: f64,
    min_value: f64,
    range: f64,
    orientation: ChartOrientation,
    kind: ChartKind,
) -> (Point, Point) {
    let along = value_coordinate(frame, value, min_value, range, orientation, kind);
    match orientation {
        ChartOrientation::Vertical => (Point::new(0.0, along), Point::new(frame.width, along)),
        ChartOrientation::Horizontal => (Point::new(along, 0.0), Point::new(along, frame.height)),
    }
}
