//! Two-pass axis layout.
//!
//! 1. [`AxisLayout::measure`] resolves the range, generates the axis labels and
//!    measures their extents.
//! 2. [`AxisLayout::place_markers`] maps each marker into a frame, using the
//!    label extents from pass 1 to keep axis-anchored labels clear of the axis.
//!
//! ```rust
//! use chartaxis::axis::AxisLayout;
//! use chartaxis::style::{ChartStyle, MarkerLabel, MarkerSpec};
//! use chartaxis::{DataSet, HeuristicTextMeasurer, RenderFrame};
//!
//! let data = DataSet::single(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let mut style = ChartStyle::default();
//! style.markers.push(MarkerSpec::average(MarkerLabel::Center { specifier: "%.1f".into() }));
//!
//! let layout = AxisLayout::measure(&data, &style, &HeuristicTextMeasurer)?;
//! let placed = layout.place_markers(RenderFrame::new(300.0, 200.0))?;
//! assert_eq!(placed[0].text.as_deref(), Some("3.0"));
//! # Ok::<(), chartaxis::ChartError>(())
//! ```

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::geometry::{self, LabelMetrics, TextMeasurer};
use crate::labels::{self, LabelFormat, NumberLocale};
use crate::models::{ChartKind, ChartOrientation, DataSet, Point, PoiMarker, RenderFrame};
use crate::range::{self, ResolvedRange};
use crate::style::{ChartStyle, MarkerLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Axis,
    Center,
}

/// A marker whose value and label format were fixed during measurement.
#[derive(Debug, Clone, PartialEq)]
struct MeasuredMarker {
    marker: PoiMarker,
    label: Option<(Anchor, LabelFormat)>,
    title: Option<String>,
}

/// Result of the measuring pass.
///
/// Holds everything marker placement needs, so pass 2 only takes a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub range: ResolvedRange,
    /// Axis labels in ascending value order.
    pub labels: Vec<String>,
    pub metrics: LabelMetrics,
    pub orientation: ChartOrientation,
    pub kind: ChartKind,
    #[serde(skip)]
    locale: NumberLocale,
    #[serde(skip)]
    markers: Vec<MeasuredMarker>,
}

/// A marker mapped into a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMarker {
    pub value: f64,
    pub line: (Point, Point),
    /// Label anchor, absent for [`MarkerLabel::None`].
    pub label_anchor: Option<Point>,
    pub text: Option<String>,
}

impl AxisLayout {
    /// Pass 1: range, labels, label extents and marker values.
    ///
    /// ### Errors
    /// - an empty data set
    /// - an invalid label count
    /// - a malformed axis or marker label specifier
    pub fn measure<M: TextMeasurer + ?Sized>(
        data: &DataSet,
        style: &ChartStyle,
        measurer: &M,
    ) -> Result<Self> {
        let range = range::resolve(data, style.baseline, style.top_line)?;
        let locale = style.number_locale();
        let labels = labels::labels(&range, &style.axis_labels, &locale)?;
        let metrics = LabelMetrics::measure(&labels, measurer, style.font_px);

        let markers = style
            .markers
            .iter()
            .map(|spec| -> Result<MeasuredMarker> {
                let label = match &spec.label {
                    MarkerLabel::Axis { specifier } => {
                        Some((Anchor::Axis, LabelFormat::parse(specifier)?))
                    }
                    MarkerLabel::Center { specifier } => {
                        Some((Anchor::Center, LabelFormat::parse(specifier)?))
                    }
                    MarkerLabel::None => None,
                };
                Ok(MeasuredMarker {
                    marker: spec.value.resolve(data)?,
                    label,
                    title: spec.title.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "measured {} axis labels over {:?}, widest {:.1}px, {} markers",
            labels.len(),
            range,
            metrics.max_width,
            markers.len()
        );
        Ok(Self {
            range,
            labels,
            metrics,
            orientation: style.orientation,
            kind: style.kind,
            locale,
            markers,
        })
    }

    /// Labels ordered top-to-bottom for a vertical axis.
    pub fn display_labels(&self) -> Vec<String> {
        labels::display_order(&self.labels)
    }

    /// Pass 2: place every measured marker into `frame`.
    ///
    /// ### Errors
    /// [`ChartError::InvalidFrame`](crate::ChartError::InvalidFrame) for negative or
    /// non-finite frame dimensions.
    pub fn place_markers(&self, frame: RenderFrame) -> Result<Vec<PlacedMarker>> {
        let frame = frame.validated()?;
        let (min_value, span) = (self.range.min_value, self.range.span);
        let (orientation, kind) = (self.orientation, self.kind);

        let placed = self
            .markers
            .iter()
            .map(|m| {
                let value = m.marker.value;
                let line = geometry::marker_line(frame, value, min_value, span, orientation, kind);
                let (label_anchor, text) = match &m.label {
                    Some((anchor, fmt)) => {
                        let point = match anchor {
                            Anchor::Axis => geometry::position_on_axis(
                                frame,
                                value,
                                min_value,
                                span,
                                orientation,
                                kind,
                                self.metrics.max_width,
                            ),
                            Anchor::Center => geometry::position_center(
                                frame,
                                value,
                                min_value,
                                span,
                                orientation,
                                kind,
                            ),
                        };
                        let formatted = fmt.format(value, &self.locale);
                        let text = match &m.title {
                            Some(title) => format!("{title} {formatted}"),
                            None => formatted,
                        };
                        (Some(point), Some(text))
                    }
                    None => (None, None),
                };
                PlacedMarker {
                    value,
                    line,
                    label_anchor,
                    text,
                }
            })
            .collect();
        Ok(placed)
    }
}
