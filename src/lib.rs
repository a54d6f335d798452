//! chartaxis
//!
//! Axis scaling and label geometry for line and bar charts. Pairs with the
//! `chartaxis` CLI.
//!
//! ### Features
//! - Min, max, average and summary statistics across one or more series
//! - Axis ranges from baseline (zero, minimum, floored minimum) and top-line policies
//! - Evenly spaced numeric labels with printf-style specifiers and locale grouping,
//!   or custom label text
//! - Point-of-interest marker lines and label anchors for vertical/horizontal,
//!   line/bar charts
//!
//! ### Example
//! ```rust
//! use chartaxis::{BaselinePolicy, DataSet, TopLinePolicy};
//!
//! let data = DataSet::single(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let range = chartaxis::range::resolve(&data, BaselinePolicy::Zero, TopLinePolicy::ObservedMaximum)?;
//! assert_eq!(range.min_value, 0.0);
//! assert_eq!(range.max_value, 5.0);
//! assert!((range.span - 5.001).abs() < 1e-12);
//! # Ok::<(), chartaxis::ChartError>(())
//! ```

pub mod axis;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod models;
pub mod range;
pub mod stats;
pub mod style;

pub use axis::{AxisLayout, PlacedMarker};
pub use error::{ChartError, Result};
pub use geometry::{HeuristicTextMeasurer, LabelMetrics, TextMeasurer};
pub use labels::AxisLabels;
pub use models::{ChartKind, ChartOrientation, DataSet, Point, PoiMarker, RenderFrame, Series};
pub use range::{BaselinePolicy, ResolvedRange, TopLinePolicy};
