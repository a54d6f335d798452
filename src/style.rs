//! Chart style configuration consumed by the axis layout pipeline.
//!
//! Every field has a default, so a minimal JSON document such as
//! `{"kind": "bar"}` is a complete style:
//!
//! ```rust
//! use chartaxis::style::ChartStyle;
//! use chartaxis::{BaselinePolicy, ChartKind};
//!
//! let style = ChartStyle::from_json_str(r#"{"kind": "bar", "baseline": {"floor": -5.0}}"#)?;
//! assert_eq!(style.kind, ChartKind::Bar);
//! assert_eq!(style.baseline, BaselinePolicy::ObservedMinimumWithFloor(-5.0));
//! # Ok::<(), chartaxis::ChartError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::labels::{AxisLabels, NumberLocale};
use crate::models::{ChartKind, ChartOrientation, DataSet, PoiMarker};
use crate::range::{BaselinePolicy, TopLinePolicy};
use crate::stats;

/// Default axis label font size in pixels.
pub const DEFAULT_FONT_PX: f64 = 12.0;

/// Where a marker's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerValue {
    Fixed(f64),
    /// Mean of every finite point in the data set.
    Average,
}

impl MarkerValue {
    pub fn resolve(&self, data: &DataSet) -> Result<PoiMarker> {
        let value = match *self {
            Self::Fixed(v) => v,
            Self::Average => stats::average(data)?,
        };
        Ok(PoiMarker::new(value))
    }
}

/// How a marker's value label is anchored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerLabel {
    /// On the value axis, offset past the widest axis label.
    Axis { specifier: String },
    /// Across the middle of the frame.
    Center { specifier: String },
    /// Line only.
    #[default]
    None,
}

/// One point-of-interest marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub value: MarkerValue,
    #[serde(default)]
    pub label: MarkerLabel,
    /// Optional caption placed before the value in the label text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MarkerSpec {
    pub fn fixed(value: f64, label: MarkerLabel) -> Self {
        Self {
            value: MarkerValue::Fixed(value),
            label,
            title: None,
        }
    }

    pub fn average(label: MarkerLabel) -> Self {
        Self {
            value: MarkerValue::Average,
            label,
            title: None,
        }
    }
}

/// Style options that drive range, labels, and marker placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub orientation: ChartOrientation,
    pub kind: ChartKind,
    pub baseline: BaselinePolicy,
    pub top_line: TopLinePolicy,
    pub axis_labels: AxisLabels,
    /// Locale tag for digit grouping and decimal separators (e.g. `"en"`, `"de"`).
    pub locale: String,
    pub font_px: f64,
    pub markers: Vec<MarkerSpec>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            orientation: ChartOrientation::default(),
            kind: ChartKind::default(),
            baseline: BaselinePolicy::default(),
            top_line: TopLinePolicy::default(),
            axis_labels: AxisLabels::default(),
            locale: "en".into(),
            font_px: DEFAULT_FONT_PX,
            markers: Vec::new(),
        }
    }
}

impl ChartStyle {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a style from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn number_locale(&self) -> NumberLocale {
        NumberLocale::from_tag(&self.locale)
    }
}
