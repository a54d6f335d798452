//! Axis label generation: evenly spaced numeric labels or caller-supplied text.
//!
//! - Numeric labels step from the range minimum across the full span
//! - Custom labels pass through untouched
//! - Output is always ascending; use [`display_order`] for top-to-bottom rendering

pub mod format;
pub mod locale;

pub use format::LabelFormat;
pub use locale::NumberLocale;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::range::ResolvedRange;

/// Upper bound on numeric labels per axis.
pub const MAX_LABEL_COUNT: usize = 1_000;

/// How the value axis gets its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisLabels {
    /// `count` evenly spaced values rendered with a printf-style `specifier`.
    Numeric { count: usize, specifier: String },
    /// Fixed label text. `None` renders no labels.
    Custom(Option<Vec<String>>),
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self::Numeric {
            count: 10,
            specifier: "%.0f".into(),
        }
    }
}

/// Evenly spaced tick values from `range.min_value` across `range.span`.
///
/// ### Errors
/// [`ChartError::InvalidLabelCount`] when `count` is outside `2..=MAX_LABEL_COUNT`.
pub fn label_values(range: &ResolvedRange, count: usize) -> Result<Vec<f64>> {
    if !(2..=MAX_LABEL_COUNT).contains(&count) {
        return Err(ChartError::InvalidLabelCount { count });
    }
    let step = range.span / (count - 1) as f64;
    Ok((0..count)
        .map(|i| range.min_value + step * i as f64)
        .collect())
}

/// Labels for `range` under `config`, in ascending order.
pub fn labels(
    range: &ResolvedRange,
    config: &AxisLabels,
    locale: &NumberLocale,
) -> Result<Vec<String>> {
    match config {
        AxisLabels::Custom(Some(custom)) => Ok(custom.clone()),
        AxisLabels::Custom(None) => {
            debug!("custom axis labels requested but none supplied; rendering no labels");
            Ok(Vec::new())
        }
        AxisLabels::Numeric { count, specifier } => {
            let fmt = LabelFormat::parse(specifier)?;
            let values = label_values(range, *count)?;
            Ok(values.into_iter().map(|v| fmt.format(v, locale)).collect())
        }
    }
}

/// Reverse ascending labels so the highest value comes first (top of a vertical axis).
pub fn display_order(labels: &[String]) -> Vec<String> {
    labels.iter().rev().cloned().collect()
}
