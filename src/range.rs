//! Axis range resolution from observed data and baseline/top-line policies.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::DataSet;
use crate::stats;

/// Added to every span so downstream divisions never see zero, even when
/// all data values are equal.
pub const RANGE_EPSILON: f64 = 0.001;

/// Low end of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePolicy {
    /// Axis starts at 0.
    #[default]
    Zero,
    /// Axis starts at the smallest data value.
    ObservedMinimum,
    /// Axis starts at the smaller of the data minimum and `floor`.
    #[serde(rename = "floor")]
    ObservedMinimumWithFloor(f64),
}

/// High end of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLinePolicy {
    #[default]
    ObservedMaximum,
    /// Axis ends at the larger of the data maximum and `ceiling`.
    #[serde(rename = "ceiling")]
    ObservedMaximumWithCeiling(f64),
}

/// Effective axis bounds for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub min_value: f64,
    pub max_value: f64,
    /// `(max_value - min_value) + RANGE_EPSILON`.
    pub span: f64,
}

impl ResolvedRange {
    pub fn from_bounds(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            span: (max_value - min_value) + RANGE_EPSILON,
        }
    }

    /// True when the span is not positive, i.e. the top line sits below the baseline.
    ///
    /// Happens with [`BaselinePolicy::Zero`] over all-negative data. Labels over an
    /// inverted range descend and geometry mappings flip direction.
    pub fn is_inverted(&self) -> bool {
        self.span <= 0.0
    }
}

/// Resolve the axis range of `data` under the given policies.
///
/// ### Errors
/// - [`ChartError::EmptyDataSet`](crate::ChartError::EmptyDataSet) when no finite point exists.
pub fn resolve(
    data: &DataSet,
    baseline: BaselinePolicy,
    top_line: TopLinePolicy,
) -> Result<ResolvedRange> {
    let min_value = match baseline {
        BaselinePolicy::Zero => {
            // Still fail on empty input rather than return a range for nothing.
            stats::min_value(data)?;
            0.0
        }
        BaselinePolicy::ObservedMinimum => stats::min_value(data)?,
        BaselinePolicy::ObservedMinimumWithFloor(floor) => stats::min_value(data)?.min(floor),
    };
    let max_value = match top_line {
        TopLinePolicy::ObservedMaximum => stats::max_value(data)?,
        TopLinePolicy::ObservedMaximumWithCeiling(ceiling) => {
            stats::max_value(data)?.max(ceiling)
        }
    };

    let range = ResolvedRange::from_bounds(min_value, max_value);
    if range.is_inverted() {
        warn!(
            "axis maximum {max_value} is below baseline {min_value}; span {} is not positive",
            range.span
        );
    }
    trace!("resolved range {range:?} ({baseline:?}, {top_line:?})");
    Ok(range)
}
