use crate::error::{ChartError, Result};
use crate::models::DataSet;
use serde::{Deserialize, Serialize};

/// Summary statistics across every finite point of a data set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub series: usize,
    pub count: usize,
    /// Points skipped because they were NaN or infinite.
    pub skipped: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

fn finite_values(data: &DataSet) -> impl Iterator<Item = f64> + '_ {
    data.values().filter(|v| v.is_finite())
}

/// Smallest finite value of all series.
pub fn min_value(data: &DataSet) -> Result<f64> {
    finite_values(data)
        .reduce(f64::min)
        .ok_or(ChartError::EmptyDataSet)
}

/// Largest finite value of all series.
pub fn max_value(data: &DataSet) -> Result<f64> {
    finite_values(data)
        .reduce(f64::max)
        .ok_or(ChartError::EmptyDataSet)
}

/// Arithmetic mean of all finite values.
pub fn average(data: &DataSet) -> Result<f64> {
    let (sum, count) = finite_values(data).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return Err(ChartError::EmptyDataSet);
    }
    Ok(sum / count as f64)
}

/// Compute min, max, mean and median over the flattened data set.
pub fn summary(data: &DataSet) -> Result<Summary> {
    let mut vals: Vec<f64> = finite_values(data).collect();
    if vals.is_empty() {
        return Err(ChartError::EmptyDataSet);
    }
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let mean = vals.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        vals[count / 2]
    } else {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    };
    Ok(Summary {
        series: data.series.len(),
        count,
        skipped: data.len() - count,
        min: vals[0],
        max: vals[count - 1],
        mean,
        median,
    })
}
