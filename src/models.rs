use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// One ordered sequence of data values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: None,
            values: values.into(),
        }
    }

    pub fn named(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: Some(name.into()),
            values: values.into(),
        }
    }
}

/// A collection of series that share one value axis.
///
/// Accepts either `[{"name": "...", "values": [..]}, ...]` or a bare
/// `[[..], [..]]` array of arrays when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataSet {
    pub series: Vec<Series>,
}

impl DataSet {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Data set holding a single unnamed series.
    pub fn single(values: impl Into<Vec<f64>>) -> Self {
        Self::new(vec![Series::new(values)])
    }

    /// All values of all series, flattened in series order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }

    /// Total number of points, finite or not.
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl<'de> Deserialize<'de> for DataSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSeries {
            Bare(Vec<f64>),
            Full(Series),
        }

        let raw = Vec::<RawSeries>::deserialize(deserializer)?;
        let series = raw
            .into_iter()
            .map(|r| match r {
                RawSeries::Bare(values) => Series::new(values),
                RawSeries::Full(s) => s,
            })
            .collect();
        Ok(Self { series })
    }
}

/// Which screen axis carries the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartOrientation {
    /// Values grow upward along Y.
    #[default]
    Vertical,
    /// Values grow rightward along X.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

/// Size of the plotting area in pixels, supplied per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
}

impl RenderFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects non-finite or negative dimensions.
    pub fn validated(self) -> Result<Self> {
        let ok = |d: f64| d.is_finite() && d >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(ChartError::InvalidFrame {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A position in frame pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A value to highlight with a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoiMarker {
    pub value: f64,
}

impl PoiMarker {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}
