//! Error type shared by every computation in this crate.

use thiserror::Error;

/// Errors surfaced by range resolution, label generation, and marker placement.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The data set holds no finite point, so no range can be derived.
    #[error("data set contains no finite values")]
    EmptyDataSet,
    /// Numeric labels need at least two ticks to compute a step, and at most
    /// [`MAX_LABEL_COUNT`](crate::labels::MAX_LABEL_COUNT).
    #[error("numeric axis needs between 2 and {} labels, got {count}", crate::labels::MAX_LABEL_COUNT)]
    InvalidLabelCount { count: usize },
    /// The label specifier could not be parsed.
    #[error("invalid label specifier {specifier:?}: {reason}")]
    InvalidSpecifier { specifier: String, reason: String },
    /// Frame dimensions must be finite and non-negative.
    #[error("invalid render frame {width}x{height}")]
    InvalidFrame { width: f64, height: f64 },
    #[error("invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;
