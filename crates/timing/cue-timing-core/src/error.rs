//! Error types for the timing engine.

use serde::{Deserialize, Serialize};

/// Input-validation failures, detected synchronously before any state
/// mutation and always surfaced to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimingError {
    /// Stagger parameters out of range
    #[error("invalid stagger spec: {reason}")]
    InvalidStaggerSpec { reason: String },

    /// Stagger origin index outside the item range
    #[error("stagger origin index {index} out of range for {count} items")]
    InvalidOriginIndex { index: usize, count: usize },

    /// First timeline entry positioned relative to a previous entry
    #[error("first timeline entry '{id}' has a relative anchor and nothing to be relative to")]
    InvalidFirstAnchor { id: String },

    /// Stored timeline document failed to parse
    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl TimingError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidStaggerSpec { .. }
            | Self::InvalidOriginIndex { .. }
            | Self::InvalidFirstAnchor { .. } => "validation",
            Self::Parse { .. } => "parse",
        }
    }
}
