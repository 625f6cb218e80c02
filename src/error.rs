//! Error types for per-record parsing and validation.

use thiserror::Error;

/// A single malformed input record.
///
/// These are recovered where the record is read: the record is dropped, a
/// diagnostic is logged and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid range {start}-{end}: {reason}")]
    InvalidRange {
        start: String,
        end: String,
        reason: String,
    },
    #[error("invalid network {network}: {reason}")]
    InvalidNetwork { network: String, reason: String },
}

impl CidrError {
    pub(crate) fn range(start: impl ToString, end: impl ToString, reason: impl ToString) -> Self {
        CidrError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn network(network: impl ToString, reason: impl ToString) -> Self {
        CidrError::InvalidNetwork {
            network: network.to_string(),
            reason: reason.to_string(),
        }
    }
}
