//! Error types for the entire crate.
//!
//! We use `thiserror` for structured error values. Every failure carries the
//! offending identifier(s) rather than a bare message string, and nothing is
//! swallowed or defaulted: callers always see an explicit `Err`.

use thiserror::Error;

/// Errors from the frame-identifier ordering comparator
///
/// Ordering failures are fatal only to the specific ordering operation
/// (serialization, sub-profile table layout), never to the Profile itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("frame identifier(s) without numeric suffix: {}", offenders.join(", "))]
    MalformedIdentifier { offenders: Vec<String> },
}

/// Errors that can occur while parsing raw profile records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid profile format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during call-tree construction or metric queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A leaf or ancestor identifier is missing from the frame table.
    /// The partially built tree must not be used.
    #[error("frame identifier not present in frame table: {0}")]
    UnresolvedFrame(String),

    /// CPU consumption ratio requested on a tree whose root has zero
    /// inclusive samples.
    #[error("CPU consumption ratio is undefined: root has zero inclusive samples")]
    UndefinedRatio,
}

/// Errors that can occur during sub-profile extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("frame identifier not present in frame table: {0}")]
    UnresolvedFrame(String),

    #[error("failed to order extracted frame table: {0}")]
    Order(#[from] OrderError),
}

/// Errors that can occur during JSON re-encoding
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to order frame table for serialization: {0}")]
    Order(#[from] OrderError),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
