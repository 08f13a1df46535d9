//! Errors raised while encoding leaves or building and querying a whitelist tree

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, WhitelistError>;

/// Every failure is a validation failure surfaced to the caller as-is.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhitelistError {
    /// No whitelist entries
    #[error("Invalid empty whitelist")]
    EmptyInput,
    /// Signature without parameters
    #[error("Invalid empty signature definition")]
    EmptySignature,
    /// Odd entry count while padding is disabled
    #[error("Whitelist entries must be even, got {count}")]
    UnevenWhitelist { count: usize },
    /// Type name outside the supported vocabulary
    #[error("Unknown type `{0}`")]
    UnknownType(String),
    /// A record lacks the field a named parameter asks for
    #[error("Source item has no field `{name}` required by parameter {position}")]
    MissingField { position: usize, name: String },
    /// A record has fewer fields than the signature has parameters
    #[error("Source item has less attributes than Leaf Signature parameters: {found} < {expected}")]
    InsufficientFields { expected: usize, found: usize },
    /// Value count differs from parameter count
    #[error("Leaf values do not match length of Leaf Signature parameters: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// No leaf of the tree has the requested hash
    #[error("Leaf not found in tree")]
    LeafNotFound,
    /// Leaf index past the last leaf
    #[error("Leaf index {index} out of range for {len} leaves")]
    IndexOutOfRange { index: usize, len: usize },
    /// A value cannot be encoded as its parameter's type
    #[error("Value at position {position} is a {found}, expected {expected}")]
    TypeMismatch {
        position: usize,
        expected: String,
        found: &'static str,
    },
    /// A value has the right kind but a malformed or oversized content
    #[error("Invalid value at position {position}: {reason}")]
    InvalidValue { position: usize, reason: String },
    /// JSON input that is not an array of all-objects or all-arrays
    #[error("Invalid leaf source: {0}")]
    InvalidSource(String),
}
