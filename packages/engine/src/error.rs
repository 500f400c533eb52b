//! Error types for the ISBN engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// Construction input was empty or missing
    #[error("ISBN must be a non-empty string")]
    InvalidInput,

    /// Digit count does not select a checksum algorithm
    #[error("Unsupported length: {0} digits (expected 9 or 12 for a check digit, 10 or 13 for an ISBN)")]
    UnsupportedLength(usize),

    /// A weighted position holds something other than a digit
    #[error("Malformed digits: {0}")]
    MalformedDigits(String),

    /// No prefix of the identifier is present in the range table
    #[error("No range table entry for any prefix of {0}")]
    UnknownRangeKey(String),

    /// The prefix was found but none of its rules cover the remainder
    #[error("No range under prefix '{key}' covers {remainder}")]
    NoMatchingRange { key: String, remainder: String },

    /// Hyphenation requested for an identifier that did not validate
    #[error("Cannot hyphenate invalid ISBN: {0}")]
    NotHyphenatable(String),

    /// A range rule supplied to the table is malformed
    #[error("Invalid range rule: {0}")]
    InvalidRangeRule(String),

    /// ISBN-10/ISBN-13 conversion is not possible for this identifier
    #[error("Cannot convert ISBN: {0}")]
    NotConvertible(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, IsbnError>;
