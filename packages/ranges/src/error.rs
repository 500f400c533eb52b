//! Error types for the range loader and CLI.
//!
//! `RangesError` wraps the engine's `IsbnError` so CLI commands can use `?`
//! on both registry loading and ISBN operations.

use std::path::PathBuf;

use isbn_engine::IsbnError;
use thiserror::Error;

/// Main error type for the range loader library.
#[derive(Debug, Error)]
pub enum RangesError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// A `Rule` element could not be turned into a range rule.
    #[error("Invalid rule under prefix {prefix}: {detail}")]
    InvalidRule { prefix: String, detail: String },

    /// Prefix is not an EAN prefix optionally followed by a group.
    #[error("Invalid prefix: '{0}'. Expected 978 or 979, optionally followed by -<group> (e.g., 978-82)")]
    InvalidPrefix(String),

    /// Registry document exceeds the size limit.
    #[error("Range message is {size} bytes, limit is {max}")]
    TooLarge { size: usize, max: usize },

    /// Neither a cache nor a registry document was found.
    #[error("Missing {}; download it from https://www.isbn-international.org/range_file_generation", .0.display())]
    MissingRangeMessage(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache (de)serialization error.
    #[error("Cache error: {0}")]
    Json(#[from] serde_json::Error),

    /// ISBN engine error.
    #[error(transparent)]
    Isbn(#[from] IsbnError),

    /// One or more inputs to `validate` were not valid ISBNs.
    #[error("{invalid} of {total} ISBNs are invalid")]
    ValidationFailed { invalid: usize, total: usize },
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, RangesError>;
