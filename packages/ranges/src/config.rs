//! Configuration constants and validation functions for the range loader.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{RangesError, Result};

/// File name of the registry document published by the ISBN International Agency.
pub const RANGE_MESSAGE_FILE: &str = "RangeMessage.xml";

/// File name of the JSON side-car cache written next to the registry document.
pub const CACHE_FILE: &str = "ranges.data";

/// Environment variable naming the directory that holds both files.
pub const RANGES_DIR_ENV: &str = "ISBN_RANGES_DIR";

/// Maximum registry document size in bytes (16 MB).
///
/// The published file is well under 1 MB; anything far larger is not a
/// range message.
pub const MAX_XML_SIZE: usize = 16 * 1024 * 1024;

/// Registry prefix pattern: EAN prefix, optionally `-` and group digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^97[89](-\d{1,7})?$").expect("valid regex"));

/// Validate a registry prefix such as `978` or `978-82`.
///
/// # Returns
/// * `Ok(key)` with separators removed, ready for a range table
/// * `Err(RangesError::InvalidPrefix)` if the format is wrong
///
/// # Examples
/// ```
/// use isbn_ranges::config::validate_prefix;
///
/// assert_eq!(validate_prefix("978-82").unwrap(), "97882");
/// assert!(validate_prefix("977-1").is_err());
/// ```
pub fn validate_prefix(prefix: &str) -> Result<String> {
    let prefix = prefix.trim();
    if PREFIX_PATTERN.is_match(prefix) {
        Ok(prefix.replace('-', ""))
    } else {
        Err(RangesError::InvalidPrefix(prefix.to_string()))
    }
}

/// Path of the registry document inside `dir`.
pub fn range_message_path(dir: &Path) -> PathBuf {
    dir.join(RANGE_MESSAGE_FILE)
}

/// Path of the side-car cache inside `dir`.
pub fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE)
}
