//! Length classification of normalized identifiers

use serde::{Deserialize, Serialize};

use crate::config::{ISBN10_LEN, ISBN13_LEN};

/// Identifier length class.
///
/// Determined once from the normalized length and threaded through
/// checksum verification and hyphenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    /// Ten characters: nine digits plus a check digit that may be `X`
    Isbn10,
    /// Thirteen digits starting with an EAN prefix
    Isbn13,
    /// Any other length. Never valid.
    Unknown,
}

impl Kind {
    /// Stable label, as used in CLI output and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Isbn10 => "ISBN10",
            Kind::Isbn13 => "ISBN13",
            Kind::Unknown => "UNKNOWN",
        }
    }

    /// Normalized length of identifiers of this kind.
    pub fn expected_len(&self) -> Option<usize> {
        match self {
            Kind::Isbn10 => Some(ISBN10_LEN),
            Kind::Isbn13 => Some(ISBN13_LEN),
            Kind::Unknown => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a normalized identifier by length alone.
///
/// # Examples
///
/// ```
/// use isbn_engine::{classify, Kind};
///
/// assert_eq!(classify("8757408459"), Kind::Isbn10);
/// assert_eq!(classify("9788215015385"), Kind::Isbn13);
/// assert_eq!(classify("1234567"), Kind::Unknown);
/// ```
pub fn classify(normalized: &str) -> Kind {
    match normalized.len() {
        ISBN10_LEN => Kind::Isbn10,
        ISBN13_LEN => Kind::Isbn13,
        _ => Kind::Unknown,
    }
}
