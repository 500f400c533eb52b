//! The parsed ISBN identifier
//!
//! [`Isbn`] keeps the caller's raw input next to its normalized form, its
//! [`Kind`] and its [`Validity`]. All derived fields are computed once in
//! [`Isbn::parse`]; the value is immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use isbn_engine::{Isbn, Kind};
//!
//! let isbn = Isbn::parse("87-574-0845-9").unwrap();
//! assert_eq!(isbn.normalized(), "8757408459");
//! assert_eq!(isbn.kind(), Kind::Isbn10);
//! assert!(isbn.is_valid());
//!
//! let typo = Isbn::parse("87-574-0845-8").unwrap();
//! assert!(!typo.is_valid());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{self, Validity};
use crate::classify::{classify, Kind};
use crate::config::{BOOKLAND_PREFIX, EAN_PREFIX_LEN};
use crate::error::{IsbnError, Result};
use crate::hyphenate::{self, IsbnParts};
use crate::normalize::{has_misplaced_x, normalize};
use crate::range::RangeLookup;

/// A parsed, possibly invalid, ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn {
    raw: String,
    normalized: String,
    kind: Kind,
    validity: Validity,
}

impl Isbn {
    /// Parse user input into an identifier.
    ///
    /// Parsing only fails for empty input; anything else yields an `Isbn`
    /// whose [`validity`](Self::validity) says whether it is usable.
    ///
    /// # Errors
    ///
    /// Returns `IsbnError::InvalidInput` if `raw` is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(IsbnError::InvalidInput);
        }

        let normalized = normalize(raw);
        let kind = classify(&normalized);
        // normalize drops a non-final X, so it has to be caught on the raw input.
        let validity = if has_misplaced_x(raw) {
            Validity::MalformedDigits
        } else {
            checksum::verify(&normalized, kind)
        };

        tracing::trace!(raw, normalized = %normalized, kind = %kind, ?validity, "Parsed ISBN");

        Ok(Self {
            raw: raw.to_string(),
            normalized,
            kind,
            validity,
        })
    }

    /// Parse input that may be missing altogether.
    ///
    /// # Errors
    ///
    /// Returns `IsbnError::InvalidInput` for `None` or an empty string.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        raw.ok_or(IsbnError::InvalidInput).and_then(Self::parse)
    }

    /// The input exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Digits and trailing `X` only.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// The final character of the normalized form.
    pub fn check_digit(&self) -> Option<char> {
        self.normalized.chars().last()
    }

    /// Format with separators according to `table`.
    ///
    /// See [`hyphenate::hyphenate`] for the algorithm and errors.
    pub fn hyphenate(&self, table: &impl RangeLookup, separator: &str) -> Result<String> {
        hyphenate::hyphenate(self, table, separator)
    }

    /// Split into elements according to `table`.
    pub fn segments(&self, table: &impl RangeLookup) -> Result<IsbnParts> {
        hyphenate::segments(self, table)
    }

    /// The ISBN-13 form of this identifier.
    ///
    /// ISBN-10s get the `978` prefix and a recomputed check digit;
    /// ISBN-13s are returned unchanged.
    ///
    /// # Errors
    ///
    /// `NotConvertible` if the identifier is not valid.
    pub fn to_isbn13(&self) -> Result<Isbn> {
        if !self.is_valid() {
            return Err(IsbnError::NotConvertible(format!(
                "{} is not a valid ISBN",
                self.raw
            )));
        }
        match self.kind {
            Kind::Isbn13 => Ok(self.clone()),
            _ => {
                let payload = format!("{BOOKLAND_PREFIX}{}", &self.normalized[..9]);
                let check = checksum::check_digit(&payload)?;
                Isbn::parse(&format!("{payload}{check}"))
            }
        }
    }

    /// The ISBN-10 form of this identifier.
    ///
    /// # Errors
    ///
    /// `NotConvertible` if the identifier is invalid, or is an ISBN-13
    /// outside the `978` prefix (those have no ISBN-10 form).
    pub fn to_isbn10(&self) -> Result<Isbn> {
        if !self.is_valid() {
            return Err(IsbnError::NotConvertible(format!(
                "{} is not a valid ISBN",
                self.raw
            )));
        }
        match self.kind {
            Kind::Isbn10 => Ok(self.clone()),
            _ => {
                let Some(rest) = self.normalized.strip_prefix(BOOKLAND_PREFIX) else {
                    return Err(IsbnError::NotConvertible(format!(
                        "{} has prefix {}, only {BOOKLAND_PREFIX} maps to ISBN-10",
                        self.raw,
                        &self.normalized[..EAN_PREFIX_LEN]
                    )));
                };
                let payload = &rest[..9];
                let check = checksum::check_digit(payload)?;
                Isbn::parse(&format!("{payload}{check}"))
            }
        }
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = IsbnError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.raw
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
