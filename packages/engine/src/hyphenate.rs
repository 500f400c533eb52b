//! Range-based hyphenation
//!
//! Element boundaries inside an ISBN are not fixed-width. The registration
//! group and registrant element lengths are decided by numeric sub-ranges
//! published by the ISBN International Agency, supplied here through a
//! [`RangeLookup`].
//!
//! # Algorithm
//!
//! 1. Work on a 13-digit string: ISBN-10s get the `978` prefix, which is
//!    used for lookup only and never displayed.
//! 2. Find the longest prefix of that string present in the table, down to
//!    three characters. This key is the EAN prefix plus registration group.
//! 3. Take the next seven digits (truncated, then right-padded with `0`)
//!    and find the first rule whose `[start, end]` contains them.
//! 4. The rule's length is the registrant element; the publication element
//!    is what remains before the check digit.
//!
//! Digits are only ever regrouped, never changed.
//!
//! # Example
//!
//! ```
//! use isbn_engine::{hyphenate, Isbn, RangeRule, RangeTable};
//!
//! let mut table = RangeTable::new();
//! table.insert_group("9780", None, vec![
//!     RangeRule::from_range("0000000-1999999", 2).unwrap(),
//!     RangeRule::from_range("2000000-6999999", 3).unwrap(),
//!     RangeRule::from_range("7000000-8499999", 4).unwrap(),
//! ]);
//!
//! let isbn = Isbn::parse("080442957x").unwrap();
//! assert_eq!(hyphenate(&isbn, &table, "-").unwrap(), "0-8044-2957-X");
//! ```

use serde::Serialize;

use crate::classify::Kind;
use crate::config::{BOOKLAND_PREFIX, DEFAULT_SEPARATOR, EAN_PREFIX_LEN, MIN_KEY_LEN, RANGE_WIDTH};
use crate::error::{IsbnError, Result};
use crate::identifier::Isbn;
use crate::range::RangeLookup;

/// The elements of a hyphenated ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsbnParts {
    /// Kind of the source identifier; ISBN-10 output omits the EAN prefix
    pub kind: Kind,
    /// `978` or `979`; implicit for ISBN-10
    pub ean_prefix: String,
    pub registration_group: String,
    pub registrant: String,
    pub publication: String,
    pub check_digit: char,
    /// Agency responsible for the registration group, if the table knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
}

impl IsbnParts {
    /// Join the displayed elements with `separator`.
    ///
    /// Empty elements are skipped, so a table that resolves to a bare EAN
    /// prefix never yields doubled separators.
    pub fn join(&self, separator: &str) -> String {
        let check = self.check_digit.to_string();
        let ean = match self.kind {
            Kind::Isbn13 => Some(self.ean_prefix.as_str()),
            _ => None,
        };

        ean.into_iter()
            .chain([
                self.registration_group.as_str(),
                self.registrant.as_str(),
                self.publication.as_str(),
                check.as_str(),
            ])
            .filter(|element| !element.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl std::fmt::Display for IsbnParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

/// Canonical 13-character working string for lookup.
fn working_digits(isbn: &Isbn) -> Result<String> {
    match isbn.kind() {
        Kind::Isbn10 => Ok(format!("{BOOKLAND_PREFIX}{}", isbn.normalized())),
        Kind::Isbn13 => Ok(isbn.normalized().to_string()),
        Kind::Unknown => Err(IsbnError::NotHyphenatable(isbn.raw().to_string())),
    }
}

/// Longest prefix of `digits` present in `table`, at least `MIN_KEY_LEN` long.
pub fn resolve_key<'a>(digits: &'a str, table: &impl RangeLookup) -> Result<&'a str> {
    (MIN_KEY_LEN..=digits.len())
        .rev()
        .map(|len| &digits[..len])
        .find(|candidate| table.contains_key(candidate))
        .ok_or_else(|| IsbnError::UnknownRangeKey(digits.to_string()))
}

/// Fixed-width value compared against range rules.
///
/// Takes at most `RANGE_WIDTH` digits and right-pads with `0`. Padding only
/// happens when the key leaves fewer than seven digits, which real tables
/// never do; the padded value is an approximation and may select a
/// boundary rule.
pub fn range_remainder(rest: &str) -> String {
    let take = rest.len().min(RANGE_WIDTH);
    format!("{:0<width$}", &rest[..take], width = RANGE_WIDTH)
}

/// Split a valid identifier into its elements.
///
/// # Errors
///
/// - `NotHyphenatable` if the identifier is not valid.
/// - `UnknownRangeKey` if no prefix of three or more digits is in the table.
/// - `NoMatchingRange` if no rule under the resolved key covers the remainder.
pub fn segments(isbn: &Isbn, table: &impl RangeLookup) -> Result<IsbnParts> {
    if !isbn.is_valid() {
        return Err(IsbnError::NotHyphenatable(isbn.raw().to_string()));
    }

    let digits = working_digits(isbn)?;
    if !digits.is_ascii() {
        return Err(IsbnError::NotHyphenatable(isbn.raw().to_string()));
    }

    let key = resolve_key(&digits, table)?;
    let (ean_prefix, registration_group) = key.split_at(EAN_PREFIX_LEN);

    let rest = &digits[key.len()..];
    let remainder = range_remainder(rest);

    let rule = table
        .rules(key)
        .and_then(|rules| rules.iter().find(|rule| rule.contains(&remainder)))
        .ok_or_else(|| IsbnError::NoMatchingRange {
            key: key.to_string(),
            remainder: remainder.clone(),
        })?;

    tracing::debug!(
        isbn = %isbn.normalized(),
        key,
        remainder = %remainder,
        rule = %rule,
        "Matched range rule"
    );

    // Everything after the key except the check digit.
    let body = &rest[..rest.len().saturating_sub(1)];
    let (registrant, publication) = body.split_at(rule.length().min(body.len()));

    let check_digit = digits
        .chars()
        .last()
        .ok_or_else(|| IsbnError::NotHyphenatable(isbn.raw().to_string()))?;

    Ok(IsbnParts {
        kind: isbn.kind(),
        ean_prefix: ean_prefix.to_string(),
        registration_group: registration_group.to_string(),
        registrant: registrant.to_string(),
        publication: publication.to_string(),
        check_digit,
        agency: table.agency(key).map(str::to_string),
    })
}

/// Format a valid identifier with `separator` between its elements.
///
/// ISBN-13 output shows five elements; ISBN-10 output shows four, without
/// the `978` prefix used for lookup.
///
/// # Errors
///
/// See [`segments`].
pub fn hyphenate(isbn: &Isbn, table: &impl RangeLookup, separator: &str) -> Result<String> {
    segments(isbn, table).map(|parts| parts.join(separator))
}

/// [`hyphenate`] with the default `-` separator.
pub fn hyphenate_default(isbn: &Isbn, table: &impl RangeLookup) -> Result<String> {
    hyphenate(isbn, table, DEFAULT_SEPARATOR)
}
