//! Check digit computation and verification
//!
//! Two weighted-sum algorithms, selected by [`Kind`]:
//!
//! - **ISBN-10**: weights `10, 9, ..., 2` over the first nine digits,
//!   check value `(11 - sum % 11) % 11`, where 10 is written `X`.
//! - **ISBN-13**: alternating weights `1, 3` over the first twelve digits,
//!   check value `(10 - sum % 10) % 10`.

use serde::{Deserialize, Serialize};

use crate::classify::Kind;
use crate::config::{ISBN10_LEN, ISBN13_LEN};
use crate::error::{IsbnError, Result};

/// Outcome of verifying an identifier's check digit.
///
/// Distinguishes "not an ISBN at all" from "an ISBN with a typo".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validity {
    /// Check digit matches
    Valid,
    /// Normalized length is neither 10 nor 13
    WrongLength { length: usize },
    /// Digits are well-formed but the check digit is wrong
    ChecksumMismatch { expected: char, found: char },
    /// A weighted position holds a non-digit
    MalformedDigits,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Short human-readable reason, used by the CLI.
    pub fn describe(&self) -> String {
        match self {
            Validity::Valid => "valid".to_string(),
            Validity::WrongLength { length } => {
                format!("not an ISBN ({length} characters, expected 10 or 13)")
            }
            Validity::ChecksumMismatch { expected, found } => {
                format!("check digit is {found}, expected {expected}")
            }
            Validity::MalformedDigits => {
                "contains a non-digit in a weighted position".to_string()
            }
        }
    }
}

/// Map a raw check value (0..=10) to its check character.
fn check_char(value: u32) -> char {
    if value < 10 {
        char::from_digit(value, 10).unwrap_or('0')
    } else {
        'X'
    }
}

/// Weighted digit sum; `None` if any character is not a digit.
fn weighted_sum(payload: &str, weight: impl Fn(usize) -> u32) -> Option<u32> {
    payload
        .chars()
        .enumerate()
        .try_fold(0u32, |sum, (i, c)| Some(sum + weight(i) * c.to_digit(10)?))
}

/// Compute the ISBN-10 check character for a 9-digit payload.
pub fn isbn10_check_digit(payload: &str) -> Result<char> {
    if payload.len() != ISBN10_LEN - 1 {
        return Err(IsbnError::UnsupportedLength(payload.len()));
    }
    // weight(i) = 10 - i, i < 9
    let sum = weighted_sum(payload, |i| 10 - i as u32)
        .ok_or_else(|| IsbnError::MalformedDigits(payload.to_string()))?;
    Ok(check_char((11 - sum % 11) % 11))
}

/// Compute the ISBN-13 check character for a 12-digit payload.
pub fn isbn13_check_digit(payload: &str) -> Result<char> {
    if payload.len() != ISBN13_LEN - 1 {
        return Err(IsbnError::UnsupportedLength(payload.len()));
    }
    let sum = weighted_sum(payload, |i| if i % 2 == 1 { 3 } else { 1 })
        .ok_or_else(|| IsbnError::MalformedDigits(payload.to_string()))?;
    Ok(check_char((10 - sum % 10) % 10))
}

/// Compute the check digit for a 9- or 12-digit prefix.
///
/// The algorithm is chosen by length: 9 digits use ISBN-10, 12 use ISBN-13.
///
/// # Errors
///
/// `UnsupportedLength` for any other length, `MalformedDigits` if the
/// prefix holds a non-digit.
///
/// # Examples
///
/// ```
/// use isbn_engine::check_digit;
///
/// assert_eq!(check_digit("080442957").unwrap(), 'X');
/// assert_eq!(check_digit("978821501538").unwrap(), '5');
/// assert!(check_digit("12345").is_err());
/// ```
pub fn check_digit(partial: &str) -> Result<char> {
    match partial.len() {
        9 => isbn10_check_digit(partial),
        12 => isbn13_check_digit(partial),
        other => Err(IsbnError::UnsupportedLength(other)),
    }
}

/// Verify the check digit of a normalized identifier of the given kind.
pub fn verify(normalized: &str, kind: Kind) -> Validity {
    let wrong_length = Validity::WrongLength {
        length: normalized.len(),
    };
    if kind.expected_len() != Some(normalized.len()) {
        return wrong_length;
    }
    if !normalized.is_ascii() {
        return Validity::MalformedDigits;
    }

    let (payload, found) = normalized.split_at(normalized.len() - 1);
    let found = found.chars().next().map(|c| c.to_ascii_uppercase());

    let computed = match kind {
        Kind::Isbn10 => isbn10_check_digit(payload),
        Kind::Isbn13 => isbn13_check_digit(payload),
        Kind::Unknown => return wrong_length,
    };

    match (computed, found) {
        (Ok(expected), Some(found)) if expected == found => Validity::Valid,
        (Ok(expected), Some(found)) => Validity::ChecksumMismatch { expected, found },
        _ => Validity::MalformedDigits,
    }
}
