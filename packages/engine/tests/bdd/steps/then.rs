//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use cucumber::then;
use isbn_engine::{IsbnError, Validity};

use crate::world::IsbnWorld;

#[then(expr = "the normalized form is {string}")]
fn assert_normalized(world: &mut IsbnWorld, expected: String) {
    assert_eq!(world.parsed().normalized(), expected);
}

#[then(expr = "the kind is {string}")]
fn assert_kind(world: &mut IsbnWorld, expected: String) {
    assert_eq!(world.parsed().kind().as_str(), expected);
}

#[then("the identifier is valid")]
fn assert_valid(world: &mut IsbnWorld) {
    let isbn = world.parsed();
    assert!(
        isbn.is_valid(),
        "Expected {} to be valid, got {:?}",
        isbn.raw(),
        isbn.validity()
    );
}

#[then("the identifier is invalid with a checksum mismatch")]
fn assert_checksum_mismatch(world: &mut IsbnWorld) {
    let validity = world.parsed().validity();
    assert!(
        matches!(validity, Validity::ChecksumMismatch { .. }),
        "Expected a checksum mismatch, got {validity:?}"
    );
}

#[then("the identifier is not an ISBN")]
fn assert_wrong_length(world: &mut IsbnWorld) {
    let validity = world.parsed().validity();
    assert!(
        matches!(validity, Validity::WrongLength { .. }),
        "Expected a length failure, got {validity:?}"
    );
}

#[then("the identifier has malformed digits")]
fn assert_malformed(world: &mut IsbnWorld) {
    assert_eq!(world.parsed().validity(), Validity::MalformedDigits);
}

#[then("parsing fails with invalid input")]
fn assert_invalid_input(world: &mut IsbnWorld) {
    assert_eq!(world.parse_error, Some(IsbnError::InvalidInput));
}

#[then(expr = "the hyphenated form is {string}")]
fn assert_hyphenated(world: &mut IsbnWorld, expected: String) {
    match &world.hyphenated {
        Some(Ok(actual)) => assert_eq!(actual, &expected),
        other => panic!("Expected hyphenated output, got {other:?}"),
    }
}

#[then(expr = "hyphenation fails with {string}")]
fn assert_hyphenation_error(world: &mut IsbnWorld, variant: String) {
    let err = match &world.hyphenated {
        Some(Err(err)) => err,
        other => panic!("Expected a hyphenation error, got {other:?}"),
    };
    let actual = match err {
        IsbnError::NotHyphenatable(_) => "NotHyphenatable",
        IsbnError::UnknownRangeKey(_) => "UnknownRangeKey",
        IsbnError::NoMatchingRange { .. } => "NoMatchingRange",
        other => panic!("Unexpected error: {other}"),
    };
    assert_eq!(actual, variant);
}

#[then(expr = "the check digit is {string}")]
fn assert_check_digit(world: &mut IsbnWorld, expected: String) {
    match &world.check_digit {
        Some(Ok(c)) => assert_eq!(c.to_string(), expected),
        other => panic!("Expected a check digit, got {other:?}"),
    }
}

#[then(expr = "the check digit computation fails with unsupported length {int}")]
fn assert_unsupported_length(world: &mut IsbnWorld, length: usize) {
    assert_eq!(
        world.check_digit,
        Some(Err(IsbnError::UnsupportedLength(length)))
    );
}
