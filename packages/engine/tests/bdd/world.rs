//! World struct for Cucumber BDD tests
//!
//! Holds the input, parsed identifier and outcomes across the steps of a scenario.

use cucumber::World;
use isbn_engine::{Isbn, IsbnError, RangeTable};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, Default, World)]
pub struct IsbnWorld {
    /// Range table built from the Background
    pub table: RangeTable,
    /// Raw input; `None` models a missing value
    pub input: Option<String>,
    /// Parsed identifier (if parsing succeeded)
    pub isbn: Option<Isbn>,
    /// Error from parsing
    pub parse_error: Option<IsbnError>,
    /// Result of the last hyphenation
    pub hyphenated: Option<Result<String, IsbnError>>,
    /// Result of the last check digit computation
    pub check_digit: Option<Result<char, IsbnError>>,
}

impl IsbnWorld {
    /// Parse the current input, storing either the identifier or the error.
    pub fn parse_input(&mut self) {
        match Isbn::parse_optional(self.input.as_deref()) {
            Ok(isbn) => {
                self.isbn = Some(isbn);
                self.parse_error = None;
            }
            Err(e) => {
                self.isbn = None;
                self.parse_error = Some(e);
            }
        }
    }

    /// The parsed identifier; fails the step if parsing did not succeed.
    pub fn parsed(&self) -> &Isbn {
        self.isbn.as_ref().unwrap_or_else(|| {
            panic!(
                "Expected a parsed ISBN, got error: {:?}",
                self.parse_error
            )
        })
    }
}
