//! ISBN Engine
//!
//! Validation, classification and hyphenation of International Standard
//! Book Numbers. This library provides:
//! - Normalization of free-form input to bare digits
//! - ISBN-10 and ISBN-13 check digit computation and verification
//! - Range-based hyphenation against a registry-supplied range table
//! - ISBN-10 / ISBN-13 conversion
//!
//! The engine does no I/O. Range tables are built by a separate loader
//! (see the `isbn-ranges` crate) and passed in through [`RangeLookup`].
//!
//! # Example
//!
//! ```
//! use isbn_engine::{Isbn, Kind, RangeRule, RangeTable};
//!
//! let mut table = RangeTable::new();
//! table.insert_group("97882", Some("Norway"), vec![
//!     RangeRule::from_range("0000000-1999999", 2).unwrap(),
//! ]);
//!
//! let isbn = Isbn::parse("9788215015385").unwrap();
//! assert_eq!(isbn.kind(), Kind::Isbn13);
//! assert!(isbn.is_valid());
//! assert_eq!(isbn.hyphenate(&table, "-").unwrap(), "978-82-15-01538-5");
//! ```

pub mod checksum;
pub mod classify;
pub mod config;
pub mod error;
pub mod hyphenate;
pub mod identifier;
pub mod normalize;
pub mod range;

// Re-export commonly used items
pub use checksum::{check_digit, verify, Validity};
pub use classify::{classify, Kind};
pub use config::DEFAULT_SEPARATOR;
pub use error::{IsbnError, Result};
pub use hyphenate::{hyphenate, hyphenate_default, segments, IsbnParts};
pub use identifier::Isbn;
pub use normalize::normalize;
pub use range::{RangeGroup, RangeLookup, RangeRule, RangeTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
