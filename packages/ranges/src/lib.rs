//! ISBN range registry loader.
//!
//! Builds the [`isbn_engine::RangeTable`] the hyphenation engine consumes
//! from the ISBN International Agency's `RangeMessage.xml`, and caches it
//! as JSON so the document is parsed once.
//!
//! # Example
//!
//! ```
//! use isbn_ranges::message::parse_range_message;
//! use isbn_engine::Isbn;
//!
//! let xml = r#"<ISBNRangeMessage><RegistrationGroups>
//!   <Group><Prefix>978-82</Prefix><Agency>Norway</Agency><Rules>
//!     <Rule><Range>0000000-1999999</Range><Length>2</Length></Rule>
//!   </Rules></Group>
//! </RegistrationGroups></ISBNRangeMessage>"#;
//!
//! let message = parse_range_message(xml).unwrap();
//! let isbn = Isbn::parse("9788215015385").unwrap();
//! assert_eq!(isbn.hyphenate(&message.table, "-").unwrap(), "978-82-15-01538-5");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: File names, limits and prefix validation
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`message`]: `RangeMessage.xml` parsing
//! - [`cache`]: Side-car cache handling
//! - [`cli`]: Command-line interface

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod xml;

// Re-export commonly used items
pub use cache::{load_table, refresh_cache, CachePolicy};
pub use error::{RangesError, Result};
pub use message::{parse_range_message, RangeMessage};
