//! Configuration constants for the ISBN engine
//!
//! Fixed values of the ISBN numbering scheme and of the range-table
//! format consumed by the hyphenation engine.

/// EAN prefix implied by every ISBN-10 and used to look it up in range tables.
pub const BOOKLAND_PREFIX: &str = "978";

/// Second EAN prefix allocated to ISBN. Has no ISBN-10 equivalent.
pub const MUSICLAND_PREFIX: &str = "979";

/// Length of the EAN prefix at the start of every range-table key.
pub const EAN_PREFIX_LEN: usize = 3;

/// Width of range rule bounds and of the remainder compared against them.
pub const RANGE_WIDTH: usize = 7;

/// Shortest range-table key the prefix search will try.
///
/// Every real key holds at least the 3-digit EAN prefix.
pub const MIN_KEY_LEN: usize = EAN_PREFIX_LEN;

/// Largest registrant element length a range rule may declare.
pub const MAX_SEGMENT_LEN: u8 = 7;

/// Separator used by [`crate::hyphenate::hyphenate_default`] and `Display` impls.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Normalized length of an ISBN-10.
pub const ISBN10_LEN: usize = 10;

/// Normalized length of an ISBN-13.
pub const ISBN13_LEN: usize = 13;
