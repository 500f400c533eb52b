//! Range table types consumed by the hyphenation engine
//!
//! A range table maps a prefix key (EAN prefix followed by the digits of a
//! registration group, without separators) to an ordered list of
//! [`RangeRule`]s. Each rule says: when the next seven digits fall inside
//! `[start, end]`, the registrant element is `length` digits long.
//!
//! Tables are built elsewhere (the `isbn-ranges` crate parses the ISBN
//! International Agency's `RangeMessage.xml`) and only read here. Any type
//! implementing [`RangeLookup`] can back hyphenation.
//!
//! # Example
//!
//! ```
//! use isbn_engine::{RangeRule, RangeTable, RangeLookup};
//!
//! let mut table = RangeTable::new();
//! table.insert_group(
//!     "97882",
//!     Some("Norway"),
//!     vec![
//!         RangeRule::new("0000000", "1999999", 2).unwrap(),
//!         RangeRule::new("2000000", "6899999", 3).unwrap(),
//!     ],
//! );
//!
//! let rules = table.rules("97882").unwrap();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(table.agency("97882"), Some("Norway"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_SEGMENT_LEN, RANGE_WIDTH};
use crate::error::{IsbnError, Result};

/// One numeric interval of a range table entry.
///
/// # Invariants
/// - `start` and `end` are exactly seven ASCII digits and `start <= end`.
/// - `1 <= length <= 7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRangeRule", into = "RawRangeRule")]
pub struct RangeRule {
    start: String,
    end: String,
    length: u8,
}

/// Unchecked wire form of [`RangeRule`]; validated on deserialization.
#[derive(Serialize, Deserialize)]
struct RawRangeRule {
    range: String,
    length: u8,
}

impl TryFrom<RawRangeRule> for RangeRule {
    type Error = IsbnError;

    fn try_from(raw: RawRangeRule) -> Result<Self> {
        Self::from_range(&raw.range, raw.length)
    }
}

impl From<RangeRule> for RawRangeRule {
    fn from(rule: RangeRule) -> Self {
        RawRangeRule {
            range: rule.range(),
            length: rule.length,
        }
    }
}

fn is_bound(s: &str) -> bool {
    s.len() == RANGE_WIDTH && s.bytes().all(|b| b.is_ascii_digit())
}

impl RangeRule {
    /// Create a rule, validating both bounds and the segment length.
    ///
    /// # Errors
    ///
    /// Returns `IsbnError::InvalidRangeRule` if a bound is not seven
    /// digits, the bounds are reversed, or `length` is outside `1..=7`.
    pub fn new(start: impl Into<String>, end: impl Into<String>, length: u8) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if !is_bound(&start) || !is_bound(&end) {
            return Err(IsbnError::InvalidRangeRule(format!(
                "bounds must be {RANGE_WIDTH} digits, got {start}-{end}"
            )));
        }
        if start > end {
            return Err(IsbnError::InvalidRangeRule(format!(
                "start {start} is after end {end}"
            )));
        }
        if !(1..=MAX_SEGMENT_LEN).contains(&length) {
            return Err(IsbnError::InvalidRangeRule(format!(
                "length {length} outside 1..={MAX_SEGMENT_LEN} for {start}-{end}"
            )));
        }

        Ok(Self { start, end, length })
    }

    /// Parse a registry-style `"start-end"` range string.
    ///
    /// ```
    /// use isbn_engine::RangeRule;
    ///
    /// let rule = RangeRule::from_range("7000000-8499999", 4).unwrap();
    /// assert!(rule.contains("8044295"));
    /// ```
    pub fn from_range(range: &str, length: u8) -> Result<Self> {
        let (start, end) = range.split_once('-').ok_or_else(|| {
            IsbnError::InvalidRangeRule(format!("expected start-end, got {range}"))
        })?;
        Self::new(start.trim(), end.trim(), length)
    }

    /// Rule covering every remainder.
    pub fn fallback(length: u8) -> Result<Self> {
        Self::new("0000000", "9999999", length)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Registrant element length selected by this rule.
    pub fn length(&self) -> usize {
        usize::from(self.length)
    }

    /// Range in registry notation (`start-end`).
    pub fn range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    /// Whether a seven-digit remainder falls inside `[start, end]`.
    ///
    /// Bounds and remainder have equal width, so string order is numeric order.
    pub fn contains(&self, remainder: &str) -> bool {
        self.start.as_str() <= remainder && remainder <= self.end.as_str()
    }
}

impl FromStr for RangeRule {
    type Err = IsbnError;

    /// Parse `start-end:length`, e.g. `0000000-1999999:2`.
    fn from_str(s: &str) -> Result<Self> {
        let (range, length) = s.rsplit_once(':').ok_or_else(|| {
            IsbnError::InvalidRangeRule(format!("expected start-end:length, got {s}"))
        })?;
        let length = length
            .trim()
            .parse::<u8>()
            .map_err(|_| IsbnError::InvalidRangeRule(format!("bad length in {s}")))?;
        Self::from_range(range, length)
    }
}

impl std::fmt::Display for RangeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.start, self.end, self.length)
    }
}

/// Read access to a range table.
///
/// This is the only interface the hyphenation engine needs.
pub trait RangeLookup {
    /// Ordered rules stored under `key`, or `None` if the key is absent.
    fn rules(&self, key: &str) -> Option<&[RangeRule]>;

    /// Name of the agency responsible for `key`, if known.
    fn agency(&self, _key: &str) -> Option<&str> {
        None
    }

    fn contains_key(&self, key: &str) -> bool {
        self.rules(key).is_some()
    }
}

/// Rules and agency name registered under one prefix key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    pub rules: Vec<RangeRule>,
}

/// In-memory range table keyed by prefix.
///
/// Serializes to JSON as `{ "97882": { "agency": ..., "rules": [...] } }`,
/// the format of the loader's side-car cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable {
    groups: BTreeMap<String, RangeGroup>,
}

impl RangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the rules for a prefix key.
    ///
    /// Separators in `key` are removed, so `"978-82"` and `"97882"` are
    /// the same key.
    pub fn insert_group(
        &mut self,
        key: &str,
        agency: Option<&str>,
        rules: Vec<RangeRule>,
    ) -> Option<RangeGroup> {
        let key: String = key.chars().filter(char::is_ascii_digit).collect();
        self.groups.insert(
            key,
            RangeGroup {
                agency: agency.map(str::to_string),
                rules,
            },
        )
    }

    /// Append one rule to a key, creating the entry if needed.
    pub fn push_rule(&mut self, key: &str, rule: RangeRule) {
        let key: String = key.chars().filter(char::is_ascii_digit).collect();
        self.groups.entry(key).or_default().rules.push(rule);
    }

    pub fn group(&self, key: &str) -> Option<&RangeGroup> {
        self.groups.get(key)
    }

    /// Iterate keys and groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RangeGroup)> {
        self.groups.iter().map(|(k, g)| (k.as_str(), g))
    }

    /// Number of prefix keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of rules across all keys.
    pub fn rule_count(&self) -> usize {
        self.groups.values().map(|g| g.rules.len()).sum()
    }
}

impl RangeLookup for RangeTable {
    fn rules(&self, key: &str) -> Option<&[RangeRule]> {
        self.groups.get(key).map(|g| g.rules.as_slice())
    }

    fn agency(&self, key: &str) -> Option<&str> {
        self.groups.get(key).and_then(|g| g.agency.as_deref())
    }
}

impl RangeLookup for HashMap<String, Vec<RangeRule>> {
    fn rules(&self, key: &str) -> Option<&[RangeRule]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl<T: RangeLookup + ?Sized> RangeLookup for &T {
    fn rules(&self, key: &str) -> Option<&[RangeRule]> {
        (**self).rules(key)
    }

    fn agency(&self, key: &str) -> Option<&str> {
        (**self).agency(key)
    }
}

impl<T: RangeLookup + ?Sized> RangeLookup for std::sync::Arc<T> {
    fn rules(&self, key: &str) -> Option<&[RangeRule]> {
        (**self).rules(key)
    }

    fn agency(&self, key: &str) -> Option<&str> {
        (**self).agency(key)
    }
}
