//! Parsing of the ISBN International Agency range message.
//!
//! `RangeMessage.xml` lists, for every EAN prefix (`EAN.UCCPrefixes`) and
//! every registration group (`RegistrationGroups`), the ranges that decide
//! how long the next element is:
//!
//! ```text
//! <Group>
//!   <Prefix>978-82</Prefix>
//!   <Agency>Norway</Agency>
//!   <Rules>
//!     <Rule><Range>0000000-1999999</Range><Length>2</Length></Rule>
//!     ...
//!   </Rules>
//! </Group>
//! ```
//!
//! Both sections are flattened into one [`RangeTable`] keyed by the prefix
//! without hyphens. Rules with length 0 mark unassigned ranges and are left
//! out, so ISBNs inside them fail hyphenation with `NoMatchingRange`.

use isbn_engine::{RangeRule, RangeTable};
use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;

use crate::config::{validate_prefix, MAX_XML_SIZE};
use crate::error::{RangesError, Result};
use crate::xml::{child_text, find_child, find_children};

/// Sections of the message holding prefix entries, with their entry tag.
const SECTIONS: [(&str, &str); 2] = [("EAN.UCCPrefixes", "EAN.UCC"), ("RegistrationGroups", "Group")];

/// A parsed range message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RangeMessage {
    /// `MessageSource`, normally "International ISBN Agency"
    pub source: Option<String>,
    /// `MessageSerialNumber`, changes with every publication
    pub serial_number: Option<String>,
    /// `MessageDate`, as published (RFC 2822-like with a zone abbreviation)
    pub date: Option<String>,
    pub table: RangeTable,
}

/// Parse a range message document.
///
/// # Errors
///
/// - `TooLarge` if the document exceeds [`MAX_XML_SIZE`]
/// - `XmlParse` if it is not well-formed XML
/// - `MissingElement` if an entry has no `Prefix`
/// - `InvalidPrefix` / `InvalidRule` for malformed entries
pub fn parse_range_message(xml: &str) -> Result<RangeMessage> {
    if xml.len() > MAX_XML_SIZE {
        return Err(RangesError::TooLarge {
            size: xml.len(),
            max: MAX_XML_SIZE,
        });
    }

    // The published file carries a DOCTYPE line.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = doc.root_element();

    let mut message = RangeMessage {
        source: child_text(root, "MessageSource").map(str::to_string),
        serial_number: child_text(root, "MessageSerialNumber").map(str::to_string),
        date: child_text(root, "MessageDate").map(str::to_string),
        table: RangeTable::new(),
    };

    for (section, entry_tag) in SECTIONS {
        let Some(section_node) = find_child(root, section) else {
            tracing::warn!(section, "Range message has no section");
            continue;
        };
        for entry in find_children(section_node, entry_tag) {
            parse_entry(entry, entry_tag, &mut message.table)?;
        }
    }

    tracing::debug!(
        serial = ?message.serial_number,
        prefixes = message.table.len(),
        rules = message.table.rule_count(),
        "Parsed range message"
    );

    Ok(message)
}

/// Parse one `EAN.UCC` or `Group` element into the table.
fn parse_entry(entry: Node<'_, '_>, context: &str, table: &mut RangeTable) -> Result<()> {
    let prefix = child_text(entry, "Prefix").ok_or_else(|| RangesError::MissingElement {
        element: "Prefix".to_string(),
        context: context.to_string(),
    })?;
    let key = validate_prefix(prefix)?;
    let agency = child_text(entry, "Agency");

    let mut rules = Vec::new();
    if let Some(rules_node) = find_child(entry, "Rules") {
        for rule_node in find_children(rules_node, "Rule") {
            if let Some(rule) = parse_rule(rule_node, prefix)? {
                rules.push(rule);
            }
        }
    }

    if rules.is_empty() {
        tracing::debug!(prefix, "Prefix has no assigned ranges");
    }
    if table.insert_group(&key, agency, rules).is_some() {
        tracing::warn!(prefix, "Duplicate prefix in range message, keeping the last");
    }
    Ok(())
}

/// Parse one `Rule`. Returns `None` for unassigned (length 0) ranges.
fn parse_rule(rule: Node<'_, '_>, prefix: &str) -> Result<Option<RangeRule>> {
    let invalid = |detail: String| RangesError::InvalidRule {
        prefix: prefix.to_string(),
        detail,
    };

    let length_text = child_text(rule, "Length")
        .ok_or_else(|| invalid("missing Length".to_string()))?;
    let length: u8 = length_text
        .parse()
        .map_err(|_| invalid(format!("Length '{length_text}' is not a number")))?;

    if length == 0 {
        tracing::debug!(prefix, range = ?child_text(rule, "Range"), "Skipping unassigned range");
        return Ok(None);
    }

    let rule = match child_text(rule, "Range") {
        Some(range) => RangeRule::from_range(range, length),
        // A lone Length applies to the whole group.
        None => RangeRule::fallback(length),
    }
    .map_err(|e| invalid(e.to_string()))?;

    Ok(Some(rule))
}
