//! XML helpers for walking the range message tree.

use roxmltree::Node;

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use isbn_ranges::xml::find_child;
///
/// let xml = r#"<Group><Prefix>978-82</Prefix><Rules/></Group>"#;
/// let doc = Document::parse(xml).unwrap();
/// let group = doc.root_element();
///
/// assert!(find_child(group, "Prefix").is_some());
/// assert!(find_child(group, "Agency").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Trimmed text of the named child, `None` if the child is absent or empty.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use isbn_ranges::xml::child_text;
///
/// let xml = r#"<Rule><Range> 0000000-1999999 </Range><Length/></Rule>"#;
/// let doc = Document::parse(xml).unwrap();
/// let rule = doc.root_element();
///
/// assert_eq!(child_text(rule, "Range"), Some("0000000-1999999"));
/// assert_eq!(child_text(rule, "Length"), None);
/// ```
pub fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    find_child(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
