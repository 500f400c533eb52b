//! Digit normalizer
//!
//! Reduces arbitrary user input (hyphens, spaces, prefixes like `ISBN:`)
//! to the bare `0-9`/`X` form every other stage works on.

/// Strip everything except digits and `X`, uppercasing `x`.
///
/// An `X` is only kept as the final character; an `x` or `X` followed by
/// more retained characters is dropped. Never fails: input without any
/// digits yields an empty string, which classifies as unknown.
///
/// Dropping a misplaced `X` loses information. Callers that validate use
/// [`has_misplaced_x`] on the raw input to reject it.
///
/// # Examples
///
/// ```
/// use isbn_engine::normalize;
///
/// assert_eq!(normalize("0-8044-2957-x"), "080442957X");
/// assert_eq!(normalize("ISBN 978-82-15-01538-5"), "9788215015385");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(input: &str) -> String {
    let kept: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'x' || *c == 'X')
        .collect();

    let last = kept.len().saturating_sub(1);
    kept.iter()
        .enumerate()
        .filter_map(|(i, c)| match c {
            'x' | 'X' if i == last => Some('X'),
            'x' | 'X' => None,
            d => Some(*d),
        })
        .collect()
}

/// Whether `input` holds an `x`/`X` followed by another digit or `X`.
///
/// ```
/// use isbn_engine::normalize::has_misplaced_x;
///
/// assert!(has_misplaced_x("87X5740845"));
/// assert!(has_misplaced_x("Box 87-574-0845-9"));
/// assert!(!has_misplaced_x("0-8044-2957-x"));
/// ```
pub fn has_misplaced_x(input: &str) -> bool {
    let mut retained = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'x' || *c == 'X')
        .peekable();

    while let Some(c) = retained.next() {
        if matches!(c, 'x' | 'X') && retained.peek().is_some() {
            return true;
        }
    }
    false
}
