//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use isbn_engine::{RangeRule, RangeTable};

fn rules(ranges: &[(&str, u8)]) -> Vec<RangeRule> {
    ranges
        .iter()
        .map(|(range, length)| {
            RangeRule::from_range(range, *length)
                .unwrap_or_else(|e| panic!("bad fixture rule {range}: {e}"))
        })
        .collect()
}

/// Excerpt of the registry ranges covering the test ISBNs.
pub fn registry_table() -> RangeTable {
    let mut table = RangeTable::new();
    table.insert_group(
        "978",
        Some("International ISBN Agency"),
        rules(&[
            ("0000000-5999999", 1),
            ("6000000-6499999", 3),
            ("6500000-6799999", 2),
            ("6800000-6999999", 3),
            ("7000000-7999999", 1),
            ("8000000-9499999", 2),
            ("9500000-9899999", 3),
            ("9900000-9989999", 4),
            ("9990000-9999999", 5),
        ]),
    );
    table.insert_group(
        "979",
        Some("International ISBN Agency"),
        rules(&[("1000000-1299999", 2), ("8000000-8999999", 1)]),
    );
    table.insert_group(
        "978-0",
        Some("English language"),
        rules(&[
            ("0000000-1999999", 2),
            ("2000000-2279999", 3),
            ("2280000-2289999", 4),
            ("2290000-6479999", 3),
            ("6480000-6489999", 7),
            ("6490000-6999999", 3),
            ("7000000-8499999", 4),
            ("8500000-8999999", 5),
            ("9000000-9499999", 6),
            ("9500000-9999999", 7),
        ]),
    );
    table.insert_group(
        "978-1",
        Some("English language"),
        rules(&[
            ("0000000-0999999", 2),
            ("1000000-3999999", 3),
            ("4000000-5499999", 4),
            ("5500000-8697999", 5),
            ("8698000-9729999", 7),
            ("9730000-9877999", 4),
            ("9878000-9989999", 6),
            ("9990000-9999999", 7),
        ]),
    );
    table.insert_group(
        "978-3",
        Some("German language"),
        rules(&[
            ("0000000-0299999", 2),
            ("0300000-0339999", 3),
            ("0340000-0369999", 4),
            ("0370000-0399999", 5),
            ("0400000-1999999", 2),
            ("2000000-6999999", 3),
            ("7000000-8499999", 4),
            ("8500000-8999999", 5),
            ("9000000-9499999", 6),
            ("9500000-9539999", 7),
            ("9540000-9699999", 5),
            ("9700000-9899999", 7),
            ("9900000-9999999", 5),
        ]),
    );
    table.insert_group(
        "978-82",
        Some("Norway"),
        rules(&[
            ("0000000-1999999", 2),
            ("2000000-6899999", 3),
            ("6900000-6999999", 6),
            ("7000000-8999999", 4),
            ("9000000-9899999", 5),
            ("9900000-9999999", 6),
        ]),
    );
    table.insert_group(
        "978-87",
        Some("Denmark"),
        rules(&[
            ("0000000-2999999", 2),
            ("4000000-6499999", 3),
            ("7000000-7999999", 4),
            ("8500000-9499999", 5),
            ("9700000-9999999", 6),
        ]),
    );
    table.insert_group(
        "979-10",
        Some("France"),
        rules(&[
            ("0000000-1999999", 2),
            ("2000000-6999999", 3),
            ("7000000-8999999", 4),
            ("9000000-9759999", 5),
            ("9760000-9999999", 6),
        ]),
    );
    table
}

/// Valid ISBNs with their expected hyphenation against [`registry_table`].
pub const HYPHENATED: [(&str, &str); 10] = [
    ("8757408459", "87-574-0845-9"),
    ("8200059227", "82-00-05922-7"),
    ("8272610507", "82-7261-050-7"),
    ("080442957x", "0-8044-2957-X"),
    ("9788215015385", "978-82-15-01538-5"),
    ("9780199297818", "978-0-19-929781-8"),
    ("9781566199094", "978-1-56619-909-4"),
    ("9783161484100", "978-3-16-148410-0"),
    ("9780804429573", "978-0-8044-2957-3"),
    ("9791090636071", "979-10-90636-07-1"),
];
