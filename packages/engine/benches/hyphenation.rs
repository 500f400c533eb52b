//! Benchmarks for parsing and hyphenation.

#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use isbn_engine::{hyphenate, Isbn, RangeRule, RangeTable};
use std::hint::black_box;

fn table() -> RangeTable {
    let mut table = RangeTable::new();
    for group in 0..=9 {
        let key = format!("978{group}");
        let rules = [
            ("0000000-1999999", 2),
            ("2000000-6999999", 3),
            ("7000000-8499999", 4),
            ("8500000-8999999", 5),
            ("9000000-9499999", 6),
            ("9500000-9999999", 7),
        ]
        .iter()
        .map(|(range, length)| RangeRule::from_range(range, *length).unwrap())
        .collect();
        table.insert_group(&key, None, rules);
    }
    table
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_isbn13_formatted", |b| {
        b.iter(|| Isbn::parse(black_box("978-0-19-929781-8")))
    });
    c.bench_function("parse_isbn10_with_x", |b| {
        b.iter(|| Isbn::parse(black_box("0-8044-2957-x")))
    });
}

fn bench_hyphenate(c: &mut Criterion) {
    let table = table();
    let isbn13 = Isbn::parse("9780199297818").unwrap();
    let isbn10 = Isbn::parse("080442957X").unwrap();

    c.bench_function("hyphenate_isbn13", |b| {
        b.iter(|| hyphenate(black_box(&isbn13), &table, "-"))
    });
    c.bench_function("hyphenate_isbn10", |b| {
        b.iter(|| hyphenate(black_box(&isbn10), &table, "-"))
    });
}

criterion_group!(benches, bench_parse, bench_hyphenate);
criterion_main!(benches);
