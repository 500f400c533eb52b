//! Given step definitions
//!
//! Steps that set up the input and the range table.

use cucumber::{gherkin::Step, given};
use isbn_engine::RangeRule;

use crate::world::IsbnWorld;

#[given(regex = r#"^the input "(.*)"$"#)]
fn set_input(world: &mut IsbnWorld, raw: String) {
    world.input = Some(raw);
}

#[given("no input")]
fn set_no_input(world: &mut IsbnWorld) {
    world.input = None;
}

/// Table columns: key | range | length. Rows for one key keep their order.
#[given("the range table:")]
fn set_range_table(world: &mut IsbnWorld, step: &Step) {
    let table = step.table.as_ref().expect("range table step needs a data table");

    for row in table.rows.iter().skip(1) {
        let [key, range, length] = row.as_slice() else {
            panic!("expected key | range | length, got {row:?}");
        };
        let length: u8 = length.parse().expect("length must be a number");
        let rule = RangeRule::from_range(range, length)
            .unwrap_or_else(|e| panic!("invalid rule {range}: {e}"));
        world.table.push_rule(key, rule);
    }
}
