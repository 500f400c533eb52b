//! When step definitions
//!
//! Steps that run the engine.

use cucumber::when;
use isbn_engine::check_digit;

use crate::world::IsbnWorld;

#[when("the input is parsed")]
fn parse_input(world: &mut IsbnWorld) {
    world.parse_input();
}

#[when("the identifier is hyphenated")]
fn hyphenate_default(world: &mut IsbnWorld) {
    let result = world.parsed().hyphenate(&world.table, "-");
    world.hyphenated = Some(result);
}

#[when(expr = "the identifier is hyphenated with separator {string}")]
fn hyphenate_with(world: &mut IsbnWorld, separator: String) {
    let result = world.parsed().hyphenate(&world.table, &separator);
    world.hyphenated = Some(result);
}

#[when(expr = "the check digit of {string} is computed")]
fn compute_check_digit(world: &mut IsbnWorld, partial: String) {
    world.check_digit = Some(check_digit(&partial));
}
