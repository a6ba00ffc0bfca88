//! When step definitions
//!
//! Steps that run construction, framework validation or locale switches.

use chilean_rut::schema::{validate_input, validate_value_with};
use chilean_rut::{ChileanRut, RutInput};
use cucumber::when;
use serde_json::Value;

use crate::world::RutWorld;

#[when(regex = r#"^I construct a RUT from "(.*)"$"#)]
fn construct(world: &mut RutWorld, raw: String) {
    let result = ChileanRut::new_with(&raw, &world.catalog);
    world.record(result);
}

#[when("I construct a RUT from its dash format")]
fn construct_from_dash(world: &mut RutWorld) {
    let dashed = world.accepted().with_dash();
    let result = ChileanRut::new_with(&dashed, &world.catalog);
    world.record(result);
}

#[when(regex = r#"^the framework validates the text "(.*)"$"#)]
fn validate_text(world: &mut RutWorld, text: String) {
    let result = validate_value_with(&Value::String(text), &world.catalog);
    world.record(result);
}

#[when(regex = r"^the framework validates the JSON value (.+)$")]
fn validate_json(world: &mut RutWorld, json: String) {
    let value: Value = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Invalid JSON in step '{json}': {e}"));
    let result = validate_value_with(&value, &world.catalog);
    world.record(result);
}

#[when("the framework receives the constructed RUT")]
fn validate_instance(world: &mut RutWorld) {
    let input = RutInput::Validated(world.accepted().clone());
    let result = validate_input(input, &world.catalog);
    world.record(result);
}

#[when(regex = r#"^I switch the locale to "(.*)"$"#)]
fn switch_locale(world: &mut RutWorld, code: String) {
    world.locale_error = world.catalog.set_locale(&code).err();
}
