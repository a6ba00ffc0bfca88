//! Then step definitions
//!
//! Assertions on the outcome of the last step.

use chilean_rut::schema::json_schema_with;
use chilean_rut::{calculate_verifier, RutError};
use cucumber::then;

use crate::world::{error_kind, RutWorld};

#[then("the RUT is accepted")]
fn rut_accepted(world: &mut RutWorld) {
    let _ = world.accepted();
}

#[then(regex = r#"^the cleaned form is "(.*)"$"#)]
fn cleaned_form(world: &mut RutWorld, expected: String) {
    assert_eq!(world.accepted().as_str(), expected);
}

#[then(regex = r#"^formatted with a dash it reads "(.*)"$"#)]
fn dash_format(world: &mut RutWorld, expected: String) {
    assert_eq!(world.accepted().with_dash(), expected);
}

#[then(regex = r#"^formatted with dots it reads "(.*)"$"#)]
fn dots_format(world: &mut RutWorld, expected: String) {
    assert_eq!(world.accepted().with_dots(), expected);
}

#[then(regex = r#"^it fails with "(\w+)"$"#)]
fn fails_with(world: &mut RutWorld, kind: String) {
    match &world.error {
        Some(err) => assert_eq!(error_kind(err), kind, "unexpected error: {err}"),
        None => panic!("Expected failure '{kind}', but got {:?}", world.rut),
    }
}

#[then(regex = r#"^the error message is "(.*)"$"#)]
fn error_message(world: &mut RutWorld, expected: String) {
    let err = world
        .error
        .as_ref()
        .unwrap_or_else(|| panic!("Expected an error, but got {:?}", world.rut));
    assert_eq!(err.to_string(), expected);
}

#[then(regex = r#"^the check digit of "(\d+)" is "(.)"$"#)]
fn check_digit(_world: &mut RutWorld, number: String, expected: String) {
    assert_eq!(calculate_verifier(&number).to_string(), expected);
}

#[then("switching the locale fails")]
fn locale_switch_failed(world: &mut RutWorld) {
    assert!(
        matches!(world.locale_error, Some(RutError::UnsupportedLocale(_))),
        "expected UnsupportedLocale, got {:?}",
        world.locale_error
    );
}

#[then(regex = r#"^the current locale is "(.*)"$"#)]
fn current_locale(world: &mut RutWorld, expected: String) {
    assert_eq!(world.catalog.current_locale(), expected);
}

#[then(regex = r#"^the schema type is "(.*)"$"#)]
fn schema_type(world: &mut RutWorld, expected: String) {
    assert_eq!(json_schema_with(&world.catalog).schema_type, expected);
}

#[then(regex = r#"^the schema description is "(.*)"$"#)]
fn schema_description(world: &mut RutWorld, expected: String) {
    assert_eq!(json_schema_with(&world.catalog).description, expected);
}

#[then("the schema does not advertise a pattern")]
fn schema_without_pattern(world: &mut RutWorld) {
    let schema = json_schema_with(&world.catalog).to_json();
    assert!(schema.get("pattern").is_none(), "schema: {schema}");
}
