//! Adapter for serialization and schema-validation frameworks
//!
//! Hosting frameworks hand over either a value that is already a validated
//! type or an arbitrary decoded value (modelled as [`serde_json::Value`]).
//! [`validate_input`] performs that dispatch; the type itself only has to
//! implement [`TextValidatable`].
//!
//! # Validation paths
//!
//! The framework path differs from [`ChileanRut::new`] on purpose:
//!
//! | Path | Input | Cleaning | Failure |
//! |------|-------|----------|---------|
//! | [`ChileanRut::new`] | `&str` | yes | `InvalidFormat` |
//! | [`validate_value`] | any value | no | `TypeMismatch` / `InvalidCheckDigit` |
//!
//! Text on the framework path is checked as-is, so `"12.345.678-5"` is
//! rejected there while the constructor accepts it.
//!
//! # Schema
//!
//! [`json_schema`] declares a plain string with a localized description. The
//! RUT pattern is not advertised so that uncleaned text is not rejected by
//! schema-level validators before it reaches this crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, RutError};
use crate::locale::{self, MessageCatalog, MessageKey};
use crate::rut::{is_valid, ChileanRut};

/// Types that a framework can validate from text and write back as text.
pub trait TextValidatable: Sized {
    /// Validate text exactly as received.
    ///
    /// # Errors
    ///
    /// Returns an error carrying a message localized through `catalog`.
    fn validate_text(text: &str, catalog: &MessageCatalog) -> Result<Self>;

    /// Wire representation
    fn to_wire(&self) -> String;

    /// Schema of the wire representation
    fn schema(catalog: &MessageCatalog) -> StringSchema;
}

impl TextValidatable for ChileanRut {
    fn validate_text(text: &str, catalog: &MessageCatalog) -> Result<Self> {
        if !is_valid(text) {
            tracing::debug!(input_len = text.len(), "Rejected RUT: invalid check digit");
            return Err(RutError::InvalidCheckDigit(
                catalog.message(MessageKey::InvalidCheckDigit),
            ));
        }
        ChileanRut::new_with(text, catalog)
    }

    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }

    fn schema(catalog: &MessageCatalog) -> StringSchema {
        StringSchema::new(catalog.message(MessageKey::Description))
    }
}

/// JSON schema for a string-typed wire value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringSchema {
    /// Always `"string"`
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    /// Localized description
    pub description: String,
}

impl StringSchema {
    /// String schema with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            schema_type: "string",
            description: description.into(),
        }
    }

    /// Schema as a JSON object
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "type": self.schema_type,
            "description": self.description,
        })
    }
}

/// Value handed over by a hosting framework
#[derive(Debug, Clone, PartialEq)]
pub enum RutInput<T = ChileanRut> {
    /// Already an instance of the validated type
    Validated(T),
    /// Any decoded value
    Raw(Value),
}

impl From<ChileanRut> for RutInput<ChileanRut> {
    fn from(rut: ChileanRut) -> Self {
        RutInput::Validated(rut)
    }
}

impl<T> From<Value> for RutInput<T> {
    fn from(value: Value) -> Self {
        RutInput::Raw(value)
    }
}

/// Dispatch a framework input: pass validated instances through, validate
/// anything else as text.
///
/// # Errors
///
/// See [`validate_value_with`].
pub fn validate_input<T: TextValidatable>(
    input: RutInput<T>,
    catalog: &MessageCatalog,
) -> Result<T> {
    match input {
        RutInput::Validated(value) => Ok(value),
        RutInput::Raw(value) => validate_value_with(&value, catalog),
    }
}

/// Validate an arbitrary value against the process-wide catalog.
///
/// # Errors
///
/// See [`validate_value_with`].
pub fn validate_value(value: &Value) -> Result<ChileanRut> {
    validate_value_with(value, locale::global())
}

/// Validate an arbitrary value as a `T`.
///
/// # Errors
///
/// - `RutError::TypeMismatch` if `value` is not a string
/// - whatever [`TextValidatable::validate_text`] returns for the text
///   (`RutError::InvalidCheckDigit` for [`ChileanRut`])
pub fn validate_value_with<T: TextValidatable>(
    value: &Value,
    catalog: &MessageCatalog,
) -> Result<T> {
    match value.as_str() {
        Some(text) => T::validate_text(text, catalog),
        None => Err(RutError::TypeMismatch {
            message: catalog.message(MessageKey::InvalidFormat),
            actual: json_type_name(value).to_string(),
        }),
    }
}

/// Wire form of a RUT: the cleaned digits, no separators
pub fn serialize(rut: &ChileanRut) -> String {
    rut.to_wire()
}

/// Schema with the description from the process-wide catalog
pub fn json_schema() -> StringSchema {
    json_schema_with(locale::global())
}

/// Schema with the description from `catalog`
pub fn json_schema_with(catalog: &MessageCatalog) -> StringSchema {
    ChileanRut::schema(catalog)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for ChileanRut {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChileanRut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        validate_value(&value).map_err(serde::de::Error::custom)
    }
}
