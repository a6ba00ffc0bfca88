//! Chilean RUT
//!
//! A validated identifier type for Chilean national identification numbers
//! (RUT). This library provides functionality for:
//! - Cleaning raw text (dots, dashes, spaces) into the canonical digit form
//! - Verifying the modulo-11 check character
//! - Formatting as `XXXXXXXX-Y` or `XX.XXX.XXX-Y`
//! - Localized (English/Spanish) validation messages
//! - Serde and schema integration for hosting frameworks
//!
//! # Example
//!
//! ```
//! use chilean_rut::{locale, ChileanRut, RutError};
//!
//! let rut = ChileanRut::new("12.345.670-k")?;
//! assert_eq!(rut.with_dots(), "12.345.670-K");
//! assert_eq!(serde_json::to_string(&rut).unwrap(), "\"12345670K\"");
//!
//! let catalog = locale::MessageCatalog::builtin();
//! catalog.set_locale("es")?;
//! let err = ChileanRut::new_with("12.345.670-1", &catalog).unwrap_err();
//! assert_eq!(err.to_string(), "Formato de RUT inválido.");
//! # Ok::<(), RutError>(())
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod rut;
pub mod schema;

// Re-export commonly used items
pub use error::{Result, RutError};
pub use locale::{MessageCatalog, MessageKey};
pub use rut::{calculate_verifier, clean, is_valid, ChileanRut};
pub use schema::{
    json_schema, serialize, validate_input, validate_value, RutInput, StringSchema,
    TextValidatable,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
