//! Error types for RUT validation and message catalogs

use thiserror::Error;

/// Main error type for RUT operations.
///
/// The validation variants carry the message already localized through the
/// [`MessageCatalog`](crate::locale::MessageCatalog) that was active when the
/// failure was detected.
#[derive(Error, Debug)]
pub enum RutError {
    /// Cleaned input fails the structural pattern or the check digit
    #[error("{0}")]
    InvalidFormat(String),

    /// Text presented at the framework boundary fails validation
    #[error("{0}")]
    InvalidCheckDigit(String),

    /// Framework boundary received a value that is not text
    #[error("{message} (got {actual})")]
    TypeMismatch { message: String, actual: String },

    /// Locale code not registered in the catalog
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Message catalog YAML could not be parsed
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_yaml_ng::Error),
}

/// Result type alias for RUT operations
pub type Result<T> = std::result::Result<T, RutError>;
