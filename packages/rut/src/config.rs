//! Configuration constants for RUT validation
//!
//! Centralized values used by the validator and the message catalog:
//! - The structural RUT pattern and its digit bounds
//! - The environment variable that seeds the default locale
//! - The built-in English and Spanish message tables

use regex::Regex;
use std::sync::LazyLock;

/// Environment variable read once at startup to pick the default locale.
pub const LOCALE_ENV_VAR: &str = "RUT_LOCALE";

/// Locale used when `RUT_LOCALE` is not set.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale consulted when the active locale lacks a message.
pub const FALLBACK_LOCALE: &str = "en";

/// Minimum number of significant digits (excluding the check character).
pub const MIN_NUMBER_DIGITS: usize = 5;

/// Maximum number of significant digits (excluding the check character).
pub const MAX_NUMBER_DIGITS: usize = 8;

/// Cleaned RUT: 5 to 8 ASCII digits followed by one check character.
///
/// `[0-9]` rather than `\d`: the latter also matches non-ASCII decimal digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static RUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,8}[0-9K]$").expect("valid regex"));

/// Built-in English messages.
pub const MESSAGES_EN: &[(&str, &str)] = &[
    (
        "description",
        "Chilean RUT in format XXXXXXXX-Y. Validates and cleans the input.",
    ),
    ("invalid_format", "Invalid RUT format."),
    ("invalid_check_digit", "Invalid RUT check digit."),
];

/// Built-in Spanish messages.
pub const MESSAGES_ES: &[(&str, &str)] = &[
    (
        "description",
        "RUT chileno en formato XXXXXXXX-Y. Valida y limpia el valor ingresado.",
    ),
    ("invalid_format", "Formato de RUT inválido."),
    ("invalid_check_digit", "Dígito verificador del RUT inválido."),
];

/// Locale tables registered in every new catalog.
pub const BUILTIN_LOCALES: &[(&str, &[(&str, &str)])] =
    &[("en", MESSAGES_EN), ("es", MESSAGES_ES)];
