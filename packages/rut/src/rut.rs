//! Validated Chilean RUT value type
//!
//! A RUT is 5 to 8 significant digits followed by a check character (`0`-`9`
//! or `K`) computed with a modulo-11 checksum.
//!
//! # Examples
//!
//! ```
//! use chilean_rut::ChileanRut;
//!
//! let rut = ChileanRut::new("12.345.678-5").unwrap();
//! assert_eq!(rut.as_str(), "123456785");
//! assert_eq!(rut.with_dash(), "12345678-5");
//! assert_eq!(rut.with_dots(), "12.345.678-5");
//!
//! assert!(ChileanRut::new("12.345.678-4").is_err());
//! ```

use std::str::FromStr;

use crate::config::RUT_PATTERN;
use crate::error::{Result, RutError};
use crate::locale::{self, MessageCatalog, MessageKey};

/// A Chilean RUT that passed format and check digit validation.
///
/// Holds the cleaned form (digits plus check character, no separators). The
/// only way to obtain one is through a validating constructor, and the value
/// is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChileanRut {
    digits: String,
}

/// Strip everything except digits and `k`/`K`, then uppercase.
///
/// Total over all inputs; the result may be empty.
///
/// ```
/// use chilean_rut::clean;
///
/// assert_eq!(clean(" 12.345.670-k "), "12345670K");
/// assert_eq!(clean("abc"), "");
/// ```
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check structure and check digit of a cleaned RUT.
///
/// Text that is not already clean (separators, lowercase `k`, surrounding
/// whitespace) is rejected rather than cleaned.
pub fn is_valid(cleaned: &str) -> bool {
    if cleaned.len() < 2 || !RUT_PATTERN.is_match(cleaned) {
        return false;
    }
    // Pattern guarantees a non-empty ASCII number part and one check char
    let (number, verifier) = cleaned.split_at(cleaned.len() - 1);
    verifier.chars().next() == Some(calculate_verifier(number))
}

/// Modulo-11 check character for the significant digits of a RUT.
///
/// Digits are weighted from the rightmost with multipliers cycling
/// 2, 3, 4, 5, 6, 7. Characters other than ASCII digits are skipped.
///
/// ```
/// use chilean_rut::calculate_verifier;
///
/// assert_eq!(calculate_verifier("12345678"), '5');
/// assert_eq!(calculate_verifier("12345670"), 'K');
/// assert_eq!(calculate_verifier("12345675"), '0');
/// ```
pub fn calculate_verifier(number: &str) -> char {
    let mut total: u32 = 0;
    let mut multiplier: u32 = 2;
    for digit in number.chars().rev().filter_map(|c| c.to_digit(10)) {
        total += digit * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }
    match 11 - (total % 11) {
        11 => '0',
        10 => 'K',
        // 1..=9 after the two arms above
        remainder => char::from_digit(remainder, 10).unwrap_or('0'),
    }
}

impl ChileanRut {
    /// Clean and validate `raw`, localizing failures through the
    /// process-wide catalog.
    ///
    /// # Errors
    ///
    /// Returns `RutError::InvalidFormat` if the cleaned input fails the
    /// structural check or the check digit.
    pub fn new(raw: &str) -> Result<Self> {
        Self::new_with(raw, locale::global())
    }

    /// Like [`ChileanRut::new`], localizing failures through `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `RutError::InvalidFormat` if the cleaned input is not a valid
    /// RUT.
    pub fn new_with(raw: &str, catalog: &MessageCatalog) -> Result<Self> {
        let digits = clean(raw);
        if !is_valid(&digits) {
            tracing::debug!(
                input_len = raw.len(),
                cleaned_len = digits.len(),
                "Rejected RUT: invalid format"
            );
            return Err(RutError::InvalidFormat(
                catalog.message(MessageKey::InvalidFormat),
            ));
        }
        Ok(Self { digits })
    }

    /// Cleaned form: significant digits followed by the check character
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Significant digits, without the check character
    pub fn number(&self) -> &str {
        &self.digits[..self.digits.len() - 1]
    }

    /// Check character (`0`-`9` or `K`)
    pub fn check_digit(&self) -> char {
        // Invariant: digits always ends in an ASCII check character
        self.digits.chars().last().unwrap_or('0')
    }

    /// Format as `XXXXXXXX-Y`
    pub fn with_dash(&self) -> String {
        format!("{}-{}", self.number(), self.check_digit())
    }

    /// Format as `XX.XXX.XXX-Y`.
    ///
    /// The number part is printed as an integer, so leading zeros are
    /// dropped (`01234567-4` becomes `1.234.567-4`).
    pub fn with_dots(&self) -> String {
        format!("{}-{}", group_thousands(self.number()), self.check_digit())
    }
}

/// Insert `.` between groups of three digits, counting from the right.
fn group_thousands(number: &str) -> String {
    let trimmed = number.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

impl std::fmt::Display for ChileanRut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl AsRef<str> for ChileanRut {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl FromStr for ChileanRut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ChileanRut {
    type Error = RutError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for ChileanRut {
    type Error = RutError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<ChileanRut> for String {
    fn from(rut: ChileanRut) -> Self {
        rut.digits
    }
}
