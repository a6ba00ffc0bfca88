//! Message catalog with locale fallback
//!
//! Validation failures and the schema description carry human-readable text
//! picked from a [`MessageCatalog`]. A catalog owns one message table per
//! locale and a current-locale slot.
//!
//! # Lookup order
//!
//! 1. The table of the current locale
//! 2. The table of the fallback locale (`en`)
//! 3. The key itself, unchanged
//!
//! # Shared state
//!
//! [`global()`] is a process-wide catalog seeded from the `RUT_LOCALE`
//! environment variable on first use. It is intentional shared state: the
//! current-locale slot sits behind an `RwLock` so a message lookup never
//! observes a half-written locale switch. Code that needs isolation builds its
//! own catalog and passes it to the `*_with` functions.

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::config::{BUILTIN_LOCALES, DEFAULT_LOCALE, FALLBACK_LOCALE, LOCALE_ENV_VAR};
use crate::error::{Result, RutError};

/// Keys of the messages the crate itself looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Schema description of the RUT type
    Description,
    /// Primary constructor failure
    InvalidFormat,
    /// Framework boundary validation failure
    InvalidCheckDigit,
}

impl MessageKey {
    /// Catalog key for this message
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Description => "description",
            MessageKey::InvalidFormat => "invalid_format",
            MessageKey::InvalidCheckDigit => "invalid_check_digit",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Messages = HashMap<String, String>;

/// Locale tables plus the currently selected locale.
#[derive(Debug)]
pub struct MessageCatalog {
    translations: HashMap<String, Messages>,
    locale: RwLock<String>,
}

impl MessageCatalog {
    /// Catalog with the built-in `en` and `es` tables, locale `en`.
    pub fn builtin() -> Self {
        Self::seeded(DEFAULT_LOCALE.to_string())
    }

    /// Built-in catalog whose locale is read from `RUT_LOCALE`.
    ///
    /// An unregistered value is kept as-is; lookups then fall back to
    /// English.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LOCALE_ENV_VAR).ok())
    }

    /// Built-in catalog seeded with the value read from `RUT_LOCALE`, or
    /// the default locale when the variable is unset.
    pub fn from_env_value(value: Option<String>) -> Self {
        let locale = value.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let catalog = Self::seeded(locale);
        let locale = catalog.current_locale();
        if !catalog.supports(&locale) {
            tracing::warn!(
                env = LOCALE_ENV_VAR,
                locale = %locale,
                fallback = FALLBACK_LOCALE,
                "Unsupported locale in environment, messages fall back"
            );
        }
        catalog
    }

    /// Built-in tables layered with the locales of a YAML document.
    ///
    /// The document maps locale codes to key/text tables:
    ///
    /// ```
    /// use chilean_rut::locale::MessageCatalog;
    ///
    /// let catalog = MessageCatalog::from_yaml_str(
    ///     "pt:\n  invalid_format: Formato de RUT inválido.\n",
    /// )
    /// .unwrap();
    /// assert!(catalog.supports("pt"));
    /// assert!(catalog.supports("es"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `RutError::Catalog` if the document is not such a mapping.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let extra: HashMap<String, Messages> = serde_yaml_ng::from_str(yaml)?;
        let mut catalog = Self::builtin();
        for (code, messages) in extra {
            catalog.merge(code, messages);
        }
        Ok(catalog)
    }

    fn seeded(locale: String) -> Self {
        let translations: HashMap<String, Messages> = BUILTIN_LOCALES
            .iter()
            .map(|(code, table)| {
                let messages: Messages = table
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (code.to_string(), messages)
            })
            .collect();
        Self {
            translations,
            locale: RwLock::new(locale),
        }
    }

    fn merge(&mut self, code: String, messages: Messages) {
        self.translations.entry(code).or_default().extend(messages);
    }

    /// Register a locale table, overriding existing keys.
    pub fn with_locale<I, K, V>(mut self, code: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let messages: Messages = messages
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.merge(code.into(), messages);
        self
    }

    /// Whether `code` has a registered table
    pub fn supports(&self, code: &str) -> bool {
        self.translations.contains_key(code)
    }

    /// Registered locale codes, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.translations.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Currently selected locale code
    pub fn current_locale(&self) -> String {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switch the current locale.
    ///
    /// # Errors
    ///
    /// Returns `RutError::UnsupportedLocale` if `code` has no table; the
    /// current locale is left unchanged.
    pub fn set_locale(&self, code: &str) -> Result<()> {
        if !self.supports(code) {
            return Err(RutError::UnsupportedLocale(code.to_string()));
        }
        let mut slot = self.locale.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(from = %slot.as_str(), to = %code, "Switching message locale");
        *slot = code.to_string();
        Ok(())
    }

    /// Text for `key` in the current locale, falling back to English and
    /// finally to the key itself.
    pub fn translate(&self, key: &str) -> String {
        let locale = self.locale.read().unwrap_or_else(PoisonError::into_inner);
        self.lookup(&locale, key)
            .or_else(|| self.lookup(FALLBACK_LOCALE, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Text for one of the crate's own messages
    pub fn message(&self, key: MessageKey) -> String {
        self.translate(key.as_str())
    }

    /// Snapshot of the table for `code`, sorted by key
    pub fn messages(&self, code: &str) -> Option<BTreeMap<String, String>> {
        self.translations
            .get(code)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.translations
            .get(code)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static GLOBAL: LazyLock<MessageCatalog> = LazyLock::new(MessageCatalog::from_env);

/// Process-wide catalog, seeded from `RUT_LOCALE` on first access
pub fn global() -> &'static MessageCatalog {
    &GLOBAL
}

/// Switch the locale of the process-wide catalog.
///
/// # Errors
///
/// Returns `RutError::UnsupportedLocale` if `code` is not registered.
pub fn set_locale(code: &str) -> Result<()> {
    global().set_locale(code)
}

/// Current locale of the process-wide catalog
pub fn current_locale() -> String {
    global().current_locale()
}

/// Translate `key` through the process-wide catalog
pub fn translate(key: &str) -> String {
    global().translate(key)
}

/// Serializes tests that switch or depend on the process-wide locale.
#[cfg(test)]
pub(crate) static TEST_GLOBAL_LOCALE: std::sync::Mutex<()> = std::sync::Mutex::new(());
