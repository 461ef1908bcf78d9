//! Stringify configuration.

use crate::error::NotationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Options controlling how [`stringify`](crate::stringify) resolves keys.
///
/// Deserializes from a host's config, e.g. in TOML:
///
/// ```toml
/// ignoreKeyboardLayout = true
///
/// [translations]
/// KeyQ = ["a", "A"]
/// CapsLock = "Escape"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringifyOptions {
    /// Physical code -> key, either one string for both shift states or
    /// `[unshifted, shifted]`.
    ///
    /// Values are kept as given so a malformed entry is reported when it is
    /// used rather than when the options are loaded.
    pub translations: BTreeMap<String, Value>,
    /// Resolve physical codes on a US-QWERTY layout instead of trusting the
    /// event's logical key. Numpad keys are exempt.
    pub ignore_keyboard_layout: bool,
}

impl StringifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_keyboard_layout(mut self) -> Self {
        self.ignore_keyboard_layout = true;
        self
    }

    /// Translate `code` to `key` regardless of shift.
    pub fn translate(mut self, code: impl Into<String>, key: impl Into<String>) -> Self {
        self.translations
            .insert(code.into(), Value::String(key.into()));
        self
    }

    /// Translate `code` to `unshifted`, or `shifted` when shift is held.
    pub fn translate_shifted(
        mut self,
        code: impl Into<String>,
        unshifted: impl Into<String>,
        shifted: impl Into<String>,
    ) -> Self {
        self.translations.insert(
            code.into(),
            Value::Array(vec![
                Value::String(unshifted.into()),
                Value::String(shifted.into()),
            ]),
        );
        self
    }

    /// Check if a translation is configured for `code`.
    pub fn has_translation(&self, code: &str) -> bool {
        self.translations.contains_key(code)
    }

    /// Look up the configured key for `code`.
    ///
    /// Array entries are indexed by `shift` (1 when held, 0 otherwise).
    /// Fails with [`NotationError::BadTranslation`] when the selected value
    /// is missing or not a string.
    pub fn lookup(&self, code: &str, shift: bool) -> Result<&str, NotationError> {
        let value = match self.translations.get(code) {
            Some(Value::Array(pair)) => pair.get(usize::from(shift)),
            other => other,
        };

        match value {
            Some(Value::String(key)) => Ok(key.as_str()),
            other => Err(NotationError::BadTranslation {
                code: code.to_string(),
                value: other.cloned(),
            }),
        }
    }
}
