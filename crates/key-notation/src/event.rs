//! Keyboard event descriptor.

use crate::error::NotationError;
use crate::options::StringifyOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single keyboard input: logical key, physical code and modifier flags.
///
/// Field names follow the DOM `KeyboardEvent` when serialized (`key`,
/// `code`, `altKey`, `ctrlKey`, `metaKey`, `shiftKey`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// Logical key, e.g. `"a"`, `"Enter"`, `" "`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Physical key position, e.g. `"KeyA"`, `"Digit5"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub shift_key: bool,
}

impl KeyEvent {
    /// Create an event for a logical key with no modifiers.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Create an event carrying only a physical code.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Check if any modifier flag is set.
    pub fn has_modifiers(&self) -> bool {
        self.alt_key || self.ctrl_key || self.meta_key || self.shift_key
    }
}

impl fmt::Display for KeyEvent {
    /// Writes the canonical notation. Modifier-only and unidentified keys
    /// write nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation =
            crate::stringify(self, &StringifyOptions::default()).map_err(|_| fmt::Error)?;
        f.write_str(&notation)
    }
}

impl FromStr for KeyEvent {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
