//! Error types.

use serde_json::Value;
use thiserror::Error;

/// The kind of a [`NotationError`], with a stable string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKey,
    UnknownModifier,
    DuplicateModifier,
    DisallowedModifier,
    BadTranslation,
}

impl ErrorKind {
    /// Stable identifier, e.g. `"invalid_key"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::InvalidKey => "invalid_key",
            Self::UnknownModifier => "unknown_modifier",
            Self::DuplicateModifier => "duplicate_modifier",
            Self::DisallowedModifier => "disallowed_modifier",
            Self::BadTranslation => "bad_translation",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error converting between key events and key notation.
///
/// Every variant carries enough data to build a precise diagnostic: the
/// `context` the error occurred in (if any) and the offending `subject`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    /// Malformed notation string.
    #[error("Invalid key: {key}")]
    InvalidKey { key: String },

    /// Modifier letter outside `a`, `c`, `m`, `s`.
    #[error("{notation}: Unknown modifier: {modifier}")]
    UnknownModifier { notation: String, modifier: char },

    /// The same modifier given twice.
    #[error("{notation}: Duplicate modifier: {modifier}")]
    DuplicateModifier { notation: String, modifier: char },

    /// Shift combined with a single-character key.
    #[error("{notation}: Unusable modifier with single-character keys: {modifier}")]
    DisallowedModifier { notation: String, modifier: char },

    /// A translation resolved to something other than a string.
    #[error("{code}: Bad translation value: {}", display_value(.value))]
    BadTranslation { code: String, value: Option<Value> },
}

fn display_value(value: &Option<Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

impl NotationError {
    pub(crate) fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::UnknownModifier { .. } => ErrorKind::UnknownModifier,
            Self::DuplicateModifier { .. } => ErrorKind::DuplicateModifier,
            Self::DisallowedModifier { .. } => ErrorKind::DisallowedModifier,
            Self::BadTranslation { .. } => ErrorKind::BadTranslation,
        }
    }

    /// Shorthand for `self.kind().id()`.
    pub fn id(&self) -> &'static str {
        self.kind().id()
    }

    /// What was being processed when the error occurred: the full notation
    /// for modifier errors, the physical code for translation errors.
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { .. } => None,
            Self::UnknownModifier { notation, .. }
            | Self::DuplicateModifier { notation, .. }
            | Self::DisallowedModifier { notation, .. } => Some(notation),
            Self::BadTranslation { code, .. } => Some(code),
        }
    }

    /// The offending piece of input, rendered as text.
    pub fn subject(&self) -> String {
        match self {
            Self::InvalidKey { key } => key.clone(),
            Self::UnknownModifier { modifier, .. }
            | Self::DuplicateModifier { modifier, .. }
            | Self::DisallowedModifier { modifier, .. } => modifier.to_string(),
            Self::BadTranslation { value, .. } => display_value(value),
        }
    }
}
