//! Key event to notation.

use crate::error::NotationError;
use crate::event::KeyEvent;
use crate::keys::{alias, code_to_en_us_qwerty};
use crate::modifier::Modifier;
use crate::options::StringifyOptions;

/// Keys that are themselves modifier presses. Matched as prefixes so that
/// `"ShiftLeft"` and `"OSRight"` are covered too.
const MODIFIER_KEY_PREFIXES: [&str; 7] = ["Alt", "Control", "Hyper", "Meta", "Shift", "Super", "OS"];

/// Convert a key event into its canonical notation.
///
/// Returns an empty string for events that do not name a content key:
/// unidentified keys and presses of a modifier key on its own.
///
/// - `{key: "a", ctrlKey}` -> `"<c-a>"`
/// - `{key: "Enter", shiftKey}` -> `"<s-enter>"`
/// - `{key: "A", shiftKey}` -> `"A"` (the case already encodes shift)
/// - `{key: "<"}` -> `"<lt>"`
///
/// The only possible error is [`NotationError::BadTranslation`], from a
/// malformed entry in [`StringifyOptions::translations`].
pub fn stringify(event: &KeyEvent, options: &StringifyOptions) -> Result<String, NotationError> {
    let mut shift = event.shift_key;
    let mut key = resolve_key(event, options)?;
    tracing::trace!(?event, %key, "resolved key");

    if is_modifier_or_unidentified(&key) {
        return Ok(String::new());
    }

    if key.chars().count() == 1 {
        shift = false;
    } else {
        key = key.to_lowercase();
    }

    match key.as_str() {
        "<" => key = "lt".to_string(),
        ">" => key = "gt".to_string(),
        _ => {}
    }

    let mut notation = String::new();
    for modifier in Modifier::ALL {
        let set = match modifier {
            Modifier::Shift => shift,
            other => other.is_set(event),
        };
        if set {
            notation.push(modifier.letter());
            notation.push('-');
        }
    }

    if notation.is_empty() && key.chars().count() == 1 {
        return Ok(key);
    }

    notation.push_str(&key);
    Ok(format!("<{notation}>"))
}

/// Pick the key to print: a configured translation of the physical code,
/// the code on a US-QWERTY layout, or the event's own key.
fn resolve_key(event: &KeyEvent, options: &StringifyOptions) -> Result<String, NotationError> {
    let shift = event.shift_key;

    if let Some(code) = event.code.as_deref() {
        if options.has_translation(code) {
            return Ok(alias(options.lookup(code, shift)?));
        }
        if options.ignore_keyboard_layout && !code.starts_with("Numpad") {
            return Ok(code_to_en_us_qwerty(code, shift));
        }
    }

    let key = alias(event.key.as_deref().unwrap_or_default());
    if key == " " {
        return Ok("Space".to_string());
    }
    Ok(key)
}

fn is_modifier_or_unidentified(key: &str) -> bool {
    key.is_empty()
        || key == "Unidentified"
        || MODIFIER_KEY_PREFIXES
            .iter()
            .any(|prefix| key.starts_with(prefix))
}
