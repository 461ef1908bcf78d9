//! Key name tables: aliases and the US-QWERTY layout.

/// Expand a user-friendly key name to its canonical key identifier.
///
/// Lookup is case-insensitive. Unknown names are returned unchanged, with
/// their case preserved.
///
/// - `"esc"`, `"Esc"` -> `"Escape"`
/// - `"cr"`, `"return"` -> `"Enter"`
/// - `"lt"`, `"less"`, `"lesser"` -> `"<"`
pub fn alias(key: &str) -> String {
    let canonical = match key.to_lowercase().as_str() {
        // Arrow keys
        "left" => "ArrowLeft",
        "right" => "ArrowRight",
        "up" => "ArrowUp",
        "down" => "ArrowDown",

        // Editing
        "bs" => "Backspace",
        "del" => "Delete",
        "return" | "cr" => "Enter",
        "esc" => "Escape",

        // Navigation
        "pgup" => "PageUp",
        "pgdn" => "PageDown",
        "menu" | "apps" => "ContextMenu",

        // Characters that cannot appear inside brackets
        "lt" | "less" | "lesser" => "<",
        "gt" | "greater" => ">",

        _ => return key.to_string(),
    };
    canonical.to_string()
}

/// Unshifted and shifted characters of the non-letter keys on a US-QWERTY
/// keyboard, keyed by physical code.
fn en_us_qwerty(code: &str) -> Option<[char; 2]> {
    let pair = match code {
        "Backquote" => ['`', '~'],
        "Digit1" => ['1', '!'],
        "Digit2" => ['2', '@'],
        "Digit3" => ['3', '#'],
        "Digit4" => ['4', '$'],
        "Digit5" => ['5', '%'],
        "Digit6" => ['6', '^'],
        "Digit7" => ['7', '&'],
        "Digit8" => ['8', '*'],
        "Digit9" => ['9', '('],
        "Digit0" => ['0', ')'],
        "Minus" => ['-', '_'],
        "Equal" => ['=', '+'],
        "Backslash" => ['\\', '|'],
        "BracketLeft" => ['[', '{'],
        "BracketRight" => [']', '}'],
        "Semicolon" => [';', ':'],
        "Quote" => ['\'', '"'],
        "Comma" => [',', '<'],
        "Period" => ['.', '>'],
        "Slash" => ['/', '?'],
        _ => return None,
    };
    Some(pair)
}

/// The key a physical code produces on a US-QWERTY layout.
///
/// Letter keys (`KeyA`..`KeyZ`) give their letter, uppercase when `shift`
/// is held. Codes without a character (`F1`, `ArrowLeft`, `Space`, ...) are
/// returned unchanged.
pub fn code_to_en_us_qwerty(code: &str, shift: bool) -> String {
    if let Some(letter) = code.strip_prefix("Key") {
        return if shift {
            letter.to_uppercase()
        } else {
            letter.to_lowercase()
        };
    }

    match en_us_qwerty(code) {
        Some(pair) => pair[usize::from(shift)].to_string(),
        None => code.to_string(),
    }
}
