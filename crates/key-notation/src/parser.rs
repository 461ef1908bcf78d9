//! Key notation parser.

use crate::error::NotationError;
use crate::event::KeyEvent;
use crate::keys::alias;
use crate::modifier::Modifier;

/// Parse a key notation string into a [`KeyEvent`].
///
/// Supported formats:
/// - `"a"`, `"A"`, `"/"`, `"<"` - a single character, no modifiers
/// - `"<c-a>"`, `"<C-a>"` - modifiers `a`, `c`, `m`, `s` (any case), each followed by `-`
/// - `"<escape>"`, `"<c-F12>"` - named keys, case preserved
/// - `"<esc>"`, `"<cr>"`, `"<lt>"` - aliases, expanded to `Escape`, `Enter`, `<`
///
/// Shift may only be combined with named keys: `"<s-enter>"` is valid but
/// `"<s-a>"` is not, since `"A"` already means shift+a.
pub fn parse(notation: &str) -> Result<KeyEvent, NotationError> {
    let mut chars = notation.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_whitespace() {
            tracing::debug!(?notation, "whitespace is not a key");
            return Err(NotationError::invalid_key(notation));
        }
        return Ok(KeyEvent::key(c));
    }

    let Some((modifiers, key)) = split_bracketed(notation) else {
        tracing::debug!(?notation, "notation does not match <mods-key>");
        return Err(NotationError::invalid_key(notation));
    };

    let key = alias(key);
    let single_char = key.chars().count() == 1;
    let mut event = KeyEvent::key(key);

    for letter in modifiers {
        let Some(modifier) = Modifier::from_letter(letter) else {
            return Err(NotationError::UnknownModifier {
                notation: notation.to_string(),
                modifier: letter,
            });
        };

        if modifier.is_set(&event) {
            return Err(NotationError::DuplicateModifier {
                notation: notation.to_string(),
                modifier: letter,
            });
        }

        modifier.set(&mut event);

        if modifier == Modifier::Shift && single_char {
            return Err(NotationError::DisallowedModifier {
                notation: notation.to_string(),
                modifier: letter,
            });
        }
    }

    Ok(event)
}

/// Split `<x-y-key>` into its modifier letters and key body.
///
/// Modifier segments are an ASCII letter followed by `-`. The body is either
/// an ASCII alphanumeric word or one character other than `<`, `>` and
/// whitespace. Returns `None` if the whole input does not have this shape.
fn split_bracketed(notation: &str) -> Option<(Vec<char>, &str)> {
    let body = notation.strip_prefix('<')?.strip_suffix('>')?;
    let bytes = body.as_bytes();

    let mut segments = 0;
    while bytes.len() >= 2 * segments + 2
        && bytes[2 * segments].is_ascii_alphabetic()
        && bytes[2 * segments + 1] == b'-'
    {
        segments += 1;
    }

    // At most one split leaves a valid key body: a body that itself starts
    // with `x-` is neither a word nor a single character. Try the longest
    // run of segments first.
    (0..=segments).rev().find_map(|count| {
        let (prefix, key) = body.split_at(2 * count);
        is_key_body(key).then(|| (prefix.chars().step_by(2).collect(), key))
    })
}

fn is_key_body(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(c), None) => !matches!(c, '<' | '>') && !c.is_whitespace(),
        _ => key.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}
