//! # key-notation
//!
//! Convert keyboard events to and from compact key notation.
//!
//! ## Notation
//!
//! - `"a"`, `"A"`, `"%"` - a single character with no modifiers
//! - `"<c-a>"`, `"<a-c-m-x>"` - modifiers `a`lt, `c`trl, `m`eta, `s`hift
//! - `"<enter>"`, `"<s-f12>"` - named keys
//! - `"<lt>"`, `"<gt>"` - the `<` and `>` characters
//!
//! ## Features
//!
//! - [`stringify`] an event to notation, optionally ignoring the keyboard
//!   layout or applying custom code translations
//! - [`parse`] notation back into an event
//! - [`normalize`] notation to its canonical form
//! - [`parse_sequence`] to split text like `"g<c-a>"` into keys
//! - Conversion from crossterm key events

mod error;
mod event;
mod keys;
mod modifier;
mod options;
mod parser;
mod sequence;
mod stringify;
mod terminal;

pub use error::{ErrorKind, NotationError};
pub use event::KeyEvent;
pub use keys::{alias, code_to_en_us_qwerty};
pub use modifier::Modifier;
pub use options::StringifyOptions;
pub use parser::parse;
pub use sequence::parse_sequence;
pub use stringify::stringify;

/// Rewrite notation in its canonical form.
///
/// Equivalent notations normalize to the same string:
///
/// ```
/// use key_notation::normalize;
///
/// assert_eq!(normalize("<C-ESC>").unwrap(), "<c-escape>");
/// assert_eq!(normalize("<c-escape>").unwrap(), "<c-escape>");
/// assert_eq!(normalize("<").unwrap(), "<lt>");
/// ```
pub fn normalize(notation: &str) -> Result<String, NotationError> {
    stringify(&parse(notation)?, &StringifyOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_single_characters() {
        for c in ["a", "A", "/", "1"] {
            assert_eq!(normalize(c).unwrap(), c);
        }
    }

    #[test]
    fn test_normalize_keys() {
        assert_eq!(normalize("<a>").unwrap(), "a");
        assert_eq!(normalize("<A>").unwrap(), "A");
        assert_eq!(normalize("</>").unwrap(), "/");
        assert_eq!(normalize("<1>").unwrap(), "1");

        assert_eq!(normalize("<c-a>").unwrap(), "<c-a>");
        assert_eq!(normalize("<c-A>").unwrap(), "<c-A>");
        assert_eq!(normalize("<c-/>").unwrap(), "<c-/>");
        assert_eq!(normalize("<c-1>").unwrap(), "<c-1>");

        assert_eq!(normalize("<Escape>").unwrap(), "<escape>");
        assert_eq!(normalize("<C-ESC>").unwrap(), "<c-escape>");
        assert_eq!(normalize("<F12>").unwrap(), "<f12>");
        assert_eq!(normalize("<s-c-Left>").unwrap(), "<c-s-arrowleft>");
    }

    #[test]
    fn test_normalize_angle_brackets() {
        assert_eq!(normalize("<").unwrap(), "<lt>");
        assert_eq!(normalize(">").unwrap(), "<gt>");
        assert_eq!(normalize("<c-less>").unwrap(), "<c-lt>");
    }

    #[test]
    fn test_normalize_errors() {
        let err = normalize("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert_eq!(err.subject(), "");

        let err = normalize("ab").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert_eq!(err.subject(), "ab");

        let err = normalize("<S-gt>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisallowedModifier);
        assert_eq!(err.context(), Some("<S-gt>"));
        assert_eq!(err.subject(), "S");
    }

    #[test]
    fn test_parse_sequence_then_parse() {
        let keys: Vec<KeyEvent> = parse_sequence("g<c-a><cr>")
            .iter()
            .map(|token| parse(token))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            keys,
            [
                KeyEvent::key("g"),
                KeyEvent::key("a").with_ctrl(),
                KeyEvent::key("Enter"),
            ]
        );
    }

    fn printable_char() -> impl Strategy<Value = char> {
        any::<char>().prop_filter("printable, non-whitespace", |c| {
            !c.is_whitespace() && !c.is_control()
        })
    }

    fn modifiers() -> impl Strategy<Value = (bool, bool, bool, bool)> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
    }

    fn notation() -> impl Strategy<Value = String> {
        prop_oneof![
            printable_char().prop_map(String::from),
            "<([acmsACMS]-){0,4}[a-zA-Z0-9]{1,8}>",
            "<([acACmM]-){0,3}[!-~]>",
        ]
    }

    proptest! {
        #[test]
        fn test_single_character_round_trip(c in printable_char()) {
            let key = c.to_string();
            prop_assert_eq!(parse(&key).unwrap(), KeyEvent::key(c));
            if c != '<' && c != '>' {
                prop_assert_eq!(stringify(&KeyEvent::key(c), &StringifyOptions::default()).unwrap(), key);
            }
        }

        #[test]
        fn test_normalize_is_idempotent(s in notation()) {
            // Modifier key names such as `<Alt>` normalize to nothing.
            if let Some(normalized) = normalize(&s).ok().filter(|n| !n.is_empty()) {
                prop_assert_eq!(normalize(&normalized).unwrap(), normalized);
            }
        }

        #[test]
        fn test_modifier_order_is_fixed((alt, ctrl, meta, shift) in modifiers()) {
            let event = KeyEvent {
                key: Some("Enter".to_string()),
                code: None,
                alt_key: alt,
                ctrl_key: ctrl,
                meta_key: meta,
                shift_key: shift,
            };
            let mut expected = String::from("<");
            for (set, prefix) in [(alt, "a-"), (ctrl, "c-"), (meta, "m-"), (shift, "s-")] {
                if set {
                    expected.push_str(prefix);
                }
            }
            expected.push_str("enter>");
            prop_assert_eq!(event.to_string(), expected);
        }

        #[test]
        fn test_parse_sequence_concatenates_to_input(s in "[a-c<>\\- ]{0,16}") {
            let tokens = parse_sequence(&s);
            prop_assert!(!tokens.is_empty());
            prop_assert_eq!(tokens.concat(), s);
        }
    }
}
