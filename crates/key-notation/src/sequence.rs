//! Splitting notation text into keys.

/// Split notation text into tokens, one per key.
///
/// A token is either a bracketed run `<...>` containing no `<`, `>` or
/// whitespace, or a single character. Tokens are not validated, so
/// `"<s-++>"` is one token even though [`parse`](crate::parse) rejects it.
/// An empty input gives a single empty token.
///
/// ```
/// use key_notation::parse_sequence;
///
/// assert_eq!(parse_sequence("a<c-a>b"), ["a", "<c-a>", "b"]);
/// assert_eq!(parse_sequence("<2j"), ["<", "2", "j"]);
/// assert_eq!(parse_sequence(""), [""]);
/// ```
pub fn parse_sequence(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let len = bracketed_len(rest).unwrap_or(c.len_utf8());
        let (token, tail) = rest.split_at(len);
        tokens.push(token.to_string());
        rest = tail;
    }
    tokens
}

/// Byte length of the bracketed run at the start of `text`, if any.
fn bracketed_len(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('<')?;
    let end = inner.find(|c: char| matches!(c, '<' | '>') || c.is_whitespace())?;
    (end > 0 && inner[end..].starts_with('>')).then_some(end + 2)
}
