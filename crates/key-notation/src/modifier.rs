//! Modifier letters used in key notation.

use crate::event::KeyEvent;

/// A modifier flag of a [`KeyEvent`].
///
/// Variants are declared in notation order: modifiers are always written
/// `a-`, `c-`, `m-`, `s-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Alt,
    Ctrl,
    Meta,
    Shift,
}

impl Modifier {
    /// All modifiers, in notation order.
    pub const ALL: [Modifier; 4] = [Self::Alt, Self::Ctrl, Self::Meta, Self::Shift];

    /// Look up a modifier by its notation letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::Alt),
            'c' => Some(Self::Ctrl),
            'm' => Some(Self::Meta),
            's' => Some(Self::Shift),
            _ => None,
        }
    }

    /// The lowercase notation letter.
    pub fn letter(self) -> char {
        match self {
            Self::Alt => 'a',
            Self::Ctrl => 'c',
            Self::Meta => 'm',
            Self::Shift => 's',
        }
    }

    pub(crate) fn is_set(self, event: &KeyEvent) -> bool {
        *self.flag(event)
    }

    pub(crate) fn set(self, event: &mut KeyEvent) {
        *self.flag_mut(event) = true;
    }

    fn flag(self, event: &KeyEvent) -> &bool {
        match self {
            Self::Alt => &event.alt_key,
            Self::Ctrl => &event.ctrl_key,
            Self::Meta => &event.meta_key,
            Self::Shift => &event.shift_key,
        }
    }

    fn flag_mut(self, event: &mut KeyEvent) -> &mut bool {
        match self {
            Self::Alt => &mut event.alt_key,
            Self::Ctrl => &mut event.ctrl_key,
            Self::Meta => &mut event.meta_key,
            Self::Shift => &mut event.shift_key,
        }
    }
}
