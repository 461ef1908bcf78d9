//! Conversion from crossterm terminal key events.

use crate::event::KeyEvent;
use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};

impl From<crossterm::event::KeyEvent> for KeyEvent {
    /// Describe a terminal key event with DOM key names.
    ///
    /// Terminals report no physical position, so `code` is always `None`.
    fn from(event: crossterm::event::KeyEvent) -> Self {
        let mut shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let key = match event.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::BackTab => {
                shift = true;
                "Tab".to_string()
            }
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::Modifier(modifier) => modifier_key_name(modifier).to_string(),
            code => named_key(code).to_string(),
        };

        Self {
            key: Some(key),
            code: None,
            alt_key: event.modifiers.contains(KeyModifiers::ALT),
            ctrl_key: event.modifiers.contains(KeyModifiers::CONTROL),
            meta_key: event
                .modifiers
                .intersects(KeyModifiers::META | KeyModifiers::SUPER),
            shift_key: shift,
        }
    }
}

fn named_key(code: KeyCode) -> &'static str {
    match code {
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",

        // Arrow keys
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",

        // Navigation
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",

        // Locks and system keys
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",

        _ => "Unidentified",
    }
}

/// Modifier presses map to the names that `stringify` treats as
/// non-content keys.
fn modifier_key_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper => "Super",
        ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => "Hyper",
        ModifierKeyCode::LeftMeta | ModifierKeyCode::RightMeta => "Meta",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        ModifierKeyCode::IsoLevel5Shift => "Shift",
    }
}
