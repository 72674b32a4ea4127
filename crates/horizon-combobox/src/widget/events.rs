//! Input events delivered to the combobox.
//!
//! The combobox only cares about a handful of keys; everything else falls
//! through to the host's normal text editing. Hosts translate their platform
//! key events into [`KeyPressEvent`]s, either by building a [`Key`] directly
//! or by parsing a DOM-style key name with [`Key::from_name`].
//!
//! An event the combobox acts on is *accepted*: the host must then suppress
//! the platform default for it (caret movement on the arrow keys, form
//! submission on Enter).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Keyboard keys relevant to a text field.
///
/// Named keys follow the web `KeyboardEvent.key` values. Printable input is
/// carried as [`Key::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,

    /// A printable character.
    Character(char),

    /// Unknown/unmapped key.
    Unknown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// Single-character names map to [`Key::Character`]; unrecognised names
    /// map to [`Key::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            " " | "Spacebar" => Key::Space,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Key press event, sent when a key is pressed while the field has focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    accepted: bool,
}

impl KeyPressEvent {
    /// Create a new key press event with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
            accepted: false,
        }
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if the event has been accepted.
    ///
    /// An accepted event must not perform its platform default action.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, suppressing its default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, letting it fall through to text editing.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Up"), Key::ArrowUp);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("v"), Key::Character('v'));
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("F13"), Key::Unknown);
        assert_eq!(Key::from_name(""), Key::Unknown);
    }

    #[test]
    fn test_event_accept_ignore() {
        let mut event = KeyPressEvent::new(Key::ArrowDown).with_modifiers(KeyboardModifiers::SHIFT);
        assert!(!event.is_accepted());
        assert!(event.modifiers.any());

        event.accept();
        assert!(event.is_accepted());

        event.ignore();
        assert!(!event.is_accepted());
    }
}
