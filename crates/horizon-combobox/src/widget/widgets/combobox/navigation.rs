//! Keyboard navigation through the suggestion list.
//!
//! The list is either closed, or open with an optional highlighted option.
//! Arrow keys clamp at both ends and never wrap.

use crate::widget::events::Key;

/// State of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// The list is not rendered.
    #[default]
    Closed,
    /// The list is rendered.
    Open {
        /// Index into the displayed options.
        highlighted: Option<usize>,
    },
}

/// What a key press did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The key is not handled by the list; it falls through to text editing.
    Ignored,
    /// The highlight moved.
    Moved {
        /// Previous highlight.
        from: Option<usize>,
        /// New highlight.
        to: usize,
    },
    /// The option at this index should be committed.
    Commit(usize),
    /// The key was handled but changed nothing.
    Noop,
    /// The list was closed.
    Dismissed,
}

impl NavigationOutcome {
    /// Whether the key was consumed, i.e. its default action must be suppressed.
    pub fn is_handled(self) -> bool {
        !matches!(self, NavigationOutcome::Ignored)
    }
}

impl ListState {
    /// Check if the list is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, ListState::Open { .. })
    }

    /// The highlighted index, if the list is open and something is highlighted.
    #[inline]
    pub fn highlighted(&self) -> Option<usize> {
        match self {
            ListState::Open { highlighted } => *highlighted,
            ListState::Closed => None,
        }
    }

    /// Open the list with nothing highlighted. Keeps the highlight if already open.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = ListState::Open { highlighted: None };
        }
    }

    /// Close the list, dropping any highlight.
    pub fn close(&mut self) {
        *self = ListState::Closed;
    }

    /// Drop the highlight, leaving the list open or closed.
    pub fn clear_highlight(&mut self) {
        if let ListState::Open { highlighted } = self {
            *highlighted = None;
        }
    }

    /// Apply a key press.
    ///
    /// `displayed_len` is the number of rendered options. Keys are ignored
    /// while the list is closed.
    pub fn handle_key(&mut self, key: Key, displayed_len: usize) -> NavigationOutcome {
        let ListState::Open { highlighted } = *self else {
            return NavigationOutcome::Ignored;
        };

        match key {
            Key::ArrowDown | Key::ArrowUp => {
                if displayed_len == 0 {
                    return NavigationOutcome::Noop;
                }
                let last = displayed_len - 1;
                let to = match (key, highlighted) {
                    (_, None) => 0,
                    (Key::ArrowDown, Some(i)) => (i + 1).min(last),
                    (_, Some(i)) => i.saturating_sub(1).min(last),
                };
                if highlighted == Some(to) {
                    return NavigationOutcome::Noop;
                }
                *self = ListState::Open {
                    highlighted: Some(to),
                };
                NavigationOutcome::Moved {
                    from: highlighted,
                    to,
                }
            }
            Key::Enter => match highlighted {
                Some(index) if index < displayed_len => NavigationOutcome::Commit(index),
                _ => NavigationOutcome::Noop,
            },
            Key::Escape => {
                self.close();
                NavigationOutcome::Dismissed
            }
            _ => NavigationOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> ListState {
        ListState::Open { highlighted: None }
    }

    #[test]
    fn test_closed_ignores_keys() {
        let mut state = ListState::Closed;
        for key in [Key::ArrowDown, Key::ArrowUp, Key::Enter, Key::Escape] {
            assert_eq!(state.handle_key(key, 3), NavigationOutcome::Ignored);
        }
        assert_eq!(state, ListState::Closed);
    }

    #[test]
    fn test_arrow_down_clamps_at_last() {
        let mut state = open();
        assert_eq!(
            state.handle_key(Key::ArrowDown, 3),
            NavigationOutcome::Moved { from: None, to: 0 }
        );
        state.handle_key(Key::ArrowDown, 3);
        state.handle_key(Key::ArrowDown, 3);
        assert_eq!(state.highlighted(), Some(2));

        assert_eq!(state.handle_key(Key::ArrowDown, 3), NavigationOutcome::Noop);
        assert_eq!(state.highlighted(), Some(2));
    }

    #[test]
    fn test_arrow_up_clamps_at_first() {
        let mut state = open();
        assert_eq!(
            state.handle_key(Key::ArrowUp, 3),
            NavigationOutcome::Moved { from: None, to: 0 }
        );
        assert_eq!(state.handle_key(Key::ArrowUp, 3), NavigationOutcome::Noop);
        assert_eq!(state.highlighted(), Some(0));

        let mut state = ListState::Open { highlighted: Some(2) };
        assert_eq!(
            state.handle_key(Key::ArrowUp, 3),
            NavigationOutcome::Moved { from: Some(2), to: 1 }
        );
    }

    #[test]
    fn test_enter_commits_only_valid_highlight() {
        let mut state = open();
        assert_eq!(state.handle_key(Key::Enter, 3), NavigationOutcome::Noop);

        let mut state = ListState::Open { highlighted: Some(1) };
        assert_eq!(state.handle_key(Key::Enter, 3), NavigationOutcome::Commit(1));

        let mut state = ListState::Open { highlighted: Some(5) };
        assert_eq!(state.handle_key(Key::Enter, 3), NavigationOutcome::Noop);
    }

    #[test]
    fn test_escape_closes() {
        let mut state = ListState::Open { highlighted: Some(1) };
        assert_eq!(state.handle_key(Key::Escape, 3), NavigationOutcome::Dismissed);
        assert_eq!(state, ListState::Closed);
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_other_keys_fall_through() {
        let mut state = ListState::Open { highlighted: Some(1) };
        let outcome = state.handle_key(Key::Character('a'), 3);
        assert_eq!(outcome, NavigationOutcome::Ignored);
        assert!(!outcome.is_handled());
        assert_eq!(state.handle_key(Key::Home, 3), NavigationOutcome::Ignored);
        assert_eq!(state.highlighted(), Some(1));
    }

    #[test]
    fn test_open_and_clear_highlight() {
        let mut state = ListState::Closed;
        state.open();
        assert!(state.is_open());
        assert_eq!(state.highlighted(), None);

        state.handle_key(Key::ArrowDown, 2);
        state.open();
        assert_eq!(state.highlighted(), Some(0));

        state.clear_highlight();
        assert!(state.is_open());
        assert_eq!(state.highlighted(), None);
    }
}
