//! Enumerations for form state and input intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::focus::{Action, FocusTarget};

/// Lifecycle of the form. `Committed` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Committed,
    Abandoned,
}

/// Caret-relative edits applied to the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    DeleteToStart,
    DeleteToEnd,
    DeleteWordBackward,
}

/// What a key press means for the form, given where focus sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    /// Enter on a data field: move on like `Next`.
    Advance,
    /// Enter on a button.
    Activate(Action),
    CycleCursorMode,
    Quit,
    Edit(EditOp),
    Ignore,
}

impl Intent {
    /// Resolve a key press against the current focus target.
    pub fn from_key(key: KeyEvent, focus: FocusTarget) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Intent::Quit,
            KeyCode::Char('c') if ctrl => Intent::Quit,
            KeyCode::Char('r') if ctrl => Intent::CycleCursorMode,

            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Intent::Previous,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Left => Intent::Previous,
            KeyCode::Tab | KeyCode::Down | KeyCode::Right => Intent::Next,
            KeyCode::Enter => match focus {
                FocusTarget::Field(_) => Intent::Advance,
                FocusTarget::Action(action) => Intent::Activate(action),
            },

            KeyCode::Char('a') if ctrl => Intent::Edit(EditOp::CursorStart),
            KeyCode::Char('e') if ctrl => Intent::Edit(EditOp::CursorEnd),
            KeyCode::Char('b') if ctrl => Intent::Edit(EditOp::CursorLeft),
            KeyCode::Char('f') if ctrl => Intent::Edit(EditOp::CursorRight),
            KeyCode::Char('h') if ctrl => Intent::Edit(EditOp::Backspace),
            KeyCode::Char('d') if ctrl => Intent::Edit(EditOp::Delete),
            KeyCode::Char('u') if ctrl => Intent::Edit(EditOp::DeleteToStart),
            KeyCode::Char('k') if ctrl => Intent::Edit(EditOp::DeleteToEnd),
            KeyCode::Char('w') if ctrl => Intent::Edit(EditOp::DeleteWordBackward),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Intent::Ignore,
            KeyCode::Char(c) => Intent::Edit(EditOp::Insert(c)),

            KeyCode::Backspace => Intent::Edit(EditOp::Backspace),
            KeyCode::Delete => Intent::Edit(EditOp::Delete),
            KeyCode::Home => Intent::Edit(EditOp::CursorStart),
            KeyCode::End => Intent::Edit(EditOp::CursorEnd),
            _ => Intent::Ignore,
        }
    }
}
