//! Caret display modes shared by every field in the form.

use std::fmt;

use crossterm::cursor::SetCursorStyle;

/// How the caret of the focused field is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Blink,
    Static,
    Hidden,
}

impl CursorMode {
    /// Next mode in the cycle, wrapping from `Hidden` back to `Blink`.
    pub fn next(self) -> Self {
        match self {
            Self::Blink => Self::Static,
            Self::Static => Self::Hidden,
            Self::Hidden => Self::Blink,
        }
    }

    /// Terminal caret style for this mode, `None` when the caret is hidden.
    pub fn terminal_style(self) -> Option<SetCursorStyle> {
        match self {
            Self::Blink => Some(SetCursorStyle::BlinkingBar),
            Self::Static => Some(SetCursorStyle::SteadyBar),
            Self::Hidden => None,
        }
    }
}

impl fmt::Display for CursorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blink => write!(f, "blink"),
            Self::Static => write!(f, "static"),
            Self::Hidden => write!(f, "hidden"),
        }
    }
}
