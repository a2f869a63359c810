//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Focused field, focused button and the heading.
pub const FOCUSED: Color = Color::Indexed(205);
/// Placeholders, blurred buttons and help text.
pub const BLURRED: Color = Color::Indexed(240);
/// The cursor mode name in the help line.
pub const CURSOR_MODE_HELP: Color = Color::Indexed(244);
