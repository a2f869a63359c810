//! Input field handling for the terminal user interface.
//!
//! The caret is tracked in characters, not bytes, and every insertion is
//! bounded by the field's character limit.

use unicode_width::UnicodeWidthChar;

/// A single-line text input with a placeholder, a caret and a length cap.
#[derive(Debug, Clone)]
pub struct InputField {
    pub placeholder: &'static str,
    pub char_limit: usize,
    value: String,
    cursor: usize,
}

impl InputField {
    /// Create an empty field.
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            placeholder,
            char_limit,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns taken by the text before the caret.
    pub fn cursor_width(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the caret. Dropped when the field is full.
    pub fn handle_char(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text, keeping only what fits.
    pub fn handle_paste(&mut self, text: &str) {
        let room = self.char_limit.saturating_sub(self.len());
        let clean: String = text.chars().filter(|c| !c.is_control()).take(room).collect();
        if clean.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert_str(at, &clean);
        self.cursor += clean.chars().count();
    }

    /// Delete the character before the caret.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the caret.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Delete everything before the caret.
    pub fn delete_to_start(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.value.replace_range(..at, "");
        self.cursor = 0;
    }

    /// Delete everything from the caret on.
    pub fn delete_to_end(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.value.truncate(at);
    }

    /// Delete the word before the caret along with any whitespace after it.
    pub fn delete_word_backward(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.byte_offset(start);
        let to = self.byte_offset(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor = start;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
