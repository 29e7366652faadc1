//! Single-line text input with cursor management.
//!
//! The form views (product description, sequence composer, SMTP
//! credentials) all edit text in place, so the editing logic lives here
//! instead of being repeated per view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable single-line buffer.
///
/// The cursor is tracked in characters, not bytes, so editing works
/// with multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor_position: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor_position = value.chars().count();
        Self { value, cursor_position }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the buffer contains anything besides whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    /// Buffer with a block cursor inserted at the edit position, for
    /// rendering inside an input field.
    #[must_use]
    pub fn display(&self) -> String {
        let byte_pos = self.byte_position(self.cursor_position);
        let mut display = self.value.clone();
        display.insert(byte_pos, '█');
        display
    }

    /// Handle an editing key. Returns `true` when the key was consumed.
    ///
    /// Control-modified keys are left alone so app-level shortcuts like
    /// Ctrl+C still work while a field has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                true
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) {
        let byte_pos = self.byte_position(self.cursor_position);
        self.value.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let byte_pos = self.byte_position(self.cursor_position - 1);
        self.value.remove(byte_pos);
        self.cursor_position -= 1;
    }

    fn delete(&mut self) {
        if self.cursor_position < self.char_count() {
            let byte_pos = self.byte_position(self.cursor_position);
            self.value.remove(byte_pos);
        }
    }

    fn byte_position(&self, char_index: usize) -> usize {
        self.value.chars().take(char_index).map(char::len_utf8).sum()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(field: &mut InputField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = InputField::new();
        press(&mut field, KeyCode::Char('h'));
        press(&mut field, KeyCode::Char('i'));
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = InputField::with_value("hat");
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Char('e'));
        assert_eq!(field.value(), "heat");
    }

    #[test]
    fn backspace_removes_multibyte_chars() {
        let mut field = InputField::with_value("café");
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.value(), "caf");
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.value(), "ca");
    }

    #[test]
    fn delete_at_cursor() {
        let mut field = InputField::with_value("abc");
        press(&mut field, KeyCode::Home);
        press(&mut field, KeyCode::Delete);
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn blank_means_whitespace_only() {
        assert!(InputField::with_value("   ").is_blank());
        assert!(!InputField::with_value(" x ").is_blank());
    }

    #[test]
    fn control_keys_are_not_consumed() {
        let mut field = InputField::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(ctrl_c));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn display_shows_cursor_at_edit_position() {
        let mut field = InputField::with_value("ab");
        press(&mut field, KeyCode::Left);
        assert_eq!(field.display(), "a█b");
    }
}
