//! Terminal-agnostic keyboard input and the line editor.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit guess).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Escape key (quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (scroll grid up one row).
    Up,
    /// Down arrow key (scroll grid down one row).
    Down,
    /// Page Up key (scroll grid up one screen).
    PageUp,
    /// Page Down key (scroll grid down one screen).
    PageDown,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Single-line text buffer with a cursor.
///
/// The cursor counts characters, not bytes, so names like `Nidoran♀` edit
/// correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    buffer: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Apply an editing key. Returns `true` if text or cursor changed.
    ///
    /// `Enter`, `Esc` and the scroll keys are not editing keys and are ignored
    /// here.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        let len = self.char_len();
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
                true
            },
            KeyInput::Backspace if self.cursor > 0 => {
                self.cursor = self.cursor.saturating_sub(1);
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                true
            },
            KeyInput::Delete if self.cursor < len => {
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                true
            },
            KeyInput::Left if self.cursor > 0 => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            },
            KeyInput::Right if self.cursor < len => {
                self.cursor = self.cursor.saturating_add(1);
                true
            },
            KeyInput::Home if self.cursor > 0 => {
                self.cursor = 0;
                true
            },
            KeyInput::End if self.cursor < len => {
                self.cursor = len;
                true
            },
            KeyInput::Backspace
            | KeyInput::Delete
            | KeyInput::Left
            | KeyInput::Right
            | KeyInput::Home
            | KeyInput::End
            | KeyInput::Up
            | KeyInput::Down
            | KeyInput::PageUp
            | KeyInput::PageDown
            | KeyInput::Enter
            | KeyInput::Esc => false,
        }
    }

    /// Take the text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer.char_indices().nth(char_index).map_or(self.buffer.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut input = InputBuffer::new();
        for c in text.chars() {
            input.edit(KeyInput::Char(c));
        }
        input
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let input = typed("hi");
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = typed("ab");
        assert!(input.edit(KeyInput::Backspace));
        assert_eq!(input.text(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = InputBuffer::new();
        assert!(!input.edit(KeyInput::Backspace));
        assert!(input.is_empty());
    }

    #[test]
    fn cursor_movement() {
        let mut input = typed("abc");

        input.edit(KeyInput::Home);
        assert_eq!(input.cursor(), 0);

        input.edit(KeyInput::End);
        assert_eq!(input.cursor(), 3);

        input.edit(KeyInput::Left);
        assert_eq!(input.cursor(), 2);

        input.edit(KeyInput::Right);
        assert_eq!(input.cursor(), 3);
        assert!(!input.edit(KeyInput::Right));
    }

    #[test]
    fn scroll_keys_leave_text_alone() {
        let mut input = typed("abc");
        for key in [KeyInput::Up, KeyInput::Down, KeyInput::PageUp, KeyInput::PageDown] {
            assert!(!input.edit(key));
        }
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn edits_multibyte_text_by_character() {
        let mut input = typed("Nidoran♀");
        input.edit(KeyInput::Left);
        input.edit(KeyInput::Delete);
        assert_eq!(input.text(), "Nidoran");

        input.edit(KeyInput::Char('♂'));
        input.edit(KeyInput::Home);
        input.edit(KeyInput::Delete);
        assert_eq!(input.text(), "idoran♂");
    }

    #[test]
    fn take_clears_buffer() {
        let mut input = typed("test");
        assert_eq!(input.take(), "test");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
