/// Editable text buffer with a char-indexed cursor. Holds newlines when used
/// for multi-line fields.
#[derive(Clone, Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with_text(s: &str) -> Self {
        let mut input = Input::default();
        input.set(s.to_string());
        input
    }

    pub(super) fn as_str(&self) -> &str {
        &self.buf
    }

    pub(super) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(super) fn set(&mut self, s: String) {
        self.buf = s;
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Start of the current line.
    pub(super) fn move_home(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    /// End of the current line.
    pub(super) fn move_end(&mut self) {
        let rest = self
            .buf
            .chars()
            .skip(self.cursor)
            .take_while(|c| *c != '\n')
            .count();
        self.cursor += rest;
    }

    /// Zero-based (line, column) of the cursor, in chars.
    pub(super) fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.buf.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
