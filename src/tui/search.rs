use unicode_width::UnicodeWidthStr;

/// Cursor state for the username input.
///
/// The text itself lives in the search form; edits are applied to a copy
/// and pushed back through the form's input binding.
#[derive(Default)]
pub struct InputState {
    /// Byte offset into the text, always on a char boundary
    pub cursor_pos: usize,
}

impl InputState {
    pub fn insert(&mut self, text: &mut String, c: char) {
        self.clamp(text);
        text.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Remove the char before the cursor. Returns true if the text changed.
    pub fn backspace(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = prev_boundary(text, self.cursor_pos);
        text.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Remove the char under the cursor. Returns true if the text changed.
    pub fn delete(&mut self, text: &mut String) -> bool {
        self.clamp(text);
        if self.cursor_pos >= text.len() {
            return false;
        }
        text.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        if self.cursor_pos > 0 {
            self.cursor_pos = prev_boundary(text, self.cursor_pos);
        }
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        if self.cursor_pos < text.len() {
            self.cursor_pos = text[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(text.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.cursor_pos = text.len();
    }

    /// Terminal columns between the start of the text and the cursor
    pub fn display_offset(&self, text: &str) -> u16 {
        let end = self.cursor_pos.min(text.len());
        let width = text.get(..end).map(|s| s.width()).unwrap_or(0);
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    // The text can change under us (cleared on Esc, replaced by the form)
    fn clamp(&mut self, text: &str) {
        if self.cursor_pos > text.len() {
            self.cursor_pos = text.len();
        }
        while !text.is_char_boundary(self.cursor_pos) {
            self.cursor_pos -= 1;
        }
    }
}

fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
