//! Line buffer and cursor model for a single segment.

/// Default horizontal tab stop width.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Mutable render buffer for one line-feed delimited segment.
///
/// Printable characters overwrite or append at the cursor. The cursor may sit
/// past the end of the buffer; the gap is padded with spaces only when the
/// next character is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
    saved_cursor: Option<usize>,
}

impl LineBuffer {
    /// Create an empty buffer with the cursor at column 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Write a character at the cursor and advance by one.
    pub fn write(&mut self, c: char) {
        if self.cursor < self.chars.len() {
            self.chars[self.cursor] = c;
        } else {
            self.chars.resize(self.cursor, ' ');
            self.chars.push(c);
        }
        self.cursor += 1;
    }

    /// Carriage return: back to column 0, content untouched.
    pub fn carriage_return(&mut self) {
        self.cursor = 0;
    }

    /// Backspace: step left without deleting.
    pub fn backspace(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Horizontal tab: write spaces up to the next multiple of `tab_size`.
    pub fn tab(&mut self, tab_size: usize) {
        let tab_size = tab_size.max(1);
        let next_stop = (self.cursor / tab_size + 1) * tab_size;
        while self.cursor < next_stop {
            self.write(' ');
        }
    }

    /// Move the cursor right. Padding is deferred to the next write.
    pub fn cursor_forward(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
    }

    /// Move the cursor left, clamped at column 0.
    pub fn cursor_backward(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Move the cursor to a 1-based column.
    pub fn set_column(&mut self, column: usize) {
        self.cursor = column.saturating_sub(1);
    }

    /// Erase from the cursor to the end of the line.
    pub fn erase_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    /// Erase from the start of the line through the cursor.
    ///
    /// The remainder shifts to column 0 and the cursor follows it.
    pub fn erase_to_start(&mut self) {
        let end = self.cursor.saturating_add(1).min(self.chars.len());
        self.chars.drain(..end);
        self.cursor = 0;
    }

    /// Clear the whole line and home the cursor.
    pub fn erase_line(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Insert `n` blanks at the cursor, shifting the rest right.
    pub fn insert_blanks(&mut self, n: usize) {
        if self.cursor >= self.chars.len() {
            return;
        }
        let tail = self.chars.split_off(self.cursor);
        self.chars.extend(std::iter::repeat(' ').take(n));
        self.chars.extend(tail);
    }

    /// Delete up to `n` characters at the cursor, shifting the rest left.
    pub fn delete_chars(&mut self, n: usize) {
        if self.cursor >= self.chars.len() {
            return;
        }
        let end = self.cursor.saturating_add(n).min(self.chars.len());
        self.chars.drain(self.cursor..end);
    }

    /// Remember the cursor for a later restore.
    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// Return to the saved cursor, or column 0 if nothing was saved.
    pub fn restore_cursor(&mut self) {
        self.cursor = self.saved_cursor.unwrap_or(0);
    }

    /// Visible text of the line with trailing blanks removed.
    pub fn render(&self) -> String {
        let end = self
            .chars
            .iter()
            .rposition(|&c| c != ' ')
            .map_or(0, |i| i + 1);
        self.chars[..end].iter().collect()
    }
}
