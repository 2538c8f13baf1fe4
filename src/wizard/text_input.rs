// src/wizard/text_input.rs
//! Multi-line text buffer behind the ID input step.

/// One editing action applied to a focused [`TextInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Char(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Lines of text plus a cursor. The cursor column counts `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    lines: Vec<String>,
    row: usize,
    col: usize,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self { lines: vec![String::new()], row: 0, col: 0, focused: false }
    }
}

impl TextInput {
    pub fn with_value(value: &str) -> Self {
        let mut input = Self::default();
        input.insert_str(value);
        input
    }

    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(row, column)` of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn clear(&mut self) {
        *self = Self { focused: self.focused, ..Self::default() };
    }

    /// Place the cursor after the last character of the last line.
    pub fn move_to_end(&mut self) {
        self.row = self.lines.len() - 1;
        self.col = self.line_len(self.row);
    }

    pub fn apply(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Char(c) => self.insert_char(c),
            InputEdit::Paste(text) => self.insert_str(&text),
            InputEdit::Newline => self.insert_newline(),
            InputEdit::Backspace => self.backspace(),
            InputEdit::Delete => self.delete(),
            InputEdit::Left => self.move_left(),
            InputEdit::Right => self.move_right(),
            InputEdit::Up => self.move_vertical(-1),
            InputEdit::Down => self.move_vertical(1),
            InputEdit::Home => self.col = 0,
            InputEdit::End => self.col = self.line_len(self.row),
        }
    }

    fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' => self.insert_newline(),
                c => self.insert_char(c),
            }
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.row, self.col);
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    fn insert_newline(&mut self) {
        let at = self.byte_offset(self.row, self.col);
        let rest = self.lines[self.row].split_off(at);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, rest);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_offset(self.row, self.col);
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let at = self.byte_offset(self.row, self.col);
            self.lines[self.row].remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(row) = self.row.checked_add_signed(delta).filter(|r| *r < self.lines.len()) else {
            return;
        };
        self.row = row;
        self.col = self.col.min(self.line_len(row));
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_offset(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }
}
