//! Single-line text input for the search query.

/// Editing operations the search box understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Clear,
}

/// Search text plus a cursor measured in characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
    cursor: usize,
}

impl SearchBox {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `edit`. Returns true when the text changed.
    pub fn apply(&mut self, edit: SearchEdit) -> bool {
        match edit {
            SearchEdit::Insert(ch) => {
                let at = self.byte_pos();
                self.text.insert(at, ch);
                self.cursor += 1;
                true
            }
            SearchEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_pos();
                self.text.remove(at);
                true
            }
            SearchEdit::Delete => {
                if self.cursor >= self.text.chars().count() {
                    return false;
                }
                let at = self.byte_pos();
                self.text.remove(at);
                true
            }
            SearchEdit::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            SearchEdit::Right => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            SearchEdit::Clear => {
                let changed = !self.text.is_empty();
                self.text.clear();
                self.cursor = 0;
                changed
            }
        }
    }

    fn byte_pos(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
