use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Cursor and focus of the text input. The text itself lives in the controller.
#[derive(Debug, Default)]
pub struct InputState {
    /// Byte offset into the text, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl InputState {
    /// Apply an editing key to `text`. Returns the new text if it changed.
    pub fn handle_key(&mut self, text: &str, key: KeyEvent) -> Option<String> {
        self.clamp(text);
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut next = text.to_string();
                next.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
                Some(next)
            }
            KeyCode::Backspace => {
                if self.cursor_pos == 0 {
                    return None;
                }
                let prev = prev_boundary(text, self.cursor_pos);
                let mut next = text.to_string();
                next.remove(prev);
                self.cursor_pos = prev;
                Some(next)
            }
            KeyCode::Delete => {
                if self.cursor_pos >= text.len() {
                    return None;
                }
                let mut next = text.to_string();
                next.remove(self.cursor_pos);
                Some(next)
            }
            KeyCode::Left => {
                self.cursor_pos = prev_boundary(text, self.cursor_pos);
                None
            }
            KeyCode::Right => {
                self.cursor_pos = next_boundary(text, self.cursor_pos);
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = text.len();
                None
            }
            _ => None,
        }
    }

    /// Put the cursor at the end, e.g. after the text was replaced by a selection.
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor_pos = text.len();
    }

    /// Display column of the cursor
    pub fn cursor_column(&self, text: &str) -> u16 {
        let end = self.cursor_pos.min(text.len());
        text.get(..end).map_or(0, |s| s.width() as u16)
    }

    fn clamp(&mut self, text: &str) {
        if self.cursor_pos > text.len() || !text.is_char_boundary(self.cursor_pos) {
            self.cursor_pos = text.len();
        }
    }
}

fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
