//! Single-line text input for the query.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Query text plus a cursor, measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    chars: Vec<char>,
    cursor: usize,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `text` with the cursor at the end.
    pub fn with_value(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns `false` when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.chars.len(),
            KeyCode::Char('u') if ctrl => {
                self.chars.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('k') if ctrl => self.chars.truncate(self.cursor),
            KeyCode::Char('w') if ctrl => self.delete_word_before_cursor(),
            KeyCode::Char(c) if !ctrl && !alt => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            // At the edge of the buffer these are no-ops, but still edits.
            KeyCode::Backspace | KeyCode::Delete => {}
            _ => return false,
        }
        true
    }

    fn delete_word_before_cursor(&mut self) {
        let mut start = self.cursor;
        while start > 0 && self.chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && self.chars[start - 1] != ' ' {
            start -= 1;
        }
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    /// The slice of the text that fits into `width` columns, scrolled so the
    /// cursor stays visible, and the cursor column within that slice.
    pub fn visible(&self, width: usize) -> (String, usize) {
        let width = width.max(1);
        let col = |c: &char| c.width().unwrap_or(0);

        // Walk left from the cursor until the window is full.
        let mut start = self.cursor;
        let mut used = 0;
        while start > 0 {
            let w = col(&self.chars[start - 1]);
            if used + w >= width {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut shown = String::new();
        let mut total = 0;
        for c in &self.chars[start..] {
            let w = col(c);
            if total + w > width {
                break;
            }
            total += w;
            shown.push(*c);
        }

        (shown, used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> QueryInput {
        let mut input = QueryInput::new();
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends() {
        let input = typed("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = typed("hllo");
        for _ in 0..3 {
            input.handle_key(key(KeyCode::Left));
        }
        input.handle_key(key(KeyCode::Char('e')));
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[rstest]
    #[case(key(KeyCode::Backspace), "hell", 4)]
    #[case(ctrl('u'), "", 0)]
    #[case(ctrl('w'), "big ", 4)]
    #[case(key(KeyCode::Home), "big hello", 0)]
    fn edits_at_end(#[case] k: KeyEvent, #[case] value: &str, #[case] cursor: usize) {
        let mut input = if value.starts_with("big") {
            typed("big hello")
        } else {
            typed("hello")
        };
        assert!(input.handle_key(k));
        assert_eq!(input.value(), value);
        assert_eq!(input.cursor(), cursor);
    }

    #[test]
    fn kill_to_end() {
        let mut input = typed("hello world");
        input.handle_key(ctrl('a'));
        for _ in 0..5 {
            input.handle_key(key(KeyCode::Right));
        }
        input.handle_key(ctrl('k'));
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn edits_at_edges_do_not_panic() {
        let mut input = QueryInput::new();
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert!(input.handle_key(key(KeyCode::Left)));
        assert!(input.handle_key(ctrl('w')));
        assert!(input.is_empty());
    }

    #[test]
    fn non_edit_keys_are_reported() {
        let mut input = QueryInput::new();
        assert!(!input.handle_key(key(KeyCode::F(2))));
        assert!(!input.handle_key(ctrl('x')));
    }

    #[test]
    fn visible_scrolls_to_cursor() {
        let input = QueryInput::with_value("abcdefghij");
        let (shown, col) = input.visible(4);
        assert_eq!(shown, "hij");
        assert_eq!(col, 3);

        let (shown, col) = QueryInput::with_value("ab").visible(10);
        assert_eq!(shown, "ab");
        assert_eq!(col, 2);
    }
}
