use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text field with a grapheme-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    /// Cursor position in graphemes
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
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

    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, c);
        // a combining mark joins the previous grapheme instead of adding one
        let end = offset + c.len_utf8();
        self.cursor = self.text[..end].graphemes(true).count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> u16 {
        let prefix = &self.text[..self.byte_offset(self.cursor)];
        UnicodeWidthStr::width(prefix) as u16
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut input = InputBuffer::new();
        text.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_insert_appends_at_cursor() {
        let input = typed("кот");
        assert_eq!(input.text(), "кот");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = typed("кт");
        input.move_left();
        input.insert('о');
        assert_eq!(input.text(), "кот");
    }

    #[test]
    fn test_backspace_removes_cyrillic_char() {
        let mut input = typed("кот");
        input.backspace();
        assert_eq!(input.text(), "ко");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("кот");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "кот");
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        // "й" written as "и" + combining breve
        let mut input = typed("и\u{306}");
        assert_eq!(input.cursor(), 1);
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_combining_mark_in_the_middle_keeps_cursor() {
        let mut input = typed("ит");
        input.move_left();
        input.insert('\u{306}');
        assert_eq!(input.text(), "и\u{306}т");
        assert_eq!(input.cursor(), 1);
        input.insert('ь');
        assert_eq!(input.text(), "и\u{306}ьт");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = typed("кот");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "от");
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "от");
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut input = typed("кот");
        assert_eq!(input.cursor_column(), 3);
        input.move_left();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut input = typed("да");
        input.move_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_clear() {
        let mut input = typed("да");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
