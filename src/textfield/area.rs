//! Multi-line (Area) behavior: line navigation, newline insertion, and
//! auto-growing display height.

use super::model::Model;
use super::types::FieldType;
use crate::key::matches_binding;
use bubbletea_rs::KeyMsg;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Handles the Area-only bindings. Returns true when the key was
    /// consumed.
    pub(super) fn handle_area_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.insert_newline) {
            let _ = self.insert_chars(vec!['\n']);
            true
        } else if matches_binding(key_msg, &self.key_map.line_next) {
            self.move_line(1);
            true
        } else if matches_binding(key_msg, &self.key_map.line_previous) {
            self.move_line(-1);
            true
        } else {
            false
        }
    }

    /// The cursor position as (line index, column within line).
    pub(super) fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.chars[..self.pos].iter().filter(|&&c| c == '\n').count();
        let (start, _) = self.current_line_bounds();
        (line, self.pos - start)
    }

    /// Moves the cursor to the adjacent line, keeping the column where the
    /// target line is long enough and clamping to its end otherwise.
    pub(super) fn move_line(&mut self, delta: i32) {
        let lines: Vec<&[char]> = self.chars.split(|&c| c == '\n').collect();
        let (line, col) = self.cursor_line_col();

        let target = line as i32 + delta;
        if target < 0 || target as usize >= lines.len() {
            return;
        }
        let target = target as usize;

        // Char index of the target line's start.
        let mut start = 0;
        for l in lines.iter().take(target) {
            start += l.len() + 1;
        }
        let new_col = col.min(lines[target].len());
        self.set_cursor(start + new_col);
    }

    /// Recomputes the display height from the wrapped content. The height
    /// collapses first and then grows to fit, so shrinking content shrinks
    /// the field on the same event that changed it.
    pub(super) fn recompute_height(&mut self) {
        self.height = 0;
        if self.kind != FieldType::Area {
            self.height = 1;
            return;
        }

        let width = self.width.max(1);
        let mut rows = 0;
        for line in self.value.get().split('\n') {
            let cells = UnicodeWidthStr::width(line);
            rows += 1 + cells.saturating_sub(1) / width;
        }
        self.height = rows.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::new;
    use super::super::types::FieldType;

    #[test]
    fn test_cursor_line_col_tracks_newlines() {
        let mut field = new("notes_label").with_type(FieldType::Area);
        field.set_value(Some("ab\ncdef\ng"));
        field.set_cursor(5); // inside "cdef"
        assert_eq!(field.cursor_line_col(), (1, 2));
        field.set_cursor(0);
        assert_eq!(field.cursor_line_col(), (0, 0));
    }

    #[test]
    fn test_move_line_clamps_column() {
        let mut field = new("notes_label").with_type(FieldType::Area);
        field.set_value(Some("long line here\nab\nanother"));
        field.set_cursor(10); // column 10 on line 0
        field.move_line(1);
        // Line 1 is "ab": column clamps to its end.
        assert_eq!(field.cursor_line_col(), (1, 2));
        field.move_line(1);
        assert_eq!(field.cursor_line_col(), (2, 2));
        field.move_line(-2);
        assert_eq!(field.cursor_line_col(), (0, 2));
    }

    #[test]
    fn test_move_line_stops_at_edges() {
        let mut field = new("notes_label").with_type(FieldType::Area);
        field.set_value(Some("one\ntwo"));
        field.set_cursor(0);
        field.move_line(-1);
        assert_eq!(field.cursor_line_col(), (0, 0));
        field.move_line(1);
        field.move_line(1);
        assert_eq!(field.cursor_line_col().0, 1);
    }

    #[test]
    fn test_height_grows_with_lines() {
        let mut field = new("notes_label").with_type(FieldType::Area);
        assert_eq!(field.height(), 1);
        field.set_value(Some("one\ntwo\nthree"));
        assert_eq!(field.height(), 3);
        field.set_value(Some("one"));
        assert_eq!(field.height(), 1);
    }

    #[test]
    fn test_height_accounts_for_wrapping() {
        let mut field = new("notes_label").with_type(FieldType::Area).with_width(4);
        field.set_value(Some("abcdefgh")); // 8 cells at width 4
        assert_eq!(field.height(), 2);
        field.set_value(Some("abcdefghi")); // 9 cells
        assert_eq!(field.height(), 3);
    }

    #[test]
    fn test_single_line_height_is_fixed() {
        let mut field = new("name_label");
        field.set_value(Some("some long value that would wrap"));
        assert_eq!(field.height(), 1);
    }
}
