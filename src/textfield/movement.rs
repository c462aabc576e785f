//! Cursor movement and text deletion methods.

use super::model::Model;
use super::types::FieldType;

impl Model {
    /// Bounds of the line the cursor is on, as (start, end) character
    /// indices with `end` exclusive of the newline. Outside Area mode the
    /// whole value is one line.
    pub(super) fn current_line_bounds(&self) -> (usize, usize) {
        if self.kind != FieldType::Area {
            return (0, self.chars.len());
        }
        let start = self.chars[..self.pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.chars[self.pos..]
            .iter()
            .position(|&c| c == '\n')
            .map(|i| self.pos + i)
            .unwrap_or(self.chars.len());
        (start, end)
    }

    /// Move to the start of the current line.
    pub(super) fn line_start(&mut self) {
        let (start, _) = self.current_line_bounds();
        self.set_cursor(start);
    }

    /// Move to the end of the current line.
    pub(super) fn line_end(&mut self) {
        let (_, end) = self.current_line_bounds();
        self.set_cursor(end);
    }

    /// Delete from the start of the current line to the cursor.
    pub(super) fn delete_before_cursor(&mut self) {
        let (start, _) = self.current_line_bounds();
        if self.pos > start {
            self.chars.drain(start..self.pos);
            self.set_cursor(start);
            self.commit_chars();
        }
    }

    /// Delete from the cursor to the end of the current line.
    pub(super) fn delete_after_cursor(&mut self) {
        let (_, end) = self.current_line_bounds();
        if self.pos < end {
            self.chars.drain(self.pos..end);
            self.commit_chars();
        }
    }

    /// Delete the word before the cursor. In masked modes this collapses to
    /// deleting the whole line before the cursor, since word boundaries are
    /// not visible.
    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 || self.chars.is_empty() {
            return;
        }
        if self.masked() {
            self.delete_before_cursor();
            return;
        }

        let old_pos = self.pos;
        let mut i = self.pos;

        while i > 0 && self.chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.chars[i - 1].is_whitespace() {
            i -= 1;
        }

        self.chars.drain(i..old_pos);
        self.set_cursor(i);
        self.commit_chars();
    }

    /// Delete the word after the cursor.
    pub(super) fn delete_word_forward(&mut self) {
        if self.pos >= self.chars.len() || self.chars.is_empty() {
            return;
        }
        if self.masked() {
            self.delete_after_cursor();
            return;
        }

        let mut end = self.pos;
        while end < self.chars.len() && self.chars[end].is_whitespace() {
            end += 1;
        }
        while end < self.chars.len() && !self.chars[end].is_whitespace() {
            end += 1;
        }

        self.chars.drain(self.pos..end);
        self.commit_chars();
    }

    /// Move the cursor backward by one word.
    pub(super) fn word_backward(&mut self) {
        if self.pos == 0 || self.chars.is_empty() {
            return;
        }
        if self.masked() {
            self.cursor_start();
            return;
        }

        let mut i = self.pos;
        while i > 0 && self.chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.chars[i - 1].is_whitespace() {
            i -= 1;
        }
        self.set_cursor(i);
    }

    /// Move the cursor forward by one word.
    pub(super) fn word_forward(&mut self) {
        if self.pos >= self.chars.len() || self.chars.is_empty() {
            return;
        }
        if self.masked() {
            self.cursor_end();
            return;
        }

        let mut i = self.pos;
        while i < self.chars.len() && self.chars[i].is_whitespace() {
            i += 1;
        }
        while i < self.chars.len() && !self.chars[i].is_whitespace() {
            i += 1;
        }
        self.set_cursor(i);
    }
}
