//! View rendering for the textfield component.
//!
//! The rendered block is, top to bottom: the label line (blank while the
//! label rests over the input row), the input row or area rows, the
//! underline, and the optional help line.

use super::model::Model;
use super::types::FieldType;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl Model {
    /// Renders the field in its current state.
    pub fn view(&self) -> String {
        let mut lines = vec![self.label_line()];
        lines.extend(self.content_rows());
        lines.push(self.underline_row());
        if let Some(help) = &self.help {
            lines.push(self.styles.help.render(&help()));
        }
        lines.join("\n")
    }

    fn label_line(&self) -> String {
        if !self.label_floated() {
            return String::new();
        }
        let style = if self.active() {
            &self.styles.label_active
        } else {
            &self.styles.label
        };
        style.render(&self.label.resolve())
    }

    fn underline_row(&self) -> String {
        if self.is_disabled() {
            return " ".repeat(self.width);
        }
        if self.active() {
            self.styles.underline_active.render(&"━".repeat(self.width))
        } else {
            self.styles.underline.render(&"─".repeat(self.width))
        }
    }

    fn content_rows(&self) -> Vec<String> {
        let left = self
            .injection_left
            .as_ref()
            .map(|f| f())
            .unwrap_or_default();
        let right = self
            .injection_right
            .as_ref()
            .map(|f| f())
            .unwrap_or_default();

        if self.is_disabled() {
            return self.disabled_rows(&left, &right);
        }

        if !self.label_floated() {
            // Empty, inactive field: the label rests over the input row.
            let body = self.styles.label_base.render(&self.label.resolve());
            return vec![format!("{left}{body}{right}")];
        }

        match self.field_type() {
            FieldType::Area => self.area_rows(&left, &right),
            _ => vec![self.input_row(&left, &right)],
        }
    }

    fn disabled_rows(&self, left: &str, right: &str) -> Vec<String> {
        let display = self.echo_transform(self.value.get());
        if self.field_type() == FieldType::Area {
            let mut rows: Vec<String> = display
                .split('\n')
                .map(|l| self.styles.disabled_text.render(l))
                .collect();
            if let Some(first) = rows.first_mut() {
                *first = format!("{left}{first}{right}");
            }
            rows
        } else {
            let pad = self.alignment_pad(&display, false);
            let body = self.styles.disabled_text.render(&display);
            vec![format!("{left}{pad}{body}{right}")]
        }
    }

    fn input_row(&self, left: &str, right: &str) -> String {
        let display = self.echo_transform(self.value.get());
        let chars: Vec<char> = display.chars().collect();
        let pos = self.position().min(chars.len());

        let body = if self.active() {
            let before: String = chars[..pos].iter().collect();
            let after: String = chars
                .get(pos + 1..)
                .map(|c| c.iter().collect())
                .unwrap_or_default();
            let mut caret = self.caret.clone();
            match chars.get(pos) {
                Some(ch) => caret.set_char(&ch.to_string()),
                None => caret.set_char(" "),
            }
            format!(
                "{}{}{}",
                self.styles.text.render(&before),
                caret.view(),
                self.styles.text.render(&after)
            )
        } else {
            self.styles.text.render(&display)
        };

        let caret_at_end = self.active() && pos == chars.len();
        let pad = self.alignment_pad(&display, caret_at_end);
        format!("{left}{pad}{body}{right}")
    }

    fn area_rows(&self, left: &str, right: &str) -> Vec<String> {
        let value = self.value.get().clone();
        let (cursor_line, cursor_col) = self.cursor_line_col();

        let mut rows = Vec::new();
        for (i, line) in value.split('\n').enumerate() {
            let caret_col = (self.active() && i == cursor_line).then_some(cursor_col);
            rows.extend(self.wrap_with_caret(line, caret_col));
        }
        if let Some(first) = rows.first_mut() {
            *first = format!("{left}{first}{right}");
        }
        rows
    }

    /// Wraps one logical line at the field width, splicing the caret cell
    /// in at `caret_col` when given.
    fn wrap_with_caret(&self, line: &str, caret_col: Option<usize>) -> Vec<String> {
        let width = self.width.max(1);
        let mut rows = Vec::new();
        let mut row = String::new();
        let mut row_cells = 0usize;

        for (idx, ch) in line.chars().enumerate() {
            let cells = UnicodeWidthChar::width(ch).unwrap_or(0);
            if row_cells + cells > width && row_cells > 0 {
                rows.push(std::mem::take(&mut row));
                row_cells = 0;
            }
            if caret_col == Some(idx) {
                let mut caret = self.caret.clone();
                caret.set_char(&ch.to_string());
                row.push_str(&caret.view());
            } else {
                row.push(ch);
            }
            row_cells += cells;
        }

        // Caret past the last character sits on a trailing cell.
        if let Some(col) = caret_col {
            if col >= line.chars().count() {
                if row_cells + 1 > width && row_cells > 0 {
                    rows.push(std::mem::take(&mut row));
                }
                let mut caret = self.caret.clone();
                caret.set_char(" ");
                row.push_str(&caret.view());
            }
        }

        rows.push(row);
        rows
    }

    fn alignment_pad(&self, display: &str, caret_at_end: bool) -> String {
        if !self.align_right {
            return String::new();
        }
        let cells = UnicodeWidthStr::width(display) + usize::from(caret_at_end);
        " ".repeat(self.width.saturating_sub(cells))
    }

    pub(super) fn echo_transform(&self, v: &str) -> String {
        if self.masked() {
            self.echo_char.to_string().repeat(v.chars().count())
        } else {
            v.to_string()
        }
    }
}
