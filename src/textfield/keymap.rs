//! Key bindings for the textfield component.

use crate::key::{self, Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for editing and movement within the field. The line
/// next/previous and insert-newline bindings only take effect in Area mode.
#[derive(Debug, Clone)]
pub struct FieldKeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move cursor one word right.
    pub word_forward: Binding,
    /// Move cursor one word left.
    pub word_backward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete the next word.
    pub delete_word_forward: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Move to the next visual line (Area only).
    pub line_next: Binding,
    /// Move to the previous visual line (Area only).
    pub line_previous: Binding,
    /// Insert a newline (Area only).
    pub insert_newline: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
}

impl Default for FieldKeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new(vec![
                KeyPress::from(KeyCode::Right),
                KeyPress::from((KeyCode::Char('f'), KeyModifiers::CONTROL)),
            ])
            .with_help("→/ctrl+f", "character forward"),

            character_backward: Binding::new(vec![
                KeyPress::from(KeyCode::Left),
                KeyPress::from((KeyCode::Char('b'), KeyModifiers::CONTROL)),
            ])
            .with_help("←/ctrl+b", "character backward"),

            word_forward: Binding::new(vec![
                KeyPress::from((KeyCode::Right, KeyModifiers::ALT)),
                KeyPress::from((KeyCode::Char('f'), KeyModifiers::ALT)),
            ])
            .with_help("alt+→/alt+f", "word forward"),

            word_backward: Binding::new(vec![
                KeyPress::from((KeyCode::Left, KeyModifiers::ALT)),
                KeyPress::from((KeyCode::Char('b'), KeyModifiers::ALT)),
            ])
            .with_help("alt+←/alt+b", "word backward"),

            line_start: Binding::new(vec![
                KeyPress::from(KeyCode::Home),
                KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
            ])
            .with_help("home/ctrl+a", "line start"),

            line_end: Binding::new(vec![
                KeyPress::from(KeyCode::End),
                KeyPress::from((KeyCode::Char('e'), KeyModifiers::CONTROL)),
            ])
            .with_help("end/ctrl+e", "line end"),

            delete_character_backward: Binding::new(vec![
                KeyPress::from(KeyCode::Backspace),
                KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)),
            ])
            .with_help("backspace", "delete character backward"),

            delete_character_forward: Binding::new(vec![
                KeyPress::from(KeyCode::Delete),
                KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)),
            ])
            .with_help("delete", "delete character forward"),

            delete_word_backward: Binding::new(vec![
                KeyPress::from((KeyCode::Backspace, KeyModifiers::ALT)),
                KeyPress::from((KeyCode::Char('w'), KeyModifiers::CONTROL)),
            ])
            .with_help("alt+backspace/ctrl+w", "delete word backward"),

            delete_word_forward: Binding::new(vec![
                KeyPress::from((KeyCode::Delete, KeyModifiers::ALT)),
                KeyPress::from((KeyCode::Char('d'), KeyModifiers::ALT)),
            ])
            .with_help("alt+delete/alt+d", "delete word forward"),

            delete_after_cursor: Binding::new(vec![KeyPress::from((
                KeyCode::Char('k'),
                KeyModifiers::CONTROL,
            ))])
            .with_help("ctrl+k", "delete after cursor"),

            delete_before_cursor: Binding::new(vec![KeyPress::from((
                KeyCode::Char('u'),
                KeyModifiers::CONTROL,
            ))])
            .with_help("ctrl+u", "delete before cursor"),

            line_next: Binding::new(vec![
                KeyPress::from(KeyCode::Down),
                KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
            ])
            .with_help("↓/ctrl+n", "next line"),

            line_previous: Binding::new(vec![
                KeyPress::from(KeyCode::Up),
                KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)),
            ])
            .with_help("↑/ctrl+p", "previous line"),

            insert_newline: Binding::new(vec![
                KeyPress::from(KeyCode::Enter),
                KeyPress::from((KeyCode::Char('m'), KeyModifiers::CONTROL)),
            ])
            .with_help("enter", "insert newline"),

            paste: Binding::new(vec![KeyPress::from((
                KeyCode::Char('v'),
                KeyModifiers::CONTROL,
            ))])
            .with_help("ctrl+v", "paste"),
        }
    }
}

/// The default set of bindings.
pub fn default_key_map() -> FieldKeyMap {
    FieldKeyMap::default()
}

impl key::KeyMap for FieldKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.character_backward,
            &self.character_forward,
            &self.delete_character_backward,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.word_backward,
                &self.word_forward,
            ],
            vec![
                &self.line_start,
                &self.line_end,
                &self.line_previous,
                &self.line_next,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_word_forward,
            ],
            vec![
                &self.delete_before_cursor,
                &self.delete_after_cursor,
                &self.insert_newline,
                &self.paste,
            ],
        ]
    }
}
