//! Configuration, focus management, and the update loop.

use super::model::{paste, Model};
use super::types::{
    FieldType, Injection, KeyEvent, KeyInterceptor, PasteErrMsg, PasteMsg, ValidateFunc,
};
use crate::animation::{Easing, Interpolation};
use crate::key::matches_binding;
use crate::theme;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    // --- Fluent configuration -------------------------------------------

    /// Sets the input kind.
    pub fn with_type(mut self, kind: FieldType) -> Self {
        self.set_type(kind);
        self
    }

    /// Sets the initial value. `None` is coerced to the empty string.
    pub fn with_value<S: Into<String>>(mut self, value: Option<S>) -> Self {
        self.set_value(value);
        self
    }

    /// Attaches a help text producer rendered below the field.
    pub fn with_help(mut self, help: impl Fn() -> String + Send + 'static) -> Self {
        self.help = Some(Box::new(help));
        self
    }

    /// Sets the field width in terminal cells.
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Registers a callback invoked on every value change, external or
    /// user-driven, with the new value.
    pub fn on_update(mut self, mut handler: impl FnMut(&str) + Send + 'static) -> Self {
        self.value.subscribe(Box::new(move |v| handler(v.as_str())));
        self
    }

    /// Registers a callback invoked whenever the field deactivates.
    pub fn on_blur(mut self, mut handler: impl FnMut() + Send + 'static) -> Self {
        self.blurred.subscribe(Box::new(move |_| handler()));
        self
    }

    /// Marks the field disabled: it renders static text instead of an
    /// editable control and never receives focus.
    pub fn with_disabled(mut self) -> Self {
        self.set_disabled();
        self
    }

    /// Right-aligns the value within the field width.
    pub fn with_align_right(mut self) -> Self {
        self.align_right = true;
        self
    }

    /// Installs a key interceptor consulted before any binding runs.
    pub fn with_key_interceptor(
        mut self,
        interceptor: impl FnMut(&KeyEvent) -> bool + Send + 'static,
    ) -> Self {
        self.key_interceptor = Some(Box::new(interceptor));
        self
    }

    /// Renders extra content on the left of the input row.
    pub fn with_injection_left(mut self, injection: impl Fn() -> String + Send + 'static) -> Self {
        self.injection_left = Some(Box::new(injection));
        self
    }

    /// Renders extra content on the right of the input row.
    pub fn with_injection_right(mut self, injection: impl Fn() -> String + Send + 'static) -> Self {
        self.injection_right = Some(Box::new(injection));
        self
    }

    /// Installs a validator run on every value change.
    pub fn with_validate(mut self, validate: ValidateFunc) -> Self {
        self.validate = Some(validate);
        self
    }

    // --- Setters ---------------------------------------------------------

    /// Sets the input kind in place.
    pub fn set_type(&mut self, kind: FieldType) {
        self.kind = kind;
        self.recompute_height();
    }

    /// Replaces the value. `None` is coerced to the empty string.
    ///
    /// The write goes through the observable holder, so update callbacks
    /// fire. In Area mode the editing buffer is only re-synced when the new
    /// value actually differs from it, so a write echoing the buffer's own
    /// contents cannot clobber an in-progress edit.
    pub fn set_value<S: Into<String>>(&mut self, value: Option<S>) {
        let s = value.map(Into::into).unwrap_or_default();
        self.err = self.validate_str(&s);

        let buffer: String = self.chars.iter().collect();
        if self.kind != FieldType::Area || buffer != s {
            let was_empty = self.chars.is_empty();
            self.chars = s.chars().collect();
            if (self.pos == 0 && was_empty) || self.pos > self.chars.len() {
                self.pos = self.chars.len();
            }
        }

        self.value.set(s);
        self.recompute_height();
        self.sync_label_metrics();
    }

    /// Disables the field in place.
    pub fn set_disabled(&mut self) {
        self.disabled = true;
        self.sync_label_metrics();
    }

    /// Sets right alignment in place.
    pub fn set_align_right(&mut self, align_right: bool) {
        self.align_right = align_right;
    }

    /// Sets the field width in place.
    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
        self.recompute_height();
    }

    /// Replaces the key interceptor.
    pub fn set_key_interceptor(&mut self, interceptor: Option<KeyInterceptor>) {
        self.key_interceptor = interceptor;
    }

    /// Replaces the left injection.
    pub fn set_injection_left(&mut self, injection: Option<Injection>) {
        self.injection_left = injection;
    }

    /// Replaces the right injection.
    pub fn set_injection_right(&mut self, injection: Option<Injection>) {
        self.injection_right = injection;
    }

    // --- Accessors -------------------------------------------------------

    /// The current value.
    pub fn value(&self) -> String {
        self.value.get().clone()
    }

    /// Whether the value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.value.get().is_empty()
    }

    /// The input kind.
    pub fn field_type(&self) -> FieldType {
        self.kind
    }

    /// Whether the field currently has focus.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current display height in rows. 1 outside Area mode.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the label currently sits in the floated (top) position.
    pub fn label_floated(&self) -> bool {
        self.label_offset < theme::LABEL_BASE_OFFSET / 2.0
    }

    /// Whether a label transition is in flight.
    pub fn label_animating(&self) -> bool {
        self.label_tween.is_animating()
    }

    /// The label's current (size, offset) transition values. The built-in
    /// renderer quantizes the offset onto character cells; hosts drawing
    /// the field themselves can map both onto their own label presentation.
    pub fn label_metrics(&self) -> (f64, f64) {
        (self.label_size, self.label_offset)
    }

    /// Whether the value is currently rendered masked.
    pub(super) fn masked(&self) -> bool {
        match self.kind {
            FieldType::Password => true,
            FieldType::ExternalPassword => !self.active,
            _ => false,
        }
    }

    // --- Cursor ----------------------------------------------------------

    /// Moves the cursor, clamping to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.chars.len());
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.chars.len());
    }

    // --- Focus / blur ----------------------------------------------------

    /// Activates the field. No-op while already active or disabled.
    ///
    /// Focusing an empty field starts the label grow transition; the caret
    /// resumes blinking once the transition completes. Returns the command
    /// driving whichever of the two comes first.
    pub fn focus(&mut self) -> Option<Cmd> {
        if self.active || self.disabled {
            return None;
        }
        self.active = true;
        let caret_cmd = self.caret.focus();
        if self.is_empty() {
            return Some(self.animate_label(true));
        }
        self.sync_label_metrics();
        caret_cmd
    }

    /// Deactivates the field, unless `skip_next_blur` is set, in which case
    /// the field keeps focus and the flag is cleared. Blurring an empty
    /// field starts the label shrink transition. Blur listeners are
    /// notified on every real deactivation.
    pub fn blur(&mut self) -> Option<Cmd> {
        if self.skip_next_blur {
            self.skip_next_blur = false;
            return self.caret.focus();
        }
        let cmd = if self.active && self.is_empty() {
            Some(self.animate_label(false))
        } else {
            None
        };
        self.active = false;
        self.caret.blur();
        self.sync_label_metrics();
        self.blurred.set(());
        cmd
    }

    // --- Update loop -----------------------------------------------------

    /// Processes a message: label transition frames, caret blinks, paste
    /// results, and, while the field is active, key input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // Label transition frames advance regardless of focus.
        if let Some(step) = self.label_tween.update(&msg) {
            let values = self.label_tween.values();
            self.label_size = values[0];
            self.label_offset = values[1];
            return match step {
                Some(cmd) => Some(cmd),
                // Transition finished; resume caret blinking if still active.
                None => {
                    if self.active {
                        self.caret.focus()
                    } else {
                        None
                    }
                }
            };
        }

        if let Some(cmd) = self.caret.update(&msg) {
            return Some(cmd);
        }

        // Paste results may land after focus moved on; apply them anyway so
        // a fill that bypassed the focus path still floats the label.
        if let Some(p) = msg.downcast_ref::<PasteMsg>() {
            if self.disabled {
                return None;
            }
            let chars: Vec<char> = p.0.chars().collect();
            return self.insert_chars(chars);
        }
        if let Some(e) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(e.0.clone());
            return None;
        }

        if self.disabled || !self.active {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let event = KeyEvent::from(key_msg);
            if let Some(interceptor) = self.key_interceptor.as_mut() {
                if !interceptor(&event) {
                    return None;
                }
            }

            if matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }

            if self.kind == FieldType::Area && self.handle_area_keys(key_msg) {
                return None;
            }
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            return self.handle_character_input(key_msg);
        }

        None
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.chars.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.line_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.line_end();
        }
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if !self.chars.is_empty() && self.pos > 0 {
                self.chars.remove(self.pos - 1);
                self.pos -= 1;
                self.commit_chars();
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if !self.chars.is_empty() && self.pos < self.chars.len() {
                self.chars.remove(self.pos);
                self.commit_chars();
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                return self.insert_chars(vec![ch]);
            }
        }
        None
    }

    /// Inserts characters at the cursor, funnelling the change through the
    /// observable holder. A fill that turns an empty, inactive field
    /// non-empty returns the label fade-in command.
    pub(super) fn insert_chars(&mut self, runes: Vec<char>) -> Option<Cmd> {
        let was_empty = self.chars.is_empty();

        let mut inserted = 0;
        for ch in runes {
            if self.kind != FieldType::Area && (ch == '\n' || ch == '\r') {
                continue;
            }
            self.chars.insert(self.pos, ch);
            self.pos += 1;
            inserted += 1;
        }
        if inserted == 0 {
            return None;
        }

        self.commit_chars();

        if was_empty && !self.chars.is_empty() && !self.active {
            return Some(self.animate_label(true));
        }
        None
    }

    /// Writes the editing buffer into the holder, validating and growing
    /// the display height.
    pub(super) fn commit_chars(&mut self) {
        let s: String = self.chars.iter().collect();
        self.err = self.validate_str(&s);
        self.value.set(s);
        self.recompute_height();
    }

    pub(super) fn validate_str(&self, s: &str) -> Option<String> {
        self.validate.as_ref().and_then(|v| v(s).err())
    }

    // --- Label transition ------------------------------------------------

    /// Starts the floating-label transition. Fading in moves the label from
    /// its base position to the top; fading out swaps the endpoint pairs.
    /// Fire-and-forget: the returned command drives the frames, and a
    /// restart cancels any transition still in flight.
    pub(super) fn animate_label(&mut self, fade_in: bool) -> Cmd {
        let mut sizes = [theme::LABEL_SIZE_BASE, theme::LABEL_SIZE_SMALL];
        let mut offsets = [theme::LABEL_BASE_OFFSET, 0.0];
        if !fade_in {
            sizes.reverse();
            offsets.reverse();
        }
        self.label_tween.start(
            vec![
                Interpolation::new(sizes[0], sizes[1]),
                Interpolation::new(offsets[0], offsets[1]),
            ],
            Easing::Out,
        )
    }

    /// Snaps the label metrics to their state-derived endpoints. No-op
    /// while a transition is animating them.
    pub(super) fn sync_label_metrics(&mut self) {
        if self.label_tween.is_animating() {
            return;
        }
        if self.is_empty() && !self.disabled && !self.active {
            self.label_size = theme::LABEL_SIZE_BASE;
            self.label_offset = theme::LABEL_BASE_OFFSET;
        } else {
            self.label_size = theme::LABEL_SIZE_SMALL;
            self.label_offset = 0.0;
        }
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) -> Option<Cmd> {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.active()
    }
}
