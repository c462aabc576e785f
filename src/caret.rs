//! Blinking caret embedded by the text field.
//!
//! The caret toggles visibility on a timer while its owner is focused.
//! Blink messages carry the owning caret's id and a sequence tag so that
//! messages scheduled before a focus change are dropped instead of toggling
//! a caret they no longer belong to.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that toggles a caret's visibility.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Instance the message targets.
    pub id: usize,
    /// Sequence tag; stale tags are ignored.
    pub tag: usize,
}

/// Caret rendering behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Toggle visibility on a timer while focused.
    Blink,
    /// Always visible while focused.
    Static,
    /// Never visible.
    Hidden,
}

/// The caret model. Owned and updated by a parent widget.
#[derive(Debug, Clone)]
pub struct Caret {
    /// Delay between blink toggles.
    pub blink_speed: Duration,
    /// Style applied when the caret block is shown.
    pub style: Style,
    /// Style for the character underneath while the block is hidden.
    pub text_style: Style,

    ch: String,
    id: usize,
    focus: bool,
    shown: bool,
    tag: usize,
    mode: Mode,
}

impl Default for Caret {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            ch: " ".to_string(),
            id: next_id(),
            focus: false,
            shown: false,
            tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Caret {
    /// Creates a caret with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The caret's rendering mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the rendering mode, returning a blink command when entering
    /// blink mode while focused.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.shown = self.focus && mode != Mode::Hidden;
        if mode == Mode::Blink && self.focus {
            return Some(self.blink_cmd());
        }
        None
    }

    /// Handles blink messages addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let blink = msg.downcast_ref::<BlinkMsg>()?;
        if self.mode != Mode::Blink || !self.focus {
            return None;
        }
        if blink.id != self.id || blink.tag != self.tag {
            return None;
        }
        self.shown = !self.shown;
        Some(self.blink_cmd())
    }

    /// Focuses the caret and starts blinking if applicable.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.shown = self.mode != Mode::Hidden;
        (self.mode == Mode::Blink).then(|| self.blink_cmd())
    }

    /// Blurs the caret, hiding it.
    pub fn blur(&mut self) {
        self.focus = false;
        self.shown = false;
    }

    /// Whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character displayed under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.ch = s.to_string();
    }

    /// Renders the caret cell.
    pub fn view(&self) -> String {
        if self.shown {
            self.style.clone().inline(true).reverse(true).render(&self.ch)
        } else {
            self.text_style.clone().inline(true).render(&self.ch)
        }
    }

    fn blink_cmd(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        tick(self.blink_speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg)
    }
}
