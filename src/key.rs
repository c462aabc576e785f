//! Type-safe key bindings for widget key maps.
//!
//! A [`Binding`] couples one or more concrete key presses with help text and
//! an enabled flag. Widgets declare their key maps as structs of bindings and
//! match incoming [`KeyMsg`]s with [`matches_binding`].
//!
//! ```rust
//! use bubbletea_textfield::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let line_start = Binding::new(vec![
//!     KeyPress::from(KeyCode::Home),
//!     KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
//! ])
//! .with_help("home/ctrl+a", "line start");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single concrete key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text shown for a binding: the key legend and a short description.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Rendered key legend, e.g. `"ctrl+a"`.
    pub key: String,
    /// What the binding does, e.g. `"line start"`.
    pub desc: String,
}

/// A key binding: the presses that trigger it, its help entry, and whether
/// it is currently enabled. Disabled bindings never match.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text and returns the binding for chaining.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the binding disabled. Useful for key maps that switch
    /// bindings off contextually.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding can currently match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The binding's help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the given press is one of this binding's keys.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.enabled() && self.keys.contains(press)
    }
}

/// Returns true when the key message matches the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(&KeyPress {
        code: msg.key,
        mods: msg.modifiers,
    })
}

/// Returns true when the key message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| matches_binding(msg, b))
}

/// Implemented by widget key maps so help views can enumerate bindings.
pub trait KeyMap {
    /// The bindings shown in the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// The bindings shown in the expanded help view, grouped by column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: mods,
        }
    }

    #[test]
    fn test_binding_matches_any_listed_press() {
        let b = Binding::new(vec![
            KeyPress::from(KeyCode::Home),
            KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
        ]);

        assert!(matches_binding(&key(KeyCode::Home, KeyModifiers::NONE), &b));
        assert!(matches_binding(
            &key(KeyCode::Char('a'), KeyModifiers::CONTROL),
            &b
        ));
        assert!(!matches_binding(
            &key(KeyCode::Char('a'), KeyModifiers::NONE),
            &b
        ));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let b = Binding::new(vec![KeyPress::from(KeyCode::Enter)]).with_disabled();
        assert!(!matches_binding(&key(KeyCode::Enter, KeyModifiers::NONE), &b));

        let mut b = b;
        b.set_enabled(true);
        assert!(matches_binding(&key(KeyCode::Enter, KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_help_text_round_trip() {
        let b = Binding::new(vec![KeyPress::from(KeyCode::Tab)]).with_help("tab", "next field");
        assert_eq!(b.help().key, "tab");
        assert_eq!(b.help().desc, "next field");
    }
}
