//! Core types for the textfield component.

use crate::lang;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// The input kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Plain single-line text. The default.
    Text,
    /// Email address entry. Same editing behavior as `Text`; the kind is
    /// exposed so hosts can attach validation or submission semantics.
    Email,
    /// Single-line entry masked with the echo character.
    Password,
    /// Multi-line entry with auto-growing height.
    Area,
    /// Masked while inactive, readable while the field has focus.
    ExternalPassword,
}

/// Where a field's label text comes from. Resolved at render time.
pub enum LabelSource {
    /// A translation key looked up through [`crate::lang`].
    Key(String),
    /// A producer returning the display text directly.
    Computed(Box<dyn Fn() -> String + Send>),
}

impl LabelSource {
    /// A label produced by a closure instead of a translation key.
    pub fn computed(f: impl Fn() -> String + Send + 'static) -> Self {
        LabelSource::Computed(Box::new(f))
    }

    /// Resolves the label to display text.
    pub fn resolve(&self) -> String {
        match self {
            LabelSource::Key(key) => lang::get(key),
            LabelSource::Computed(f) => f(),
        }
    }
}

impl From<&str> for LabelSource {
    fn from(key: &str) -> Self {
        LabelSource::Key(key.to_string())
    }
}

impl From<String> for LabelSource {
    fn from(key: String) -> Self {
        LabelSource::Key(key)
    }
}

/// The key press handed to a [`KeyInterceptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub code: KeyCode,
    /// Whether control was held.
    pub ctrl: bool,
    /// Whether shift was held.
    pub shift: bool,
}

impl From<&KeyMsg> for KeyEvent {
    fn from(msg: &KeyMsg) -> Self {
        Self {
            code: msg.key,
            ctrl: msg.modifiers.contains(KeyModifiers::CONTROL),
            shift: msg.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

/// Interceptor consulted before any key binding runs. Returning `false`
/// swallows the key, suppressing default handling. Composite widgets use
/// this to claim keys like comma or enter while building token lists.
pub type KeyInterceptor = Box<dyn FnMut(&KeyEvent) -> bool + Send>;

/// Render function producing extra content beside the input row.
pub type Injection = Box<dyn Fn() -> String + Send>;

/// Producer for supplementary text, resolved at render time.
pub type TextProducer = Box<dyn Fn() -> String + Send>;

/// Validates the value on every change; the error is stored on the model.
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send>;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
