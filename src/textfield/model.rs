//! Core model for the textfield component.

use super::keymap::{default_key_map, FieldKeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{
    FieldType, Injection, KeyInterceptor, LabelSource, PasteErrMsg, TextProducer, ValidateFunc,
};
use crate::animation::Tween;
use crate::caret::Caret;
use crate::stream::Value;
use crate::theme::{self, FieldStyles};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// A text field with a floating label.
///
/// The field renders a label, an input or multi-line area, an underline,
/// and optional help text. While the field is empty and unfocused the label
/// rests over the input row; focusing (or filling) the field floats it to
/// the top through an eased transition. Value changes from the host and
/// from user keystrokes funnel through the same observable holder, so
/// update callbacks see every change.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::{new, FieldType};
///
/// let mut field = new("mailAddress_label")
///     .with_type(FieldType::Email)
///     .with_value(Some("ada@example.com"))
///     .on_update(|v| println!("changed: {v}"));
/// let _ = field.focus();
/// assert!(field.active());
/// ```
pub struct Model {
    /// Where the label text comes from; resolved each render.
    pub label: LabelSource,
    /// Optional help text producer rendered below the field.
    pub help: Option<TextProducer>,
    /// Theme styles.
    pub styles: FieldStyles,
    /// Key bindings.
    pub key_map: FieldKeyMap,
    /// The embedded caret.
    pub caret: Caret,
    /// Field width in terminal cells; bounds the underline and wrapping.
    pub width: usize,
    /// Character used to mask password kinds.
    pub echo_char: char,
    /// Last validation failure, if a validator is installed.
    pub err: Option<String>,
    /// One-shot flag: the next blur refocuses the field instead of
    /// deactivating it. Set by composite widgets before a sibling (for
    /// example a dropdown affordance) steals the click.
    pub skip_next_blur: bool,

    pub(super) value: Value<String>,
    pub(super) blurred: Value<()>,
    pub(super) chars: Vec<char>,
    pub(super) pos: usize,
    pub(super) kind: FieldType,
    pub(super) active: bool,
    pub(super) disabled: bool,
    pub(super) align_right: bool,
    pub(super) key_interceptor: Option<KeyInterceptor>,
    pub(super) injection_left: Option<Injection>,
    pub(super) injection_right: Option<Injection>,
    pub(super) validate: Option<ValidateFunc>,

    /// Floating-label transition state. The shown size/offset trail the
    /// tween while it runs and snap to the state-derived endpoints
    /// otherwise.
    pub(super) label_tween: Tween,
    pub(super) label_size: f64,
    pub(super) label_offset: f64,

    /// Display height; auto-grown from content in Area mode.
    pub(super) height: usize,
}

/// Creates a field with the given label source.
///
/// The field starts empty, of kind [`FieldType::Text`], inactive and
/// enabled, with the label resting in its base position.
pub fn new(label: impl Into<LabelSource>) -> Model {
    Model {
        label: label.into(),
        help: None,
        styles: theme::default_styles(),
        key_map: default_key_map(),
        caret: Caret::new(),
        width: theme::DEFAULT_WIDTH,
        echo_char: '*',
        err: None,
        skip_next_blur: false,
        value: Value::new(String::new()),
        blurred: Value::new(()),
        chars: Vec::new(),
        pos: 0,
        kind: FieldType::Text,
        active: false,
        disabled: false,
        align_right: false,
        key_interceptor: None,
        injection_left: None,
        injection_right: None,
        validate: None,
        label_tween: Tween::new(),
        label_size: theme::LABEL_SIZE_BASE,
        label_offset: theme::LABEL_BASE_OFFSET,
        height: 1,
    }
}

/// Creates a field with a label source and a help text producer.
pub fn new_with_help(
    label: impl Into<LabelSource>,
    help: impl Fn() -> String + Send + 'static,
) -> Model {
    let mut m = new(label);
    m.help = Some(Box::new(help));
    m
}

impl Default for Model {
    fn default() -> Self {
        new("")
    }
}

/// Creates a command that retrieves text from the system clipboard.
///
/// The command resolves to a [`PasteMsg`] with the clipboard contents, or a
/// [`PasteErrMsg`] when the clipboard is unavailable or the feature is
/// disabled.
pub fn paste() -> Cmd {
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(""), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
