#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-textfield/")]

//! # bubbletea-textfield
//!
//! A floating-label text field widget for terminal applications built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The field renders a label, a single-line input or auto-growing
//! multi-line area, an underline, and optional help text. While the field
//! is empty and unfocused the label rests over the input row like a
//! placeholder; focusing or filling the field floats it to the top through
//! an eased transition, the way material-style forms behave on the web.
//!
//! ## Features
//!
//! - **Floating label** animated between its base and top positions with
//!   an ease-out tween, driven by tick commands
//! - **Input kinds**: text, email, masked password, password readable only
//!   while focused, and multi-line area with auto-growing height
//! - **Observable value**: external writes and user keystrokes funnel
//!   through one holder, so update callbacks see every change
//! - **Composite-widget hooks**: left/right content injections, a key
//!   interceptor that can swallow keys, and cooperative focus retention
//!   via `skip_next_blur`
//! - **Type-safe key bindings** with help-view integration
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     name: TextField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut name = textfield_new("name_label");
//!         let focus_cmd = name.focus();
//!         (Self { name }, focus_cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.name.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.name.view()
//!     }
//! }
//! ```
//!
//! ## Labels and translation
//!
//! Fields constructed from a string key resolve their label through the
//! [`lang`] registry at render time:
//!
//! ```rust
//! use bubbletea_textfield::{lang, textfield};
//!
//! lang::set_translations([("mailAddress_label", "Email address")]);
//! let field = textfield::new("mailAddress_label");
//! assert!(field.view().contains("Email address"));
//! ```

pub mod animation;
pub mod caret;
pub mod key;
pub mod lang;
pub mod stream;
pub mod textfield;
pub mod theme;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focused components receive keyboard input and render an active state;
/// blurred components ignore input. Both transitions may produce a command
/// (focusing starts caret blinking, blurring an empty field starts the
/// label shrink transition), so both return `Option<Cmd>`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
/// use bubbletea_rs::Cmd;
///
/// fn handle_focus<T: Component>(component: &mut T) {
///     let _cmd: Option<Cmd> = component.focus();
///     assert!(component.focused());
///     let _cmd = component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut field = textfield_new("name_label").with_value(Some("x"));
/// handle_focus(&mut field);
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command such as a
    /// caret blink timer or an entry transition.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state. May return a command such as an
    /// exit transition.
    fn blur(&mut self) -> Option<Cmd>;

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use animation::{Easing, FrameMsg, Interpolation, Tween};
pub use caret::{BlinkMsg, Caret, Mode as CaretMode};
pub use key::{matches, matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use stream::Value;
pub use textfield::{
    default_key_map as textfield_default_key_map, new as textfield_new,
    new_with_help as textfield_new_with_help, paste, FieldKeyMap, FieldType, KeyEvent,
    KeyInterceptor, LabelSource, Model as TextField, PasteErrMsg, PasteMsg, ValidateFunc,
};
pub use theme::{default_styles, FieldStyles};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::caret::Caret;
    pub use crate::key::{matches, matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::textfield::{
        default_key_map as textfield_default_key_map, new as textfield_new,
        new_with_help as textfield_new_with_help, FieldKeyMap, FieldType, KeyEvent, LabelSource,
        Model as TextField, ValidateFunc,
    };
    pub use crate::theme::{default_styles, FieldStyles};
    pub use crate::Component;
}
