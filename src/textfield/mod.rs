//! Floating-label text field component.
//!
//! A single reusable field rendering a label, an input or multi-line area,
//! an underline, and optional help text. While empty and unfocused the
//! label rests over the input row; focusing or filling the field floats it
//! to the top through an eased transition.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::textfield::{new, FieldType};
//!
//! let mut field = new("mailAddress_label")
//!     .with_type(FieldType::Email)
//!     .on_update(|v| println!("value: {v}"));
//! let _ = field.focus();
//! ```
//!
//! # Kinds
//!
//! Plain text, email, masked password, password readable while focused
//! ([`FieldType::ExternalPassword`]), and auto-growing multi-line
//! ([`FieldType::Area`]).
//!
//! # Composite widgets
//!
//! Hosts building token/"bubble" inputs hang extra content off the row via
//! the injection hooks, claim keys through the key interceptor, and set
//! `skip_next_blur` to keep focus across clicks on sibling affordances.

pub mod area;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod movement;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, FieldKeyMap};
pub use model::{new, new_with_help, paste, Model};
pub use types::{
    FieldType, Injection, KeyEvent, KeyInterceptor, LabelSource, PasteErrMsg, PasteMsg,
    TextProducer, ValidateFunc,
};
