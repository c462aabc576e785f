//! Tests for the textfield component.

use super::model::{new, new_with_help, Model};
use super::types::{FieldType, PasteMsg};
use crate::key::KeyMap as _;
use crate::lang;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn press(field: &mut Model, code: KeyCode) -> Option<bubbletea_rs::Cmd> {
    press_mod(field, code, KeyModifiers::NONE)
}

fn press_mod(
    field: &mut Model,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Option<bubbletea_rs::Cmd> {
    field.update(Box::new(KeyMsg {
        key: code,
        modifiers,
    }) as Msg)
}

fn type_str(field: &mut Model, s: &str) {
    for ch in s.chars() {
        let _ = press(field, KeyCode::Char(ch));
    }
}

/// Steps the label transition to completion synchronously.
fn run_label_transition(field: &mut Model) {
    let mut guard = 0;
    while field.label_animating() {
        let frame: Msg = Box::new(field.label_tween.test_frame());
        let _ = field.update(frame);
        guard += 1;
        assert!(guard < 10_000, "label transition must terminate");
    }
}

#[test]
fn test_new_default_values() {
    let field = new("name_label");
    assert_eq!(field.value(), "");
    assert!(field.is_empty());
    assert_eq!(field.field_type(), FieldType::Text);
    assert!(!field.active());
    assert!(!field.is_disabled());
    assert!(!field.label_floated());
    assert_eq!(field.position(), 0);
    assert!(field.err.is_none());
}

#[test]
fn test_set_value_and_is_empty() {
    let mut field = new("name_label");

    field.set_value(Some("Ada"));
    assert!(!field.is_empty());
    assert_eq!(field.value(), "Ada");

    field.set_value(None::<String>);
    assert!(field.is_empty());

    field.set_value(Some(""));
    assert!(field.is_empty());
}

#[test]
fn test_rendered_value_and_label() {
    lang::add_translation("tf_test_name", "Name");
    let mut field = new("tf_test_name");
    field.set_value(Some("Ada"));

    assert!(!field.is_empty());
    let view = field.view();
    assert!(view.contains("Ada"));
    assert!(view.contains("Name"), "floated label shows translated text");
}

#[test]
fn test_computed_label_resolves_at_render() {
    let field = new(super::types::LabelSource::computed(|| "Subject".to_string()))
        .with_value(Some("hi"));
    assert!(field.view().contains("Subject"));
}

#[test]
fn test_label_rests_over_empty_input_row() {
    lang::add_translation("tf_test_resting", "Comment");
    let field = new("tf_test_resting");
    assert!(!field.label_floated());
    let view = field.view();
    // Label appears once, in the input row, with a blank top line.
    assert!(view.starts_with('\n'));
    assert_eq!(view.matches("Comment").count(), 1);
}

#[test]
fn test_focus_floats_label_on_empty_field() {
    let mut field = new("name_label");
    let cmd = field.focus();

    assert!(field.active());
    assert!(cmd.is_some(), "grow transition command issued");
    assert!(field.label_animating());

    run_label_transition(&mut field);
    assert!(field.label_floated());
    assert!(!field.label_animating());
}

#[test]
fn test_label_metrics_travel_between_endpoints() {
    let mut field = new("name_label");
    assert_eq!(
        field.label_metrics(),
        (crate::theme::LABEL_SIZE_BASE, crate::theme::LABEL_BASE_OFFSET)
    );

    let _ = field.focus();
    run_label_transition(&mut field);
    assert_eq!(
        field.label_metrics(),
        (crate::theme::LABEL_SIZE_SMALL, 0.0)
    );
}

#[test]
fn test_focus_is_idempotent_while_active() {
    let mut field = new("name_label");
    assert!(field.focus().is_some());
    assert!(field.active());

    // Second focus is a no-op: still active, no second transition issued.
    assert!(field.focus().is_none());
    assert!(field.active());
}

#[test]
fn test_focus_on_nonempty_field_does_not_animate() {
    let mut field = new("name_label").with_value(Some("Ada"));
    let _ = field.focus();
    assert!(field.active());
    assert!(!field.label_animating(), "label already floated");
    assert!(field.label_floated());
}

#[test]
fn test_disabled_field_never_activates() {
    let mut field = new("name_label").with_disabled();
    assert!(field.focus().is_none());
    assert!(!field.active());

    // Disabled fields float the label even while empty.
    assert!(field.label_floated());
}

#[test]
fn test_blur_with_skip_flag_keeps_focus() {
    let notified = Arc::new(AtomicUsize::new(0));
    let seen = notified.clone();
    let mut field = new("name_label")
        .with_value(Some("x"))
        .on_blur(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
    let _ = field.focus();

    field.skip_next_blur = true;
    let _ = field.blur();

    assert!(field.active(), "skip flag suppresses deactivation");
    assert!(!field.skip_next_blur, "flag is one-shot");
    assert_eq!(notified.load(Ordering::SeqCst), 0, "no blur notification");

    // The next blur is a real one.
    let _ = field.blur();
    assert!(!field.active());
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn test_blur_on_empty_field_shrinks_label() {
    let mut field = new("name_label");
    let _ = field.focus();
    run_label_transition(&mut field);
    assert!(field.label_floated());

    let cmd = field.blur();
    assert!(cmd.is_some(), "shrink transition command issued");
    assert!(!field.active());

    run_label_transition(&mut field);
    assert!(!field.label_floated());
}

#[test]
fn test_on_update_fires_once_per_change() {
    let count = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(String::new()));
    let seen_count = count.clone();
    let seen_last = last.clone();

    let mut field = new("name_label").on_update(move |v| {
        seen_count.fetch_add(1, Ordering::SeqCst);
        *seen_last.lock().unwrap() = v.to_string();
    });

    field.set_value(Some("Ada"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock().unwrap(), "Ada");

    let _ = field.focus();
    type_str(&mut field, "!");
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(*last.lock().unwrap(), "Ada!");
}

#[test]
fn test_typing_edits_value() {
    let mut field = new("name_label");
    let _ = field.focus();
    type_str(&mut field, "hello");
    assert_eq!(field.value(), "hello");
    assert_eq!(field.position(), 5);

    let _ = press(&mut field, KeyCode::Backspace);
    assert_eq!(field.value(), "hell");

    let _ = press(&mut field, KeyCode::Left);
    let _ = press(&mut field, KeyCode::Left);
    type_str(&mut field, "a");
    assert_eq!(field.value(), "heall");
}

#[test]
fn test_keys_ignored_while_inactive_or_disabled() {
    let mut field = new("name_label");
    type_str(&mut field, "hi");
    assert_eq!(field.value(), "", "inactive field ignores keys");

    let mut field = new("name_label").with_disabled();
    let _ = field.focus();
    type_str(&mut field, "hi");
    assert_eq!(field.value(), "");
}

#[test]
fn test_key_interceptor_swallows_keys() {
    let mut field = new("recipient_label")
        .with_key_interceptor(|ev| ev.code != KeyCode::Char(','));
    let _ = field.focus();

    type_str(&mut field, "ada,");
    assert_eq!(field.value(), "ada", "comma swallowed by interceptor");

    type_str(&mut field, "!");
    assert_eq!(field.value(), "ada!");
}

#[test]
fn test_word_movement_and_deletion() {
    let mut field = new("name_label");
    let _ = field.focus();
    type_str(&mut field, "one two three");

    let _ = press_mod(&mut field, KeyCode::Left, KeyModifiers::ALT);
    assert_eq!(field.position(), 8, "cursor at start of \"three\"");

    let _ = press_mod(&mut field, KeyCode::Backspace, KeyModifiers::ALT);
    assert_eq!(field.value(), "one three");

    let _ = press_mod(&mut field, KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(field.value(), "three");
}

#[test]
fn test_password_is_always_masked() {
    let mut field = new("password_label")
        .with_type(FieldType::Password)
        .with_value(Some("secret"));
    assert!(!field.view().contains("secret"));
    assert!(field.view().contains("******"));

    let _ = field.focus();
    assert!(!field.view().contains("secret"));
}

#[test]
fn test_external_password_reveals_while_active() {
    let mut field = new("password_label")
        .with_type(FieldType::ExternalPassword)
        .with_value(Some("secret"));

    assert!(!field.view().contains("secret"));
    assert!(field.view().contains("******"));

    let _ = field.focus();
    assert!(field.view().contains("secret"));

    let _ = field.blur();
    assert!(!field.view().contains("secret"));
}

#[test]
fn test_area_typing_grows_height() {
    let mut field = new("notes_label").with_type(FieldType::Area);
    let _ = field.focus();
    assert_eq!(field.height(), 1);

    type_str(&mut field, "one");
    let _ = press(&mut field, KeyCode::Enter);
    type_str(&mut field, "two");
    assert_eq!(field.value(), "one\ntwo");
    assert_eq!(field.height(), 2);

    let _ = press(&mut field, KeyCode::Backspace);
    let _ = press(&mut field, KeyCode::Backspace);
    let _ = press(&mut field, KeyCode::Backspace);
    let _ = press(&mut field, KeyCode::Backspace);
    assert_eq!(field.value(), "one");
    assert_eq!(field.height(), 1, "height collapses with content");
}

#[test]
fn test_single_line_ignores_enter() {
    let mut field = new("name_label");
    let _ = field.focus();
    type_str(&mut field, "ab");
    let _ = press(&mut field, KeyCode::Enter);
    assert_eq!(field.value(), "ab");
    assert_eq!(field.height(), 1);
}

#[test]
fn test_area_external_write_preserves_in_progress_edit() {
    let mut field = new("notes_label").with_type(FieldType::Area);
    let _ = field.focus();
    type_str(&mut field, "hello");
    field.set_cursor(2);

    // A write echoing the buffer's own contents must not move the cursor.
    field.set_value(Some("hello"));
    assert_eq!(field.position(), 2);
    assert_eq!(field.value(), "hello");

    // A differing write re-syncs the buffer and clamps the cursor.
    field.set_value(Some("h"));
    assert_eq!(field.value(), "h");
    assert_eq!(field.position(), 1);
}

#[test]
fn test_paste_result_fills_inactive_field_and_floats_label() {
    let mut field = new("name_label");
    assert!(!field.label_floated());

    let cmd = field.update(Box::new(PasteMsg("Ada".to_string())) as Msg);
    assert_eq!(field.value(), "Ada");
    assert!(cmd.is_some(), "fade-in issued for fill without focus");
    assert!(field.label_animating());

    run_label_transition(&mut field);
    assert!(field.label_floated());
    assert!(!field.active(), "filling does not grant focus");
}

#[test]
fn test_disabled_field_renders_static_text() {
    let mut field = new("name_label")
        .with_value(Some("Ada"))
        .with_disabled();
    let view = field.view();
    assert!(view.contains("Ada"));
    assert!(!view.contains('─'), "no underline while disabled");
    assert!(!view.contains('━'));

    let _ = field.focus();
    type_str(&mut field, "x");
    assert_eq!(field.value(), "Ada");
}

#[test]
fn test_underline_reflects_activity() {
    let mut field = new("name_label").with_value(Some("Ada"));
    assert!(field.view().contains('─'));
    assert!(!field.view().contains('━'));

    let _ = field.focus();
    assert!(field.view().contains('━'));
}

#[test]
fn test_help_line_rendered() {
    let field = new_with_help("name_label", || "Required field".to_string());
    assert!(field.view().contains("Required field"));
}

#[test]
fn test_injections_frame_the_input_row() {
    let mut field = new("recipient_label")
        .with_injection_left(|| "⟨".to_string())
        .with_injection_right(|| "⟩".to_string());
    field.set_value(Some("ada@example.com"));

    let view = field.view();
    assert!(view.contains('⟨'));
    assert!(view.contains('⟩'));
}

#[test]
fn test_align_right_pads_to_width() {
    let mut field = new("amount_label").with_width(10).with_align_right();
    field.set_value(Some("42"));
    assert!(field.view().contains("        42"));
}

#[test]
fn test_validation_records_error() {
    let mut field = new("mail_label").with_validate(Box::new(|s: &str| {
        if s.contains('@') {
            Ok(())
        } else {
            Err("missing @".to_string())
        }
    }));

    field.set_value(Some("ada"));
    assert_eq!(field.err.as_deref(), Some("missing @"));

    field.set_value(Some("ada@example.com"));
    assert!(field.err.is_none());
}

#[test]
fn test_component_trait_round_trip() {
    fn round_trip<C: Component>(c: &mut C) {
        let _ = c.focus();
        assert!(c.focused());
        let _ = c.blur();
        assert!(!c.focused());
    }

    let mut field = new("name_label").with_value(Some("x"));
    round_trip(&mut field);
}

#[test]
fn test_key_map_help_groups() {
    let field = new("name_label");
    assert_eq!(field.key_map.short_help().len(), 3);
    assert_eq!(field.key_map.full_help().len(), 4);
}

#[tokio::test]
async fn test_focus_command_drives_label_transition() {
    let mut field = new("name_label");
    let mut cmd = field.focus().expect("grow transition command");

    while field.label_animating() {
        match cmd.await {
            Some(msg) => match field.update(msg) {
                Some(next) => cmd = next,
                None => break,
            },
            None => break,
        }
    }

    assert!(field.label_floated());
}
