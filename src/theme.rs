//! Layout metrics and theme styles for the text field.
//!
//! The metric constants are the endpoints of the floating-label transition:
//! the label animates between a large size sitting at the base offset (over
//! the input row) and a small size at the top. The renderer quantizes the
//! animated offset onto character cells; the numeric values only shape the
//! transition.

use lipgloss_extras::prelude::*;

/// Label size while resting over an empty input row.
pub const LABEL_SIZE_BASE: f64 = 16.0;

/// Label size once floated to the top position.
pub const LABEL_SIZE_SMALL: f64 = 12.0;

/// Vertical offset of the label's base position, in animation units.
/// Zero is the floated (top) position.
pub const LABEL_BASE_OFFSET: f64 = 22.0;

/// Default field width in terminal cells.
pub const DEFAULT_WIDTH: usize = 40;

/// Style bundle consumed by the field renderer.
#[derive(Debug, Clone)]
pub struct FieldStyles {
    /// Floated label in its resting (top) position.
    pub label: Style,
    /// Label while resting in the base position over the empty input row.
    pub label_base: Style,
    /// Floated label while the field is active.
    pub label_active: Style,
    /// The value text as typed.
    pub text: Style,
    /// Value text of a disabled field.
    pub disabled_text: Style,
    /// Help line under the field.
    pub help: Style,
    /// Underline while inactive.
    pub underline: Style,
    /// Underline while active.
    pub underline_active: Style,
}

/// The default theme: faint grays with the accent used across the widget
/// family.
pub fn default_styles() -> FieldStyles {
    let accent = Color::from("#7571F9");
    FieldStyles {
        label: Style::new().foreground(Color::from("244")),
        label_base: Style::new().foreground(Color::from("240")).italic(true),
        label_active: Style::new().foreground(accent.clone()),
        text: Style::new(),
        disabled_text: Style::new().foreground(Color::from("243")),
        help: Style::new().foreground(Color::from("244")),
        underline: Style::new().foreground(Color::from("240")),
        underline_active: Style::new().foreground(accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_endpoints_are_distinct() {
        assert!(LABEL_SIZE_BASE > LABEL_SIZE_SMALL);
        assert!(LABEL_BASE_OFFSET > 0.0);
    }

    #[test]
    fn test_default_styles_render() {
        let styles = default_styles();
        // Styled output must still contain the payload text.
        assert!(styles.label.render("Name").contains("Name"));
        assert!(styles.underline_active.render("━").contains("━"));
    }
}
