// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BorderStyle, ERROR_GLYPH, InputMode, InputState, ValidatedTextInputConfig};

/// Visual treatment of the box and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextFieldVariant {
    #[default]
    Normal,
    Error,
}

impl TextFieldVariant {
    #[must_use]
    pub fn border_style(self) -> BorderStyle {
        match self {
            TextFieldVariant::Normal => BorderStyle::Rounded,
            TextFieldVariant::Error => BorderStyle::Heavy,
        }
    }
}

/// Icon painted at the trailing (right) edge inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingIcon {
    Error,
}

impl TrailingIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            TrailingIcon::Error => ERROR_GLYPH,
        }
    }

    #[must_use]
    pub fn content_description(self) -> &'static str {
        match self {
            TrailingIcon::Error => "Error",
        }
    }
}

/// Everything a [`crate::RenderingSurface`] needs to paint the field for one render.
/// This is a pure projection of the host's [`ValidatedTextInputConfig`] and the
/// component's [`InputState`].
///
/// The error display contract lives in [`TextFieldView::new`]:
///
/// | `is_error` | `error_message` | trailing icon | supporting text | variant |
/// |------------|-----------------|---------------|-----------------|---------|
/// | `false`    | anything        | none          | none            | Normal  |
/// | `true`     | `""`            | error glyph   | none            | Error   |
/// | `true`     | `"msg"`         | error glyph   | `"msg"`         | Error   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub label: String,
    pub value: String,
    pub variant: TextFieldVariant,
    pub trailing_icon: Option<TrailingIcon>,
    pub supporting_text: Option<String>,
    pub input_mode: InputMode,
    pub single_line: bool,
}

impl TextFieldView {
    #[must_use]
    pub fn new(config: &ValidatedTextInputConfig, state: &InputState) -> Self {
        let (variant, trailing_icon, supporting_text) = if config.is_error {
            let supporting_text =
                (!config.error_message.is_empty()).then(|| config.error_message.clone());
            (TextFieldVariant::Error, Some(TrailingIcon::Error), supporting_text)
        } else {
            (TextFieldVariant::Normal, None, None)
        };

        Self {
            label: config.label.clone(),
            value: state.value.clone(),
            variant,
            trailing_icon,
            supporting_text,
            input_mode: config.input_mode,
            single_line: true,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool { self.variant == TextFieldVariant::Error }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn view_for(is_error: bool, error_message: &str) -> TextFieldView {
        let config = ValidatedTextInputConfig::new("Weight", |_| {})
            .with_is_error(is_error)
            .with_error_message(error_message);
        TextFieldView::new(&config, &InputState::new("12"))
    }

    #[test_case(false, "" ; "no error no message")]
    #[test_case(false, "Invalid value" ; "message w/out error is ignored")]
    fn test_no_error_shows_nothing(is_error: bool, error_message: &str) {
        let it = view_for(is_error, error_message);
        assert_eq2!(it.variant, TextFieldVariant::Normal);
        assert_eq2!(it.trailing_icon, None);
        assert_eq2!(it.supporting_text, None);
        assert!(!it.is_error());
    }

    #[test]
    fn test_error_w_empty_message_shows_glyph_only() {
        let it = view_for(true, "");
        assert!(it.is_error());
        assert_eq2!(it.trailing_icon, Some(TrailingIcon::Error));
        assert_eq2!(it.supporting_text, None);
    }

    #[test]
    fn test_error_w_message_shows_glyph_and_supporting_text() {
        let it = view_for(true, "Invalid value");
        assert_eq2!(it.trailing_icon, Some(TrailingIcon::Error));
        assert_eq2!(it.supporting_text.as_deref(), Some("Invalid value"));
        assert_eq2!(it.variant.border_style(), BorderStyle::Heavy);
    }

    #[test]
    fn test_error_never_touches_value() {
        let it = view_for(true, "Invalid value");
        assert_eq2!(it.value, "12");
        assert_eq2!(it.label, "Weight");
        assert_eq2!(it.input_mode, InputMode::Numeric);
        assert!(it.single_line);
    }

    #[test]
    fn test_trailing_icon_metadata() {
        assert_eq2!(TrailingIcon::Error.glyph(), ERROR_GLYPH);
        assert_eq2!(TrailingIcon::Error.content_description(), "Error");
    }
}
