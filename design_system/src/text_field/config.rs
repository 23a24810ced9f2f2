// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          sync::Arc};

use miette::Diagnostic;
use strum_macros::{Display, EnumIter, EnumString};

use crate::CommonResult;

/// Called w/ the exact new text, once per user edit. Never called for a reset.
pub type OnChangeFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Which kind of keyboard / input method the host would like for this field. The
/// component itself never interprets this, it is passed thru to the
/// [`crate::RenderingSurface`] via [`crate::TextFieldView::input_mode`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
pub enum InputMode {
    Text,
    Ascii,
    #[default]
    Numeric,
    Phone,
    Uri,
    Email,
    Password,
    NumericPassword,
    Decimal,
}

/// Configuration for one [`crate::ValidatedTextInput`]. It is owned by the host app and
/// re-supplied on every render; the component only borrows it.
///
/// | Field           | Default                 | Required |
/// |-----------------|-------------------------|----------|
/// | `label`         | none                    | yes      |
/// | `initial_value` | `""`                    | no       |
/// | `reset_signal`  | `false`                 | no       |
/// | `is_error`      | `false`                 | no       |
/// | `error_message` | `""`                    | no       |
/// | `input_mode`    | [`InputMode::Numeric`]  | no       |
/// | `on_change`     | none                    | yes      |
///
/// There are two ways to make one:
/// 1. [`ValidatedTextInputConfig::new`] takes the required fields, so it can't fail.
/// 2. [`ValidatedTextInputConfig::builder`] checks for the required fields in
///    [`ValidatedTextInputConfigBuilder::build`].
#[derive(Clone)]
pub struct ValidatedTextInputConfig {
    /// Display caption, painted in the top border of the box.
    pub label: String,
    /// Seeds the value on mount only. Changing it later has no effect.
    pub initial_value: String,
    /// Edge triggered clear request. Only a `false` → `true` transition (or `true` at
    /// mount) clears the value.
    pub reset_signal: bool,
    pub is_error: bool,
    /// Only shown as supporting text when `is_error` is also `true`.
    pub error_message: String,
    pub input_mode: InputMode,
    pub on_change: OnChangeFn,
}

impl Debug for ValidatedTextInputConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ValidatedTextInputConfig")
            .field("label", &self.label)
            .field("initial_value", &self.initial_value)
            .field("reset_signal", &self.reset_signal)
            .field("is_error", &self.is_error)
            .field("error_message", &self.error_message)
            .field("input_mode", &self.input_mode)
            .field("on_change", &"OnChangeFn")
            .finish()
    }
}

mod constructor {
    use super::{Arc, InputMode, ValidatedTextInputConfig, ValidatedTextInputConfigBuilder};

    impl ValidatedTextInputConfig {
        pub fn new(
            label: impl Into<String>,
            on_change: impl Fn(&str) + Send + Sync + 'static,
        ) -> Self {
            Self {
                label: label.into(),
                initial_value: String::new(),
                reset_signal: false,
                is_error: false,
                error_message: String::new(),
                input_mode: InputMode::default(),
                on_change: Arc::new(on_change),
            }
        }

        #[must_use]
        pub fn builder() -> ValidatedTextInputConfigBuilder {
            ValidatedTextInputConfigBuilder::default()
        }

        #[must_use]
        pub fn with_initial_value(mut self, arg: impl Into<String>) -> Self {
            self.initial_value = arg.into();
            self
        }

        #[must_use]
        pub fn with_reset_signal(mut self, arg: bool) -> Self {
            self.reset_signal = arg;
            self
        }

        #[must_use]
        pub fn with_is_error(mut self, arg: bool) -> Self {
            self.is_error = arg;
            self
        }

        #[must_use]
        pub fn with_error_message(mut self, arg: impl Into<String>) -> Self {
            self.error_message = arg.into();
            self
        }

        #[must_use]
        pub fn with_input_mode(mut self, arg: InputMode) -> Self {
            self.input_mode = arg;
            self
        }
    }
}

/// Fallible way to assemble a [`ValidatedTextInputConfig`]. Forgetting `label` or
/// `on_change` is an integration mistake, which is reported by
/// [`ValidatedTextInputConfigBuilder::build`] as a [`TextFieldConfigError`].
#[derive(Default)]
pub struct ValidatedTextInputConfigBuilder {
    label: Option<String>,
    initial_value: String,
    reset_signal: bool,
    is_error: bool,
    error_message: String,
    input_mode: InputMode,
    on_change: Option<OnChangeFn>,
}

impl Debug for ValidatedTextInputConfigBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ValidatedTextInputConfigBuilder")
            .field("label", &self.label)
            .field("initial_value", &self.initial_value)
            .field("reset_signal", &self.reset_signal)
            .field("is_error", &self.is_error)
            .field("error_message", &self.error_message)
            .field("input_mode", &self.input_mode)
            .field("on_change", &self.on_change.as_ref().map(|_| "OnChangeFn"))
            .finish()
    }
}

impl ValidatedTextInputConfigBuilder {
    #[must_use]
    pub fn label(mut self, arg: impl Into<String>) -> Self {
        self.label = Some(arg.into());
        self
    }

    #[must_use]
    pub fn initial_value(mut self, arg: impl Into<String>) -> Self {
        self.initial_value = arg.into();
        self
    }

    #[must_use]
    pub fn reset_signal(mut self, arg: bool) -> Self {
        self.reset_signal = arg;
        self
    }

    #[must_use]
    pub fn is_error(mut self, arg: bool) -> Self {
        self.is_error = arg;
        self
    }

    #[must_use]
    pub fn error_message(mut self, arg: impl Into<String>) -> Self {
        self.error_message = arg.into();
        self
    }

    #[must_use]
    pub fn input_mode(mut self, arg: InputMode) -> Self {
        self.input_mode = arg;
        self
    }

    #[must_use]
    pub fn on_change(mut self, arg: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(arg));
        self
    }

    /// # Errors
    ///
    /// Returns [`TextFieldConfigError::MissingLabel`] or
    /// [`TextFieldConfigError::MissingOnChange`] if either required field was never
    /// set. The label is checked first.
    pub fn build(self) -> CommonResult<ValidatedTextInputConfig> {
        let label = self.label.ok_or(TextFieldConfigError::MissingLabel)?;
        let on_change = self.on_change.ok_or(TextFieldConfigError::MissingOnChange)?;
        Ok(ValidatedTextInputConfig {
            label,
            initial_value: self.initial_value,
            reset_signal: self.reset_signal,
            is_error: self.is_error,
            error_message: self.error_message,
            input_mode: self.input_mode,
            on_change,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum TextFieldConfigError {
    #[error("ValidatedTextInput requires a label")]
    #[diagnostic(
        code(r3bl_design_system::text_field::missing_label),
        help("Call `label(..)` on the builder before `build()`")
    )]
    MissingLabel,

    #[error("ValidatedTextInput requires an on_change callback")]
    #[diagnostic(
        code(r3bl_design_system::text_field::missing_on_change),
        help("Call `on_change(..)` on the builder before `build()`")
    )]
    MissingOnChange,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new_has_defaults() {
        let it = ValidatedTextInputConfig::new("Weight", |_| {});
        assert_eq2!(it.label, "Weight");
        assert_eq2!(it.initial_value, "");
        assert!(!it.reset_signal);
        assert!(!it.is_error);
        assert_eq2!(it.error_message, "");
        assert_eq2!(it.input_mode, InputMode::Numeric);
    }

    #[test]
    fn test_builder_matches_new() {
        let it = ValidatedTextInputConfig::builder()
            .label("Weight")
            .initial_value("10")
            .reset_signal(true)
            .is_error(true)
            .error_message("Invalid value")
            .input_mode(InputMode::Decimal)
            .on_change(|_| {})
            .build()
            .unwrap();
        assert_eq2!(it.label, "Weight");
        assert_eq2!(it.initial_value, "10");
        assert!(it.reset_signal);
        assert!(it.is_error);
        assert_eq2!(it.error_message, "Invalid value");
        assert_eq2!(it.input_mode, InputMode::Decimal);
    }

    #[test]
    fn test_builder_missing_label() {
        let report = ValidatedTextInputConfig::builder()
            .on_change(|_| {})
            .build()
            .unwrap_err();
        assert_eq2!(
            report.downcast_ref::<TextFieldConfigError>(),
            Some(&TextFieldConfigError::MissingLabel)
        );
    }

    #[test]
    fn test_builder_missing_on_change() {
        let report = ValidatedTextInputConfig::builder()
            .label("Weight")
            .build()
            .unwrap_err();
        assert_eq2!(
            report.downcast_ref::<TextFieldConfigError>(),
            Some(&TextFieldConfigError::MissingOnChange)
        );
    }

    #[test]
    fn test_builder_missing_both_reports_label_first() {
        let report = ValidatedTextInputConfig::builder().build().unwrap_err();
        assert_eq2!(report.to_string(), "ValidatedTextInput requires a label");
    }

    #[test]
    fn test_debug_hides_callback() {
        let it = ValidatedTextInputConfig::new("Weight", |_| {});
        let debug = format!("{it:?}");
        assert!(debug.contains("label: \"Weight\""));
        assert!(debug.contains("on_change: \"OnChangeFn\""));
    }

    #[test]
    fn test_input_mode_parses_host_strings() {
        assert_eq2!(InputMode::from_str("Email").ok(), Some(InputMode::Email));
        assert!(InputMode::from_str("Dropdown").is_err());
        assert_eq2!(InputMode::iter().filter(|it| *it == InputMode::default()).count(), 1);
    }
}
