// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_DESIGN_SYSTEM_MOD, Size};

/// State that is owned exclusively by one [`crate::ValidatedTextInput`]. It is created
/// on mount, and dropped w/ the component. It is never shared between instances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    /// Current displayed / edited text.
    pub value: String,
    /// Flipped by every click on the field. Nothing reads it; the click affordance is
    /// kept, but no dropdown or overlay is attached to it.
    pub expanded: bool,
    /// Last size reported by the [`crate::RenderingSurface`] after painting. It is
    /// [`Size::default`] (zero) until the first paint.
    pub measured_size: Size,
}

/// Everything that can change an [`InputState`]. See [`InputState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldAction {
    /// User originated edit, carrying the complete new text.
    Edit(String),
    /// The reset signal went from `false` to `true`.
    ResetEdge,
    /// The field was clicked.
    ToggleExpanded,
    /// The surface painted the field at this size.
    Measured(Size),
}

/// Returned by [`InputState::apply`] when the host must be told about a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification(pub String);

impl InputState {
    pub fn new(initial_value: impl Into<String>) -> Self {
        Self {
            value: initial_value.into(),
            ..Default::default()
        }
    }

    /// The state transition function for the field. There are no error states, so
    /// every action is accepted.
    ///
    /// | Action                              | `value`      | Returns                  |
    /// |-------------------------------------|--------------|--------------------------|
    /// | [`TextFieldAction::Edit`]`(t)`      | `t`          | `Some(ChangeNotification(t))` |
    /// | [`TextFieldAction::ResetEdge`]      | `""`         | `None`                   |
    /// | [`TextFieldAction::ToggleExpanded`] | unchanged    | `None`                   |
    /// | [`TextFieldAction::Measured`]       | unchanged    | `None`                   |
    ///
    /// The text of an edit is stored as is: no trimming, no validation.
    pub fn apply(&mut self, action: TextFieldAction) -> Option<ChangeNotification> {
        match action {
            TextFieldAction::Edit(new_value) => {
                // Only lengths are logged, the text may be a password.
                DEBUG_DESIGN_SYSTEM_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "📝 edit",
                        old_len = %self.value.len(),
                        new_len = %new_value.len()
                    );
                });
                self.value.clone_from(&new_value);
                Some(ChangeNotification(new_value))
            }

            TextFieldAction::ResetEdge => {
                DEBUG_DESIGN_SYSTEM_MOD.then(|| {
                    tracing::debug!(
                        message = "🧹 reset edge",
                        cleared_len = %self.value.len()
                    );
                });
                self.value.clear();
                None
            }

            TextFieldAction::ToggleExpanded => {
                self.expanded = !self.expanded;
                DEBUG_DESIGN_SYSTEM_MOD.then(|| {
                    tracing::debug!(message = "🖱 click", expanded = %self.expanded);
                });
                None
            }

            TextFieldAction::Measured(size) => {
                if self.measured_size != size {
                    DEBUG_DESIGN_SYSTEM_MOD.then(|| {
                        tracing::debug!(
                            message = "📐 measured",
                            old_size = ?self.measured_size,
                            new_size = ?size
                        );
                    });
                    self.measured_size = size;
                }
                None
            }
        }
    }
}
