// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::Event;

use crate::{CommonResult, DEBUG_DESIGN_SYSTEM_MOD, EdgeDetector, InputState, Pos,
            RenderingSurface, Size, TextFieldAction, TextFieldEvent, TextFieldView,
            ValidatedTextInputConfig, ok};

/// This works w/ the host's input event routing to tell it whether an event has been
/// consumed or not. If it has been consumed, is a render necessary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
}

/// A labeled, single line text field w/ an error affordance and an edge triggered reset.
///
/// The host app owns the [`ValidatedTextInputConfig`] and passes it in (by reference)
/// on every call. This component owns only the [`InputState`] and the [`EdgeDetector`]
/// for [`ValidatedTextInputConfig::reset_signal`].
///
/// - [`ValidatedTextInput::mount`] seeds the value from
///   [`ValidatedTextInputConfig::initial_value`].
/// - [`ValidatedTextInput::render`] checks for a reset edge first, then paints.
/// - [`ValidatedTextInput::handle_event`] applies edits and clicks. Each edit calls
///   [`ValidatedTextInputConfig::on_change`] exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedTextInput {
    state: InputState,
    reset_edge: EdgeDetector,
}

impl ValidatedTextInput {
    /// The edge detector starts at `false`, so a `reset_signal` that is already `true`
    /// clears the freshly seeded value once. Mounting never calls `on_change`.
    #[must_use]
    pub fn mount(config: &ValidatedTextInputConfig) -> Self {
        let mut it = Self {
            state: InputState::new(config.initial_value.as_str()),
            reset_edge: EdgeDetector::default(),
        };

        DEBUG_DESIGN_SYSTEM_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🚀 mount",
                label = %config.label,
                input_mode = %config.input_mode,
                initial_len = %config.initial_value.len(),
                reset_signal = %config.reset_signal
            );
        });

        it.sync_config(config);
        it
    }

    #[must_use]
    pub fn value(&self) -> &str { &self.state.value }

    #[must_use]
    pub fn state(&self) -> &InputState { &self.state }

    #[must_use]
    pub fn measured_size(&self) -> Size { self.state.measured_size }

    #[must_use]
    pub fn is_expanded(&self) -> bool { self.state.expanded }

    /// Observe the config's `reset_signal` and clear the value on a rising edge.
    /// Returns `true` if the value was cleared. This is called at the start of every
    /// [`ValidatedTextInput::render`]; hosts that don't render thru this component can
    /// call it directly whenever they hand over a new config.
    pub fn sync_config(&mut self, config: &ValidatedTextInputConfig) -> bool {
        let rising = self.reset_edge.observe(config.reset_signal);
        if rising {
            // Resets never produce a change notification.
            self.state.apply(TextFieldAction::ResetEdge);
        }
        rising
    }

    #[must_use]
    pub fn view(&self, config: &ValidatedTextInputConfig) -> TextFieldView {
        TextFieldView::new(config, &self.state)
    }

    /// # Errors
    ///
    /// Whatever the `surface` returns when it fails to paint. The state is not changed
    /// by a failed paint, except for a reset edge, which has already been applied.
    pub fn render(
        &mut self,
        config: &ValidatedTextInputConfig,
        surface: &mut impl RenderingSurface,
    ) -> CommonResult<()> {
        self.sync_config(config);
        let view = self.view(config);
        let size = surface.paint_text_field(&view)?;
        self.state.apply(TextFieldAction::Measured(size));
        ok!()
    }

    pub fn handle_event(
        &mut self,
        config: &ValidatedTextInputConfig,
        event: TextFieldEvent,
    ) -> EventPropagation {
        match event {
            TextFieldEvent::Edit(new_value) => {
                if let Some(notification) =
                    self.state.apply(TextFieldAction::Edit(new_value))
                {
                    (config.on_change)(&notification.0);
                }
                EventPropagation::ConsumedRender
            }
            TextFieldEvent::Click => {
                self.state.apply(TextFieldAction::ToggleExpanded);
                EventPropagation::ConsumedRender
            }
            TextFieldEvent::Measured(size) => {
                self.state.apply(TextFieldAction::Measured(size));
                EventPropagation::Consumed
            }
        }
    }

    /// Translate a raw crossterm [`Event`] using the rectangle this field was last
    /// painted in (top left corner at `origin`) and handle it. Events that don't
    /// concern this field are returned as [`EventPropagation::Propagate`].
    pub fn handle_input_event(
        &mut self,
        config: &ValidatedTextInputConfig,
        input_event: &Event,
        origin: Pos,
    ) -> EventPropagation {
        match TextFieldEvent::try_from_input_event(
            input_event,
            self.value(),
            origin,
            self.measured_size(),
        ) {
            Some(event) => self.handle_event(config, event),
            None => EventPropagation::Propagate,
        }
    }
}
