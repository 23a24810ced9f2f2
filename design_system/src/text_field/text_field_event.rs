// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
                       MouseEvent, MouseEventKind};
use unicode_segmentation::UnicodeSegmentation;

use crate::{Pos, Size, col, row};

/// Events that [`crate::ValidatedTextInput::handle_event`] understands. A surface (or
/// the host) that delivers raw text changes can construct these directly. Apps that
/// read raw terminal input can use [`TextFieldEvent::try_from_input_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldEvent {
    /// User edit, carrying the complete new text (not a delta).
    Edit(String),
    Click,
    /// The field was laid out at this size outside of a render pass.
    Measured(Size),
}

impl TextFieldEvent {
    /// Convert a crossterm [`Event`] into a [`TextFieldEvent`], given the field's
    /// `current_value` and the rectangle it was last painted in (`origin` and
    /// `measured_size`).
    ///
    /// - A printable char (w/out Ctrl or Alt) appends to the value.
    /// - Backspace removes the last grapheme cluster. On an empty value it is ignored.
    /// - Left mouse button down inside the painted rectangle is a click. A zero
    ///   `measured_size` (never painted) can't be hit.
    /// - Everything else returns [None], and should propagate to the host.
    ///
    /// Chars are not filtered by [`crate::InputMode`].
    #[must_use]
    pub fn try_from_input_event(
        event: &Event,
        current_value: &str,
        origin: Pos,
        measured_size: Size,
    ) -> Option<Self> {
        match event {
            Event::Key(key_event) => try_from_key_event(key_event, current_value),
            Event::Mouse(mouse_event) => {
                try_from_mouse_event(mouse_event, origin, measured_size)
            }
            _ => None,
        }
    }
}

fn try_from_key_event(key_event: &KeyEvent, current_value: &str) -> Option<TextFieldEvent> {
    // Some terminals report releases as well as presses.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Char(ch)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut new_value = String::with_capacity(current_value.len() + ch.len_utf8());
            new_value.push_str(current_value);
            new_value.push(ch);
            Some(TextFieldEvent::Edit(new_value))
        }
        KeyCode::Backspace => current_value
            .grapheme_indices(true)
            .next_back()
            .map(|(start, _)| TextFieldEvent::Edit(current_value[..start].to_string())),
        _ => None,
    }
}

fn try_from_mouse_event(
    mouse_event: &MouseEvent,
    origin: Pos,
    measured_size: Size,
) -> Option<TextFieldEvent> {
    let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind else {
        return None;
    };
    let hit = col(mouse_event.column) + row(mouse_event.row);
    origin
        .contains(measured_size, hit)
        .then_some(TextFieldEvent::Click)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, height, width};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn translate(event: &Event, current_value: &str) -> Option<TextFieldEvent> {
        TextFieldEvent::try_from_input_event(
            event,
            current_value,
            col(2) + row(1),
            width(10) + height(3),
        )
    }

    #[test_case(KeyCode::Char('5'), KeyModifiers::NONE, "10", Some("105") ; "digit appends")]
    #[test_case(KeyCode::Char('A'), KeyModifiers::SHIFT, "", Some("A") ; "shifted char appends")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, "10", None ; "ctrl chord ignored")]
    #[test_case(KeyCode::Char('x'), KeyModifiers::ALT, "10", None ; "alt chord ignored")]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, "105", Some("10") ; "backspace drops last")]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, "", None ; "backspace on empty ignored")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, "10", None ; "enter ignored")]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE, "10", None ; "tab ignored")]
    fn test_key_events(
        code: KeyCode,
        modifiers: KeyModifiers,
        current_value: &str,
        expected: Option<&str>,
    ) {
        let actual = translate(&key(code, modifiers), current_value);
        assert_eq2!(actual, expected.map(|it| TextFieldEvent::Edit(it.to_string())));
    }

    #[test]
    fn test_backspace_removes_whole_grapheme_cluster() {
        // "e" followed by a combining acute accent is one grapheme cluster.
        let actual = translate(&key(KeyCode::Backspace, KeyModifiers::NONE), "cafe\u{301}");
        assert_eq2!(actual, Some(TextFieldEvent::Edit("caf".to_string())));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq2!(translate(&event, ""), None);
    }

    #[test_case(2, 1, true ; "top left corner")]
    #[test_case(11, 3, true ; "bottom right corner")]
    #[test_case(12, 3, false ; "right of box")]
    #[test_case(5, 4, false ; "below box")]
    #[test_case(1, 1, false ; "left of box")]
    fn test_clicks_are_hit_tested(column: u16, row: u16, is_hit: bool) {
        let actual = translate(&left_click(column, row), "10");
        assert_eq2!(actual, is_hit.then_some(TextFieldEvent::Click));
    }

    #[test]
    fn test_click_before_first_paint_misses() {
        let actual = TextFieldEvent::try_from_input_event(
            &left_click(0, 0),
            "",
            col(0) + row(0),
            Size::default(),
        );
        assert_eq2!(actual, None);
    }

    #[test]
    fn test_other_events_propagate() {
        assert_eq2!(translate(&Event::Resize(80, 24), "10"), None);
        assert_eq2!(translate(&Event::FocusGained, "10"), None);
        let right_click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq2!(translate(&right_click, "10"), None);
    }
}
