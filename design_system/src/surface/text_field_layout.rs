// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a [`TextFieldView`] into rows of [`StyledSpan`]s for a given width. This is
//! shared by every [`crate::RenderingSurface`], so they all agree on where the label,
//! value, trailing icon and supporting text go, and on the measured [`Size`].
//!
//! ```text
//! ╭─ Weight ──────────╮
//! │ 105               │
//! ╰───────────────────╯
//! ┏━ Weight ━━━━━━━━━━┓
//! ┃ abc             ⚠ ┃
//! ┗━━━━━━━━━━━━━━━━━━━┛
//!   Invalid value
//! ```

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{BorderGlyphCharacter, BorderStyle, ColWidth, RowHeight, SPACER, Size,
            TextFieldVariant, TextFieldView, height, width};

/// Narrower widths are widened to this, so that the box, one column of value and the
/// trailing icon always fit.
pub const MIN_TEXT_FIELD_WIDTH: u16 = 8;

/// Columns used by `"│ "` on the left and `" │"` on the right of the value row.
const VALUE_ROW_CHROME: usize = 4;

/// Columns used by `"╭─ "` and `" "` + `"╮"` around the label in the top row.
const LABEL_ROW_CHROME: usize = 5;

/// Rows used by the box itself, excluding the supporting text.
const BOX_HEIGHT: u16 = 3;

/// Painted in place of control characters (`\n`, `\t`, BEL, ...), which would break
/// the single line box on a real terminal.
pub const CONTROL_CHAR_STAND_IN: char = '\u{FFFD}';

/// What a span of text is, so a surface can pick a color for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanRole {
    Border,
    Label,
    Value,
    TrailingIcon,
    SupportingText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub role: SpanRole,
    pub text: String,
}

impl StyledSpan {
    fn new(role: SpanRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

pub type StyledRow = Vec<StyledSpan>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldLayout {
    pub variant: TextFieldVariant,
    pub rows: Vec<StyledRow>,
    pub size: Size,
}

impl TextFieldLayout {
    /// Lay out `view` in a box `available_width` columns wide (at least
    /// [`MIN_TEXT_FIELD_WIDTH`]).
    #[must_use]
    pub fn new(view: &TextFieldView, available_width: ColWidth) -> Self {
        let box_width = available_width
            .as_usize()
            .max(usize::from(MIN_TEXT_FIELD_WIDTH));
        let style = view.variant.border_style();

        let mut rows = vec![
            create_top_row(&view.label, box_width, style),
            create_value_row(view, box_width, style),
            create_bottom_row(box_width, style),
        ];

        if let Some(supporting_text) = &view.supporting_text {
            rows.push(create_supporting_row(supporting_text, box_width));
        }

        let row_count = BOX_HEIGHT + u16::from(view.supporting_text.is_some());
        Self {
            variant: view.variant,
            rows,
            size: width(box_width) + height(row_count),
        }
    }

    /// The plain text of each row, w/out any styling.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }

    #[must_use]
    pub fn row_count(&self) -> RowHeight { self.size.row_height }
}

fn glyph(it: BorderGlyphCharacter, style: BorderStyle) -> &'static str { it.as_str(style) }

fn create_top_row(label: &str, box_width: usize, style: BorderStyle) -> StyledRow {
    let horizontal = glyph(BorderGlyphCharacter::Horizontal, style);
    let top_left = glyph(BorderGlyphCharacter::TopLeft, style);
    let top_right = glyph(BorderGlyphCharacter::TopRight, style);

    if label.is_empty() {
        return vec![StyledSpan::new(
            SpanRole::Border,
            format!("{top_left}{}{top_right}", horizontal.repeat(box_width - 2)),
        )];
    }

    let label = truncate_head(&printable(label), box_width - LABEL_ROW_CHROME);
    let label_width = label.width();
    vec![
        StyledSpan::new(SpanRole::Border, format!("{top_left}{horizontal}{SPACER}")),
        StyledSpan::new(SpanRole::Label, label),
        StyledSpan::new(
            SpanRole::Border,
            format!(
                "{SPACER}{}{top_right}",
                horizontal.repeat(box_width - LABEL_ROW_CHROME - label_width)
            ),
        ),
    ]
}

fn create_value_row(view: &TextFieldView, box_width: usize, style: BorderStyle) -> StyledRow {
    let vertical = glyph(BorderGlyphCharacter::Vertical, style);
    let content_width = box_width - VALUE_ROW_CHROME;
    let value = printable(&view.value);

    let mut row = vec![StyledSpan::new(SpanRole::Border, format!("{vertical}{SPACER}"))];

    match view.trailing_icon {
        Some(icon) => {
            // The icon and the space in front of it come out of the value's columns.
            let icon_width = icon.glyph().width() + 1;
            let value_width = content_width - icon_width;
            row.push(StyledSpan::new(
                SpanRole::Value,
                pad_end(&truncate_tail(&value, value_width), value_width),
            ));
            row.push(StyledSpan::new(
                SpanRole::TrailingIcon,
                format!("{SPACER}{}", icon.glyph()),
            ));
        }
        None => {
            row.push(StyledSpan::new(
                SpanRole::Value,
                pad_end(&truncate_tail(&value, content_width), content_width),
            ));
        }
    }

    row.push(StyledSpan::new(SpanRole::Border, format!("{SPACER}{vertical}")));
    row
}

fn create_bottom_row(box_width: usize, style: BorderStyle) -> StyledRow {
    vec![StyledSpan::new(
        SpanRole::Border,
        format!(
            "{}{}{}",
            glyph(BorderGlyphCharacter::BottomLeft, style),
            glyph(BorderGlyphCharacter::Horizontal, style).repeat(box_width - 2),
            glyph(BorderGlyphCharacter::BottomRight, style)
        ),
    )]
}

/// Indented by two columns, so it lines up w/ the value inside the box.
fn create_supporting_row(supporting_text: &str, box_width: usize) -> StyledRow {
    let indent = SPACER.repeat(2);
    vec![
        StyledSpan::new(SpanRole::SupportingText, indent.clone()),
        StyledSpan::new(
            SpanRole::SupportingText,
            truncate_head(&printable(supporting_text), box_width - indent.len()),
        ),
    ]
}

/// Only the painted copy is changed, the field's value is left as is.
fn printable(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|ch| if ch.is_control() { CONTROL_CHAR_STAND_IN } else { ch })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Keep the start of `text`, dropping whole grapheme clusters from the end until it
/// fits in `max_width` display columns.
fn truncate_head(text: &str, max_width: usize) -> String {
    let mut acc = String::new();
    let mut acc_width = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if acc_width + grapheme_width > max_width {
            break;
        }
        acc_width += grapheme_width;
        acc.push_str(grapheme);
    }
    acc
}

/// Keep the end of `text` (where the user is typing), dropping whole grapheme clusters
/// from the start until it fits in `max_width` display columns.
fn truncate_tail(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut start = text.len();
    let mut acc_width = 0;
    for (index, grapheme) in text.grapheme_indices(true).rev() {
        let grapheme_width = grapheme.width();
        if acc_width + grapheme_width > max_width {
            break;
        }
        acc_width += grapheme_width;
        start = index;
    }
    text[start..].to_string()
}

fn pad_end(text: &str, target_width: usize) -> String {
    let padding = target_width.saturating_sub(text.width());
    format!("{text}{}", SPACER.repeat(padding))
}
