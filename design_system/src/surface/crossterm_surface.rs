// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crossterm::{cursor::MoveTo,
                queue,
                style::{Color, Print, ResetColor, SetForegroundColor}};
use miette::Diagnostic;

use crate::{ColWidth, CommonResult, DEBUG_DESIGN_SYSTEM_MOD, Pos, RenderingSurface,
            SPACER, Size, SpanRole, TextFieldLayout, TextFieldVariant, TextFieldView,
            TrailingIcon, ok, row};

/// Colors used by [`CrosstermSurface`]. In the error variant the border and label are
/// painted in `error` too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFieldPalette {
    pub border: Color,
    pub label: Color,
    pub value: Color,
    pub error: Color,
}

impl Default for TextFieldPalette {
    fn default() -> Self {
        Self {
            border: Color::DarkGrey,
            label: Color::Cyan,
            value: Color::Reset,
            error: Color::Red,
        }
    }
}

impl TextFieldPalette {
    #[must_use]
    pub fn color_for(&self, role: SpanRole, variant: TextFieldVariant) -> Color {
        match (role, variant) {
            (SpanRole::Value, _) => self.value,
            (SpanRole::TrailingIcon | SpanRole::SupportingText, _)
            | (SpanRole::Border | SpanRole::Label, TextFieldVariant::Error) => self.error,
            (SpanRole::Border, TextFieldVariant::Normal) => self.border,
            (SpanRole::Label, TextFieldVariant::Normal) => self.label,
        }
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SurfaceError {
    #[error("🖍 Could not {operation} on the terminal")]
    #[diagnostic(
        code(r3bl_design_system::surface::io),
        help("Is the output still open? Is this a terminal?")
    )]
    Io {
        operation: &'static str,
        source: io::Error,
    },
}

/// Run a crossterm command, and turn its [`io::Error`] into a [`SurfaceError::Io`] that
/// names the failed operation.
macro_rules! exec_paint_op {
    ($arg_cmd: expr, $arg_operation: expr) => {
        $arg_cmd.map_err(|source| {
            DEBUG_DESIGN_SYSTEM_MOD.then(|| {
                tracing::error!(
                    message = "crossterm: ❌ paint op failed",
                    operation = $arg_operation,
                    error = %source
                );
            });
            SurfaceError::Io {
                operation: $arg_operation,
                source,
            }
        })?
    };
}

/// Paints a text field at `origin` by queuing crossterm commands on `writer`, then
/// flushing it once at the end of each paint.
///
/// Rows that the previous paint used and this one doesn't (eg: the supporting text
/// line after the error is cleared) are blanked out. If `origin` or the painted width
/// changed since the previous paint, the whole previous box is blanked out first.
#[derive(Debug)]
pub struct CrosstermSurface<W: Write> {
    pub writer: W,
    pub origin: Pos,
    pub available_width: ColWidth,
    pub palette: TextFieldPalette,
    last_painted_origin: Pos,
    last_painted_size: Size,
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(writer: W, origin: Pos, available_width: impl Into<ColWidth>) -> Self {
        Self {
            writer,
            origin,
            available_width: available_width.into(),
            palette: TextFieldPalette::default(),
            last_painted_origin: origin,
            last_painted_size: Size::default(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: TextFieldPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_writer(self) -> W { self.writer }

    fn move_to(&mut self, pos: Pos) -> CommonResult<()> {
        exec_paint_op!(
            queue!(
                self.writer,
                MoveTo(pos.col_index.as_u16(), pos.row_index.as_u16())
            ),
            "move cursor"
        );
        ok!()
    }

    fn paint_layout(&mut self, layout: &TextFieldLayout) -> CommonResult<()> {
        for (row_offset, styled_row) in (0_u16..).zip(layout.rows.iter()) {
            self.move_to(self.origin + row(row_offset))?;
            for span in styled_row {
                let color = self.palette.color_for(span.role, layout.variant);
                exec_paint_op!(
                    queue!(
                        self.writer,
                        SetForegroundColor(color),
                        Print(&span.text)
                    ),
                    "print span"
                );
            }
            exec_paint_op!(queue!(self.writer, ResetColor), "reset color");
        }
        ok!()
    }

    fn blank_stale_area(&mut self, new_size: Size) -> CommonResult<()> {
        let old_origin = self.last_painted_origin;
        let old_size = self.last_painted_size;

        let is_same_box =
            old_origin == self.origin && old_size.col_width == new_size.col_width;
        let first_stale_row = if is_same_box {
            new_size.row_height.as_u16()
        } else {
            0
        };

        let blank = SPACER.repeat(old_size.col_width.as_usize());
        for row_offset in first_stale_row..old_size.row_height.as_u16() {
            self.move_to(old_origin + row(row_offset))?;
            exec_paint_op!(queue!(self.writer, Print(&blank)), "blank stale row");
        }
        ok!()
    }
}

impl<W: Write> RenderingSurface for CrosstermSurface<W> {
    fn paint_text_field(&mut self, view: &TextFieldView) -> CommonResult<Size> {
        let layout = TextFieldLayout::new(view, self.available_width);

        DEBUG_DESIGN_SYSTEM_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🖍 paint text field",
                origin = ?self.origin,
                size = ?layout.size,
                trailing_icon = ?view.trailing_icon.map(TrailingIcon::content_description)
            );
        });

        self.blank_stale_area(layout.size)?;
        self.paint_layout(&layout)?;
        exec_paint_op!(self.writer.flush(), "flush");

        self.last_painted_origin = self.origin;
        self.last_painted_size = layout.size;
        ok!(layout.size)
    }
}
