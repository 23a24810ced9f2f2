// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColWidth, CommonResult, RenderingSurface, Size, TextFieldLayout,
            TextFieldView, ok};

/// Keeps the rows from the last paint in memory. Each paint replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffscreenSurface {
    pub available_width: ColWidth,
    pub last_layout: Option<TextFieldLayout>,
    pub paint_count: usize,
}

impl OffscreenSurface {
    #[must_use]
    pub fn new(available_width: impl Into<ColWidth>) -> Self {
        Self {
            available_width: available_width.into(),
            ..Default::default()
        }
    }

    /// Plain text of the rows from the last paint, or nothing if never painted.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.last_layout
            .as_ref()
            .map(TextFieldLayout::lines)
            .unwrap_or_default()
    }
}

impl RenderingSurface for OffscreenSurface {
    fn paint_text_field(&mut self, view: &TextFieldView) -> CommonResult<Size> {
        let layout = TextFieldLayout::new(view, self.available_width);
        let size = layout.size;
        self.last_layout = Some(layout);
        self.paint_count += 1;
        ok!(size)
    }
}
