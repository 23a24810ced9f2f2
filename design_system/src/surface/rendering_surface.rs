// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, Size, TextFieldView};

/// The primitive layer that [`crate::ValidatedTextInput`] delegates its output to. The
/// component decides *what* to show (the [`TextFieldView`]), the surface decides *how*.
///
/// Implementations are expected to use [`crate::TextFieldLayout`] so that all surfaces
/// agree on the geometry, but this is not required.
///
/// - [`crate::OffscreenSurface`] keeps the painted rows in memory (tests, snapshots).
/// - [`crate::CrosstermSurface`] queues crossterm commands on any [`std::io::Write`].
pub trait RenderingSurface {
    /// Paint the field and return the [`Size`] it occupies, which the component stores
    /// as its measured size.
    ///
    /// # Errors
    ///
    /// If the underlying output can't be written to.
    fn paint_text_field(&mut self, view: &TextFieldView) -> CommonResult<Size>;
}
