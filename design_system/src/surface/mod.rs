// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_surface;
pub mod offscreen_surface;
pub mod rendering_surface;
pub mod text_field_layout;

// Re-export.
pub use crossterm_surface::*;
pub use offscreen_surface::*;
pub use rendering_surface::*;
pub use text_field_layout::*;
