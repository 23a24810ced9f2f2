// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common;
pub mod dimens;
pub mod edge_detector;
pub mod glyphs;

// Re-export.
pub use common::*;
pub use dimens::*;
pub use edge_detector::*;
pub use glyphs::*;
