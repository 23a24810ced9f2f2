// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod config;
pub mod input_state;
pub mod text_field_component;
pub mod text_field_event;
pub mod text_field_view;

// Re-export.
pub use config::*;
pub use input_state::*;
pub use text_field_component::*;
pub use text_field_event::*;
pub use text_field_view::*;
