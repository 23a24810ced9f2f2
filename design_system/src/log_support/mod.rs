// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in [`tracing`] setup for apps that host the components in this crate. The
//! components emit [`tracing::debug!`] events for their state transitions (see
//! [`crate::DEBUG_DESIGN_SYSTEM_MOD`]), and nothing is printed unless a subscriber is
//! installed using one of the functions here.

// Attach.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
