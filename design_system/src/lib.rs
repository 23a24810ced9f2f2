// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # r3bl_design_system
//!
//! Reusable components that are shared by the screens of a host TUI app. Right now this
//! crate ships a single component, [`ValidatedTextInput`], which is a labeled, single
//! line text field with a built-in error affordance and an externally triggerable reset.
//!
//! # Moving parts
//!
//! ```text
//!   host app ──(ValidatedTextInputConfig every render)──▶ ValidatedTextInput
//!      ▲                                                   │   │
//!      └──────────── on_change(&str) ◀── edit ─────────────┘   │ TextFieldView
//!                                                               ▼
//!   crossterm Event ──▶ TextFieldEvent ──▶ handle_event    RenderingSurface
//!                                                          (OffscreenSurface,
//!                                                           CrosstermSurface)
//! ```
//!
//! 1. The host owns a [`ValidatedTextInputConfig`] and re-supplies it on every render.
//!    The component only ever borrows it.
//! 2. The component owns an [`InputState`]. All mutations go through
//!    [`InputState::apply`], an explicit state transition function.
//! 3. The reset request is edge triggered. An [`EdgeDetector`] remembers the last seen
//!    value of [`ValidatedTextInputConfig::reset_signal`] and only a `false` → `true`
//!    transition clears the field.
//! 4. Painting is delegated to a [`RenderingSurface`], which reports the painted
//!    [`Size`] back so that it can be stored in [`InputState::measured_size`].
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use r3bl_design_system::{OffscreenSurface, ValidatedTextInput,
//!                          ValidatedTextInputConfig, TextFieldEvent, width};
//!
//! let changes = Arc::new(Mutex::new(Vec::<String>::new()));
//! let changes_clone = changes.clone();
//! let config = ValidatedTextInputConfig::new("Weight", move |it: &str| {
//!     if let Ok(mut changes) = changes_clone.lock() {
//!         changes.push(it.to_string());
//!     }
//! })
//! .with_initial_value("10");
//!
//! let mut field = ValidatedTextInput::mount(&config);
//! let mut surface = OffscreenSurface::new(width(24));
//! field.render(&config, &mut surface).unwrap();
//!
//! field.handle_event(&config, TextFieldEvent::Edit("105".into()));
//! assert_eq!(field.value(), "105");
//! assert_eq!(*changes.lock().unwrap(), vec!["105".to_string()]);
//! ```

// Attach.
pub mod core;
pub mod log_support;
pub mod surface;
pub mod text_field;

// Re-export.
pub use crate::core::*;
pub use log_support::*;
pub use surface::*;
pub use text_field::*;
