// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// This is the global `DEBUG` const for this crate. If set to `true`, then state
/// transitions of the components are logged using [`tracing::debug!`]. Logging still has
/// to be enabled via [`crate::try_initialize_logging_global`] for any output to show up.
pub const DEBUG_DESIGN_SYSTEM_MOD: bool = true;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::TextFieldConfigError`], [`crate::SurfaceError`], and
///   any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Wrap the given value (or unit) in [`Ok`].
///
/// ```
/// use r3bl_design_system::{ok, CommonResult};
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<u8> { ok!(1) }
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 1);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop in replacement for [`assert_eq!`] that prints a colored diff when the
/// assertion fails.
#[cfg(test)]
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
