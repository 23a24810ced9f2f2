// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::dispatcher::{self, DefaultGuard};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt};

use crate::{CommonResult, DisplayPreference, TracingConfig, WriterConfig, ok};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Global default subscriber, which once set, can't be unset or changed. This is
/// meant for apps.
///
/// Logging is **DISABLED** by **default**. If the level filter in `options` is
/// [`LevelFilter::OFF`] then nothing is installed and this returns `Ok(())`.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> CommonResult<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    let dispatch = try_create_dispatch(it)?;
    dispatcher::set_global_default(dispatch).into_diagnostic()
}

/// Thread local subscriber, which is uninstalled when the returned guard is dropped.
/// This is meant for tests, which run on many threads, each w/ its own subscriber.
///
/// Returns `Ok(None)` if the level filter in `options` is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let dispatch = try_create_dispatch(it)?;
    Ok(Some(dispatcher::set_default(&dispatch)))
}

fn try_create_dispatch(tracing_config: TracingConfig) -> CommonResult<dispatcher::Dispatch> {
    let layers = try_create_layers(&tracing_config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(dispatcher::Dispatch::new(subscriber))
}

/// Returns the layers, w/out installing anything.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> CommonResult<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    if let Some(layer) = create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

fn create_display_layer(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<Registry>>> {
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

fn try_create_file_layer(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> CommonResult<Option<Box<DynLayer<Registry>>>> {
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::File(file_path) | WriterConfig::DisplayAndFile(_, file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path)?;
            Some(Box::new(fmt_layer.with_writer(file).with_filter(level_filter)))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

mod rolling_file_appender_impl {
    use super::{CommonResult, PathBuf};

    /// The file is never rotated; the component logs are small.
    pub fn try_create(
        path_str: &str,
    ) -> CommonResult<tracing_appender::rolling::RollingFileAppender> {
        let path = PathBuf::from(path_str);

        let parent = match path.parent() {
            Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let file_name = path.file_name().ok_or_else(|| {
            miette::miette!(
                "Can't access file name {}. It might not exist, or don't have required permissions.",
                path.display()
            )
        })?;

        Ok(tracing_appender::rolling::never(parent, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_off_installs_nothing() {
        let it = try_initialize_logging_thread_local(TracingConfig::default());
        assert!(matches!(it, Ok(None)));
    }

    #[test]
    fn test_display_only_layers() {
        let config: TracingConfig = DisplayPreference::Stderr.into();
        let layers = try_create_layers(&config).unwrap();
        // Level filter + display.
        assert_eq2!(layers.len(), 2);
    }

    #[test]
    fn test_thread_local_guard_for_display() {
        let config: TracingConfig = DisplayPreference::Stderr.into();
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::debug!(message = "thread local logging is on");
    }

    #[test]
    fn test_file_name_is_required() {
        assert!(rolling_file_appender_impl::try_create("..").is_err());
    }
}
