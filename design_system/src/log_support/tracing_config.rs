// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "design_system_log.txt";

/// Configure where the logs go and how verbose they are. Both the
/// [`crate::try_initialize_logging_global`] and
/// [`crate::try_initialize_logging_thread_local`] functions take an
/// `impl Into<TracingConfig>`, so any of the following work as arguments:
///
/// ```no_run
/// use r3bl_design_system::{DisplayPreference, TracingConfig, WriterConfig,
///                          try_initialize_logging_global};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// let config_4: TracingConfig = WriterConfig::File("fields.log".to_string()).into();
///
/// try_initialize_logging_global(config_2 + config_3 + config_4).ok();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

/// Logging is off unless asked for.
impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::None,
        }
    }
}

pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter, TracingConfig,
                WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// The more verbose level filter wins, and the writers are merged.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`]s. A display and a file combine into
    /// [`WriterConfig::DisplayAndFile`]. When both sides set the same kind of writer,
    /// the `rhs` wins since it has higher specificity.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, it) | (it, None) => it,
                (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),

                // Collision, rhs wins for whatever it sets.
                (Display(_) | File(_), DisplayAndFile(dp, f)) => DisplayAndFile(dp, f),
                (Display(_), Display(dp)) => Display(dp),
                (File(_), File(f)) => File(f),
                (DisplayAndFile(_, f), Display(dp)) => DisplayAndFile(dp, f),
                (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),
                (DisplayAndFile(..), DisplayAndFile(dp, f)) => DisplayAndFile(dp, f),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert_eq2!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
    }

    #[test]
    fn test_level_converts_to_file_logging() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(it.level_filter, LevelFilter::INFO);
        assert_eq2!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_add_writer_configs() {
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file_a = WriterConfig::File("a.log".to_string());
        let file_b = WriterConfig::File("b.log".to_string());

        assert_eq2!(WriterConfig::None + stdout.clone(), stdout);
        assert_eq2!(file_a.clone() + WriterConfig::None, file_a);
        assert_eq2!(
            stdout.clone() + file_a.clone(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".to_string())
        );
        assert_eq2!(
            file_a.clone() + stderr.clone(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".to_string())
        );
        assert_eq2!(stdout.clone() + stderr.clone(), stderr);
        assert_eq2!(file_a.clone() + file_b.clone(), file_b);
        assert_eq2!(
            (stdout + file_a) + file_b,
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b.log".to_string())
        );
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let info: TracingConfig = LevelFilter::INFO.into();
        let trace_stderr = TracingConfig {
            level_filter: LevelFilter::TRACE,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
        };
        let it = info + trace_stderr;
        assert_eq2!(it.level_filter, LevelFilter::TRACE);
        assert_eq2!(
            it.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
