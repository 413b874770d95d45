// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;
use crate::{CommonError, CommonErrorType, CommonResult};

pub const DEFAULT_LOG_FILE_NAME: &str = "quran_ui_log.txt";

/// Where the logs go, and how verbose they are.
///
/// - `writer_config`: [`WriterConfig`] to choose the display, a file, both, or nothing.
/// - `level_filter`: [`LevelFilter`] applied to every layer.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
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

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::INFO,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(display_pref: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(display_pref),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Logs to [`DEFAULT_LOG_FILE_NAME`] when `maybe_file_path` is [`None`].
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        maybe_file_path: Option<String>,
        display_pref: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                display_pref,
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install as the process wide subscriber. Does nothing for [`WriterConfig::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if a log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> CommonResult<()> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(());
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .or_else(|err| {
                CommonError::new_error_result(
                    CommonErrorType::General,
                    &format!("Could not install tracing subscriber: {err}"),
                )
            })
    }

    /// Install for the current thread only, until the returned guard is dropped. Handy
    /// in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if a log file can't be created.
    pub fn install_thread_local(
        self,
    ) -> CommonResult<Option<tracing::subscriber::DefaultGuard>> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(None);
        };
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(Some(tracing::subscriber::set_default(subscriber)))
    }
}
