// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Failures that the reader UI logic can report. The pure computations
/// ([`crate::compute_range`] and friends) are total and never produce these; they come
/// from validating constructors, config loading, and log file setup.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReaderUiError {
    #[error("Page size must be greater than 0")]
    #[diagnostic(
        code(quran_ui::pagination::invalid_page_size),
        help("Use a positive page size, the default is 20 items per page.")
    )]
    InvalidPageSize,

    #[error("Could not parse reader config")]
    #[diagnostic(code(quran_ui::config::parse))]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read reader config from {}", path.display())]
    #[diagnostic(
        code(quran_ui::config::io),
        help("Check that the file exists and is readable.")
    )]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't use {path} as a log file path")]
    #[diagnostic(
        code(quran_ui::log::file_path),
        help("The path needs a parent folder and a file name.")
    )]
    LogFilePath { path: String },
}
