// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::{CommonResult, ReaderUiError};

/// A file appender that never rotates, so the file name is used as is. Don't wrap it in
/// `tracing_appender::non_blocking`, the worker guard would have to outlive the
/// subscriber and nothing here keeps it.
///
/// # Errors
///
/// Returns [`ReaderUiError::LogFilePath`] if the path has no file name, or an error if
/// the file can't be created.
pub fn try_create(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(ReaderUiError::LogFilePath {
            path: path_str.to_string(),
        }
        .into());
    };

    // A bare file name goes in the current directory.
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
