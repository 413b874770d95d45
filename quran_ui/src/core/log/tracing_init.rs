// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use crate::CommonResult;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Build the layers for `tracing_config` without installing them. Returns [`None`] for
/// [`WriterConfig::None`].
///
/// Install them with `tracing_subscriber::registry().with(layers).init()`, or use
/// [`TracingConfig::install_global`] / [`TracingConfig::install_thread_local`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> CommonResult<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let writer_config = tracing_config.get_writer_config();
    if writer_config == WriterConfig::None {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Layers without their own filter (eg: added by the caller later) still honor the
    // configured level.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, writer_config.clone()) {
        return_it.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, writer_config)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// Display layer for [`WriterConfig::Display`] and [`WriterConfig::DisplayAndFile`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => display_pref,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    Some(match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    })
}

/// File layer for [`WriterConfig::File`] and [`WriterConfig::DisplayAndFile`]. No ANSI
/// escapes end up in the file.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_path = match writer_config {
        WriterConfig::File(file_path) | WriterConfig::DisplayAndFile(_, file_path) => {
            file_path
        }
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let file = rolling_file_appender_impl::try_create(&file_path)?;
    Ok(Some(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    )))
}
