// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;
use quran_ui::{CommonResult, PaginationBar, PaginationRequest, ReaderUiConfig,
               TracingConfig};

use crate::{CLIArg, render_bar};

/// Entry point for the `pagebar` binary. Writes the rendered bar to `out`, or nothing
/// when there is no bar to render (eg: `--current-page 0`).
///
/// # Errors
///
/// Returns an error if the config file can't be loaded, the page size is 0, logging
/// can't be set up, or `out` can't be written to.
pub fn run_app(cli_arg: &CLIArg, out: &mut impl Write) -> CommonResult<()> {
    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(None).install_global()?;
    }

    tracing::debug!(message = "Start pagebar", cli_arg = ?cli_arg);

    for line in render_lines(cli_arg)? {
        writeln!(out, "{line}").into_diagnostic()?;
    }

    tracing::debug!(message = "Stop pagebar");
    Ok(())
}

/// Config file (or defaults) first, then any command line overrides on top.
///
/// # Errors
///
/// Returns an error if the config file can't be loaded, or the page size is 0.
pub fn resolve_request(cli_arg: &CLIArg) -> CommonResult<(PaginationRequest, bool)> {
    let config = match &cli_arg.global_options.config {
        Some(path) => ReaderUiConfig::try_load_from_path(path)?,
        None => ReaderUiConfig::default(),
    };

    let options = &cli_arg.pagination_options;
    let request = PaginationRequest::try_new(
        cli_arg.total_count,
        options.page_size.unwrap_or(config.pagination.page_size),
        cli_arg.current_page,
        options
            .siblings_count
            .unwrap_or(config.pagination.siblings_count),
    )?;
    let show_summary = config.pagination.show_summary && !options.no_summary;

    Ok((request, show_summary))
}

/// # Errors
///
/// Same as [`resolve_request`].
pub fn render_lines(cli_arg: &CLIArg) -> CommonResult<Vec<String>> {
    let (request, show_summary) = resolve_request(cli_arg)?;
    let maybe_bar = PaginationBar::try_new(request, show_summary);
    if maybe_bar.is_none() {
        tracing::debug!(message = "Nothing to render", request = ?request);
    }
    Ok(render_bar(maybe_bar.as_ref()))
}
