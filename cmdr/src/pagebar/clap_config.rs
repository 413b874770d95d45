// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "pagebar")]
#[command(about = "Render the pagination bar for a result set")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[arg(long, short = 't', help = "Total number of items being paginated.")]
    pub total_count: usize,

    #[arg(
        long,
        short = 'p',
        default_value_t = 1,
        help = "1-based page to show as selected. 0 means no active page, nothing is printed."
    )]
    pub current_page: usize,

    #[command(flatten)]
    pub pagination_options: PaginationOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

/// Overrides for values that otherwise come from the config file (or its defaults).
#[derive(Debug, Args)]
pub struct PaginationOption {
    #[arg(long, short = 's', help = "Items per page [default: 20].")]
    pub page_size: Option<usize>,

    #[arg(long, help = "Pages shown on each side of the current page [default: 1].")]
    pub siblings_count: Option<usize>,

    #[arg(long, help = "Don't print the `start-end OF total` summary line.")]
    pub no_summary: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(global = true, long, short = 'c', help = "Path to a JSON reader config file.")]
    pub config: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `quran_ui_log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_defaults() {
        let args = CLIArg::parse_from(["pagebar", "--total-count", "200"]);
        assert_eq!(args.total_count, 200);
        assert_eq!(args.current_page, 1);
        assert!(args.pagination_options.page_size.is_none());
        assert!(!args.pagination_options.no_summary);
        assert!(!args.global_options.enable_logging);
    }

    #[test]
    fn test_parse_overrides() {
        let args = CLIArg::parse_from([
            "pagebar", "-t", "90", "-p", "3", "-s", "10", "--siblings-count", "2",
            "--no-summary", "-c", "reader.json",
        ]);
        assert_eq!(args.current_page, 3);
        assert_eq!(args.pagination_options.page_size, Some(10));
        assert_eq!(args.pagination_options.siblings_count, Some(2));
        assert!(args.pagination_options.no_summary);
        assert_eq!(args.global_options.config, Some(PathBuf::from("reader.json")));
    }
}
