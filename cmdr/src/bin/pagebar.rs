// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use quran_cmdr::{CLIArg, run_app};
use quran_ui::CommonResult;

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();
    let mut stdout = std::io::stdout().lock();
    run_app(&cli_arg, &mut stdout)
}
