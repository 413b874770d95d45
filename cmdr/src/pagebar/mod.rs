// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod app_main;
pub mod clap_config;
pub mod ui_templates;

// Reexport.
pub use app_main::*;
pub use clap_config::*;
pub use ui_templates::*;
