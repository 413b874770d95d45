// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common_result_and_error;
pub mod reader_ui_error;

// Re-export.
pub use common_result_and_error::*;
pub use reader_ui_error::*;
