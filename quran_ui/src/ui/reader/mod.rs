// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod quiz_view;
pub mod reading_preference;
pub mod verse;

// Re-export.
pub use quiz_view::*;
pub use reading_preference::*;
pub use verse::*;
