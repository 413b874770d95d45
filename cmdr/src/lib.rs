// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line apps built on [`quran_ui`].
//!
//! - `pagebar`: render the pagination bar for a result set as plain text, eg:
//!   `pagebar --total-count 200 --current-page 5` prints
//!   `< 1 ... 4 [5] 6 ... 10 >` and `81-100 OF 200 SEARCH RESULTS`.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod pagebar;

// Re-export.
pub use pagebar::*;
