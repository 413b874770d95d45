// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # quran_ui
//!
//! Presentation logic for a Quran reader, with no rendering framework attached. Every
//! type in here is plain data plus pure functions, so a rendering layer (web, terminal, or
//! anything else) can call into it on every state change without caring about cost.
//!
//! # Table of contents
//!
//! - [Pagination](#pagination)
//! - [Reader views](#reader-views)
//! - [Ambient stack](#ambient-stack)
//!
//! # Pagination
//!
//! [`compute_range`] turns a [`PaginationRequest`] into a [`PaginationRange`] of
//! [`PageToken`]s. [`PaginationBar`] wraps that range with the render gate, the
//! previous / next guards, and the optional [`PaginationSummary`].
//!
//! ```
//! use quran_ui::{compute_range, PageToken, PaginationRequest};
//!
//! let request = PaginationRequest::new(200, 5);
//! let range = compute_range(&request);
//! assert_eq!(
//!     range.tokens(),
//!     &[
//!         PageToken::Page(1),
//!         PageToken::Ellipsis,
//!         PageToken::Page(4),
//!         PageToken::Page(5),
//!         PageToken::Page(6),
//!         PageToken::Ellipsis,
//!         PageToken::Page(10),
//!     ]
//! );
//! ```
//!
//! # Reader views
//!
//! [`ReaderLayout`] picks the view for a [`ReadingPreference`]. The quiz view helpers
//! ([`ApiPageToVersesMap`], [`VerseFetchDeduper`], [`QuizListModel`], [`QuizCellState`])
//! coordinate lazily fetched verse pages with a virtualized list owned by the caller.
//!
//! # Ambient stack
//!
//! - Errors: [`CommonResult`] is a [`miette::Result`], domain failures are
//!   [`ReaderUiError`].
//! - Logging: [`TracingConfig`] builds `tracing-subscriber` layers.
//! - Config: [`ReaderUiConfig`] is loaded from JSON via `serde`.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod ui;

// Re-export.
pub use core::*;
pub use ui::*;
