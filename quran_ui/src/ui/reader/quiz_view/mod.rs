// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Coordination logic for the quiz reading mode.
//!
//! The quiz view is a virtualized list with one item per verse plus a trailing "end of
//! scrolling" item. Verses arrive from the API in pages; items whose page hasn't arrived
//! yet render a skeleton and ask for their page exactly once.
//!
//! ```text
//! item index ──QuizListModel──▶ QuizItem::Verse(verse_idx)
//!                                  │
//!               VerseLocation ◀────┘  (api_page, index_in_page)
//!                    │
//!   ApiPageToVersesMap ── loaded? ──▶ QuizVerseSlot::Loaded / Skeleton
//!                    │
//!    VerseFetchDeduper ── should_fetch? ──▶ caller fetches the page
//! ```

// Attach sources.
pub mod api_page_map;
pub mod fetch_deduper;
pub mod query_param_message;
pub mod quiz_cell;
pub mod quiz_list_model;

// Re-export.
pub use api_page_map::*;
pub use fetch_deduper::*;
pub use query_param_message::*;
pub use quiz_cell::*;
pub use quiz_list_model::*;
