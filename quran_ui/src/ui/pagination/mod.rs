// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pagination control logic: which page labels to show, when to gate the whole control,
//! and how page change requests flow back to whoever owns the current page.
//!
//! ```text
//! PaginationRequest ──compute_range()──▶ PaginationRange ──▶ PaginationBar
//!                                                              │
//!                         OnPageChange ◀── previous / next / jump
//! ```

// Attach sources.
pub mod compute_range;
pub mod navigation;
pub mod page_token;
pub mod pagination_bar;
pub mod pagination_request;
pub mod pagination_summary;
pub mod range_memo;

// Re-export.
pub use compute_range::*;
pub use navigation::*;
pub use page_token::*;
pub use pagination_bar::*;
pub use pagination_request::*;
pub use pagination_summary::*;
pub use range_memo::*;
