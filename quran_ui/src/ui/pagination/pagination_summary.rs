// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::PaginationRequest;

/// Inclusive item range shown on the current page, eg: `21-40 OF 200 SEARCH RESULTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub start: usize,
    pub end: usize,
    pub total_count: usize,
}

impl PaginationSummary {
    /// `start = current_page * page_size - (page_size - 1)` and
    /// `end = min(total_count, current_page * page_size)`.
    ///
    /// Returns [`None`] for page 0 or a zero page size, where no items are shown.
    #[must_use]
    pub fn new(request: &PaginationRequest) -> Option<Self> {
        if request.current_page == 0 || request.page_size == 0 {
            return None;
        }
        let showing_until_item = request.current_page.saturating_mul(request.page_size);
        Some(Self {
            start: showing_until_item - (request.page_size - 1),
            end: request.total_count.min(showing_until_item),
            total_count: request.total_count,
        })
    }
}

impl Display for PaginationSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}-{} OF {} SEARCH RESULTS",
            self.start, self.end, self.total_count
        )
    }
}
