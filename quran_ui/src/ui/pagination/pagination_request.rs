// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, ReaderUiError};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SIBLINGS_COUNT: usize = 1;

/// Immutable input to [`crate::compute_range`].
///
/// `current_page` is 1-based. A value of 0 means "no active page yet" and is handled by
/// the render gate in [`crate::PaginationBar`], not by the range computation.
///
/// The fields are public so callers can build requests from their own state in one
/// expression. Use [`PaginationRequest::try_new`] when the page size comes from outside
/// the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationRequest {
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub siblings_count: usize,
}

impl PaginationRequest {
    /// Uses [`DEFAULT_PAGE_SIZE`] and [`DEFAULT_SIBLINGS_COUNT`].
    #[must_use]
    pub fn new(total_count: usize, current_page: usize) -> Self {
        Self {
            total_count,
            page_size: DEFAULT_PAGE_SIZE,
            current_page,
            siblings_count: DEFAULT_SIBLINGS_COUNT,
        }
    }

    /// # Errors
    ///
    /// Returns [`ReaderUiError::InvalidPageSize`] if `page_size` is 0.
    pub fn try_new(
        total_count: usize,
        page_size: usize,
        current_page: usize,
        siblings_count: usize,
    ) -> CommonResult<Self> {
        if page_size == 0 {
            return Err(ReaderUiError::InvalidPageSize.into());
        }
        Ok(Self {
            total_count,
            page_size,
            current_page,
            siblings_count,
        })
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_siblings_count(mut self, siblings_count: usize) -> Self {
        self.siblings_count = siblings_count;
        self
    }

    #[must_use]
    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    #[must_use]
    pub fn total_page_count(&self) -> usize {
        total_page_count(self.total_count, self.page_size)
    }
}

/// `ceil(total_count / page_size)`. A zero page size breaks the caller contract; it
/// yields 0 pages so the control simply isn't rendered.
#[must_use]
pub fn total_page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
