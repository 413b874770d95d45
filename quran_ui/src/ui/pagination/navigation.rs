// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::PaginationRange;

/// Receives the page that a navigation control asks for. The pagination logic holds no
/// page state itself, the owner of the current page decides what to do with the
/// request.
///
/// Any `FnMut(usize)` closure works as a handler:
///
/// ```
/// use quran_ui::{on_next, OnPageChange};
///
/// let mut requested = None;
/// on_next(4, &mut |page: usize| requested = Some(page));
/// assert_eq!(requested, Some(5));
/// ```
pub trait OnPageChange {
    fn on_page_change(&mut self, new_page: usize);
}

impl<F> OnPageChange for F
where
    F: FnMut(usize),
{
    fn on_page_change(&mut self, new_page: usize) { self(new_page); }
}

/// The three things a pagination bar can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChangeRequest {
    Previous,
    Next,
    Jump(usize),
}

impl PageChangeRequest {
    /// The page this request asks for, relative to `current_page`. No clamping against
    /// the page count happens here; the bar disables controls at the boundaries.
    #[must_use]
    pub fn resolve(&self, current_page: usize) -> usize {
        match self {
            PageChangeRequest::Previous => current_page.saturating_sub(1),
            PageChangeRequest::Next => current_page.saturating_add(1),
            PageChangeRequest::Jump(page) => *page,
        }
    }

    /// Resolve against `current_page` and hand the result to `handler`. Returns the page
    /// that was requested.
    pub fn emit(&self, current_page: usize, handler: &mut impl OnPageChange) -> usize {
        let new_page = self.resolve(current_page);
        tracing::debug!(
            message = "Page change requested",
            request = ?self,
            current_page,
            new_page
        );
        handler.on_page_change(new_page);
        new_page
    }
}

/// Request `current_page - 1`.
pub fn on_previous(current_page: usize, handler: &mut impl OnPageChange) -> usize {
    PageChangeRequest::Previous.emit(current_page, handler)
}

/// Request `current_page + 1`.
pub fn on_next(current_page: usize, handler: &mut impl OnPageChange) -> usize {
    PageChangeRequest::Next.emit(current_page, handler)
}

/// Request `page` directly.
pub fn on_jump(current_page: usize, page: usize, handler: &mut impl OnPageChange) -> usize {
    PageChangeRequest::Jump(page).emit(current_page, handler)
}

/// The "previous" control is disabled on page 1.
#[must_use]
pub fn is_first_page(current_page: usize) -> bool { current_page == 1 }

/// The "next" control is disabled when the current page is the last numeric token of
/// `range`.
#[must_use]
pub fn is_last_page(range: &PaginationRange, current_page: usize) -> bool {
    range.last_page_number() == Some(current_page)
}
