// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{OnPageChange, PageChangeRequest, PageToken, PaginationRange,
            PaginationRequest, PaginationSummary, compute_range, is_first_page,
            is_last_page};

/// One slot of the bar, with the selection flag the renderer uses to highlight the
/// current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSlot {
    pub token: PageToken,
    pub is_selected: bool,
}

/// Everything a renderer needs to draw a pagination control. Only exists when there is
/// something to draw, see [`PaginationBar::try_new`].
///
/// ```
/// use quran_ui::{PaginationBar, PaginationRequest};
///
/// let bar = PaginationBar::try_new(PaginationRequest::new(200, 1), true).unwrap();
/// assert!(bar.is_previous_disabled());
/// assert!(!bar.is_next_disabled());
/// assert_eq!(bar.summary().unwrap().to_string(), "1-20 OF 200 SEARCH RESULTS");
///
/// // No active page yet, nothing to render.
/// assert!(PaginationBar::try_new(PaginationRequest::new(200, 0), true).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    request: PaginationRequest,
    range: PaginationRange,
    summary: Option<PaginationSummary>,
}

impl PaginationBar {
    /// The render gate. Returns [`None`] when `current_page` is 0 (no active page yet) or
    /// the computed range is empty (nothing to paginate).
    #[must_use]
    pub fn try_new(request: PaginationRequest, show_summary: bool) -> Option<Self> {
        let range = compute_range(&request);
        Self::try_from_range(request, range, show_summary)
    }

    /// Same gate as [`PaginationBar::try_new`], for a range that was already computed
    /// (eg: by [`crate::PaginationRangeMemo`]).
    #[must_use]
    pub fn try_from_range(
        request: PaginationRequest,
        range: PaginationRange,
        show_summary: bool,
    ) -> Option<Self> {
        if request.current_page == 0 || range.is_empty() {
            return None;
        }
        let summary = if show_summary {
            PaginationSummary::new(&request)
        } else {
            None
        };
        Some(Self {
            request,
            range,
            summary,
        })
    }

    #[must_use]
    pub fn request(&self) -> &PaginationRequest { &self.request }

    #[must_use]
    pub fn range(&self) -> &PaginationRange { &self.range }

    #[must_use]
    pub fn current_page(&self) -> usize { self.request.current_page }

    #[must_use]
    pub fn summary(&self) -> Option<&PaginationSummary> { self.summary.as_ref() }

    pub fn slots(&self) -> impl Iterator<Item = PaginationSlot> + '_ {
        let current_page = self.current_page();
        self.range.iter().map(move |token| PaginationSlot {
            token: *token,
            is_selected: *token == PageToken::Page(current_page),
        })
    }

    #[must_use]
    pub fn is_previous_disabled(&self) -> bool { is_first_page(self.current_page()) }

    #[must_use]
    pub fn is_next_disabled(&self) -> bool {
        is_last_page(&self.range, self.current_page())
    }

    pub fn previous(&self, handler: &mut impl OnPageChange) -> usize {
        PageChangeRequest::Previous.emit(self.current_page(), handler)
    }

    pub fn next(&self, handler: &mut impl OnPageChange) -> usize {
        PageChangeRequest::Next.emit(self.current_page(), handler)
    }

    pub fn jump(&self, page: usize, handler: &mut impl OnPageChange) -> usize {
        PageChangeRequest::Jump(page).emit(self.current_page(), handler)
    }
}
