// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The page range algorithm.
//!
//! The bar always reserves `siblings_count + 5` slots: the first page, the last page, the
//! current page, and two ellipsis markers. When there are no more pages than that, every
//! page is shown. Otherwise the sibling window around the current page decides which
//! side(s) get an ellipsis:
//!
//! ```text
//! current = 1,  total = 10   [1] 2  3  4  5  …  10        right ellipsis only
//! current = 5,  total = 10    1  …  4 [5] 6  …  10        both
//! current = 10, total = 10    1  …  6  7  8  9 [10]       left ellipsis only
//! ```

use super::{PageToken, PaginationRange, PaginationRequest};

/// Slots for the first page, last page, current page, and two ellipsis markers, on top
/// of the sibling count.
pub const RESERVED_SLOT_COUNT: usize = 5;

/// Pages shown on the side without an ellipsis: first + current + last, with a full
/// sibling window on each side of the current page.
#[must_use]
pub fn edge_item_count(siblings_count: usize) -> usize {
    siblings_count.saturating_mul(2).saturating_add(3)
}

/// Compute the page tokens to render for `request`.
///
/// Total over every input: a zero page size or item count yields an empty range, and a
/// current page past the end is clamped by the sibling window. Callers gate rendering
/// on `current_page == 0` themselves (see [`crate::PaginationBar::try_new`]).
#[must_use]
pub fn compute_range(request: &PaginationRequest) -> PaginationRange {
    let total_page_count = request.total_page_count();
    let siblings_count = request.siblings_count;
    let current_page = request.current_page;

    let total_slot_count = siblings_count.saturating_add(RESERVED_SLOT_COUNT);
    if total_slot_count >= total_page_count {
        return PaginationRange::from_page_span(1, total_page_count);
    }

    let left_sibling = current_page.saturating_sub(siblings_count).max(1);
    let right_sibling = current_page
        .saturating_add(siblings_count)
        .min(total_page_count);

    // No ellipsis when it would hide a single page.
    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_page_count.saturating_sub(2);

    let first_page = 1;
    let last_page = total_page_count;

    let mut range = PaginationRange::empty();
    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            // Never run into the last page, so numbers stay strictly increasing for
            // large sibling counts.
            let left_end = edge_item_count(siblings_count).min(last_page - 1);
            range.push_page_span(first_page, left_end);
            if left_end + 1 < last_page {
                range.push(PageToken::Ellipsis);
            }
            range.push(PageToken::Page(last_page));
        }
        (true, false) => {
            let right_start = last_page
                .saturating_add(1)
                .saturating_sub(edge_item_count(siblings_count))
                .max(first_page + 1);
            range.push(PageToken::Page(first_page));
            if right_start > first_page + 1 {
                range.push(PageToken::Ellipsis);
            }
            range.push_page_span(right_start, last_page);
        }
        (true, true) => {
            range.push(PageToken::Page(first_page));
            range.push(PageToken::Ellipsis);
            range.push_page_span(left_sibling, right_sibling);
            range.push(PageToken::Ellipsis);
            range.push(PageToken::Page(last_page));
        }
        (false, false) => {
            // Only reachable with a sibling window wide enough to touch both ends.
            tracing::trace!(
                message = "Sibling window covers both ends, no range",
                request = ?request
            );
        }
    }

    range
}
