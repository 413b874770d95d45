// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Memoized [`compute_range`], keyed by all four fields of [`PaginationRequest`].
//!
//! A render loop asks for the range on every frame, but the request only changes when
//! the user navigates or the item count changes. Only the most recent request is kept:
//! a pagination bar has exactly one live request at a time.

use super::{PaginationRange, PaginationRequest, compute_range};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct PaginationRangeMemo {
    maybe_last: Option<(PaginationRequest, PaginationRange)>,
    stats: MemoStats,
}

impl PaginationRangeMemo {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the cached range when `request` matches the last one, otherwise computes
    /// and caches a fresh range.
    pub fn get_or_compute(&mut self, request: &PaginationRequest) -> &PaginationRange {
        let is_hit = matches!(&self.maybe_last, Some((last, _)) if last == request);
        if is_hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            self.maybe_last = None;
        }
        let (_, range) = self.maybe_last.get_or_insert_with(|| {
            tracing::trace!(message = "Recomputing pagination range", request = ?request);
            (*request, compute_range(request))
        });
        range
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats { self.stats }

    pub fn clear(&mut self) {
        self.maybe_last = None;
        self.stats = MemoStats::default();
    }
}
