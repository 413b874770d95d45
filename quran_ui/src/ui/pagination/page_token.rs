// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

/// What an [`PageToken::Ellipsis`] renders as.
pub const ELLIPSIS: &str = "...";

/// Enough inline slots for every range produced with the default sibling count (at most
/// 7 tokens). Larger sibling counts spill onto the heap.
pub const PAGINATION_RANGE_INLINE_SIZE: usize = 8;

/// One renderable slot in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// 1-based page number.
    Page(usize),
    /// An elided run of page numbers.
    Ellipsis,
}

impl PageToken {
    #[must_use]
    pub fn page_number(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    #[must_use]
    pub fn is_ellipsis(&self) -> bool { matches!(self, PageToken::Ellipsis) }
}

impl Display for PageToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => write!(f, "{ELLIPSIS}"),
        }
    }
}

pub type InlineVecPageTokens = SmallVec<[PageToken; PAGINATION_RANGE_INLINE_SIZE]>;

/// Ordered page tokens for a pagination bar. Produced by [`crate::compute_range`], has no
/// identity of its own, and is recomputed whenever the request changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationRange {
    tokens: InlineVecPageTokens,
}

impl PaginationRange {
    #[must_use]
    pub fn empty() -> Self { Self::default() }

    /// Contiguous `Page(start) ..= Page(end)`. Empty when `start > end`.
    #[must_use]
    pub fn from_page_span(start: usize, end: usize) -> Self {
        let mut it = Self::default();
        it.push_page_span(start, end);
        it
    }

    pub(crate) fn push(&mut self, token: PageToken) { self.tokens.push(token); }

    pub(crate) fn push_page_span(&mut self, start: usize, end: usize) {
        self.tokens.extend((start..=end).map(PageToken::Page));
    }

    #[must_use]
    pub fn tokens(&self) -> &[PageToken] { &self.tokens }

    #[must_use]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, PageToken> { self.tokens.iter() }

    /// The last numeric token, which is the page the "next" control stops at.
    #[must_use]
    pub fn last_page_number(&self) -> Option<usize> {
        self.tokens.iter().rev().find_map(PageToken::page_number)
    }

    #[must_use]
    pub fn contains_page(&self, page: usize) -> bool {
        self.tokens.contains(&PageToken::Page(page))
    }
}

impl<'a> IntoIterator for &'a PaginationRange {
    type Item = &'a PageToken;
    type IntoIter = std::slice::Iter<'a, PageToken>;

    fn into_iter(self) -> Self::IntoIter { self.tokens.iter() }
}

/// Space separated, eg: `1 ... 4 5 6 ... 10`.
impl Display for PaginationRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
