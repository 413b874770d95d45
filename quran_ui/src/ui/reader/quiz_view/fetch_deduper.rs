// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use rustc_hash::FxHashSet;

use super::{ApiPageToVersesMap, VerseLocation};
use crate::{CommonResult, Verse};

/// Makes sure each API page is requested once, even though every not-yet-loaded verse
/// item in the viewport asks for its page on render.
///
/// ```
/// use quran_ui::{ApiPageToVersesMap, VerseFetchDeduper};
///
/// let mut map = ApiPageToVersesMap::new(vec![]);
/// let mut deduper = VerseFetchDeduper::default();
///
/// // Page 1 came with the initial response.
/// assert!(!deduper.should_fetch(1, &map));
/// // The first item that needs page 2 triggers the fetch.
/// assert!(deduper.should_fetch(2, &map));
/// // Its neighbors do not.
/// assert!(!deduper.should_fetch(2, &map));
///
/// deduper.complete(2, vec![], &mut map);
/// assert!(map.contains_page(2));
/// ```
#[derive(Debug, Default)]
pub struct VerseFetchDeduper {
    in_flight: FxHashSet<usize>,
}

impl VerseFetchDeduper {
    /// True when `api_page` is neither loaded nor already being fetched. A `true` result
    /// marks the page as in flight, so the caller must start the fetch and later call
    /// [`VerseFetchDeduper::complete`] or [`VerseFetchDeduper::fail`].
    pub fn should_fetch(&mut self, api_page: usize, map: &ApiPageToVersesMap) -> bool {
        if map.contains_page(api_page) {
            return false;
        }
        let is_new = self.in_flight.insert(api_page);
        if is_new {
            tracing::debug!(message = "Fetching verses page", api_page);
        }
        is_new
    }

    /// [`VerseFetchDeduper::should_fetch`] for the page holding `verse_idx`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReaderUiError::InvalidPageSize`] if `per_page` is 0.
    pub fn should_fetch_verse(
        &mut self,
        verse_idx: usize,
        per_page: usize,
        map: &ApiPageToVersesMap,
    ) -> CommonResult<Option<usize>> {
        let location = VerseLocation::try_new(verse_idx, per_page)?;
        Ok(self
            .should_fetch(location.api_page, map)
            .then_some(location.api_page))
    }

    /// Store the fetched page and clear its in-flight mark.
    pub fn complete(
        &mut self,
        api_page: usize,
        verses: Vec<Verse>,
        map: &mut ApiPageToVersesMap,
    ) {
        self.in_flight.remove(&api_page);
        tracing::debug!(message = "Verses page loaded", api_page, verse_count = verses.len());
        map.insert_page(api_page, verses);
    }

    /// Clear the in-flight mark so that a later render can retry.
    pub fn fail(&mut self, api_page: usize) {
        self.in_flight.remove(&api_page);
        tracing::warn!(message = "Verses page fetch failed", api_page);
    }

    #[must_use]
    pub fn is_in_flight(&self, api_page: usize) -> bool { self.in_flight.contains(&api_page) }
}

#[cfg(test)]
mod tests {
    use super::{super::api_page_map::fixtures::make_page, *};
    use crate::assert_eq2;

    #[test]
    fn test_dedupes_by_page() {
        let map = ApiPageToVersesMap::new(make_page(1, 1, 10));
        let mut deduper = VerseFetchDeduper::default();

        // Verses 10..20 all live on page 2.
        let requested: Vec<Option<usize>> = (10..20)
            .map(|verse_idx| deduper.should_fetch_verse(verse_idx, 10, &map).unwrap())
            .collect();
        assert_eq2!(requested[0], Some(2));
        assert!(requested[1..].iter().all(Option::is_none));
        assert!(deduper.is_in_flight(2));
    }

    #[test]
    fn test_loaded_page_is_never_fetched() {
        let map = ApiPageToVersesMap::new(make_page(1, 1, 10));
        let mut deduper = VerseFetchDeduper::default();
        assert_eq2!(deduper.should_fetch_verse(3, 10, &map).unwrap(), None);
        assert!(!deduper.is_in_flight(1));
    }

    #[test]
    fn test_failed_fetch_can_retry() {
        let map = ApiPageToVersesMap::new(vec![]);
        let mut deduper = VerseFetchDeduper::default();
        assert!(deduper.should_fetch(4, &map));
        deduper.fail(4);
        assert!(deduper.should_fetch(4, &map));
    }

    #[test]
    fn test_complete_stores_page() {
        let mut map = ApiPageToVersesMap::new(make_page(1, 1, 10));
        let mut deduper = VerseFetchDeduper::default();
        assert!(deduper.should_fetch(2, &map));
        deduper.complete(2, make_page(1, 11, 20), &mut map);
        assert!(!deduper.is_in_flight(2));
        assert!(!deduper.should_fetch(2, &map));
        assert_eq2!(map.verses().count(), 20);
    }

    #[test]
    fn test_zero_per_page_is_error() {
        let map = ApiPageToVersesMap::default();
        let mut deduper = VerseFetchDeduper::default();
        assert!(deduper.should_fetch_verse(1, 0, &map).is_err());
    }
}
