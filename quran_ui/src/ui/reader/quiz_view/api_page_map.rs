// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeMap;

use crate::{CommonResult, ReaderUiError, Verse};

/// Where a verse index lands in the paged verses API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseLocation {
    /// 1-based API page number.
    pub api_page: usize,
    pub index_in_page: usize,
}

impl VerseLocation {
    /// # Errors
    ///
    /// Returns [`ReaderUiError::InvalidPageSize`] if `per_page` is 0.
    pub fn try_new(verse_idx: usize, per_page: usize) -> CommonResult<Self> {
        if per_page == 0 {
            return Err(ReaderUiError::InvalidPageSize.into());
        }
        Ok(Self {
            api_page: verse_idx / per_page + 1,
            index_in_page: verse_idx % per_page,
        })
    }
}

/// Verses fetched so far, keyed by API page number. Iteration is in page order, so the
/// flattened verses are in reading order regardless of the order pages arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiPageToVersesMap {
    pages: BTreeMap<usize, Vec<Verse>>,
}

impl ApiPageToVersesMap {
    /// Seeded with page 1 from the initial (server rendered) response.
    #[must_use]
    pub fn new(initial_verses: Vec<Verse>) -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(1, initial_verses);
        Self { pages }
    }

    /// Store a fetched page, replacing any previous copy of it.
    pub fn insert_page(&mut self, api_page: usize, verses: Vec<Verse>) -> Option<Vec<Verse>> {
        self.pages.insert(api_page, verses)
    }

    #[must_use]
    pub fn contains_page(&self, api_page: usize) -> bool { self.pages.contains_key(&api_page) }

    #[must_use]
    pub fn page_count(&self) -> usize { self.pages.len() }

    /// All loaded verses in reading order.
    pub fn verses(&self) -> impl Iterator<Item = &Verse> { self.pages.values().flatten() }

    #[must_use]
    pub fn last_verse(&self) -> Option<&Verse> {
        self.pages.values().rev().find_map(|verses| verses.last())
    }

    #[must_use]
    pub fn verse_at(&self, location: VerseLocation) -> Option<&Verse> {
        self.pages
            .get(&location.api_page)
            .and_then(|verses| verses.get(location.index_in_page))
    }

    #[must_use]
    pub fn first_verse_in_page(&self, api_page: usize) -> Option<&Verse> {
        self.pages.get(&api_page).and_then(|verses| verses.first())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{Verse, VerseKey, Word};

    pub fn make_verse(chapter: u16, verse: u16) -> Verse {
        Verse {
            id: u64::from(chapter) * 1_000 + u64::from(verse),
            verse_key: VerseKey::new(chapter, verse),
            words: vec![Word {
                id: 1,
                text: format!("w{verse}"),
            }],
            translations: vec![],
        }
    }

    /// Verses `start ..= end` of `chapter`.
    pub fn make_page(chapter: u16, start: u16, end: u16) -> Vec<Verse> {
        (start..=end).map(|verse| make_verse(chapter, verse)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::make_page, *};
    use crate::{VerseKey, assert_eq2};

    #[test]
    fn test_location() {
        assert_eq2!(
            VerseLocation::try_new(0, 10).unwrap(),
            VerseLocation {
                api_page: 1,
                index_in_page: 0
            }
        );
        assert_eq2!(
            VerseLocation::try_new(25, 10).unwrap(),
            VerseLocation {
                api_page: 3,
                index_in_page: 5
            }
        );
        assert!(VerseLocation::try_new(25, 0).is_err());
    }

    #[test]
    fn test_flattened_in_page_order() {
        let mut map = ApiPageToVersesMap::new(make_page(2, 1, 2));
        map.insert_page(3, make_page(2, 5, 6));
        map.insert_page(2, make_page(2, 3, 4));

        let keys: Vec<String> = map.verses().map(|it| it.verse_key.to_string()).collect();
        assert_eq2!(keys, vec!["2:1", "2:2", "2:3", "2:4", "2:5", "2:6"]);
        assert_eq2!(map.last_verse().unwrap().verse_key, VerseKey::new(2, 6));
        assert_eq2!(map.page_count(), 3);
    }

    #[test]
    fn test_verse_at_and_first_in_page() {
        let mut map = ApiPageToVersesMap::new(make_page(1, 1, 3));
        map.insert_page(2, make_page(1, 4, 6));

        let location = VerseLocation::try_new(4, 3).unwrap();
        assert_eq2!(map.verse_at(location).unwrap().verse_key, VerseKey::new(1, 5));
        assert_eq2!(
            map.first_verse_in_page(2).unwrap().verse_key,
            VerseKey::new(1, 4)
        );

        let not_loaded = VerseLocation::try_new(6, 3).unwrap();
        assert!(map.verse_at(not_loaded).is_none());
        assert!(!map.contains_page(3));
    }
}
