// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ApiPageToVersesMap, VerseLocation};
use crate::{CommonResult, Verse};

/// Render this many extra pixels above and below the visible window, so verses are
/// already laid out when they scroll in.
pub const INCREASE_VIEWPORT_BY_PIXELS: u32 = 1_000;

/// Items rendered before the list has measured anything (server side render).
pub const INITIAL_ITEM_COUNT: usize = 1;

/// What lives at a list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizItem {
    /// 0-based verse index within the resource (chapter, juz, page, ...).
    Verse(usize),
    /// The trailing item with "next chapter" style controls.
    EndOfScrollingControls,
}

/// Item indexing for the virtualized quiz list: one item per verse, then one for the
/// end of scrolling controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizListModel {
    pub number_of_verses: usize,
}

impl QuizListModel {
    #[must_use]
    pub fn new(number_of_verses: usize) -> Self { Self { number_of_verses } }

    #[must_use]
    pub fn total_item_count(&self) -> usize { self.number_of_verses.saturating_add(1) }

    #[must_use]
    pub fn item_at(&self, item_idx: usize) -> Option<QuizItem> {
        match item_idx {
            it if it < self.number_of_verses => Some(QuizItem::Verse(it)),
            it if it == self.number_of_verses => Some(QuizItem::EndOfScrollingControls),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_last_verse_in_view(&self, verse_idx: usize) -> bool {
        is_last_verse_in_view(verse_idx, self.number_of_verses)
    }
}

#[must_use]
pub fn is_last_verse_in_view(verse_idx: usize, total_verses: usize) -> bool {
    verse_idx.checked_add(1) == Some(total_verses)
}

/// What a verse item renders right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizVerseSlot<'a> {
    /// The verse's API page hasn't arrived yet.
    Skeleton,
    Loaded {
        verse: &'a Verse,
        first_verse_in_page: Option<&'a Verse>,
        is_last_verse_in_view: bool,
    },
}

impl<'a> QuizVerseSlot<'a> {
    /// # Errors
    ///
    /// Returns [`crate::ReaderUiError::InvalidPageSize`] if `per_page` is 0.
    pub fn resolve(
        verse_idx: usize,
        per_page: usize,
        model: &QuizListModel,
        map: &'a ApiPageToVersesMap,
    ) -> CommonResult<Self> {
        let location = VerseLocation::try_new(verse_idx, per_page)?;
        Ok(match map.verse_at(location) {
            Some(verse) => QuizVerseSlot::Loaded {
                verse,
                first_verse_in_page: map.first_verse_in_page(location.api_page),
                is_last_verse_in_view: model.is_last_verse_in_view(verse_idx),
            },
            None => QuizVerseSlot::Skeleton,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{super::api_page_map::fixtures::make_page, *};
    use crate::{VerseKey, assert_eq2};

    #[test]
    fn test_items() {
        let model = QuizListModel::new(7);
        assert_eq2!(model.total_item_count(), 8);
        assert_eq2!(model.item_at(0), Some(QuizItem::Verse(0)));
        assert_eq2!(model.item_at(6), Some(QuizItem::Verse(6)));
        assert_eq2!(model.item_at(7), Some(QuizItem::EndOfScrollingControls));
        assert_eq2!(model.item_at(8), None);
    }

    #[test]
    fn test_empty_resource_only_has_controls() {
        let model = QuizListModel::new(0);
        assert_eq2!(model.total_item_count(), 1);
        assert_eq2!(model.item_at(0), Some(QuizItem::EndOfScrollingControls));
    }

    #[test]
    fn test_last_verse_in_view() {
        assert!(is_last_verse_in_view(6, 7));
        assert!(!is_last_verse_in_view(5, 7));
    }

    #[test]
    fn test_resolve_slot() {
        let model = QuizListModel::new(7);
        let map = ApiPageToVersesMap::new(make_page(1, 1, 5));

        match QuizVerseSlot::resolve(2, 5, &model, &map).unwrap() {
            QuizVerseSlot::Loaded {
                verse,
                first_verse_in_page,
                is_last_verse_in_view,
            } => {
                assert_eq2!(verse.verse_key, VerseKey::new(1, 3));
                assert_eq2!(first_verse_in_page.unwrap().verse_key, VerseKey::new(1, 1));
                assert!(!is_last_verse_in_view);
            }
            QuizVerseSlot::Skeleton => panic!("page 1 is loaded"),
        }

        assert_eq2!(
            QuizVerseSlot::resolve(6, 5, &model, &map).unwrap(),
            QuizVerseSlot::Skeleton
        );
    }
}
