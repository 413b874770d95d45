// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{QuranReaderStyles, Verse, VerseKey, Word};

/// The part of the audio player's state that the quiz cells care about. The player
/// itself is external; this is a snapshot of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioPlaybackSnapshot {
    pub surah: u16,
    pub ayah_number: u16,
}

impl AudioPlaybackSnapshot {
    #[must_use]
    pub fn verse_key(&self) -> VerseKey { VerseKey::new(self.surah, self.ayah_number) }
}

/// Inputs that decide how one quiz cell behaves.
#[derive(Debug, Clone, Copy)]
pub struct QuizCellState<'a> {
    pub verse: &'a Verse,
    /// 0-based position of the verse in the list.
    pub verse_index: usize,
    pub playback: Option<AudioPlaybackSnapshot>,
    /// User setting: follow the recitation.
    pub enable_auto_scrolling: bool,
    /// Auto scrolling is suppressed while onboarding is running.
    pub is_onboarding_active: bool,
    /// 1-based `startingVerse` query param, if any.
    pub starting_verse: Option<usize>,
}

impl QuizCellState<'_> {
    /// The verse currently being recited.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.playback
            .is_some_and(|playback| playback.verse_key() == self.verse.verse_key)
    }

    #[must_use]
    pub fn should_auto_scroll(&self) -> bool {
        let follow_recitation =
            self.is_highlighted() && self.enable_auto_scrolling && !self.is_onboarding_active;
        let is_starting_verse = self
            .starting_verse
            .is_some_and(|starting_verse| Some(starting_verse) == self.verse_index.checked_add(1));
        follow_recitation || is_starting_verse
    }

    /// Only the first verse on the page is rendered as the page heading.
    #[must_use]
    pub fn should_show_h1_for_seo(&self) -> bool { self.verse_index == 0 }
}

/// Props a quiz cell re-renders on.
#[derive(Debug, Clone, Copy)]
pub struct QuizCellProps<'a> {
    pub verse: &'a Verse,
    pub styles: &'a QuranReaderStyles,
}

/// Memo comparator: a freshly fetched page hands cells new verse values, but the
/// rendered output only changes when one of these does.
#[must_use]
pub fn are_cells_equal(prev: &QuizCellProps<'_>, next: &QuizCellProps<'_>) -> bool {
    prev.verse.id == next.verse.id
        && !verse_font_changed(prev.styles, next.styles, &prev.verse.words, &next.verse.words)
        && !verse_translation_changed(prev.verse, next.verse)
        && !verse_translation_font_changed(prev.styles, next.styles)
}

/// The Quran font (or its mushaf line layout) changed, or the words arrived in a
/// different encoding.
#[must_use]
pub fn verse_font_changed(
    prev_styles: &QuranReaderStyles,
    next_styles: &QuranReaderStyles,
    prev_words: &[Word],
    next_words: &[Word],
) -> bool {
    prev_styles.quran_font != next_styles.quran_font
        || prev_styles.mushaf_lines != next_styles.mushaf_lines
        || prev_words.len() != next_words.len()
        || prev_words.first().map(|it| &it.text) != next_words.first().map(|it| &it.text)
}

#[must_use]
pub fn verse_translation_changed(prev: &Verse, next: &Verse) -> bool {
    prev.translations.len() != next.translations.len()
        || prev
            .translations
            .iter()
            .zip(&next.translations)
            .any(|(lhs, rhs)| lhs.resource_id != rhs.resource_id)
}

#[must_use]
pub fn verse_translation_font_changed(
    prev_styles: &QuranReaderStyles,
    next_styles: &QuranReaderStyles,
) -> bool {
    prev_styles.translation_font_scale != next_styles.translation_font_scale
}

/// The loading skeleton borrows the verse font class so it has the same height, except
/// for tajweed which has no font class.
#[must_use]
pub fn skeleton_uses_font_class(styles: &QuranReaderStyles) -> bool {
    !styles.is_tajweed_font()
}

#[cfg(test)]
mod tests {
    use super::{super::api_page_map::fixtures::make_verse, *};
    use crate::{QuranFont, Translation};

    fn cell(verse: &Verse, verse_index: usize) -> QuizCellState<'_> {
        QuizCellState {
            verse,
            verse_index,
            playback: None,
            enable_auto_scrolling: true,
            is_onboarding_active: false,
            starting_verse: None,
        }
    }

    #[test]
    fn test_highlight_follows_playback() {
        let verse = make_verse(2, 255);
        let mut state = cell(&verse, 254);
        assert!(!state.is_highlighted());

        state.playback = Some(AudioPlaybackSnapshot {
            surah: 2,
            ayah_number: 255,
        });
        assert!(state.is_highlighted());
        assert!(state.should_auto_scroll());

        state.playback = Some(AudioPlaybackSnapshot {
            surah: 3,
            ayah_number: 255,
        });
        assert!(!state.is_highlighted());
    }

    #[test]
    fn test_auto_scroll_suppressed() {
        let verse = make_verse(1, 1);
        let mut state = cell(&verse, 0);
        state.playback = Some(AudioPlaybackSnapshot {
            surah: 1,
            ayah_number: 1,
        });

        state.is_onboarding_active = true;
        assert!(!state.should_auto_scroll());

        state.is_onboarding_active = false;
        state.enable_auto_scrolling = false;
        assert!(!state.should_auto_scroll());
    }

    #[test]
    fn test_starting_verse_scrolls_regardless() {
        let verse = make_verse(1, 4);
        let mut state = cell(&verse, 3);
        state.enable_auto_scrolling = false;
        state.starting_verse = Some(4);
        assert!(state.should_auto_scroll());
        state.starting_verse = Some(5);
        assert!(!state.should_auto_scroll());
    }

    #[test]
    fn test_h1_only_for_first() {
        let verse = make_verse(1, 1);
        assert!(cell(&verse, 0).should_show_h1_for_seo());
        assert!(!cell(&verse, 1).should_show_h1_for_seo());
    }

    #[test]
    fn test_cells_equal_for_refetched_verse() {
        let styles = QuranReaderStyles::default();
        let prev = make_verse(1, 1);
        let next = prev.clone();
        assert!(are_cells_equal(
            &QuizCellProps { verse: &prev, styles: &styles },
            &QuizCellProps { verse: &next, styles: &styles },
        ));
    }

    #[test]
    fn test_cells_differ_on_font_or_translation() {
        let styles = QuranReaderStyles::default();
        let verse = make_verse(1, 1);
        let props = QuizCellProps { verse: &verse, styles: &styles };

        let other_font = QuranReaderStyles {
            quran_font: QuranFont::Uthmani,
            ..styles
        };
        assert!(!are_cells_equal(&props, &QuizCellProps { verse: &verse, styles: &other_font }));

        let bigger_translation = QuranReaderStyles {
            translation_font_scale: 5,
            ..styles
        };
        assert!(!are_cells_equal(
            &props,
            &QuizCellProps { verse: &verse, styles: &bigger_translation }
        ));

        let mut translated = verse.clone();
        translated.translations.push(Translation {
            resource_id: 131,
            text: String::new(),
        });
        assert!(!are_cells_equal(&props, &QuizCellProps { verse: &translated, styles: &styles }));

        let other_verse = make_verse(1, 2);
        assert!(!are_cells_equal(&props, &QuizCellProps { verse: &other_verse, styles: &styles }));
    }

    #[test]
    fn test_quran_text_scale_alone_keeps_cell() {
        let styles = QuranReaderStyles::default();
        let bigger_text = QuranReaderStyles {
            quran_text_font_scale: 7,
            ..styles
        };
        let verse = make_verse(1, 1);
        assert!(are_cells_equal(
            &QuizCellProps { verse: &verse, styles: &styles },
            &QuizCellProps { verse: &verse, styles: &bigger_text },
        ));
    }

    #[test]
    fn test_skeleton_font_class() {
        let tajweed = QuranReaderStyles {
            quran_font: QuranFont::Tajweed,
            ..QuranReaderStyles::default()
        };
        assert!(!skeleton_uses_font_class(&tajweed));
        assert!(skeleton_uses_font_class(&QuranReaderStyles::default()));
    }
}
