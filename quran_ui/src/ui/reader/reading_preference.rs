// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How the user wants to read.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReadingPreference {
    #[default]
    Translation,
    Reading,
    Quiz,
}

/// The verse list view that renders a [`ReadingPreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderViewKind {
    TranslationView,
    ReadingView,
    QuizView,
}

impl ReaderViewKind {
    #[must_use]
    pub fn for_preference(reading_preference: ReadingPreference) -> Self {
        match reading_preference {
            ReadingPreference::Reading => ReaderViewKind::ReadingView,
            ReadingPreference::Quiz => ReaderViewKind::QuizView,
            ReadingPreference::Translation => ReaderViewKind::TranslationView,
        }
    }
}

/// What the reader page is made of: the preference switcher always sits above the
/// selected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderLayout {
    pub show_preference_switcher: bool,
    pub view: ReaderViewKind,
}

impl ReaderLayout {
    #[must_use]
    pub fn new(reading_preference: ReadingPreference) -> Self {
        Self {
            show_preference_switcher: true,
            view: ReaderViewKind::for_preference(reading_preference),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(ReadingPreference::Translation, ReaderViewKind::TranslationView)]
    #[test_case(ReadingPreference::Reading, ReaderViewKind::ReadingView)]
    #[test_case(ReadingPreference::Quiz, ReaderViewKind::QuizView)]
    fn test_view_for_preference(pref: ReadingPreference, expected: ReaderViewKind) {
        assert_eq2!(ReaderLayout::new(pref).view, expected);
    }

    #[test]
    fn test_switcher_always_shown() {
        for pref in ReadingPreference::iter() {
            assert!(ReaderLayout::new(pref).show_preference_switcher);
        }
    }

    #[test]
    fn test_string_forms() {
        assert_eq2!(ReadingPreference::Quiz.to_string(), "quiz");
        assert_eq2!(
            "reading".parse::<ReadingPreference>().unwrap(),
            ReadingPreference::Reading
        );
        assert_eq2!(
            serde_json::to_string(&ReadingPreference::Translation).unwrap(),
            r#""translation""#
        );
    }
}
