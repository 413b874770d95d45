// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Which of the URL query params override the user's saved settings. When any of them
/// does, the view shows a notice above the verses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParamDifferences {
    pub translations: bool,
    pub reciter: bool,
    pub word_by_word_locale: bool,
}

impl QueryParamDifferences {
    #[must_use]
    pub fn should_show_message(&self) -> bool {
        self.translations || self.reciter || self.word_by_word_locale
    }
}
