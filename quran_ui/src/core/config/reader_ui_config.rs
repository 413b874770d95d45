// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User facing knobs, loaded from JSON. Every field has a default, so a partial (or
//! empty) file is fine:
//!
//! ```json
//! {
//!   "pagination": { "pageSize": 10, "siblingsCount": 2, "showSummary": false },
//!   "quiz": { "increaseViewportByPixels": 1500 },
//!   "readingPreference": "quiz",
//!   "styles": { "quranFont": "text_uthmani" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CommonResult, DEFAULT_PAGE_SIZE, DEFAULT_SIBLINGS_COUNT,
            INCREASE_VIEWPORT_BY_PIXELS, INITIAL_ITEM_COUNT, PaginationRequest,
            QuranReaderStyles, ReaderUiError, ReadingPreference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub siblings_count: usize,
    pub show_summary: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            siblings_count: DEFAULT_SIBLINGS_COUNT,
            show_summary: true,
        }
    }
}

impl PaginationConfig {
    #[must_use]
    pub fn request(&self, total_count: usize, current_page: usize) -> PaginationRequest {
        PaginationRequest {
            total_count,
            page_size: self.page_size,
            current_page,
            siblings_count: self.siblings_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizViewConfig {
    pub increase_viewport_by_pixels: u32,
    pub initial_item_count: usize,
}

impl Default for QuizViewConfig {
    fn default() -> Self {
        Self {
            increase_viewport_by_pixels: INCREASE_VIEWPORT_BY_PIXELS,
            initial_item_count: INITIAL_ITEM_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderUiConfig {
    pub pagination: PaginationConfig,
    pub quiz: QuizViewConfig,
    pub reading_preference: ReadingPreference,
    pub styles: QuranReaderStyles,
}

impl ReaderUiConfig {
    /// # Errors
    ///
    /// Returns [`ReaderUiError::ConfigParse`] for malformed JSON, or
    /// [`ReaderUiError::InvalidPageSize`] if the page size is 0.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|source| ReaderUiError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ReaderUiError::ConfigIo`] if the file can't be read, otherwise the same
    /// errors as [`ReaderUiConfig::try_from_json_str`].
    pub fn try_load_from_path(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReaderUiError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(message = "Loaded reader config", path = %path.display());
        Self::try_from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns [`ReaderUiError::InvalidPageSize`] if the page size is 0.
    pub fn validate(&self) -> CommonResult<()> {
        if self.pagination.page_size == 0 {
            return Err(ReaderUiError::InvalidPageSize.into());
        }
        Ok(())
    }
}
