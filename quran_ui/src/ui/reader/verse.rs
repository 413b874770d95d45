// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Verse data as delivered by the verses API. Only the fields the reader logic looks at
//! are modeled; everything else in the response is ignored on deserialization.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};

use crate::{CommonError, CommonErrorType, CommonResult};

/// `chapter:verse`, eg: `2:255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    #[must_use]
    pub fn new(chapter: u16, verse: u16) -> Self { Self { chapter, verse } }
}

impl Display for VerseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = miette::Report;

    fn from_str(s: &str) -> CommonResult<Self> {
        let parse_part = |part: Option<&str>| part.and_then(|it| it.trim().parse::<u16>().ok());
        let mut parts = s.split(':');
        match (parse_part(parts.next()), parse_part(parts.next()), parts.next()) {
            (Some(chapter), Some(verse), None) => Ok(Self { chapter, verse }),
            _ => CommonError::new_error_result(
                CommonErrorType::ParsingError,
                &format!("Invalid verse key: {s:?}, expected `chapter:verse`"),
            ),
        }
    }
}

impl TryFrom<String> for VerseKey {
    type Error = miette::Report;

    fn try_from(value: String) -> CommonResult<Self> { value.parse() }
}

impl From<VerseKey> for String {
    fn from(value: VerseKey) -> Self { value.to_string() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: u64,
    /// Glyph codes or text, depending on the font the verse was fetched for.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub resource_id: u64,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: u64,
    pub verse_key: VerseKey,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(StrumDisplay, EnumString)]
pub enum QuranFont {
    #[default]
    #[serde(rename = "code_v1")]
    #[strum(serialize = "code_v1")]
    MadaniV1,
    #[serde(rename = "code_v2")]
    #[strum(serialize = "code_v2")]
    MadaniV2,
    #[serde(rename = "text_uthmani")]
    #[strum(serialize = "text_uthmani")]
    Uthmani,
    #[serde(rename = "text_indopak")]
    #[strum(serialize = "text_indopak")]
    IndoPak,
    #[serde(rename = "qpc_uthmani_hafs")]
    #[strum(serialize = "qpc_uthmani_hafs")]
    QpcHafs,
    #[serde(rename = "tajweed")]
    #[strum(serialize = "tajweed")]
    Tajweed,
}

/// Styles held in the reader's state container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuranReaderStyles {
    pub quran_font: QuranFont,
    pub quran_text_font_scale: u8,
    pub translation_font_scale: u8,
    /// Only meaningful for the IndoPak font (15 or 16 line mushafs).
    pub mushaf_lines: Option<u8>,
}

impl Default for QuranReaderStyles {
    fn default() -> Self {
        Self {
            quran_font: QuranFont::default(),
            quran_text_font_scale: 3,
            translation_font_scale: 3,
            mushaf_lines: None,
        }
    }
}

impl QuranReaderStyles {
    #[must_use]
    pub fn is_tajweed_font(&self) -> bool { self.quran_font == QuranFont::Tajweed }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_verse_key_round_trip_through_display() {
        let key: VerseKey = "2:255".parse().unwrap();
        assert_eq2!(key, VerseKey::new(2, 255));
        assert_eq2!(key.to_string(), "2:255");
    }

    #[test_case("" ; "empty")]
    #[test_case("2" ; "no separator")]
    #[test_case("2:" ; "missing verse")]
    #[test_case("a:1" ; "non numeric chapter")]
    #[test_case("1:2:3" ; "too many parts")]
    fn test_verse_key_rejects(input: &str) {
        assert!(input.parse::<VerseKey>().is_err());
    }

    #[test]
    fn test_verse_deserializes_from_api_shape() {
        let json = r#"{
            "id": 262,
            "verseKey": "2:255",
            "words": [{ "id": 1, "text": "ﭑ" }],
            "translations": [{ "resourceId": 131, "text": "Allah" }],
            "juzNumber": 3
        }"#;
        let verse: Verse = serde_json::from_str(json).unwrap();
        assert_eq2!(verse.verse_key, VerseKey::new(2, 255));
        assert_eq2!(verse.words.len(), 1);
        assert_eq2!(verse.translations[0].resource_id, 131);
    }

    #[test]
    fn test_quran_font_string_forms() {
        assert_eq2!(QuranFont::Tajweed.to_string(), "tajweed");
        assert_eq2!("code_v2".parse::<QuranFont>().unwrap(), QuranFont::MadaniV2);
        let styles: QuranReaderStyles =
            serde_json::from_str(r#"{ "quranFont": "text_indopak", "mushafLines": 16 }"#)
                .unwrap();
        assert_eq2!(styles.quran_font, QuranFont::IndoPak);
        assert_eq2!(styles.mushaf_lines, Some(16));
        assert_eq2!(styles.quran_text_font_scale, 3);
    }
}
