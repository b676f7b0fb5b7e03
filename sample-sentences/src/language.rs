use std::{borrow::Cow, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{CatalogError, SentenceList, romaji};

/// A language with a built-in [`SentenceList`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// `en`
    English,
    /// `it`
    Italian,
    /// `ja`
    Japanese,
}

impl Language {
    /// Every language in the catalog, in catalog order.
    pub const ALL: [Language; 3] =
        [Language::English, Language::Italian, Language::Japanese];

    /// The language's code, as used to key the catalog.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
            Language::Japanese => "ja",
        }
    }

    /// The language's English name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
        }
    }

    /// The built-in sentences for this language.
    #[must_use]
    pub fn sentences(self) -> &'static SentenceList {
        let list = match self {
            Language::English => &crate::ENGLISH,
            Language::Italian => &crate::ITALIAN,
            Language::Japanese => &crate::JAPANESE,
        };
        LazyLock::force(list)
    }

    /// Normalise text typed as an autocomplete prefix in this language.
    ///
    /// Japanese input given in romaji is converted to hiragana (see
    /// [`romaji::normalize_japanese_input`]), everything else is passed
    /// through untouched.
    #[must_use]
    pub fn normalize_input(self, input: &str) -> Cow<'_, str> {
        match self {
            Language::Japanese => romaji::normalize_japanese_input(input),
            Language::English | Language::Italian => Cow::Borrowed(input),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a language code.
///
/// Surrounding whitespace is ignored and the comparison is ASCII
/// case-insensitive, so `" EN "` is [`Language::English`].
impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let trimmed = code.trim();
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownLanguage(code.to_owned()))
    }
}

impl TryFrom<String> for Language {
    type Error = CatalogError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}
