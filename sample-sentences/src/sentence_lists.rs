use std::{
    fs, io,
    ops::Index,
    path::{Path, PathBuf},
    slice,
};

use serde::Deserialize;
use thiserror::Error;

use crate::Language;

#[derive(Debug, Clone)]
pub(crate) struct SentenceListMetadata {
    pub(crate) name: String,
    language: Option<Language>,
    script: Option<String>,
}

impl SentenceListMetadata {
    fn new_from_name(name: impl Into<String>) -> Self {
        SentenceListMetadata {
            name: name.into(),
            language: None,
            script: None,
        }
    }
}

/// One example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sentence {
    text: String,
    #[serde(default)]
    reading: Option<String>,
}

impl Sentence {
    /// Create a sentence with no separate reading.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Sentence {
            text: text.into(),
            reading: None,
        }
    }

    /// Create a sentence along with its phonetic spelling.
    #[must_use]
    pub fn with_reading(
        text: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        Sentence {
            text: text.into(),
            reading: Some(reading.into()),
        }
    }

    /// The sentence in its canonical script.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The phonetic spelling of the sentence (kana for Japanese), if it has
    /// one distinct from [`Sentence::text`].
    #[inline]
    #[must_use]
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Sentence::new(text)
    }
}

impl From<String> for Sentence {
    fn from(text: String) -> Self {
        Sentence::new(text)
    }
}

// On-disk layout: metadata keys at the top level, then [[sentences]] tables
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SentenceListFile {
    name: String,
    language: Option<Language>,
    script: Option<String>,
    sentences: Vec<Sentence>,
}

/// An ordered list of sentences, with optional additional metadata.
#[derive(Debug, Clone)]
pub struct SentenceList {
    sentences: Vec<Sentence>,
    metadata: SentenceListMetadata,
}

impl SentenceList {
    /// Load a sentence list from a TOML file.
    ///
    /// A fully specified file may look like this:
    /// ```toml
    /// name = "ja"
    /// language = "ja"
    /// script = "Jpan"
    ///
    /// [[sentences]]
    /// text = "関数を確認させてください。"
    /// reading = "かんすうをかくにんさせてください。"
    /// ```
    ///
    /// Only `name` and `text` are required. Lists with no sentences, or with
    /// a sentence whose text is empty, are rejected.
    #[allow(clippy::result_large_err)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|io_err| {
            CatalogError::FailedToRead(path.to_owned(), io_err)
        })?;
        let list = SentenceList::parse(&content).map_err(|err| match err {
            ParseError::Toml(toml_err) => {
                CatalogError::Parse(path.to_owned(), toml_err)
            },
            ParseError::Empty(name) => CatalogError::EmptyList(name),
        })?;
        log::debug!(
            "loaded {} sentences for {} from {}",
            list.len(),
            list.name(),
            path.display(),
        );
        Ok(list)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, ParseError> {
        let SentenceListFile {
            name,
            language,
            script,
            sentences,
        } = toml::from_str(content).map_err(ParseError::Toml)?;
        if sentences.is_empty()
            || sentences.iter().any(|sentence| sentence.text.is_empty())
        {
            return Err(ParseError::Empty(name));
        }
        Ok(SentenceList {
            sentences,
            metadata: SentenceListMetadata {
                name,
                language,
                script,
            },
        })
    }

    /// Create a new sentence list from an iterable.
    ///
    /// Metadata is unspecified. Unlike [`SentenceList::load`], the sentences
    /// are taken as given: an empty list, or empty sentence text, is kept.
    pub fn define(
        name: impl Into<String>,
        sentences: impl IntoIterator<Item = impl Into<Sentence>>,
    ) -> Self {
        SentenceList {
            metadata: SentenceListMetadata::new_from_name(name),
            sentences: sentences.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the name of the sentence list.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Get the language of the sentence list, if known.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Option<Language> {
        self.metadata.language
    }

    /// Get the script of the sentence list as an ISO 15924 code, if known.
    #[inline]
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.metadata.script.as_deref()
    }

    /// Iterate through the sentences' text, in order.
    pub fn iter(&self) -> SentenceListIter<'_> {
        SentenceListIter(self.sentences.iter())
    }

    /// Iterate through the sentences' readings, in order.
    ///
    /// Sentences without a reading yield their text instead.
    pub fn readings(&self) -> impl ExactSizeIterator<Item = &str> {
        self.sentences
            .iter()
            .map(|sentence| sentence.reading().unwrap_or(sentence.text()))
    }

    /// All sentences, including readings.
    #[inline]
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Get the text of the sentence at `index`, if there is one.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(Sentence::text)
    }

    /// Get how many sentences there are in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if there are no sentences in the list.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Index<usize> for SentenceList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.sentences[index].text()
    }
}

impl<'a> IntoIterator for &'a SentenceList {
    type IntoIter = SentenceListIter<'a>;
    type Item = &'a str;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the text of a [`SentenceList`].
///
/// Returned by [`SentenceList::iter`].
#[derive(Debug, Clone)]
pub struct SentenceListIter<'a>(slice::Iter<'a, Sentence>);

impl<'a> Iterator for SentenceListIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Sentence::text)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for SentenceListIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl DoubleEndedIterator for SentenceListIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Sentence::text)
    }
}

#[derive(Debug)]
pub(crate) enum ParseError {
    Toml(toml::de::Error),
    Empty(String),
}

/// An error looking up or loading a [`SentenceList`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The language code isn't one the catalog has sentences for.
    #[error("language not found: \"{0}\"")]
    UnknownLanguage(String),
    /// Unable to read the sentence list file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
    /// Unable to parse the sentence list file.
    #[error("failed to parse sentence list from {}: {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),
    /// The list had no sentences, or contained an empty one.
    #[error("sentence list {0} is empty or contains an empty sentence")]
    EmptyList(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_has_no_metadata() {
        let list = SentenceList::define("ad-hoc", ["one.", "two."]);
        assert_eq!(list.name(), "ad-hoc");
        assert_eq!(list.language(), None);
        assert_eq!(list.script(), None);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["one.", "two."]);
        assert_eq!(list.readings().collect::<Vec<_>>(), ["one.", "two."]);
    }

    #[test]
    fn define_keeps_empty_input() {
        let empty = SentenceList::define("empty", Vec::<&str>::new());
        assert!(empty.is_empty());
        assert_eq!(empty.iter().next(), None);

        let blank = SentenceList::define("blank", [""]);
        assert_eq!(blank.len(), 1);
        assert_eq!(blank.get(0), Some(""));
    }

    #[test]
    fn readings_fall_back_to_text() {
        let list = SentenceList::define("mixed", [
            Sentence::with_reading("今日", "きょう"),
            Sentence::new("あした"),
        ]);
        assert_eq!(list.readings().collect::<Vec<_>>(), ["きょう", "あした"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["今日", "あした"]);
    }

    #[test]
    fn iterates_both_ends() {
        let list = SentenceList::define("abc", ["a", "b", "c"]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn parse_reads_metadata() {
        let list = SentenceList::parse(
            r#"
            name = "short"
            language = "it"
            script = "Latn"

            [[sentences]]
            text = "Ciao."
            "#,
        )
        .unwrap();
        assert_eq!(list.name(), "short");
        assert_eq!(list.language(), Some(Language::Italian));
        assert_eq!(list.script(), Some("Latn"));
        assert_eq!(list.get(0), Some("Ciao."));
        assert_eq!(list.get(1), None);
    }

    #[test]
    fn parse_rejects_empty_sentences() {
        let no_sentences = SentenceList::parse(
            r#"
            name = "nothing"
            sentences = []
            "#,
        );
        assert!(matches!(
            no_sentences,
            Err(ParseError::Empty(name)) if name == "nothing",
        ));

        let blank = SentenceList::parse(
            r#"
            name = "blank"

            [[sentences]]
            text = ""
            "#,
        );
        assert!(matches!(
            blank,
            Err(ParseError::Empty(name)) if name == "blank",
        ));
    }

    #[test]
    fn parse_rejects_unknown_language() {
        let result = SentenceList::parse(
            r#"
            name = "french"
            language = "fr"

            [[sentences]]
            text = "Bonjour."
            "#,
        );
        assert!(matches!(result, Err(ParseError::Toml(_))));
    }
}
