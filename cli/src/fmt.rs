use std::fmt;

use sample_sentences::{Sentence, SentenceList};

#[derive(Debug, Copy, Clone)]
pub struct ListFormatter<'a> {
    list: &'a SentenceList,
    view: View,
}

impl fmt::Display for ListFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ListFormatter { list, view } = *self;
        // Little bit of extra work as the formatter shouldn't leave a
        // trailing newline
        let last = list.len().saturating_sub(1);
        list.sentences().iter().enumerate().try_for_each(
            |(index, sentence)| {
                let line = view.pick(sentence);
                if index != last {
                    writeln!(f, "{index:>2}  {line}")
                } else {
                    write!(f, "{index:>2}  {line}")
                }
            },
        )
    }
}

/// Which spelling of each sentence to print.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Text,
    Reading,
}

impl View {
    pub const fn from_flag(reading: bool) -> Self {
        if reading { View::Reading } else { View::Text }
    }

    /// The spelling of `sentence` to show. Sentences without a reading always
    /// show their text.
    pub fn pick(self, sentence: &Sentence) -> &str {
        match self {
            View::Text => sentence.text(),
            View::Reading => sentence.reading().unwrap_or(sentence.text()),
        }
    }
}

pub trait FormatList<'a> {
    fn format(&'a self, view: View) -> ListFormatter<'a>;
}

impl<'a> FormatList<'a> for SentenceList {
    fn format(&'a self, view: View) -> ListFormatter<'a> {
        ListFormatter { list: self, view }
    }
}
