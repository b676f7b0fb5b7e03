#![doc = include_str!("../README.md")]

mod language;
pub mod romaji;
mod sentence_lists;

use std::sync::LazyLock;

pub use language::Language;
pub use sentence_lists::{
    CatalogError, Sentence, SentenceList, SentenceListIter,
};

macro_rules! sentence_list {
    (ident: $ident:ident, path: $path:literal $(,)?) => {
        /// The built-in
        #[doc = ::std::stringify!($ident)]
        /// sentence list.
        ///
        /// Compiled into the binary as TOML, parsed on first access.
        pub static $ident: ::std::sync::LazyLock<$crate::SentenceList> =
            ::std::sync::LazyLock::new(|| {
                let list = $crate::SentenceList::parse(::std::include_str!(
                    $path
                ))
                .unwrap_or_else(|err| {
                    ::std::panic!(
                        "failed to parse {}: {err:?}",
                        ::std::stringify!($ident),
                    );
                });
                ::log::debug!(
                    "loaded {} sentences for {}",
                    list.len(),
                    ::std::stringify!($ident),
                );
                list
            });
    };
}

sentence_list! {
    ident: ENGLISH,
    path: "../data/en.toml",
}
sentence_list! {
    ident: ITALIAN,
    path: "../data/it.toml",
}
sentence_list! {
    ident: JAPANESE,
    path: "../data/ja.toml",
}

/// Every built-in sentence list, in [`Language::ALL`] order.
pub static ALL_SENTENCE_LISTS: [&LazyLock<SentenceList>; 3] =
    [&ENGLISH, &ITALIAN, &JAPANESE];

/// Look up the built-in sentences for a language code.
///
/// Codes are matched as described on [`Language`]'s [`FromStr`] impl.
/// There is no fallback language: an unrecognised code is an error.
///
/// [`FromStr`]: std::str::FromStr
#[allow(clippy::result_large_err)]
pub fn get(code: &str) -> Result<&'static SentenceList, CatalogError> {
    code.parse::<Language>().map(Language::sentences)
}
