//! Romaji to hiragana normalisation for Japanese autocomplete prefixes.
//!
//! Only the leading syllable of the input is converted: `"kak"` becomes
//! `"かk"`. This is enough to look a prefix up in a kana word index while the
//! user is still typing.

use std::{borrow::Cow, cmp, sync::LazyLock};

#[rustfmt::skip]
const TABLE: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("sa", "さ"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("ta", "た"), ("chi", "ち"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"), ("n", "ん"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("za", "ざ"), ("ji", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    // Small tsu
    ("tta", "った"), ("tte", "って"), ("tto", "っと"),
    // Long vowels
    ("aa", "ああ"), ("ii", "いい"), ("uu", "うう"), ("ee", "ええ"),
    ("oo", "おお"),
];

// Longest first, so the first prefix hit is the longest match
static BY_LENGTH: LazyLock<Vec<(&str, &str)>> = LazyLock::new(|| {
    let mut table = TABLE.to_vec();
    table.sort_by_key(|(romaji, _)| cmp::Reverse(romaji.len()));
    table
});

/// Convert the leading romaji syllable of `input` to hiragana.
///
/// The input is lowercased and trimmed, then the longest syllable it starts
/// with is replaced and the remainder is kept as-is. If no syllable matches,
/// `input` is returned untouched.
///
/// ```
/// use sample_sentences::romaji::romaji_to_hiragana;
///
/// assert_eq!(romaji_to_hiragana("shi"), "し");
/// assert_eq!(romaji_to_hiragana("Kak"), "かk");
/// assert_eq!(romaji_to_hiragana("xyz"), "xyz");
/// ```
#[must_use]
pub fn romaji_to_hiragana(input: &str) -> Cow<'_, str> {
    if input.is_empty() {
        return Cow::Borrowed(input);
    }

    let lowered = input.trim().to_lowercase();
    let Some((romaji, kana)) = BY_LENGTH
        .iter()
        .find(|(romaji, _)| lowered.starts_with(romaji))
    else {
        log::trace!("no romaji syllable at the start of {input:?}");
        return Cow::Borrowed(input);
    };

    let mut converted = String::with_capacity(kana.len() + lowered.len());
    converted.push_str(kana);
    converted.push_str(&lowered[romaji.len()..]);
    log::trace!("converted {input:?} to {converted:?}");
    Cow::Owned(converted)
}

/// Returns `true` if `text` is non-empty and looks like romaji: ASCII letters,
/// spaces, apostrophes and hyphens only.
#[must_use]
pub fn is_romaji(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '-')
        })
}

/// Normalise Japanese autocomplete input.
///
/// Romaji is converted with [`romaji_to_hiragana`], anything else (kana,
/// kanji, mixed input) is returned unchanged.
#[must_use]
pub fn normalize_japanese_input(text: &str) -> Cow<'_, str> {
    if is_romaji(text) {
        romaji_to_hiragana(text)
    } else {
        Cow::Borrowed(text)
    }
}
