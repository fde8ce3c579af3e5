//! Text helpers for Japanese input and Anki field output.

use crate::error::TextError;
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::RangeInclusive;

/// Code point ranges treated as kanji: CJK Extension A, CJK Unified Ideographs
/// (up to U+9FCB) and CJK Compatibility Ideographs (up to U+FA6A).
const KANJI_RANGES: [RangeInclusive<u32>; 3] = [
    0x3400..=0x4DB5,
    0x4E00..=0x9FCB,
    0xF900..=0xFA6A,
];

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// ```
/// use jisho_anki::text::uniqify;
///
/// assert_eq!(uniqify(vec![1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniqify<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns true if the character is a kanji.
pub fn is_kanji(c: char) -> bool {
    let cp = c as u32;
    KANJI_RANGES.iter().any(|range| range.contains(&cp))
}

/// Returns the only character of `text`.
///
/// Fails with [`TextError::InvalidArgument`] if `text` is empty or holds more
/// than one character.
pub fn single_char(text: &str) -> Result<char, TextError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(TextError::InvalidArgument(
            "expected a single character, got an empty string".to_string(),
        )),
        (Some(_), Some(_)) => Err(TextError::InvalidArgument(format!(
            "expected a single character, got {:?}",
            text
        ))),
    }
}

/// String form of [`is_kanji`] for callers holding text rather than a `char`.
pub fn is_kanji_str(text: &str) -> Result<bool, TextError> {
    single_char(text).map(is_kanji)
}

/// Collects the unique kanji of `word` in order of first occurrence.
pub fn kanji_from_word(word: &str) -> Vec<char> {
    uniqify(word.chars().filter(|c| is_kanji(*c)))
}

/// Joins items into a multi-line Anki field with no trailing newline.
pub fn join_field<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}
