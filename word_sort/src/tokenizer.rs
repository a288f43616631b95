use std::str;

/// Splits `input` into maximal runs of ASCII letters.
///
/// Every other byte separates words, so the input need not be valid UTF-8
/// and the yielded slices are never empty.
pub fn words(input: &[u8]) -> impl Iterator<Item = &str> + '_ {
    input
        .split(|b| !b.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        // ASCII letters are always valid UTF-8
        .filter_map(|word| str::from_utf8(word).ok())
}
