//! Acronyms for identifiers: `"RoadSystem"`, `"road_system"`, `"road-system"`
//! and `"road system"` all shorten to `"RS"`.

use crate::config::WORD_DELIMITERS;

/// Splits `phrase` into words.
///
/// If the phrase contains any of [`WORD_DELIMITERS`] it is split on those and
/// empty segments are dropped. Otherwise it is read as camel case: a word
/// starts at position 0 and at every uppercase letter that directly follows a
/// lowercase one.
pub fn split_words(phrase: &str) -> Vec<&str> {
    if phrase.contains(&WORD_DELIMITERS[..]) {
        return phrase
            .split(&WORD_DELIMITERS[..])
            .filter(|word| !word.is_empty())
            .collect();
    }

    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in phrase.char_indices() {
        if c.is_uppercase() && prev.is_some_and(char::is_lowercase) {
            words.push(&phrase[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    if start < phrase.len() {
        words.push(&phrase[start..]);
    }
    words
}

/// Returns the uppercased first character of every word in `phrase`.
pub fn get_initials(phrase: &str) -> String {
    split_words(phrase)
        .into_iter()
        .filter_map(|word| word.chars().next())
        .map(uppercase_initial)
        .collect()
}

/// Single-char uppercase mapping. Chars that expand (`'ß'` -> `"SS"`) are kept
/// as they are so every word yields exactly one char.
fn uppercase_initial(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
