//! Word extraction from the free-text form fields.

/// Common words never used as concept words, compared case-insensitively.
pub const STOP_WORDS: [&str; 8] = ["and", "the", "with", "for", "that", "this", "from", "have"];

/// Upper bound on concept words kept from the concept text.
pub const MAX_CONCEPT_WORDS: usize = 3;

/// Words shorter than this many characters are never concept words.
const MIN_CONCEPT_WORD_CHARS: usize = 3;

/// Significant words of the concept text, in order.
///
/// U+FEFF counts as a separator alongside Unicode whitespace.
pub fn concept_words(text: &str) -> Vec<&str> {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .filter(|word| word.chars().count() >= MIN_CONCEPT_WORD_CHARS)
        .filter(|word| !is_stop_word(word))
        .take(MAX_CONCEPT_WORDS)
        .collect()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Comma-separated keywords, trimmed, without empty entries.
pub fn keyword_list(text: &str) -> Vec<&str> {
    text.split(',')
        .map(|keyword| keyword.trim_matches(is_word_separator))
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The first `count` characters of `word`, or all of it when shorter.
pub fn leading_chars(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}
