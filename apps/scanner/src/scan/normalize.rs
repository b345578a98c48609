//! Text normalizer: the first pipeline stage. Lowercases, strips everything
//! outside `[a-zA-Z0-9\s]`, tokenizes on whitespace, then drops stop words,
//! tokens containing digits, and tokens the corpus does not recognize as
//! English dictionary words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::Corpus;

static STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid strip pattern"));

/// Normalizes raw document text into a filtered, ordered token sequence.
/// Empty or unusable input yields an empty sequence, never an error.
pub fn normalize(text: &str, corpus: &Corpus) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = STRIP_PATTERN.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| !corpus.is_stopword(token))
        .filter(|token| !token.chars().any(|c| c.is_ascii_digit()))
        .filter(|token| corpus.is_dictionary_word(token))
        .map(str::to_string)
        .collect()
}
