//! Vocabulary construction and bag-of-words frequency vectors.
//!
//! The vocabulary is fixed by the job description's skill tokens; resume
//! words outside it are invisible to scoring. Both documents are vectorized
//! over the same term ordering, so the two vectors always share dimension.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ScanError;

/// A vocabulary term is at least two word characters; one-character tokens
/// carry no lexical content and never become dimensions.
static VOCAB_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"));

/// The fixed set of distinct terms all frequency vectors are indexed by.
/// Terms are sorted, so vector ordering is deterministic per invocation.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

/// Integer occurrence counts over a vocabulary's term ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyVector {
    counts: Vec<u32>,
}

impl Vocabulary {
    /// Builds the vocabulary from the skill-token sequence. The tokens are
    /// joined into one whitespace-separated string and re-tokenized under
    /// the vocabulary term rule, matching how both documents are counted.
    ///
    /// An empty or contentless skill sequence is an error: a zero-term
    /// vocabulary cannot index anything.
    pub fn from_skill_tokens(skills: &[String]) -> Result<Vocabulary, ScanError> {
        let joined = skills.join(" ");
        let mut terms: Vec<String> = VOCAB_TOKEN
            .find_iter(&joined)
            .map(|m| m.as_str().to_string())
            .collect();
        terms.sort();
        terms.dedup();

        if terms.is_empty() {
            return Err(ScanError::EmptyVocabulary);
        }

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Ok(Vocabulary { terms, index })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in vector-index order (sorted).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Counts the document's occurrences of each vocabulary term. Document
    /// tokens outside the vocabulary are ignored.
    pub fn vectorize(&self, tokens: &[String]) -> FrequencyVector {
        let mut counts = vec![0u32; self.terms.len()];
        let joined = tokens.join(" ");
        for m in VOCAB_TOKEN.find_iter(&joined) {
            if let Some(&i) = self.index.get(m.as_str()) {
                counts[i] += 1;
            }
        }
        FrequencyVector { counts }
    }
}

impl FrequencyVector {
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn is_all_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    #[cfg(test)]
    pub fn from_counts(counts: Vec<u32>) -> FrequencyVector {
        FrequencyVector { counts }
    }
}
