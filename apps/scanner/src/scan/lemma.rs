//! Lemmatizer: reduces each token to a canonical base form.
//!
//! Reduction is always attempted through the verb morphology first, matching
//! the scoring behavior downstream stages were tuned against: a plural noun
//! only collapses to its singular when the singular happens to carry a verb
//! sense ("teams" -> "team", but "skills" stays "skills"). Tokens with no
//! valid base form pass through unchanged.

use crate::corpus::{Corpus, Pos};

/// Lemmatizes a single token.
pub fn lemmatize(corpus: &Corpus, token: &str) -> String {
    corpus
        .morphy(token, Pos::Verb)
        .unwrap_or_else(|| token.to_string())
}

/// Lemmatizes a token sequence independently, preserving order.
pub fn lemmatize_all(corpus: &Corpus, tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| lemmatize(corpus, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::corpus;

    #[test]
    fn test_gerund_reduces_to_verb_base() {
        assert_eq!(lemmatize(corpus(), "managing"), "manage");
        assert_eq!(lemmatize(corpus(), "nursing"), "nurse");
    }

    #[test]
    fn test_irregular_past_reduces_via_exception_table() {
        assert_eq!(lemmatize(corpus(), "ran"), "run");
        assert_eq!(lemmatize(corpus(), "led"), "lead");
        assert_eq!(lemmatize(corpus(), "wrote"), "write");
    }

    #[test]
    fn test_plural_with_verb_homonym_collapses() {
        // "team" carries a verb sense, so the s-rule validates
        assert_eq!(lemmatize(corpus(), "teams"), "team");
    }

    #[test]
    fn test_plural_without_verb_sense_is_unchanged() {
        // "skill" is noun-only, so verb-form reduction finds nothing
        assert_eq!(lemmatize(corpus(), "skills"), "skills");
    }

    #[test]
    fn test_unknown_token_is_unchanged() {
        assert_eq!(lemmatize(corpus(), "blarg"), "blarg");
    }

    #[test]
    fn test_lemmatize_all_preserves_order_and_duplicates() {
        let tokens: Vec<String> = ["managing", "teams", "managing"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            lemmatize_all(corpus(), &tokens),
            vec!["manage", "team", "manage"]
        );
    }
}
