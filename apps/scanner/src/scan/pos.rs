//! Isolated part-of-speech tagger.
//!
//! Each token is tagged on its own, with no sentence context. Downstream
//! skill selection was tuned against this per-token behavior, so the tagger
//! must stay context-free. Known words take the lexicon's primary sense;
//! unknown words fall back to suffix heuristics, then to `NN`.

use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Pos};

/// Penn Treebank tags the tagger emits. Input tokens are lowercase and
/// digit-free by the time they reach the tagger, so the proper-noun and
/// number tags never occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum PennTag {
    /// Singular/mass noun.
    NN,
    /// Plural noun.
    NNS,
    /// Verb, base form.
    VB,
    /// Verb, gerund.
    VBG,
    /// Verb, past participle.
    VBN,
    /// Adjective.
    JJ,
    /// Adjective, superlative.
    JJS,
    /// Adverb.
    RB,
}

impl PennTag {
    /// Whether the tag belongs to the noun/verb/adjective classes retained
    /// as skills.
    pub fn is_skill_tag(self) -> bool {
        !matches!(self, PennTag::RB)
    }
}

/// Tags a single token in isolation.
pub fn tag_token(corpus: &Corpus, token: &str) -> PennTag {
    if let Some(primary) = corpus.lexicon().primary_sense(token) {
        return match primary {
            Pos::Noun => PennTag::NN,
            Pos::Verb => PennTag::VB,
            Pos::Adjective => PennTag::JJ,
            Pos::Adverb => PennTag::RB,
        };
    }

    // unknown word: suffix heuristics
    if token.ends_with("ing") {
        PennTag::VBG
    } else if token.ends_with("ed") {
        PennTag::VBN
    } else if token.ends_with("ly") {
        PennTag::RB
    } else if token.ends_with("est") {
        PennTag::JJS
    } else if token.ends_with('s') {
        PennTag::NNS
    } else {
        PennTag::NN
    }
}
