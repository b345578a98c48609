//! Read-only lexical corpus: stop words, the word/POS lexicon, and the
//! irregular-verb exception table.
//!
//! Loaded once per process and shared by reference across all scans. The
//! embedded data files ship inside the binary; setting `LEXICON_DIR` to a
//! directory containing `stopwords.txt`, `lexicon.tsv`, and
//! `verb_exceptions.tsv` swaps in a fuller corpus without a rebuild.

pub mod lexicon;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::errors::ScanError;
pub use lexicon::{Lexicon, Pos};

/// Environment variable naming an external corpus directory.
pub const LEXICON_DIR_ENV: &str = "LEXICON_DIR";

const EMBEDDED_STOPWORDS: &str = include_str!("data/stopwords.txt");
const EMBEDDED_LEXICON: &str = include_str!("data/lexicon.tsv");
const EMBEDDED_VERB_EXCEPTIONS: &str = include_str!("data/verb_exceptions.tsv");

/// Suffix substitution rules per word class, applied in order. A candidate
/// produced by a rule only counts if the lexicon knows it under that class.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
];

fn rules_for(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// The process-wide lexical corpus. Immutable after load; safe to share
/// across threads (all lookups take `&self`).
#[derive(Debug)]
pub struct Corpus {
    stopwords: HashSet<String>,
    lexicon: Lexicon,
    verb_exceptions: HashMap<String, String>,
}

impl Corpus {
    /// Builds the corpus from the data files compiled into the binary.
    pub fn embedded() -> Corpus {
        Corpus::from_parts(
            EMBEDDED_STOPWORDS,
            EMBEDDED_LEXICON,
            EMBEDDED_VERB_EXCEPTIONS,
        )
    }

    /// Loads the corpus from a directory holding the three data files.
    pub fn from_dir(dir: &Path) -> Result<Corpus, ScanError> {
        let stopwords = read_corpus_file(&dir.join("stopwords.txt"))?;
        let lexicon = read_corpus_file(&dir.join("lexicon.tsv"))?;
        let verb_exceptions = read_corpus_file(&dir.join("verb_exceptions.tsv"))?;
        Ok(Corpus::from_parts(&stopwords, &lexicon, &verb_exceptions))
    }

    fn from_parts(stopwords: &str, lexicon: &str, verb_exceptions: &str) -> Corpus {
        let stopwords = stopwords
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        let verb_exceptions = verb_exceptions
            .lines()
            .filter_map(|l| l.trim().split_once('\t'))
            .map(|(inflected, base)| (inflected.to_string(), base.to_string()))
            .collect();

        Corpus {
            stopwords,
            lexicon: Lexicon::parse(lexicon),
            verb_exceptions,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Reduces an inflected form to a base form of the given word class:
    /// exception table first, then suffix rules validated against the
    /// lexicon, keeping the shortest surviving candidate (first found on
    /// length ties). The form itself counts when the lexicon already knows
    /// it under that class. Returns `None` when no valid base form exists.
    pub fn morphy(&self, word: &str, pos: Pos) -> Option<String> {
        if pos == Pos::Verb {
            if let Some(base) = self.verb_exceptions.get(word) {
                return Some(base.clone());
            }
        }

        let mut best: Option<String> = None;
        let mut consider = |candidate: String| {
            let shorter = best
                .as_ref()
                .map(|b| candidate.len() < b.len())
                .unwrap_or(true);
            if shorter {
                best = Some(candidate);
            }
        };

        if self.lexicon.has_sense(word, pos) {
            consider(word.to_string());
        }
        for (suffix, replacement) in rules_for(pos) {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{stem}{replacement}");
                if self.lexicon.has_sense(&candidate, pos) {
                    consider(candidate);
                }
            }
        }
        best
    }

    /// Whether the word is recognized as an English dictionary word: it has
    /// at least one noun, verb, adjective, or adverb sense, either directly
    /// or through a morphological base form (so "teams" and "managing"
    /// qualify via "team" and "manage").
    pub fn is_dictionary_word(&self, word: &str) -> bool {
        if self.lexicon.contains(word) {
            return true;
        }
        [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb]
            .into_iter()
            .any(|pos| self.morphy(word, pos).is_some())
    }
}

fn read_corpus_file(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::CorpusIo {
        path: PathBuf::from(path),
        source,
    })
}

static CORPUS: Lazy<Corpus> = Lazy::new(|| match std::env::var(LEXICON_DIR_ENV) {
    Ok(dir) => match Corpus::from_dir(Path::new(&dir)) {
        Ok(corpus) => {
            info!(%dir, terms = corpus.lexicon().len(), "loaded external corpus");
            corpus
        }
        Err(e) => {
            warn!(%dir, error = %e, "external corpus load failed, using embedded corpus");
            Corpus::embedded()
        }
    },
    Err(_) => Corpus::embedded(),
});

/// The shared corpus handle. First call loads the corpus; later calls are
/// lookups into the same immutable instance.
pub fn corpus() -> &'static Corpus {
    &CORPUS
}
