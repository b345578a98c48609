//! Word-to-senses lexicon: the dictionary backing the normalizer's
//! English-word filter, the lemmatizer's candidate validation, and the
//! part-of-speech tagger's primary-sense lookup.

use std::collections::HashMap;

/// A lexical part-of-speech sense. Mirrors the four open word classes the
/// corpus records per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    fn from_letter(c: char) -> Option<Pos> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' => Some(Pos::Adjective),
            'r' => Some(Pos::Adverb),
            _ => None,
        }
    }
}

/// In-memory lexicon: lowercase word -> ordered sense list (primary first).
///
/// Built once at corpus load and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Pos>>,
}

impl Lexicon {
    /// Parses the TSV lexicon format: one `word<TAB>senses` pair per line,
    /// senses being a string of POS letters with the primary sense first
    /// (e.g. `team<TAB>nv`). Lines that do not fit the format are skipped.
    pub fn parse(tsv: &str) -> Lexicon {
        let mut entries = HashMap::new();
        for line in tsv.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, letters)) = line.split_once('\t') else {
                continue;
            };
            let senses: Vec<Pos> = letters.chars().filter_map(Pos::from_letter).collect();
            if word.is_empty() || senses.is_empty() {
                continue;
            }
            entries.insert(word.to_string(), senses);
        }
        Lexicon { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the word appears in the lexicon at all (any sense).
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Whether the word carries the given sense.
    pub fn has_sense(&self, word: &str, pos: Pos) -> bool {
        self.entries
            .get(word)
            .map(|senses| senses.contains(&pos))
            .unwrap_or(false)
    }

    /// The word's primary (first-listed) sense, if known.
    pub fn primary_sense(&self, word: &str) -> Option<Pos> {
        self.entries.get(word).and_then(|senses| senses.first().copied())
    }
}
