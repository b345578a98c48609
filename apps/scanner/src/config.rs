use std::path::PathBuf;

use anyhow::Result;

use crate::corpus::LEXICON_DIR_ENV;

/// Runtime configuration loaded from environment variables. Every value has
/// a default; the scanner runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding an external corpus (`stopwords.txt`, `lexicon.tsv`,
    /// `verb_exceptions.tsv`). `None` selects the embedded corpus.
    pub lexicon_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            lexicon_dir: std::env::var(LEXICON_DIR_ENV).ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
