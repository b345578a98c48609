use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type.
/// Callers are responsible for mapping variants to user-facing messaging;
/// no stage of the pipeline recovers from another stage's error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The job description yielded zero usable skill terms after filtering.
    /// Surfaces to users as a "not enough key words" condition.
    #[error("no key words detected in the job description")]
    EmptyVocabulary,

    /// Caller-side pre-validation: the job description is too short to scan.
    #[error("job description does not contain enough words ({words} found)")]
    JobTooShort { words: usize },

    /// An external corpus directory was configured but could not be read.
    #[error("failed to read corpus file {path}")]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
