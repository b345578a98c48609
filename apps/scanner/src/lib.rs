//! Resume-to-job-description match scoring.
//!
//! The library exposes a single stateless entry point, [`scan`], that takes
//! the two raw documents and returns a [`ScanReport`]: a 0-100 match score,
//! an advisory message, a ranked keyword comparison table, and contact-detail
//! presence checks. Each call is independent; the only process-wide state is
//! the read-only lexical corpus, loaded on first use.

pub mod config;
pub mod contact;
pub mod corpus;
pub mod errors;
pub mod models;
pub mod scan;

pub use config::Config;
pub use errors::ScanError;
pub use models::{ComparisonRow, ContactFacts, ScanReport};

/// Job descriptions at or below this many words are rejected before
/// scanning; there is not enough text to extract keywords from.
pub const MIN_JOB_WORDS: usize = 10;

/// Number of whitespace-delimited chunks in the text. Leading and trailing
/// whitespace never affects the count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Caller-side pre-validation of the job description's length.
pub fn validate_job_text(job_text: &str) -> Result<(), ScanError> {
    let words = word_count(job_text);
    if words <= MIN_JOB_WORDS {
        return Err(ScanError::JobTooShort { words });
    }
    Ok(())
}

/// Scores a resume against a job description using the shared corpus.
pub fn scan(resume_text: &str, job_text: &str) -> Result<ScanReport, ScanError> {
    scan::run_scan(corpus::corpus(), resume_text, job_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_counts_whitespace_chunks() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  spaced\tout\nwords  "), 3);
    }

    #[test]
    fn test_word_count_ignores_surrounding_whitespace() {
        let text = "  lead a team of five  ";
        assert_eq!(word_count(text), word_count(text.trim()));
    }

    #[test]
    fn test_validate_job_text_rejects_ten_words_or_fewer() {
        let ten = "one two three four five six seven eight nine ten";
        assert!(matches!(
            validate_job_text(ten),
            Err(ScanError::JobTooShort { words: 10 })
        ));

        let eleven = format!("{ten} eleven");
        assert!(validate_job_text(&eleven).is_ok());
    }
}
