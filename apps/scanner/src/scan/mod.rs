//! The text-to-score pipeline, stage by stage: normalize both documents,
//! lemmatize, extract skills from the job description, fix the vocabulary,
//! vectorize, then score and tabulate.

pub mod compare;
pub mod lemma;
pub mod normalize;
pub mod pos;
pub mod scoring;
pub mod skills;
pub mod vectorize;

use tracing::debug;

use crate::contact::extract_contacts;
use crate::corpus::Corpus;
use crate::errors::ScanError;
use crate::models::ScanReport;
use crate::word_count;

/// Resume word-count band reported to callers as "recommended length".
const WORD_COUNT_FLAG_RANGE: std::ops::RangeInclusive<usize> = 450..=750;

/// Runs one full scan of a resume against a job description.
///
/// Every intermediate structure is local to the call; concurrent scans only
/// share the read-only corpus.
pub fn run_scan(
    corpus: &Corpus,
    resume_text: &str,
    job_text: &str,
) -> Result<ScanReport, ScanError> {
    let contact = extract_contacts(resume_text);
    let resume_words = word_count(resume_text);

    let resume_tokens = normalize::normalize(resume_text, corpus);
    let job_tokens = normalize::normalize(job_text, corpus);
    debug!(
        resume_tokens = resume_tokens.len(),
        job_tokens = job_tokens.len(),
        "normalized documents"
    );

    let resume_lemmas = lemma::lemmatize_all(corpus, &resume_tokens);
    let job_lemmas = lemma::lemmatize_all(corpus, &job_tokens);

    let skills = skills::extract_skills(corpus, &job_lemmas);
    let vocabulary = vectorize::Vocabulary::from_skill_tokens(&skills)?;
    debug!(vocabulary = vocabulary.len(), "vocabulary fixed");

    let resume_vector = vocabulary.vectorize(&resume_lemmas);
    let job_vector = vocabulary.vectorize(&skills);

    let similarity = scoring::cosine_similarity(&resume_vector, &job_vector);
    let computed = scoring::similarity_to_score(similarity);
    let (score, message) = scoring::advisory(computed, resume_words);
    debug!(similarity, computed, score, "scored resume");

    let comparison_table =
        compare::build_comparison_table(&vocabulary, &resume_vector, &job_vector, &skills);

    Ok(ScanReport {
        score,
        message: message.to_string(),
        comparison_table,
        contact,
        word_count_flag: WORD_COUNT_FLAG_RANGE.contains(&resume_words),
    })
}
