//! Skill extractor: keeps the lemmatized job-description tokens whose
//! part-of-speech class marks them as skill candidates, minus a fixed list
//! of generic resume and job-ad filler terms.

use tracing::debug;

use crate::corpus::Corpus;
use crate::scan::pos::tag_token;

/// Generic terms that appear in almost every posting and carry no skill
/// signal, so they never enter the vocabulary.
pub const EXCLUDED_TERMS: &[&str] = &[
    "experience",
    "new",
    "best",
    "years",
    "work",
    "skills",
    "proficient",
    "strong",
    "excellent",
    "ability",
    "knowledge",
    "responsibilities",
    "duties",
    "achievements",
    "accomplishments",
    "multitask",
    "fast-paced",
    "track",
    "record",
    "passion",
    "successful",
    "minimum",
    "degree",
    "job",
    "career",
    "salary",
    "pay",
    "including",
    "co",
    "preferred",
    "requires",
    "require",
    "required",
    "able",
    "role",
    "senior",
];

fn is_excluded(token: &str) -> bool {
    EXCLUDED_TERMS.contains(&token)
}

/// Extracts skill tokens from the lemmatized job-description sequence.
/// Duplicates are kept and source order is preserved; the duplicate counts
/// feed the job-side frequency vector.
pub fn extract_skills(corpus: &Corpus, lemmatized_job: &[String]) -> Vec<String> {
    let skills: Vec<String> = lemmatized_job
        .iter()
        .filter(|token| tag_token(corpus, token).is_skill_tag())
        .filter(|token| !is_excluded(token))
        .cloned()
        .collect();

    debug!(
        input = lemmatized_job.len(),
        retained = skills.len(),
        "extracted skill tokens"
    );
    skills
}
