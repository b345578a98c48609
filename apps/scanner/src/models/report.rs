use serde::{Deserialize, Serialize};

/// One row of the keyword comparison table: a vocabulary term restricted to
/// the skill set, with per-document occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Display form of the term (first letter capitalized).
    pub term: String,
    pub resume_count: u32,
    pub job_count: u32,
    /// resume_count - job_count; negative when the resume under-mentions.
    pub difference: i64,
}

/// Contact details detected in the raw resume text. `None` means no match
/// was found, which is distinct from a matched-but-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFacts {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

/// Full result of one resume/job-description scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Match score, 0-100.
    pub score: u8,
    /// Advisory message paired with the score and resume word count.
    pub message: String,
    /// Ranked keyword comparison, capped at 20 rows.
    pub comparison_table: Vec<ComparisonRow>,
    #[serde(flatten)]
    pub contact: ContactFacts,
    /// Whether the resume word count sits in the recommended 450-750 band.
    pub word_count_flag: bool,
}
