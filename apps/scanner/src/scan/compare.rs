//! Keyword comparison table: per-term resume vs job-posting counts over the
//! vocabulary, restricted to skill terms the posting repeats.

use std::collections::HashSet;

use crate::models::ComparisonRow;
use crate::scan::vectorize::{FrequencyVector, Vocabulary};

/// Rows are dropped below this job-posting count; a term mentioned once is
/// not a meaningful keyword signal.
const MIN_JOB_COUNT: u32 = 2;
/// Table cap.
const MAX_ROWS: usize = 20;

/// Builds the ranked comparison table. Rows keep only vocabulary terms that
/// are in the skill set with a job count above one, sorted by job count
/// descending (ties keep the vocabulary's alphabetical order), capped at 20.
pub fn build_comparison_table(
    vocabulary: &Vocabulary,
    resume_vector: &FrequencyVector,
    job_vector: &FrequencyVector,
    skills: &[String],
) -> Vec<ComparisonRow> {
    let skill_set: HashSet<&str> = skills.iter().map(String::as_str).collect();

    let mut rows: Vec<ComparisonRow> = vocabulary
        .terms()
        .iter()
        .enumerate()
        .filter(|(_, term)| skill_set.contains(term.as_str()))
        .map(|(i, term)| {
            let resume_count = resume_vector.count(i);
            let job_count = job_vector.count(i);
            ComparisonRow {
                term: capitalize(term),
                resume_count,
                job_count,
                difference: i64::from(resume_count) - i64::from(job_count),
            }
        })
        .filter(|row| row.job_count >= MIN_JOB_COUNT)
        .collect();

    rows.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    rows.truncate(MAX_ROWS);
    rows
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn table_for(skills: &[&str], resume: &[&str]) -> Vec<ComparisonRow> {
        let skills = tokens(skills);
        let resume = tokens(resume);
        let vocab = Vocabulary::from_skill_tokens(&skills).expect("vocabulary");
        let job = vocab.vectorize(&skills);
        let res = vocab.vectorize(&resume);
        build_comparison_table(&vocab, &res, &job, &skills)
    }

    #[test]
    fn test_rows_require_job_count_above_one() {
        let rows = table_for(&["manage", "manage", "team"], &["manage"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].term, "Manage");
        assert_eq!(rows[0].job_count, 2);
    }

    #[test]
    fn test_difference_is_resume_minus_job() {
        let rows = table_for(&["manage", "manage", "manage"], &["manage"]);
        assert_eq!(rows[0].resume_count, 1);
        assert_eq!(rows[0].job_count, 3);
        assert_eq!(rows[0].difference, -2);
    }

    #[test]
    fn test_sorted_by_job_count_descending() {
        let rows = table_for(
            &["team", "team", "budget", "budget", "budget", "manage", "manage"],
            &[],
        );
        let counts: Vec<u32> = rows.iter().map(|r| r.job_count).collect();
        assert_eq!(counts, vec![3, 2, 2]);
        assert_eq!(rows[0].term, "Budget");
    }

    #[test]
    fn test_ties_keep_alphabetical_order() {
        let rows = table_for(&["team", "team", "manage", "manage"], &[]);
        assert_eq!(rows[0].term, "Manage");
        assert_eq!(rows[1].term, "Team");
    }

    #[test]
    fn test_capped_at_twenty_rows() {
        // 25 distinct terms, each twice
        let base = [
            "account", "budget", "client", "deliver", "engineer", "finance", "guide", "hire",
            "install", "journal", "kitchen", "launch", "manage", "network", "operate", "plan",
            "quality", "report", "schedule", "team", "upgrade", "vendor", "warehouse", "write",
            "audit",
        ];
        let mut skills = Vec::new();
        for term in base {
            skills.push(term);
            skills.push(term);
        }
        let rows = table_for(&skills, &[]);
        assert_eq!(rows.len(), 20);
    }

    #[test]
    fn test_terms_outside_skill_set_are_excluded() {
        let skills = tokens(&["manage", "manage"]);
        let vocab = Vocabulary::from_skill_tokens(&tokens(&["manage", "manage", "team", "team"]))
            .expect("vocabulary");
        let job = vocab.vectorize(&tokens(&["manage", "manage", "team", "team"]));
        let res = vocab.vectorize(&tokens(&["team"]));
        let rows = build_comparison_table(&vocab, &res, &job, &skills);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].term, "Manage");
    }

    #[test]
    fn test_empty_when_no_term_repeats() {
        let rows = table_for(&["manage", "team", "budget"], &["manage"]);
        assert!(rows.is_empty());
    }
}
