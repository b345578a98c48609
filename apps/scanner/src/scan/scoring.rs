//! Cosine scoring and the advisory message ladder.

use crate::scan::vectorize::FrequencyVector;

/// Resume word counts below this force the score to zero.
pub const FORCED_ZERO_WORDS: usize = 25;
/// Resume word counts below this (and above the forced-zero band) keep the
/// computed score but still get the low-word-count message.
pub const LOW_WORDS: usize = 200;

pub const MSG_LOW_WORD_COUNT: &str = "Your resume word count is extremely low. We recommend revising your resume to increase the mention of key words as well as your skills and experience.";
pub const MSG_EXCELLENT: &str = "Fantastic! Your score indicates that your resume is an excellent match for the job requirements. We highly recommend applying for the job with confidence.";
pub const MSG_WELL_SUITED: &str = "Congratulations! Your score indicates that your resume is well-suited to the job requirements. We recommend applying for the job with confidence.";
pub const MSG_ALMOST: &str = "Your score indicates that your resume is almost compatible with the job requirements! Include the mention of frequent key words to reach a score of 65%.";
pub const MSG_SOMEWHAT: &str = "Your score indicates that your resume is somewhat compatible with the job requirements. Revise your resume to increase the mention of keywords and highlight your experience using measurable results.";
pub const MSG_MAY_NOT_MEET: &str = "Your score indicates that your resume may not meet the requirements for this job. We suggest making changes to your resume to better match the job description.";

/// Cosine similarity of two equal-dimension count vectors, in [0, 1].
/// Returns 0 when either vector is all-zero; there is no division by zero.
pub fn cosine_similarity(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    if a.is_all_zero() || b.is_all_zero() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut mag_a = 0.0_f64;
    let mut mag_b = 0.0_f64;
    for (&x, &y) in a.counts().iter().zip(b.counts()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    dot / (mag_a.sqrt() * mag_b.sqrt())
}

/// Scales a [0, 1] similarity to the reported 0-100 score, rounding half-up.
pub fn similarity_to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Applies the word-count overrides and picks the advisory message.
/// Returns the final reported score alongside the message.
///
/// Word counts strictly below [`FORCED_ZERO_WORDS`] zero the score; counts
/// strictly between that and [`LOW_WORDS`] keep the computed score but get
/// the same low-word-count message. A count of exactly 25 falls through to
/// the score-based ladder. That boundary gap is intentional fallback
/// behavior the reported results depend on.
pub fn advisory(score: u8, resume_words: usize) -> (u8, &'static str) {
    if resume_words < FORCED_ZERO_WORDS {
        return (0, MSG_LOW_WORD_COUNT);
    }
    if resume_words > FORCED_ZERO_WORDS && resume_words < LOW_WORDS {
        return (score, MSG_LOW_WORD_COUNT);
    }

    let message = match score {
        76.. => MSG_EXCELLENT,
        65..=75 => MSG_WELL_SUITED,
        60..=64 => MSG_ALMOST,
        30..=59 => MSG_SOMEWHAT,
        _ => MSG_MAY_NOT_MEET,
    };
    (score, message)
}
