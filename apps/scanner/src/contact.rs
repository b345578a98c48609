//! Contact extractor: pattern matches over the raw, non-normalized resume
//! text. Each detector returns the first match verbatim, or `None`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::ContactFacts;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

/// Optional country code, optional parens around the area code, then 3-3-4
/// digit groups separated by spaces, dots, or hyphens.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{0,2}\s?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").expect("valid phone pattern")
});

static LINKEDIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin.com/(?:in|profile)[/\w\d-]+").expect("valid linkedin pattern")
});

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

pub fn find_phone_number(text: &str) -> Option<String> {
    PHONE_PATTERN.find(text).map(|m| m.as_str().to_string())
}

pub fn find_linkedin(text: &str) -> Option<String> {
    LINKEDIN_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Runs all three detectors over the raw resume text.
pub fn extract_contacts(resume_text: &str) -> ContactFacts {
    let facts = ContactFacts {
        email: find_email(resume_text),
        phone: find_phone_number(resume_text),
        linkedin: find_linkedin(resume_text),
    };
    debug!(
        email = facts.email.is_some(),
        phone = facts.phone.is_some(),
        linkedin = facts.linkedin.is_some(),
        "contact extraction"
    );
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_email_in_prose() {
        assert_eq!(
            find_email("contact me at a.b@example.com today"),
            Some("a.b@example.com".to_string())
        );
    }

    #[test]
    fn test_no_email_is_absent() {
        assert_eq!(find_email("no email here"), None);
    }

    #[test]
    fn test_email_with_plus_and_percent() {
        assert_eq!(
            find_email("jane+resumes%work@sub.domain.co"),
            Some("jane+resumes%work@sub.domain.co".to_string())
        );
    }

    #[test]
    fn test_finds_plain_phone_number() {
        assert_eq!(
            find_phone_number("call 555-867-5309 anytime"),
            Some("555-867-5309".to_string())
        );
    }

    #[test]
    fn test_finds_phone_with_parens_and_country_code() {
        assert_eq!(
            find_phone_number("reach me on +1 (555) 867-5309"),
            Some("+1 (555) 867-5309".to_string())
        );
    }

    #[test]
    fn test_finds_phone_with_dots() {
        assert_eq!(
            find_phone_number("tel: 555.867.5309"),
            Some("555.867.5309".to_string())
        );
    }

    #[test]
    fn test_no_phone_is_absent() {
        assert_eq!(find_phone_number("digits 12 34 only"), None);
    }

    #[test]
    fn test_finds_linkedin_profile_path() {
        assert_eq!(
            find_linkedin("see linkedin.com/in/jdoe-123"),
            Some("linkedin.com/in/jdoe-123".to_string())
        );
    }

    #[test]
    fn test_linkedin_is_case_insensitive() {
        assert_eq!(
            find_linkedin("at LinkedIn.com/IN/JDoe"),
            Some("LinkedIn.com/IN/JDoe".to_string())
        );
    }

    #[test]
    fn test_linkedin_profile_variant() {
        assert_eq!(
            find_linkedin("https://www.linkedin.com/profile/view-jdoe"),
            Some("linkedin.com/profile/view-jdoe".to_string())
        );
    }

    #[test]
    fn test_no_linkedin_is_absent() {
        assert_eq!(find_linkedin("see my website instead"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let text = "a@x.com then b@y.org";
        assert_eq!(find_email(text), Some("a@x.com".to_string()));
    }

    #[test]
    fn test_extract_contacts_is_independent_per_field() {
        let facts = extract_contacts("email a.b@example.com, no phone, no profile");
        assert!(facts.email.is_some());
        assert!(facts.phone.is_none());
        assert!(facts.linkedin.is_none());
    }
}
