use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab::{skill_tokens, DEGREE_KEYWORDS, SENIORITY_KEYWORDS};

static RE_YEARS_EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?experience").unwrap());

static RE_MINIMUM_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"minimum\s*(\d+)\s*years?").unwrap());

/// Structured requirements derived once from a job description and immutable
/// thereafter. `raw_text` keeps the original description for lexical
/// relevance checks downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSet {
    /// Required skill tokens in vocabulary order, deduplicated.
    pub required_skills: Vec<String>,
    /// 0 means "unspecified".
    pub required_experience_years: u32,
    pub requires_degree: bool,
    pub is_senior_role: bool,
    pub raw_text: String,
}

/// Derive a requirement set from free job description text. Deterministic
/// given the text and the static vocabularies; empty text yields the
/// all-default set rather than an error.
pub fn extract_requirements(job_description: &str) -> RequirementSet {
    let lowered = job_description.to_lowercase();

    let required_skills: Vec<String> = skill_tokens()
        .filter(|skill| lowered.contains(skill))
        .map(str::to_string)
        .collect();

    // A description may state several thresholds ("5+ years experience,
    // minimum 3 years with Kubernetes"); the highest governs.
    let mut required_experience_years = 0u32;
    for re in [&*RE_YEARS_EXPERIENCE, &*RE_MINIMUM_YEARS] {
        for caps in re.captures_iter(&lowered) {
            if let Ok(n) = caps[1].parse::<u32>() {
                required_experience_years = required_experience_years.max(n);
            }
        }
    }

    RequirementSet {
        required_skills,
        required_experience_years,
        requires_degree: DEGREE_KEYWORDS.iter().any(|k| lowered.contains(k)),
        is_senior_role: SENIORITY_KEYWORDS.iter().any(|k| lowered.contains(k)),
        raw_text: job_description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_all_defaults() {
        let req = extract_requirements("");

        assert!(req.required_skills.is_empty());
        assert_eq!(req.required_experience_years, 0);
        assert!(!req.requires_degree);
        assert!(!req.is_senior_role);
    }

    #[test]
    fn detects_skills_in_vocabulary_order() {
        let req = extract_requirements("We use Docker, Python and React daily");

        assert_eq!(req.required_skills, vec!["python", "react", "docker"]);
    }

    #[test]
    fn substring_matching_covers_variants() {
        let req = extract_requirements("Frontend role working with React.js");

        assert!(req.required_skills.contains(&"react".to_string()));
    }

    #[test]
    fn highest_experience_threshold_governs() {
        let req = extract_requirements(
            "3+ years of experience overall, minimum 7 years in backend, 5 years experience with APIs",
        );

        assert_eq!(req.required_experience_years, 7);
    }

    #[test]
    fn plus_suffix_and_of_are_optional() {
        assert_eq!(
            extract_requirements("5+ years experience").required_experience_years,
            5
        );
        assert_eq!(
            extract_requirements("2 years of experience").required_experience_years,
            2
        );
    }

    #[test]
    fn degree_and_seniority_flags() {
        let req = extract_requirements("Senior engineer, Bachelor's degree required");

        assert!(req.requires_degree);
        assert!(req.is_senior_role);

        let junior = extract_requirements("Junior engineer, no formal requirements");
        assert!(!junior.requires_degree);
        assert!(!junior.is_senior_role);
    }

    #[test]
    fn keeps_raw_text() {
        let text = "Senior Python Developer";
        assert_eq!(extract_requirements(text).raw_text, text);
    }
}
