use std::collections::HashSet;

use super::requirements::RequirementSet;
use crate::CandidateRecord;

/// Tokens shorter than this carry no relevance signal ("at", "the", "for").
const MIN_RELEVANCE_TOKEN_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceMatchResult {
    /// Experience dimension score in [0.0, 1.0].
    pub score: f64,
    /// `"<title> at <company>"` for each entry sharing at least one long
    /// token with the job description, in the candidate's entry order.
    pub relevant_experience: Vec<String>,
}

/// Score a candidate's experience against the requirement set.
///
/// An unspecified requirement (0 years) scores 0.7 with any experience and
/// 0.3 without. An explicit requirement scores proportionally and saturates
/// at 1.0 once met; falling short can score below the 0.3 "unspecified"
/// floor, which is intentional: an explicit unmet bar is worse than no bar
/// stated. Senior roles penalize candidates under 3 years by 0.7x.
pub fn score_experience(
    candidate: &CandidateRecord,
    requirements: &RequirementSet,
) -> ExperienceMatchResult {
    let job_text = requirements.raw_text.to_lowercase();
    let job_tokens: HashSet<&str> = job_text
        .split_whitespace()
        .filter(|w| w.len() >= MIN_RELEVANCE_TOKEN_LEN)
        .collect();

    let mut relevant_experience = Vec::new();
    for entry in &candidate.experience {
        let entry_text = format!("{} {}", entry.title, entry.description).to_lowercase();
        let overlap = entry_text
            .split_whitespace()
            .filter(|w| w.len() >= MIN_RELEVANCE_TOKEN_LEN)
            .collect::<HashSet<_>>()
            .intersection(&job_tokens)
            .count();

        if overlap >= 1 {
            relevant_experience.push(format!("{} at {}", entry.title, entry.company));
        }
    }

    let candidate_years = candidate.total_experience_years();
    let required_years = requirements.required_experience_years;

    let mut score = if required_years == 0 {
        if candidate_years > 0.0 { 0.7 } else { 0.3 }
    } else {
        (candidate_years / required_years as f64).min(1.0)
    };

    if requirements.is_senior_role && candidate_years < 3.0 {
        score *= 0.7;
    }

    ExperienceMatchResult {
        score,
        relevant_experience,
    }
}
