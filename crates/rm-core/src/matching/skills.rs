use tracing::debug;

use super::requirements::RequirementSet;
use crate::embedding::SimilarityProvider;
use crate::CandidateRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// Skill dimension score in [0.0, 1.0].
    pub score: f64,
    /// Matched skill names in discovery order: direct matches first (in
    /// vocabulary order), then semantic matches. A semantic match records
    /// the candidate-side name.
    pub matched_skills: Vec<String>,
}

/// Score a candidate's skills against the required set.
///
/// With no stated requirements the score is a neutral 0.5 — absence of
/// requirements is not evidence of mismatch. Otherwise direct lowercase
/// matching runs first; each still-unmatched requirement then gets one shot
/// at a semantic pairing when a provider is configured. Candidates with more
/// skills than asked for earn a 1.1x breadth bonus, clamped to 1.0.
pub fn score_skills(
    candidate: &CandidateRecord,
    requirements: &RequirementSet,
    provider: Option<&dyn SimilarityProvider>,
    threshold: f32,
) -> SkillMatchResult {
    if requirements.required_skills.is_empty() {
        return SkillMatchResult {
            score: 0.5,
            matched_skills: vec![],
        };
    }

    let candidate_skills: Vec<String> = candidate
        .skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();

    let mut matched: Vec<String> = Vec::new();
    for required in &requirements.required_skills {
        if candidate_skills.contains(required) {
            matched.push(required.clone());
        }
    }

    if let Some(provider) = provider {
        if matched.len() < requirements.required_skills.len() {
            for required in &requirements.required_skills {
                if matched.contains(required) {
                    continue;
                }
                // First candidate skill over the threshold wins, in the
                // candidate's own listing order; one pairing per requirement.
                for candidate_skill in &candidate_skills {
                    if matched.contains(candidate_skill) {
                        continue;
                    }
                    let similarity = provider.similarity(required, candidate_skill);
                    if similarity > threshold {
                        debug!(
                            required = %required,
                            candidate_skill = %candidate_skill,
                            similarity,
                            provider = provider.name(),
                            "semantic skill match"
                        );
                        matched.push(candidate_skill.clone());
                        break;
                    }
                }
            }
        }
    }

    let mut score =
        (matched.len() as f64 / requirements.required_skills.len() as f64).min(1.0);
    if candidate_skills.len() > requirements.required_skills.len() {
        score = (score * 1.1).min(1.0);
    }

    SkillMatchResult {
        score,
        matched_skills: matched,
    }
}
