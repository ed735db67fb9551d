use super::education::score_education;
use super::experience::score_experience;
use super::requirements::RequirementSet;
use super::skills::score_skills;
use super::weights::MATCH_WEIGHTS;
use crate::embedding::SimilarityProvider;
use crate::error::MatchError;
use crate::CandidateRecord;

/// Per-candidate score bundle. `overall_score` is always the weighted
/// combination of the three dimensions computed here, never cached apart
/// from its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBundle {
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub overall_score: f64,
    pub matched_skills: Vec<String>,
    pub relevant_experience: Vec<String>,
}

/// Run all three dimension scorers for one candidate and combine them.
///
/// A blank record (no identity and nothing scoreable) is the typed
/// equivalent of a record that failed construction upstream; it errors here
/// so the batch loop can skip it with a warning.
pub fn score_candidate(
    candidate: &CandidateRecord,
    requirements: &RequirementSet,
    provider: Option<&dyn SimilarityProvider>,
    threshold: f32,
) -> Result<ScoreBundle, MatchError> {
    if candidate.is_blank() {
        return Err(MatchError::MalformedCandidate {
            filename: candidate.filename.clone(),
            reason: "record has no name, skills, experience, or education".into(),
        });
    }

    let skills = score_skills(candidate, requirements, provider, threshold);
    let experience = score_experience(candidate, requirements);
    let education_score = score_education(candidate, requirements);

    let overall_score = MATCH_WEIGHTS.combine(skills.score, experience.score, education_score);

    Ok(ScoreBundle {
        skill_score: skills.score,
        experience_score: experience.score,
        education_score,
        overall_score,
        matched_skills: skills.matched_skills,
        relevant_experience: experience.relevant_experience,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::requirements::extract_requirements;
    use crate::{ExperienceEntry, Skill};

    fn python_candidate() -> CandidateRecord {
        CandidateRecord {
            filename: "dana.pdf".into(),
            name: "Dana".into(),
            skills: vec![
                Skill {
                    name: "Python".into(),
                    ..Default::default()
                },
                Skill {
                    name: "Flask".into(),
                    ..Default::default()
                },
            ],
            experience: vec![ExperienceEntry {
                title: "Developer".into(),
                company: "Acme".into(),
                start_date: "2020".into(),
                end_date: "2022".into(),
                description: "Python services".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn blank_record_is_rejected() {
        let err = score_candidate(
            &CandidateRecord::default(),
            &RequirementSet::default(),
            None,
            0.7,
        )
        .unwrap_err();

        assert!(matches!(err, MatchError::MalformedCandidate { .. }));
    }

    #[test]
    fn senior_python_scenario() {
        // 2 years against a senior 5-year bar with a degree requirement and
        // no degree on record.
        let requirements = extract_requirements(
            "Senior Python Developer, 5+ years experience, Bachelor's degree required",
        );
        assert_eq!(requirements.required_experience_years, 5);
        assert!(requirements.is_senior_role);
        assert!(requirements.requires_degree);

        let bundle = score_candidate(&python_candidate(), &requirements, None, 0.7).unwrap();

        assert!((bundle.experience_score - 0.28).abs() < 1e-9);
        assert_eq!(bundle.education_score, 0.3);
        assert_eq!(bundle.skill_score, 1.0);
        assert!(
            (bundle.overall_score - (1.0 * 0.5 + 0.28 * 0.3 + 0.3 * 0.2)).abs() < 1e-9
        );
    }

    #[test]
    fn empty_description_gives_all_neutral_scores() {
        let requirements = extract_requirements("");
        let bundle = score_candidate(&python_candidate(), &requirements, None, 0.7).unwrap();

        assert_eq!(bundle.skill_score, 0.5);
        assert_eq!(bundle.education_score, 0.7);
        assert_eq!(bundle.experience_score, 0.7);
        assert!(bundle.matched_skills.is_empty());
    }

    #[test]
    fn all_scores_stay_in_unit_range() {
        let requirements = extract_requirements(
            "Senior lead architect, minimum 30 years, PhD required, python java react aws",
        );
        let bundle = score_candidate(&python_candidate(), &requirements, None, 0.7).unwrap();

        for score in [
            bundle.skill_score,
            bundle.experience_score,
            bundle.education_score,
            bundle.overall_score,
        ] {
            assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        }
    }
}
