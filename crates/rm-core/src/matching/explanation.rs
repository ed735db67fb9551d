use super::requirements::RequirementSet;
use super::scoring::ScoreBundle;
use crate::CandidateRecord;

const LINE_SEPARATOR: &str = " | ";

/// Render the deterministic, templated rationale for one scored candidate.
/// Pure formatting over already-computed scores and evidence; never feeds
/// back into scoring.
pub fn build_explanation(
    candidate: &CandidateRecord,
    requirements: &RequirementSet,
    scores: &ScoreBundle,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        if scores.overall_score >= 0.8 {
            "Excellent match for this position."
        } else if scores.overall_score >= 0.6 {
            "Good match with some areas for consideration."
        } else {
            "Limited match for this position."
        }
        .to_string(),
    );

    if !scores.matched_skills.is_empty() {
        parts.push(format!(
            "Matching skills: {}",
            scores.matched_skills.join(", ")
        ));
    }

    let missing: Vec<&str> = requirements
        .required_skills
        .iter()
        .filter(|skill| !scores.matched_skills.contains(skill))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        parts.push(format!("Missing skills: {}", missing.join(", ")));
    }

    let required_years = requirements.required_experience_years;
    if required_years > 0 {
        let candidate_years = candidate.total_experience_years();
        if candidate_years >= f64::from(required_years) {
            parts.push(format!(
                "Meets the experience requirement: {candidate_years:.1} years (required: {required_years})"
            ));
        } else {
            parts.push(format!(
                "Short of the experience requirement: {candidate_years:.1} years (required: {required_years})"
            ));
        }
    }

    if !scores.relevant_experience.is_empty() {
        let shown: Vec<&str> = scores
            .relevant_experience
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        parts.push(format!("Relevant experience: {}", shown.join(", ")));
    }

    if requirements.requires_degree {
        if candidate.education.is_empty() {
            parts.push("No formal education information found".to_string());
        } else {
            let degrees: Vec<&str> = candidate
                .education
                .iter()
                .map(|entry| entry.degree.as_str())
                .collect();
            parts.push(format!("Education: {}", degrees.join(", ")));
        }
    }

    parts.join(LINE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EducationEntry, ExperienceEntry};

    fn bundle(overall: f64) -> ScoreBundle {
        ScoreBundle {
            skill_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            overall_score: overall,
            matched_skills: vec![],
            relevant_experience: vec![],
        }
    }

    #[test]
    fn tier_line_follows_overall_score() {
        let candidate = CandidateRecord::default();
        let requirements = RequirementSet::default();

        assert!(build_explanation(&candidate, &requirements, &bundle(0.85))
            .starts_with("Excellent match"));
        assert!(build_explanation(&candidate, &requirements, &bundle(0.8))
            .starts_with("Excellent match"));
        assert!(
            build_explanation(&candidate, &requirements, &bundle(0.65)).starts_with("Good match")
        );
        assert!(build_explanation(&candidate, &requirements, &bundle(0.59))
            .starts_with("Limited match"));
    }

    #[test]
    fn matched_and_missing_skill_lines() {
        let requirements = RequirementSet {
            required_skills: vec!["python".into(), "aws".into()],
            ..Default::default()
        };
        let mut scores = bundle(0.5);
        scores.matched_skills = vec!["python".into()];

        let text = build_explanation(&CandidateRecord::default(), &requirements, &scores);
        assert!(text.contains("Matching skills: python"));
        assert!(text.contains("Missing skills: aws"));

        // Fully matched: no missing line at all.
        scores.matched_skills = vec!["python".into(), "aws".into()];
        let text = build_explanation(&CandidateRecord::default(), &requirements, &scores);
        assert!(!text.contains("Missing skills"));
    }

    #[test]
    fn experience_line_only_when_required() {
        let candidate = CandidateRecord {
            experience: vec![ExperienceEntry {
                title: "Dev".into(),
                company: "Acme".into(),
                start_date: "2020".into(),
                end_date: "2022".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let none = build_explanation(&candidate, &RequirementSet::default(), &bundle(0.5));
        assert!(!none.contains("experience requirement"));

        let unmet = RequirementSet {
            required_experience_years: 5,
            ..Default::default()
        };
        let text = build_explanation(&candidate, &unmet, &bundle(0.5));
        assert!(text.contains("Short of the experience requirement: 2.0 years (required: 5)"));

        let met = RequirementSet {
            required_experience_years: 2,
            ..Default::default()
        };
        let text = build_explanation(&candidate, &met, &bundle(0.5));
        assert!(text.contains("Meets the experience requirement: 2.0 years (required: 2)"));
    }

    #[test]
    fn relevant_experience_shows_first_two() {
        let mut scores = bundle(0.5);
        scores.relevant_experience = vec![
            "Dev at A".into(),
            "Dev at B".into(),
            "Dev at C".into(),
        ];

        let text = build_explanation(
            &CandidateRecord::default(),
            &RequirementSet::default(),
            &scores,
        );
        assert!(text.contains("Relevant experience: Dev at A, Dev at B"));
        assert!(!text.contains("Dev at C"));
    }

    #[test]
    fn education_line_only_when_degree_required() {
        let requirements = RequirementSet {
            requires_degree: true,
            ..Default::default()
        };

        let without = build_explanation(&CandidateRecord::default(), &requirements, &bundle(0.5));
        assert!(without.contains("No formal education information found"));

        let candidate = CandidateRecord {
            education: vec![EducationEntry {
                degree: "BSc Computer Science".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let with = build_explanation(&candidate, &requirements, &bundle(0.5));
        assert!(with.contains("Education: BSc Computer Science"));

        let silent = build_explanation(&candidate, &RequirementSet::default(), &bundle(0.5));
        assert!(!silent.contains("Education:"));
    }

    #[test]
    fn lines_join_with_the_fixed_separator() {
        let requirements = RequirementSet {
            required_skills: vec!["python".into()],
            ..Default::default()
        };
        let text = build_explanation(&CandidateRecord::default(), &requirements, &bundle(0.9));
        assert_eq!(
            text,
            "Excellent match for this position. | Missing skills: python"
        );
    }
}
