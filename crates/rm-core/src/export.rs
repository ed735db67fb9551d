use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::matching::pipeline::MatchResult;

/// Flat, serializable view of one match result. Scores are rounded to three
/// decimal places for external consumers; the in-memory results keep full
/// precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExport {
    pub candidate_name: String,
    pub filename: String,
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub matched_skills: Vec<String>,
    pub relevant_experience: Vec<String>,
    pub explanation: String,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl From<&MatchResult> for MatchExport {
    fn from(result: &MatchResult) -> Self {
        Self {
            candidate_name: result.candidate_name.clone(),
            filename: result.filename.clone(),
            overall_score: round3(result.scores.overall_score),
            skill_score: round3(result.scores.skill_score),
            experience_score: round3(result.scores.experience_score),
            education_score: round3(result.scores.education_score),
            matched_skills: result.scores.matched_skills.clone(),
            relevant_experience: result.scores.relevant_experience.clone(),
            explanation: result.explanation.clone(),
        }
    }
}

/// Serialize ranked results to pretty JSON, rank order preserved.
pub fn export_matches(results: &[MatchResult]) -> Result<String, MatchError> {
    let rows: Vec<MatchExport> = results.iter().map(MatchExport::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Parse a previously exported payload.
pub fn parse_export(json: &str) -> Result<Vec<MatchExport>, MatchError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::ScoreBundle;
    use crate::CandidateRecord;

    fn result(name: &str, overall: f64) -> MatchResult {
        MatchResult {
            candidate_name: name.into(),
            filename: format!("{name}.pdf"),
            scores: ScoreBundle {
                skill_score: 0.123456,
                experience_score: 0.7,
                education_score: 0.3,
                overall_score: overall,
                matched_skills: vec!["python".into()],
                relevant_experience: vec!["Dev at Acme".into()],
            },
            explanation: "Limited match for this position.".into(),
            candidate: CandidateRecord::default(),
        }
    }

    #[test]
    fn scores_are_rounded_to_three_decimals() {
        let export = MatchExport::from(&result("Dana", 0.6444444));

        assert_eq!(export.skill_score, 0.123);
        assert_eq!(export.overall_score, 0.644);
        assert_eq!(export.experience_score, 0.7);
    }

    #[test]
    fn round_trip_preserves_rounded_scores_and_order() {
        let results = vec![result("Dana", 0.9211111), result("Alex", 0.455555)];
        let json = export_matches(&results).unwrap();
        let parsed = parse_export(&json).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].candidate_name, "Dana");
        assert_eq!(parsed[0].overall_score, 0.921);
        assert_eq!(parsed[1].overall_score, 0.456);
        assert_eq!(parsed[0].matched_skills, vec!["python"]);
        assert_eq!(parsed, results.iter().map(MatchExport::from).collect::<Vec<_>>());
    }
}
