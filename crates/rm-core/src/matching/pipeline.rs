use std::cmp::Ordering;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::explanation::build_explanation;
use super::requirements::{extract_requirements, RequirementSet};
use super::scoring::{score_candidate, ScoreBundle};
use crate::embedding::{init_provider_from_env, EmbeddingConfig, SimilarityProvider};
use crate::error::MatchError;
use crate::CandidateRecord;

#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Number of ranked results to return; must be at least 1.
    pub top_k: usize,
    /// Explanation rendering can be suppressed per request to save cost.
    pub include_explanations: bool,
    /// Optional wall-clock budget for the whole batch. Candidates whose
    /// scoring would start after the budget is spent are skipped and the
    /// report is marked partial.
    pub budget: Option<Duration>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            include_explanations: true,
            budget: None,
        }
    }
}

/// One ranked match: scores, identity, optional explanation, and the full
/// record for downstream display.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub candidate_name: String,
    pub filename: String,
    pub scores: ScoreBundle,
    pub explanation: String,
    pub candidate: CandidateRecord,
}

#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    /// Ranked results, best first, at most `top_k` entries.
    pub results: Vec<MatchResult>,
    /// One entry per skipped candidate, plus a budget notice when partial.
    pub warnings: Vec<String>,
    /// True when the time budget cut the batch short.
    pub partial: bool,
}

/// Stateless matching engine: requirement extraction, parallel per-candidate
/// scoring, stable ranking, top-k truncation. The only shared state is the
/// optional similarity provider, which is read-only.
pub struct MatchingEngine {
    provider: Option<Box<dyn SimilarityProvider>>,
    threshold: f32,
}

impl MatchingEngine {
    /// Engine without semantic fallback: direct skill matching only.
    pub fn new() -> Self {
        Self {
            provider: None,
            threshold: crate::embedding::SEMANTIC_MATCH_THRESHOLD,
        }
    }

    pub fn with_provider(provider: Box<dyn SimilarityProvider>, config: &EmbeddingConfig) -> Self {
        Self {
            provider: Some(provider),
            threshold: config.threshold,
        }
    }

    /// Build from `RM_EMBEDDING_*` environment settings.
    pub fn from_env() -> Self {
        let (config, provider) = init_provider_from_env();
        Self {
            provider,
            threshold: config.threshold,
        }
    }

    /// Rank candidates against a job description.
    ///
    /// Empty job descriptions are fine (all-default requirements, every
    /// candidate scores neutrally); an empty candidate slice returns an
    /// empty report. `top_k < 1` is the only validation failure. A
    /// malformed candidate is skipped with a warning, never fatal.
    pub fn find_matches(
        &self,
        job_description: &str,
        candidates: &[CandidateRecord],
        options: &MatchOptions,
    ) -> Result<MatchReport, MatchError> {
        if options.top_k < 1 {
            return Err(MatchError::InvalidTopK(options.top_k));
        }
        if candidates.is_empty() {
            return Ok(MatchReport::default());
        }

        let requirements = extract_requirements(job_description);
        debug!(
            required_skills = requirements.required_skills.len(),
            required_years = requirements.required_experience_years,
            requires_degree = requirements.requires_degree,
            is_senior_role = requirements.is_senior_role,
            candidates = candidates.len(),
            "matching batch"
        );

        let started = Instant::now();
        let provider = self.provider.as_deref();

        // Scoring is embarrassingly parallel; the ordered collect keeps input
        // order so that the later stable sort preserves it for ties.
        let outcomes: Vec<Outcome> = candidates
            .par_iter()
            .map(|candidate| self.score_one(candidate, &requirements, provider, options, started))
            .collect();

        let mut report = MatchReport::default();
        let mut over_budget = 0usize;
        for outcome in outcomes {
            match outcome {
                Outcome::Scored(result) => report.results.push(result),
                Outcome::Skipped(warning) => report.warnings.push(warning),
                Outcome::OverBudget => over_budget += 1,
            }
        }

        if over_budget > 0 {
            report.partial = true;
            let warning =
                format!("time budget exhausted; {over_budget} candidates were not scored");
            warn!(over_budget, "partial match batch");
            report.warnings.push(warning);
        }

        // Stable descending sort: equal overall scores keep input order.
        report.results.sort_by(|a, b| {
            b.scores
                .overall_score
                .partial_cmp(&a.scores.overall_score)
                .unwrap_or(Ordering::Equal)
        });
        report.results.truncate(options.top_k);

        Ok(report)
    }

    fn score_one(
        &self,
        candidate: &CandidateRecord,
        requirements: &RequirementSet,
        provider: Option<&dyn SimilarityProvider>,
        options: &MatchOptions,
        started: Instant,
    ) -> Outcome {
        if let Some(budget) = options.budget {
            if started.elapsed() >= budget {
                return Outcome::OverBudget;
            }
        }

        match score_candidate(candidate, requirements, provider, self.threshold) {
            Ok(scores) => {
                debug!(
                    candidate = %candidate.display_name(),
                    overall = scores.overall_score,
                    skills = scores.skill_score,
                    experience = scores.experience_score,
                    education = scores.education_score,
                    "scored candidate"
                );

                let explanation = if options.include_explanations {
                    build_explanation(candidate, requirements, &scores)
                } else {
                    String::new()
                };

                Outcome::Scored(MatchResult {
                    candidate_name: candidate.display_name(),
                    filename: candidate.filename.clone(),
                    scores,
                    explanation,
                    candidate: candidate.clone(),
                })
            }
            Err(err) => {
                warn!(
                    filename = %candidate.filename,
                    error = %err,
                    "skipping candidate"
                );
                Outcome::Skipped(err.to_string())
            }
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

enum Outcome {
    Scored(MatchResult),
    Skipped(String),
    OverBudget,
}
