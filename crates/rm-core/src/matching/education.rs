use super::requirements::RequirementSet;
use crate::CandidateRecord;

/// Score a candidate's education against the requirement set.
///
/// 0.7 when no degree is required, 0.3 when one is required and the record
/// has no education entries, otherwise `min(1.0, max_rank / 2)` over the
/// entries. The formula saturates at bachelor's (rank 2); master's and PhD
/// score the same 1.0. Kept exactly as specified rather than rescaled.
pub fn score_education(candidate: &CandidateRecord, requirements: &RequirementSet) -> f64 {
    if !requirements.requires_degree {
        return 0.7;
    }

    if candidate.education.is_empty() {
        return 0.3;
    }

    let max_rank = candidate
        .education
        .iter()
        .map(|entry| degree_rank(&entry.degree))
        .max()
        .unwrap_or(1);

    (f64::from(max_rank) / 2.0).min(1.0)
}

/// Rank a degree description: phd/doctorate 4, master 3, bachelor 2, else 1.
/// Case-insensitive substring checks, in that priority order.
fn degree_rank(degree: &str) -> u8 {
    let lowered = degree.to_lowercase();
    if lowered.contains("phd") || lowered.contains("doctorate") {
        4
    } else if lowered.contains("master") {
        3
    } else if lowered.contains("bachelor") {
        2
    } else {
        1
    }
}
