pub mod embedding;
pub mod error;
pub mod export;
pub mod logging;
pub mod matching;
pub mod store;
pub mod vocab;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

// Structured résumé data produced by an external parser. Every field has a
// serde default so a record with missing keys still deserializes; the engine
// never parses résumé files itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    pub filename: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// `YYYY` or `MM/YYYY`
    pub start_date: String,
    /// `YYYY`, `MM/YYYY`, or `present`/`current`
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub graduation_year: String,
}

impl ExperienceEntry {
    /// Duration of this position in whole years. `present`/`current` end
    /// dates resolve to the current calendar year; an unparseable date makes
    /// the entry contribute 0.
    pub fn duration_years(&self) -> f64 {
        let Some(start) = parse_entry_year(&self.start_date) else {
            return 0.0;
        };

        let trimmed = self.end_date.trim();
        let end = if trimmed.eq_ignore_ascii_case("present") || trimmed.eq_ignore_ascii_case("current")
        {
            Utc::now().year()
        } else {
            match parse_entry_year(&self.end_date) {
                Some(year) => year,
                None => return 0.0,
            }
        };

        (end - start).max(0) as f64
    }
}

/// Year component of a `YYYY` or `MM/YYYY` date string.
fn parse_entry_year(raw: &str) -> Option<i32> {
    raw.trim().rsplit('/').next()?.trim().parse().ok()
}

impl CandidateRecord {
    /// Total years of work experience, recomputed from the entries on demand.
    pub fn total_experience_years(&self) -> f64 {
        self.experience.iter().map(|e| e.duration_years()).sum()
    }

    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Unknown".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// A record with no identity and nothing to score. The batch loop skips
    /// these with a warning instead of failing the whole request.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }

    /// Flattened text used by the lexical candidate store.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !self.name.trim().is_empty() {
            parts.push(format!("Name: {}", self.name));
        }
        if !self.location.trim().is_empty() {
            parts.push(format!("Location: {}", self.location));
        }
        if !self.skills.is_empty() {
            let names: Vec<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
            parts.push(format!("Skills: {}", names.join(", ")));
        }
        for exp in &self.experience {
            let mut line = format!("Experience: {} at {}", exp.title, exp.company);
            if !exp.description.trim().is_empty() {
                line.push_str(" - ");
                line.push_str(&exp.description);
            }
            parts.push(line);
        }
        for edu in &self.education {
            let mut line = format!("Education: {}", edu.degree);
            if !edu.institution.trim().is_empty() {
                line.push_str(" from ");
                line.push_str(&edu.institution);
            }
            if !edu.field_of_study.trim().is_empty() {
                line.push_str(" in ");
                line.push_str(&edu.field_of_study);
            }
            parts.push(line);
        }

        parts.join("\n")
    }
}
