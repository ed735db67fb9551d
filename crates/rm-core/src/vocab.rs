//! Static vocabularies scanned against job description text.
//!
//! These are immutable configuration tables, loaded once; the requirement
//! extractor iterates them in declaration order, which fixes the order of
//! `RequirementSet::required_skills` and therefore of direct skill matches.

/// Curated skill vocabulary by category. Matching is a lowercase substring
/// check, so variants like "react.js" still hit "react"; false positives are
/// an accepted tradeoff.
pub const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &["python", "java", "javascript", "c++", "c#", "php", "ruby", "go"],
    ),
    (
        "frameworks",
        &["react", "angular", "vue", "django", "flask", "spring", "node.js"],
    ),
    (
        "databases",
        &["mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
    ),
    (
        "cloud_technologies",
        &["aws", "azure", "gcp", "docker", "kubernetes"],
    ),
    (
        "data_science",
        &[
            "machine learning",
            "deep learning",
            "data science",
            "tensorflow",
            "pytorch",
        ],
    ),
    ("tools", &["git", "jenkins", "jira", "confluence"]),
];

/// Any of these anywhere in the text flags a degree requirement.
pub const DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "degree", "university", "college"];

/// Any of these anywhere in the text flags a senior role.
pub const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead", "principal", "architect", "manager"];

/// All skill tokens in vocabulary order.
pub fn skill_tokens() -> impl Iterator<Item = &'static str> {
    SKILL_VOCABULARY
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
}

/// Category of a known vocabulary skill, if any.
pub fn category_of(skill: &str) -> Option<&'static str> {
    SKILL_VOCABULARY
        .iter()
        .find(|(_, skills)| skills.contains(&skill))
        .map(|(category, _)| *category)
}
