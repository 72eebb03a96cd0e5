//! Interest-Keyword Table: canonical interest labels mapped to related keyword substrings.
//!
//! Built once when the engine is constructed and never mutated afterwards. Lookups are keyed
//! by the lower-cased interest label, so "technology", "Technology" and "TECHNOLOGY" all
//! resolve to the same keyword list.

use std::collections::HashMap;

/// Canonical interests and their related keywords, in catalog order.
const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["technology", "tech", "software", "computer", "digital", "programming", "coding"],
    ),
    (
        "Programming",
        &["programming", "coding", "software", "developer", "code", "algorithm"],
    ),
    (
        "Mathematics",
        &["math", "mathematics", "calculation", "analytical", "numbers", "statistics"],
    ),
    (
        "Science",
        &["science", "scientific", "research", "experiment", "analysis"],
    ),
    (
        "Engineering",
        &["engineering", "engineer", "design", "technical", "mechanical", "electrical"],
    ),
    (
        "Art",
        &["art", "artistic", "creative", "design", "visual", "aesthetic"],
    ),
    (
        "Design",
        &["design", "designer", "creative", "visual", "graphic", "layout"],
    ),
    (
        "Creativity",
        &["creative", "creativity", "innovation", "imagination", "artistic"],
    ),
    (
        "Writing",
        &["writing", "writer", "content", "blog", "article", "language"],
    ),
    (
        "Communication",
        &["communication", "communicate", "social", "interpersonal", "presentation"],
    ),
    (
        "Business",
        &["business", "commercial", "enterprise", "management", "strategy"],
    ),
    (
        "Finance",
        &["finance", "financial", "money", "investment", "economics", "banking"],
    ),
    (
        "Marketing",
        &["marketing", "advertising", "promotion", "brand", "campaign"],
    ),
    (
        "Analytics",
        &["analytics", "analysis", "data", "statistics", "metrics", "insights"],
    ),
    (
        "Strategy",
        &["strategy", "strategic", "planning", "business", "management"],
    ),
    (
        "Psychology",
        &["psychology", "psychological", "mental", "behavior", "human"],
    ),
    (
        "Human Behavior",
        &["behavior", "human", "psychology", "social", "people"],
    ),
    (
        "Research",
        &["research", "study", "investigation", "analysis", "scientific"],
    ),
    (
        "Medicine",
        &["medicine", "medical", "health", "healthcare", "clinical", "patient"],
    ),
    (
        "Biology",
        &["biology", "biological", "life", "organism", "genetics", "biomedical"],
    ),
    (
        "Environment",
        &["environment", "environmental", "nature", "sustainability", "green"],
    ),
    (
        "Sustainability",
        &["sustainability", "sustainable", "environment", "green", "eco"],
    ),
    (
        "Nature",
        &["nature", "natural", "environment", "outdoor", "wildlife"],
    ),
    (
        "Problem Solving",
        &["problem", "solve", "solution", "analytical", "critical", "thinking"],
    ),
    (
        "Innovation",
        &["innovation", "innovative", "creative", "technology", "new"],
    ),
    (
        "Statistics",
        &["statistics", "statistical", "data", "analysis", "mathematics"],
    ),
    (
        "Visual Arts",
        &["visual", "art", "graphic", "design", "aesthetic", "creative"],
    ),
    (
        "Aesthetics",
        &["aesthetic", "beauty", "design", "visual", "art"],
    ),
    (
        "Social Media",
        &["social", "media", "digital", "marketing", "communication", "online"],
    ),
    (
        "Economics",
        &["economics", "economic", "finance", "market", "business"],
    ),
    (
        "Physics",
        &["physics", "physical", "mechanical", "engineering", "science"],
    ),
    (
        "Empathy",
        &["empathy", "empathic", "human", "psychology", "caring", "helping"],
    ),
    (
        "Language",
        &["language", "linguistic", "communication", "writing", "translation"],
    ),
];

/// Immutable lookup from lower-cased interest label to its ordered keyword list.
#[derive(Debug, Clone)]
pub struct InterestKeywordTable {
    entries: HashMap<String, &'static [&'static str]>,
}

impl InterestKeywordTable {
    pub fn new() -> Self {
        let entries = INTEREST_KEYWORDS
            .iter()
            .map(|(label, keywords)| (label.to_lowercase(), *keywords))
            .collect();
        Self { entries }
    }

    /// Keywords for an interest label, compared case-insensitively.
    /// Returns `None` for labels outside the canonical set.
    pub fn keywords_for(&self, interest: &str) -> Option<&'static [&'static str]> {
        self.entries.get(&interest.to_lowercase()).copied()
    }

    /// True when any keyword of `interest` occurs inside any of `required` (lower-cased).
    /// Scans `required` in order and stops at the first hit.
    pub fn relates_to(&self, interest: &str, required: &[&str]) -> bool {
        let Some(keywords) = self.keywords_for(interest) else {
            return false;
        };
        required.iter().any(|r| {
            let r_lower = r.to_lowercase();
            keywords.iter().any(|kw| r_lower.contains(kw))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InterestKeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical interest labels a user can pick from, sorted alphabetically.
pub fn canonical_interests() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = INTEREST_KEYWORDS.iter().map(|(label, _)| *label).collect();
    labels.sort_unstable();
    labels
}
