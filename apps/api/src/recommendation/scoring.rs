//! Match scoring: measures a user's interests against a career's required interests.
//!
//! Algorithm:
//! 1. Empty requirement string → 0.
//! 2. direct_matches = user interests (case-insensitive) present in the requirements.
//! 3. keyword_matches = +0.5 per user interest whose table keywords occur inside any
//!    requirement (first hit wins, at most one credit per interest).
//! 4. score = min(100, round((direct + keyword) / total_requirements × 100, 1))
//!
//! Direct and keyword credit are independent: an interest that matches a requirement exactly
//! usually also hits its own keyword and earns 1.5 in total.

use crate::recommendation::keywords::InterestKeywordTable;

const KEYWORD_CREDIT: f64 = 0.5;
const MAX_SCORE: f64 = 100.0;

/// Stepwise intermediate values of a single match computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    pub direct_matches: usize,
    pub keyword_matches: f64,
    pub total_possible: usize,
}

impl MatchBreakdown {
    /// Percentage score, clamped to 100 and rounded to one decimal.
    pub fn score(&self) -> f64 {
        if self.total_possible == 0 {
            return 0.0;
        }
        let raw = (self.direct_matches as f64 + self.keyword_matches)
            / self.total_possible as f64
            * 100.0;
        round_to_tenth(raw).min(MAX_SCORE)
    }
}

/// Splits a comma-joined requirement string, trimming each label.
/// Order and duplicates are preserved.
pub fn parse_required_interests(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

/// User interests that equal (case-insensitively) any required interest, in user order.
pub fn direct_matches<'a>(user_interests: &'a [String], required: &[&str]) -> Vec<&'a str> {
    let required_lower: Vec<String> = required.iter().map(|r| r.to_lowercase()).collect();
    user_interests
        .iter()
        .filter(|u| required_lower.contains(&u.to_lowercase()))
        .map(String::as_str)
        .collect()
}

pub fn compute_breakdown(
    table: &InterestKeywordTable,
    user_interests: &[String],
    required: &[&str],
) -> MatchBreakdown {
    let direct = direct_matches(user_interests, required).len();

    let keyword_matches = user_interests
        .iter()
        .filter(|u| table.relates_to(u, required))
        .count() as f64
        * KEYWORD_CREDIT;

    MatchBreakdown {
        direct_matches: direct,
        keyword_matches,
        total_possible: required.len(),
    }
}

/// Match score in [0, 100] for one career's raw requirement string.
pub fn score_match(
    table: &InterestKeywordTable,
    user_interests: &[String],
    required_interests_raw: &str,
) -> f64 {
    if required_interests_raw.is_empty() {
        return 0.0;
    }
    let required = parse_required_interests(required_interests_raw);
    compute_breakdown(table, user_interests, &required).score()
}

/// Rounds to one decimal place, ties to even on the exact binary value.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
