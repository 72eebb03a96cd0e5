//! Explanation text: a short paragraph justifying a recommendation's score.
//!
//! Up to three sentences, joined by single spaces:
//! direct-match clause, related-interest clause, score-band clause (always present).

use crate::recommendation::keywords::InterestKeywordTable;
use crate::recommendation::scoring::{direct_matches, parse_required_interests};

/// Qualitative band a match score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Strong,
    Exploratory,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreBand::Excellent
        } else if score >= 50.0 {
            ScoreBand::Strong
        } else {
            ScoreBand::Exploratory
        }
    }
}

/// Builds the explanation paragraph for one career.
pub fn explain(
    table: &InterestKeywordTable,
    user_interests: &[String],
    required_interests_raw: &str,
    career_name: &str,
    match_score: f64,
) -> String {
    let required = parse_required_interests(required_interests_raw);
    let direct = direct_matches(user_interests, &required);

    let mut related: Vec<&str> = Vec::new();
    for interest in user_interests {
        let interest = interest.as_str();
        if direct.contains(&interest) || related.contains(&interest) {
            continue;
        }
        if table.relates_to(interest, &required) {
            related.push(interest);
        }
    }

    let mut parts = Vec::with_capacity(3);

    match direct.as_slice() {
        [] => {}
        [only] => parts.push(format!(
            "Your interest in {only} directly aligns with this career path."
        )),
        many => parts.push(format!(
            "Your interests in {} directly match the requirements for {career_name}.",
            join_labels(many)
        )),
    }

    match related.as_slice() {
        [] => {}
        [only] => parts.push(format!(
            "Your interest in {only} is also relevant to this field."
        )),
        many => parts.push(format!(
            "Additionally, your interests in {} complement this career.",
            join_labels(many)
        )),
    }

    parts.push(score_sentence(career_name, match_score));
    parts.join(" ")
}

/// Closing sentence for the score band.
pub fn score_sentence(career_name: &str, match_score: f64) -> String {
    match ScoreBand::for_score(match_score) {
        ScoreBand::Excellent => format!(
            "With a {match_score:.1}% match score, {career_name} is an excellent fit for your profile."
        ),
        ScoreBand::Strong => format!(
            "With a {match_score:.1}% match score, {career_name} shows strong potential for your interests."
        ),
        ScoreBand::Exploratory => format!(
            "While there's a {match_score:.1}% match, {career_name} may still be worth exploring based on your interests."
        ),
    }
}

/// "A, B, and C": every label but the last comma-joined, then ", and" before the last.
/// Two labels render as "A, and B".
fn join_labels(labels: &[&str]) -> String {
    match labels.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
    }
}
