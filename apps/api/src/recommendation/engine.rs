//! Recommendation engine: scores every career, explains it, returns the top matches.
//!
//! `AppState` holds an `Arc<dyn Recommender>`; the engine is stateless apart from the
//! keyword table built in `new`, so one instance is shared by every request.

use tracing::debug;

use crate::models::career::CareerRecord;
use crate::models::recommendation::Recommendation;
use crate::recommendation::explanation::explain;
use crate::recommendation::keywords::InterestKeywordTable;
use crate::recommendation::scoring::score_match;

/// Number of recommendations returned per request unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// Implement this to swap recommendation backends without touching handlers.
pub trait Recommender: Send + Sync {
    fn recommend(&self, user_interests: &[String], careers: &[CareerRecord]) -> Vec<Recommendation>;
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    table: InterestKeywordTable,
    limit: usize,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            table: InterestKeywordTable::new(),
            limit,
        }
    }

    pub fn keyword_table(&self) -> &InterestKeywordTable {
        &self.table
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Scores and explains every career, sorts by score descending and keeps the top `limit`.
    /// Ties keep catalog order.
    pub fn get_recommendations(
        &self,
        user_interests: &[String],
        careers: &[CareerRecord],
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = careers
            .iter()
            .map(|career| {
                let match_score = score_match(&self.table, user_interests, &career.required_interests);
                let explanation = explain(
                    &self.table,
                    user_interests,
                    &career.required_interests,
                    &career.name,
                    match_score,
                );
                Recommendation {
                    career: career.name.clone(),
                    description: career.description.clone(),
                    match_score,
                    explanation,
                }
            })
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        recommendations.truncate(self.limit);

        debug!(
            "Scored {} careers against {} interests, returning {}",
            careers.len(),
            user_interests.len(),
            recommendations.len()
        );

        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(&self, user_interests: &[String], careers: &[CareerRecord]) -> Vec<Recommendation> {
        self.get_recommendations(user_interests, careers)
    }
}
