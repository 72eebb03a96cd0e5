use serde::{Deserialize, Serialize};

/// One ranked career suggestion. Created per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    pub description: String,
    /// 0.0 – 100.0, one decimal
    pub match_score: f64,
    pub explanation: String,
}
