// Career recommendation engine: keyword table, match scoring, explanation text, ranking.
// Pure computation; handlers are the only part that touches shared state.

pub mod engine;
pub mod explanation;
pub mod handlers;
pub mod keywords;
pub mod scoring;
