//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interests::handlers::UserIdQuery;
use crate::models::career::CareerRecord;
use crate::models::recommendation::Recommendation;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CareersResponse {
    pub careers: Vec<CareerRecord>,
}

/// GET /api/v1/recommendations
///
/// Ranks the catalog against the user's saved interests.
/// Requires interests to have been submitted and a non-empty catalog.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Query(params) = query?;
    let user_interests = state.interests.get(params.user_id).await?;
    if user_interests.is_empty() {
        return Err(AppError::Validation(
            "Please submit your interests first".to_string(),
        ));
    }

    let careers = state.catalog.list_careers().await?;
    if careers.is_empty() {
        return Err(AppError::NoCareers);
    }

    let recommendations = state.recommender.recommend(&user_interests, &careers);

    Ok(Json(RecommendationsResponse { recommendations }))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<CareersResponse>, AppError> {
    let careers = state.catalog.list_careers().await?;
    Ok(Json(CareersResponse { careers }))
}
