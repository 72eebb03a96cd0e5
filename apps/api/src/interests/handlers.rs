//! Axum route handlers for selectable and saved interests.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::keywords::canonical_interests;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveInterestsRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterestsResponse {
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/v1/interests
pub async fn handle_list_interests() -> Json<InterestsResponse> {
    Json(InterestsResponse {
        interests: canonical_interests()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// GET /api/v1/user/interests
pub async fn handle_get_user_interests(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<InterestsResponse>, AppError> {
    let Query(params) = query?;
    let interests = state.interests.get(params.user_id).await?;
    Ok(Json(InterestsResponse { interests }))
}

/// POST /api/v1/user/interests
///
/// Replaces the user's whole interest set.
pub async fn handle_save_user_interests(
    State(state): State<AppState>,
    body: Result<Json<SaveInterestsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = body?;
    if request.interests.is_empty() {
        return Err(AppError::Validation(
            "At least one interest is required".to_string(),
        ));
    }

    state
        .interests
        .replace(request.user_id, request.interests)
        .await?;

    Ok(Json(MessageResponse {
        message: "Interests saved successfully".to_string(),
    }))
}
