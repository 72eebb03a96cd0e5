pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::interests::handlers as interests;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interests
        .route("/api/v1/interests", get(interests::handle_list_interests))
        .route(
            "/api/v1/user/interests",
            get(interests::handle_get_user_interests).post(interests::handle_save_user_interests),
        )
        // Catalog and recommendations
        .route("/api/v1/careers", get(recommendation::handle_list_careers))
        .route(
            "/api/v1/recommendations",
            get(recommendation::handle_get_recommendations),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::catalog::StaticCareerCatalog;
    use crate::interests::InMemoryInterestStore;
    use crate::recommendation::engine::RecommendationEngine;

    fn app_with_catalog(catalog: StaticCareerCatalog) -> Router {
        build_router(AppState {
            recommender: Arc::new(RecommendationEngine::new()),
            catalog: Arc::new(catalog),
            interests: Arc::new(InMemoryInterestStore::new()),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_interests_sorted() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app.oneshot(get("/api/v1/interests")).await.unwrap();
        let body = body_json(response).await;
        let interests = body["interests"].as_array().unwrap();
        assert_eq!(interests.len(), 33);
        assert_eq!(interests[0], "Aesthetics");
    }

    #[tokio::test]
    async fn test_recommendations_require_saved_interests() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let uri = format!("/api/v1/recommendations?user_id={}", Uuid::new_v4());
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please submit your interests first");
    }

    #[tokio::test]
    async fn test_save_rejects_empty_interest_list() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let request = post_json(
            "/api/v1/user/interests",
            json!({ "user_id": Uuid::new_v4(), "interests": [] }),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "At least one interest is required"
        );
    }

    #[tokio::test]
    async fn test_save_then_recommend() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let user_id = Uuid::new_v4();

        let save = post_json(
            "/api/v1/user/interests",
            json!({ "user_id": user_id, "interests": ["Art", "Design"] }),
        );
        let response = app.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Interests saved successfully"
        );

        let saved = app
            .clone()
            .oneshot(get(&format!("/api/v1/user/interests?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(body_json(saved).await["interests"], json!(["Art", "Design"]));

        let response = app
            .oneshot(get(&format!("/api/v1/recommendations?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0]["career"], "Graphic Designer");
        assert_eq!(recs[0]["match_score"], 60.0);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_server_error() {
        let app = app_with_catalog(StaticCareerCatalog::new(vec![]));
        let user_id = Uuid::new_v4();
        let save = post_json(
            "/api/v1/user/interests",
            json!({ "user_id": user_id, "interests": ["Physics"] }),
        );
        app.clone().oneshot(save).await.unwrap();

        let response = app
            .oneshot(get(&format!("/api/v1/recommendations?user_id={user_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "NO_CAREERS");
    }

    #[tokio::test]
    async fn test_list_careers() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app.oneshot(get("/api/v1/careers")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["careers"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_missing_user_id_is_json_validation_error() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app.oneshot(get("/api/v1/recommendations")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_user_id_is_json_validation_error() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app
            .oneshot(get("/api/v1/user/interests?user_id=not-a-uuid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_validation_error() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/user/interests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = app_with_catalog(StaticCareerCatalog::seeded());
        let response = app.oneshot(get("/api/v1/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
