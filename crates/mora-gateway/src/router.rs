//! Router assembly and shared application state.

use crate::auth::SessionValidator;
use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use mora_aggregate::{AggregationApi, CommitmentStore};
use mora_pool::PoolApi;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Question pool subsystem.
    pub pool: Arc<dyn PoolApi>,
    /// Aggregation subsystem.
    pub aggregation: Arc<dyn AggregationApi>,
    /// Commitment store (submission path writes directly).
    pub commitments: Arc<dyn CommitmentStore>,
    /// Session-token validation.
    pub sessions: Arc<dyn SessionValidator>,
    /// Operator key for the manage surface.
    pub manage_api_key: String,
}

/// Assemble the gateway router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/game/active-question", get(handlers::active_question))
        .route("/api/game/commitments", post(handlers::submit_commitment))
        .route("/api/game/past-results", get(handlers::past_results))
        .route("/api/game/manage/aggregate", post(handlers::aggregate))
        .route("/api/game/manage/questions", post(handlers::add_question))
        .route(
            "/api/game/manage/commitments",
            get(handlers::commitments_by_epoch),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenValidator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mora_aggregate::{
        AggregationService, InMemoryAggregateStore, InMemoryCommitmentStore, PoolEpochCloser,
    };
    use mora_pool::{InMemoryQuestionStore, PoolService};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let question_store = Arc::new(InMemoryQuestionStore::new());
        let pool: Arc<dyn PoolApi> = Arc::new(PoolService::new(question_store));
        let commitments = Arc::new(InMemoryCommitmentStore::new());
        let aggregates = Arc::new(InMemoryAggregateStore::new());
        let closer = Arc::new(PoolEpochCloser::new(Arc::clone(&pool)));
        let aggregation = Arc::new(AggregationService::new(
            Arc::clone(&commitments),
            aggregates,
            closer,
        ));

        build_router(AppState {
            pool,
            aggregation,
            commitments,
            sessions: Arc::new(StaticTokenValidator::new("token")),
            manage_api_key: "operator-key".into(),
        })
    }

    async fn send(router: Router, request: Request<Body>) -> StatusCode {
        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_active_question_requires_session() {
        let status = send(
            test_router(),
            Request::get("/api/game/active-question")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sample_is_anonymous_but_empty_pool_is_404() {
        let status = send(
            test_router(),
            Request::get("/api/game/active-question?sample=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_active_question_resolves_with_session() {
        let router = test_router();
        let seed = Request::post("/api/game/manage/questions")
            .header("x-api-key", "operator-key")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&serde_json::json!({
                    "title": "Q",
                    "text": "dilemma",
                    "answers": ["A", "B"],
                }))
                .unwrap(),
            ))
            .unwrap();
        assert_eq!(send(router.clone(), seed).await, StatusCode::CREATED);

        let status = send(
            router,
            Request::get("/api/game/active-question")
                .header("x-session-token", "token")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_manage_surface_rejects_bad_operator_key() {
        let status = send(
            test_router(),
            Request::post("/api/game/manage/aggregate")
                .header("x-api-key", "wrong")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"epoch_id":"01230615"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_commitment_payload_is_validated() {
        let status = send(
            test_router(),
            Request::post("/api/game/commitments")
                .header("x-session-token", "token")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&serde_json::json!({
                        "question_id": 7,
                        "epoch_id": "01230615",
                        "nullifier": "too-short",
                        "commitment": "cd".repeat(32),
                        "encrypted_answer": "ct",
                        "plaintext_answer_bit": 0,
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_commitment_is_conflict() {
        let router = test_router();
        let body = serde_json::to_vec(&serde_json::json!({
            "question_id": 7,
            "epoch_id": "01230615",
            "nullifier": "ab".repeat(32),
            "commitment": "cd".repeat(32),
            "encrypted_answer": "ct",
            "plaintext_answer_bit": 0,
        }))
        .unwrap();
        let request = |body: Vec<u8>| {
            Request::post("/api/game/commitments")
                .header("x-session-token", "token")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap()
        };

        assert_eq!(
            send(router.clone(), request(body.clone())).await,
            StatusCode::CREATED
        );
        assert_eq!(send(router, request(body)).await, StatusCode::CONFLICT);
    }
}
