//! # Gateway HTTP Flow
//!
//! The request-level surface exercised through the axum router: seeding,
//! resolution, submission, duplicate rejection, aggregation, results.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use mora_aggregate::{
        AggregationService, InMemoryAggregateStore, InMemoryCommitmentStore, PoolEpochCloser,
    };
    use mora_gateway::{build_router, AppState, StaticTokenValidator};
    use mora_identity::{build_submission, derive_identity_secret, AnswerBit};
    use mora_pool::{InMemoryQuestionStore, PoolApi, PoolService};
    use mora_vault::VaultMasterKey;
    use shared_types::EpochId;

    const SESSION: &str = "session-token";
    const OPERATOR: &str = "operator-key";

    fn router() -> Router {
        let questions = Arc::new(InMemoryQuestionStore::new());
        let pool: Arc<dyn PoolApi> = Arc::new(PoolService::new(questions));
        let commitments = Arc::new(InMemoryCommitmentStore::new());
        let aggregation = Arc::new(AggregationService::new(
            Arc::clone(&commitments),
            Arc::new(InMemoryAggregateStore::new()),
            Arc::new(PoolEpochCloser::new(Arc::clone(&pool))),
        ));
        build_router(AppState {
            pool,
            aggregation,
            commitments,
            sessions: Arc::new(StaticTokenValidator::new(SESSION)),
            manage_api_key: OPERATOR.into(),
        })
    }

    async fn call(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn json_post(path: &str, auth: (&str, &str), body: serde_json::Value) -> Request<Body> {
        Request::post(path)
            .header(auth.0, auth.1)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn seed_and_resolve(router: &Router) -> (u32, String) {
        let (status, _) = call(
            router,
            json_post(
                "/api/game/manage/questions",
                ("x-api-key", OPERATOR),
                serde_json::json!({
                    "title": "The Signal Box",
                    "text": "Throw the switch?",
                    "answers": ["Throw it", "Leave it"],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(
            router,
            Request::get("/api/game/active-question")
                .header("x-session-token", SESSION)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ACTIVE");
        assert_eq!(body["answers"].as_array().unwrap().len(), 2);

        let question_id = body["id"].as_u64().unwrap() as u32;
        let epoch_id = body["epoch_id"].as_str().unwrap().to_string();
        (question_id, epoch_id)
    }

    fn submission(question_id: u32, epoch_id: &str, vmk_seed: u8, bit: AnswerBit) -> serde_json::Value {
        let vmk = VaultMasterKey::from_bytes([vmk_seed; 32]);
        let secret = derive_identity_secret(&vmk);
        let parts = build_submission(
            &secret,
            question_id,
            &EpochId::new(epoch_id),
            bit,
            "ciphertext".into(),
        );
        serde_json::to_value(&parts.payload).unwrap()
    }

    #[tokio::test]
    async fn test_full_round_over_http() {
        let router = router();
        let (question_id, epoch_id) = seed_and_resolve(&router).await;

        // Three voters: two for A, one for B.
        for (seed, bit) in [(1u8, AnswerBit::A), (2, AnswerBit::A), (3, AnswerBit::B)] {
            let (status, body) = call(
                &router,
                json_post(
                    "/api/game/commitments",
                    ("x-session-token", SESSION),
                    submission(question_id, &epoch_id, seed, bit),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert!(body["id"].as_u64().is_some());
            assert!(body["submitted_at"].as_str().is_some());
        }

        // Operator aggregates the epoch.
        let (status, body) = call(
            &router,
            json_post(
                "/api/game/manage/aggregate",
                ("x-api-key", OPERATOR),
                serde_json::json!({ "epoch_id": epoch_id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        // Past results show the tally.
        let (status, body) = call(
            &router,
            Request::get("/api/game/past-results")
                .header("x-session-token", SESSION)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["count_a"], 2);
        assert_eq!(results[0]["count_b"], 1);
        assert_eq!(results[0]["winning_answer"], 0);

        // The sample preview now serves the finalized question, no auth.
        let (status, body) = call(
            &router,
            Request::get("/api/game/active-question?sample=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"].as_u64().unwrap() as u32, question_id);
    }

    #[tokio::test]
    async fn test_duplicate_vote_is_409_next_epoch_succeeds() {
        let router = router();
        let (question_id, epoch_id) = seed_and_resolve(&router).await;

        let first = submission(question_id, &epoch_id, 7, AnswerBit::A);
        let (status, _) = call(
            &router,
            json_post("/api/game/commitments", ("x-session-token", SESSION), first),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        // Same vault, same epoch: identical nullifier even with the other answer.
        let duplicate = submission(question_id, &epoch_id, 7, AnswerBit::B);
        let (status, body) = call(
            &router,
            json_post(
                "/api/game/commitments",
                ("x-session-token", SESSION),
                duplicate,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("Already submitted"));

        // A different epoch derives a fresh nullifier and is accepted.
        let next_epoch = if epoch_id.starts_with("24") {
            format!("01{}", &epoch_id[2..])
        } else {
            let hour: u32 = epoch_id[..2].parse().unwrap();
            format!("{:02}{}", hour + 1, &epoch_id[2..])
        };
        let (status, _) = call(
            &router,
            json_post(
                "/api/game/commitments",
                ("x-session-token", SESSION),
                submission(question_id, &next_epoch, 7, AnswerBit::B),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_operator_can_inspect_epoch_commitments() {
        let router = router();
        let (question_id, epoch_id) = seed_and_resolve(&router).await;

        call(
            &router,
            json_post(
                "/api/game/commitments",
                ("x-session-token", SESSION),
                submission(question_id, &epoch_id, 11, AnswerBit::B),
            ),
        )
        .await;

        let (status, body) = call(
            &router,
            Request::get(format!("/api/game/manage/commitments?epoch_id={epoch_id}"))
                .header("x-api-key", OPERATOR)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["plaintext_answer_bit"], 1);
        assert_eq!(rows[0]["nullifier"].as_str().unwrap().len(), 64);

        // Session token is not enough for the manage surface.
        let (status, _) = call(
            &router,
            Request::get(format!("/api/game/manage/commitments?epoch_id={epoch_id}"))
                .header("x-session-token", SESSION)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_aggregate_requires_commitments() {
        let router = router();
        seed_and_resolve(&router).await;

        let (status, body) = call(
            &router,
            json_post(
                "/api/game/manage/aggregate",
                ("x-api-key", OPERATOR),
                serde_json::json!({ "epoch_id": "24311299" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("No commitments"));
    }
}
