//! # Lifecycle Scenarios
//!
//! Pool promotion, recycling, and aggregation exercised together over the
//! in-memory adapters, one service wiring per test.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Arc;

    use mora_aggregate::{
        AggregationApi, AggregationService, CommitmentStore, InMemoryAggregateStore,
        InMemoryCommitmentStore, PoolEpochCloser,
    };
    use mora_pool::{InMemoryQuestionStore, PoolApi, PoolError, PoolService};
    use shared_types::{EpochId, NewCommitment, NewQuestion, QuestionStatus};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    struct World {
        questions: Arc<InMemoryQuestionStore>,
        commitments: Arc<InMemoryCommitmentStore>,
        pool: Arc<dyn PoolApi>,
        aggregation:
            AggregationService<InMemoryCommitmentStore, InMemoryAggregateStore, PoolEpochCloser>,
    }

    fn world() -> World {
        let questions = Arc::new(InMemoryQuestionStore::new());
        let pool: Arc<dyn PoolApi> = Arc::new(PoolService::new(Arc::clone(&questions)));
        let commitments = Arc::new(InMemoryCommitmentStore::new());
        let aggregation = AggregationService::new(
            Arc::clone(&commitments),
            Arc::new(InMemoryAggregateStore::new()),
            Arc::new(PoolEpochCloser::new(Arc::clone(&pool))),
        );
        World {
            questions,
            commitments,
            pool,
            aggregation,
        }
    }

    fn question(text: &str) -> NewQuestion {
        NewQuestion {
            title: Some(text.to_uppercase()),
            image: None,
            text: text.into(),
            answers: vec!["Answer A".into(), "Answer B".into()],
        }
    }

    fn commitment(question_id: u32, epoch: &str, nullifier: &str, bit: u8) -> NewCommitment {
        NewCommitment {
            question_id,
            epoch_id: EpochId::new(epoch),
            nullifier: nullifier.into(),
            commitment: format!("c-{nullifier}"),
            encrypted_answer: "ct".into(),
            plaintext_answer_bit: bit,
        }
    }

    /// 2015-06-23 00:30 UTC → epoch "01230615".
    fn scenario_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 6, 23, 0, 30, 0).unwrap()
    }

    // =========================================================================
    // SCENARIO A: promotion of the latest UPCOMING question
    // =========================================================================

    #[tokio::test]
    async fn test_scenario_a_promotion() {
        let w = world();
        w.pool.add_question(question("q1")).await.unwrap();

        let resolved = w.pool.resolve_active_question(scenario_now()).await.unwrap();

        assert_eq!(resolved.question.status, QuestionStatus::Active);
        assert_eq!(
            resolved.question.epoch_id.as_ref().map(|e| e.as_str()),
            Some("01230615")
        );
        let opens_at = resolved.question.opens_at.unwrap();
        let closes_at = resolved.question.closes_at.unwrap();
        assert_eq!(
            opens_at,
            Utc.with_ymd_and_hms(2015, 6, 23, 0, 0, 0).unwrap()
        );
        assert!(closes_at < Utc.with_ymd_and_hms(2015, 6, 23, 1, 0, 0).unwrap());
        assert_eq!(resolved.answers[0].text, "Answer A");
        assert_eq!(resolved.answers[1].text, "Answer B");

        // Exactly one ACTIVE row for this epoch.
        let active = w.questions.questions_with_status(QuestionStatus::Active);
        assert_eq!(active.len(), 1);
    }

    // =========================================================================
    // SCENARIO B: aggregation tallies 4/3 and finalizes the question
    // =========================================================================

    #[tokio::test]
    async fn test_scenario_b_aggregation() {
        let w = world();
        w.pool.add_question(question("q1")).await.unwrap();
        let resolved = w.pool.resolve_active_question(scenario_now()).await.unwrap();
        let question_id = resolved.question.id;

        for i in 0..4 {
            w.commitments
                .insert(commitment(question_id, "01230615", &format!("n-a-{i}"), 0))
                .await
                .unwrap();
        }
        for i in 0..3 {
            w.commitments
                .insert(commitment(question_id, "01230615", &format!("n-b-{i}"), 1))
                .await
                .unwrap();
        }

        let record = w
            .aggregation
            .aggregate(&EpochId::new("01230615"))
            .await
            .unwrap();

        assert_eq!(record.total_responses, 7);
        assert_eq!(record.count_a, 4);
        assert_eq!(record.count_b, 3);
        assert_eq!(record.winning_answer, 0);
        assert_eq!(
            w.questions.question(question_id).unwrap().status,
            QuestionStatus::Finalized
        );
    }

    // =========================================================================
    // SCENARIO C: recycling a FINALIZED question into a fresh clone
    // =========================================================================

    #[tokio::test]
    async fn test_scenario_c_recycling() {
        let w = world();
        let q7 = w.pool.add_question(question("q7")).await.unwrap();

        // Live in one epoch, then aggregated and finalized.
        w.pool.resolve_active_question(scenario_now()).await.unwrap();
        w.commitments
            .insert(commitment(q7.id, "01230615", "n-1", 0))
            .await
            .unwrap();
        w.aggregation
            .aggregate(&EpochId::new("01230615"))
            .await
            .unwrap();

        // Next epoch: no UPCOMING rows remain, so resolution recycles.
        let next_hour = scenario_now() + chrono::Duration::hours(1);
        let resolved = w.pool.resolve_active_question(next_hour).await.unwrap();

        assert_ne!(resolved.question.id, q7.id);
        assert_eq!(resolved.question.text, "q7");
        assert_eq!(resolved.question.times_asked, 1);
        assert_eq!(
            resolved.question.epoch_id.as_ref().map(|e| e.as_str()),
            Some("02230615")
        );
        // The source row's history is untouched.
        let source = w.questions.question(q7.id).unwrap();
        assert_eq!(source.status, QuestionStatus::Finalized);
        assert_eq!(source.times_asked, 1);
    }

    // =========================================================================
    // SCENARIO D: duplicate nullifier rejected, next epoch accepted
    // =========================================================================

    #[tokio::test]
    async fn test_scenario_d_duplicate_detection() {
        let w = world();

        let nullifier_epoch_1 = "aa".repeat(32);
        w.commitments
            .insert(commitment(7, "01230615", &nullifier_epoch_1, 0))
            .await
            .unwrap();

        // Same identity, question, epoch → identical nullifier → rejected.
        let err = w
            .commitments
            .insert(commitment(7, "01230615", &nullifier_epoch_1, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            mora_aggregate::CommitmentError::DuplicateNullifier
        ));

        // Next epoch produces a different nullifier → accepted.
        let nullifier_epoch_2 = "bb".repeat(32);
        w.commitments
            .insert(commitment(7, "02230615", &nullifier_epoch_2, 1))
            .await
            .unwrap();
        assert_eq!(w.commitments.len(), 2);
    }

    // =========================================================================
    // POOL EDGE CASES ACROSS SUBSYSTEMS
    // =========================================================================

    #[tokio::test]
    async fn test_pool_exhaustion_after_no_seed() {
        let w = world();
        let err = w
            .pool
            .resolve_active_question(scenario_now())
            .await
            .unwrap_err();
        assert!(matches!(err, PoolError::PoolExhausted));
    }

    #[tokio::test]
    async fn test_previous_epoch_question_demoted_on_rollover() {
        let w = world();
        w.pool.add_question(question("q1")).await.unwrap();
        w.pool.add_question(question("q2")).await.unwrap();

        let first = w.pool.resolve_active_question(scenario_now()).await.unwrap();
        let second = w
            .pool
            .resolve_active_question(scenario_now() + chrono::Duration::hours(1))
            .await
            .unwrap();

        assert_ne!(first.question.id, second.question.id);
        assert_eq!(
            w.questions.question(first.question.id).unwrap().status,
            QuestionStatus::Aggregating
        );
        // Never more than the current + previous ACTIVE rows.
        assert!(w.questions.questions_with_status(QuestionStatus::Active).len() <= 2);
    }

    #[tokio::test]
    async fn test_aggregating_an_epoch_with_no_commitments_fails() {
        let w = world();
        w.pool.add_question(question("q1")).await.unwrap();
        w.pool.resolve_active_question(scenario_now()).await.unwrap();

        let err = w
            .aggregation
            .aggregate(&EpochId::new("01230615"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            mora_aggregate::AggregationError::NoCommitments { .. }
        ));
        // The question is left un-finalized for a later, real run.
        assert!(w
            .questions
            .questions_with_status(QuestionStatus::Finalized)
            .is_empty());
    }
}
