//! # Full Vote Flow
//!
//! The client-side protocol end to end: vault creation and unlock, identity
//! derivation, submission assembly, duplicate detection, aggregation.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    use mora_aggregate::{
        AggregationApi, AggregationService, CommitmentError, CommitmentStore,
        InMemoryAggregateStore, InMemoryCommitmentStore, PoolEpochCloser,
    };
    use mora_epoch::epoch_id;
    use mora_identity::{build_submission, derive_identity_secret, AnswerBit};
    use mora_pool::{InMemoryQuestionStore, PoolApi, PoolService};
    use mora_vault::{
        create_vault, unwrap_item, unwrap_vault, wrap_item, UnlockSecret, VaultMasterKey,
        VaultSession,
    };
    use shared_types::{EpochId, NewQuestion, QuestionStatus};

    fn seed() -> NewQuestion {
        NewQuestion {
            title: Some("The Last Dose".into()),
            image: None,
            text: "One dose, two patients.".into(),
            answers: vec!["Treat the doctor".into(), "Treat the child".into()],
        }
    }

    #[tokio::test]
    async fn test_vote_flow_from_vault_to_aggregate() {
        // Server-side wiring.
        let questions = Arc::new(InMemoryQuestionStore::new());
        let pool: Arc<dyn PoolApi> = Arc::new(PoolService::new(Arc::clone(&questions)));
        let commitments = Arc::new(InMemoryCommitmentStore::new());
        let aggregation = AggregationService::new(
            Arc::clone(&commitments),
            Arc::new(InMemoryAggregateStore::new()),
            Arc::new(PoolEpochCloser::new(Arc::clone(&pool))),
        );
        pool.add_question(seed()).await.unwrap();

        let now = Utc.with_ymd_and_hms(2015, 6, 23, 0, 30, 0).unwrap();
        let resolved = pool.resolve_active_question(now).await.unwrap();
        let epoch = epoch_id(now);
        assert_eq!(epoch.as_str(), "01230615");

        // Client-side: session-scoped vault, identity, submission.
        let vmk = VaultMasterKey::generate();
        let mut session = VaultSession::new();
        session.install(vmk.clone());

        let secret = derive_identity_secret(session.vmk().unwrap());
        let encrypted = wrap_item(b"1", &vmk).unwrap();
        let parts = build_submission(
            &secret,
            resolved.question.id,
            &epoch,
            AnswerBit::B,
            hex::encode(&encrypted.ciphertext),
        );

        let record = commitments.insert(parts.payload.clone()).await.unwrap();
        assert_eq!(record.plaintext_answer_bit, 1);

        // A second attempt from the same vault in the same epoch collides.
        let retry = build_submission(
            &secret,
            resolved.question.id,
            &epoch,
            AnswerBit::A,
            "ct".into(),
        );
        let err = commitments.insert(retry.payload).await.unwrap_err();
        assert!(matches!(err, CommitmentError::DuplicateNullifier));

        // Operator aggregation finalizes the question.
        let aggregate = aggregation.aggregate(&epoch).await.unwrap();
        assert_eq!(aggregate.total_responses, 1);
        assert_eq!(aggregate.winning_answer, 1);
        assert_eq!(
            questions.question(resolved.question.id).unwrap().status,
            QuestionStatus::Finalized
        );

        // Logout drops the resident key; the vote's ciphertext still opens
        // with the VMK the client kept wrapped server-side.
        session.clear();
        assert!(session.vmk().is_none());
        assert_eq!(unwrap_item(&encrypted, &vmk).unwrap(), b"1");
    }

    #[tokio::test]
    async fn test_same_vault_votes_in_two_epochs() {
        let commitments = Arc::new(InMemoryCommitmentStore::new());
        let vmk = VaultMasterKey::from_bytes([7u8; 32]);
        let secret = derive_identity_secret(&vmk);

        let first = build_submission(&secret, 7, &EpochId::new("01230615"), AnswerBit::A, "ct".into());
        let second =
            build_submission(&secret, 7, &EpochId::new("02230615"), AnswerBit::A, "ct".into());
        assert_ne!(first.payload.nullifier, second.payload.nullifier);

        commitments.insert(first.payload).await.unwrap();
        commitments.insert(second.payload).await.unwrap();
        assert_eq!(commitments.len(), 2);
    }

    #[tokio::test]
    async fn test_vault_password_roundtrip_reproduces_identity() {
        // The identity must survive logout/unlock: wrap, unwrap, re-derive.
        let mut session = VaultSession::new();
        let material = create_vault("hunter2hunter2", "hunter2hunter2", &mut session).unwrap();
        let secret_before = derive_identity_secret(session.vmk().unwrap());
        session.clear();

        let unwrapped = unwrap_vault(UnlockSecret::Password("hunter2hunter2"), &material).unwrap();
        let secret_after = derive_identity_secret(&unwrapped);

        assert_eq!(secret_before.as_bytes(), secret_after.as_bytes());
    }
}
