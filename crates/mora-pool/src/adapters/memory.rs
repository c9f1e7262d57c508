//! In-Memory Question Store
//!
//! Implements `QuestionStore` over process memory. The whole table pair
//! lives under one `RwLock`, which is what makes `promote_if_vacant` a true
//! compare-and-set: the status check, the epoch-vacancy check, and the write
//! happen under a single write guard.

use crate::ports::outbound::QuestionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rand::Rng;
use shared_types::{
    Answer, AnswerId, EpochId, NewQuestion, Question, QuestionId, QuestionStatus, StoreError,
};

#[derive(Default)]
struct Inner {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    next_question_id: QuestionId,
    next_answer_id: AnswerId,
}

/// In-memory adapter for `questions_repo` + `question_answers`.
#[derive(Default)]
pub struct InMemoryQuestionStore {
    inner: RwLock<Inner>,
}

impl InMemoryQuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Test/diagnostic read of one question row.
    pub fn question(&self, question_id: QuestionId) -> Option<Question> {
        self.inner
            .read()
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .cloned()
    }

    /// Test/diagnostic read of all rows with a status.
    pub fn questions_with_status(&self, status: QuestionStatus) -> Vec<Question> {
        self.inner
            .read()
            .questions
            .iter()
            .filter(|q| q.status == status)
            .cloned()
            .collect()
    }

    /// Force a row's status and epoch, bypassing lifecycle guards. Test-state
    /// setup only; production mutation goes through the port methods.
    pub fn force_state(
        &self,
        question_id: QuestionId,
        status: QuestionStatus,
        epoch_id: Option<EpochId>,
    ) {
        let mut inner = self.inner.write();
        if let Some(q) = inner.questions.iter_mut().find(|q| q.id == question_id) {
            q.status = status;
            q.epoch_id = epoch_id;
            if q.closes_at.is_none() && status != QuestionStatus::Upcoming {
                q.opens_at = Some(Utc::now());
                q.closes_at = Some(Utc::now());
            }
        }
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn count_active(&self) -> Result<u64, StoreError> {
        Ok(self
            .inner
            .read()
            .questions
            .iter()
            .filter(|q| q.status == QuestionStatus::Active)
            .count() as u64)
    }

    async fn active_in_epoch(
        &self,
        epoch_id: &EpochId,
        limit: usize,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .inner
            .read()
            .questions
            .iter()
            .filter(|q| q.status == QuestionStatus::Active && q.epoch_id.as_ref() == Some(epoch_id))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn latest_upcoming(&self) -> Result<Option<Question>, StoreError> {
        Ok(self
            .inner
            .read()
            .questions
            .iter()
            .filter(|q| q.status == QuestionStatus::Upcoming)
            .max_by_key(|q| (q.created_at, q.id))
            .cloned())
    }

    async fn random_finalized(&self) -> Result<Option<Question>, StoreError> {
        let inner = self.inner.read();
        let finalized: Vec<&Question> = inner
            .questions
            .iter()
            .filter(|q| q.status == QuestionStatus::Finalized)
            .collect();
        if finalized.is_empty() {
            return Ok(None);
        }
        let pick = rand::thread_rng().gen_range(0..finalized.len());
        Ok(Some(finalized[pick].clone()))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.inner.write();

        inner.next_question_id += 1;
        let question = Question {
            id: inner.next_question_id,
            title: new.title,
            image: new.image,
            text: new.text,
            status: QuestionStatus::Upcoming,
            epoch_id: None,
            opens_at: None,
            closes_at: None,
            created_at: Utc::now(),
            last_promoted_at: None,
            times_asked: 0,
        };
        let question_id = question.id;
        inner.questions.push(question.clone());

        for text in new.answers {
            inner.next_answer_id += 1;
            let answer = Answer {
                id: inner.next_answer_id,
                question_id,
                text,
            };
            inner.answers.push(answer);
        }

        Ok(question)
    }

    async fn promote_if_vacant(
        &self,
        question_id: QuestionId,
        epoch_id: &EpochId,
        opens_at: DateTime<Utc>,
        closes_at: DateTime<Utc>,
        promoted_at: DateTime<Utc>,
    ) -> Result<Option<Question>, StoreError> {
        let mut inner = self.inner.write();

        // Both conditions checked under the same write guard as the update.
        let epoch_taken = inner
            .questions
            .iter()
            .any(|q| q.status == QuestionStatus::Active && q.epoch_id.as_ref() == Some(epoch_id));
        if epoch_taken {
            return Ok(None);
        }

        let Some(question) = inner.questions.iter_mut().find(|q| q.id == question_id) else {
            return Err(StoreError::NotFound(format!("question {question_id}")));
        };
        if !question.status.can_transition_to(QuestionStatus::Active) {
            return Ok(None);
        }

        question.status = QuestionStatus::Active;
        question.epoch_id = Some(epoch_id.clone());
        question.opens_at = Some(opens_at);
        question.closes_at = Some(closes_at);
        question.last_promoted_at = Some(promoted_at);
        question.times_asked += 1;

        Ok(Some(question.clone()))
    }

    async fn demote_stale_active(&self, current_epoch: &EpochId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        let mut demoted = 0;
        for question in inner.questions.iter_mut() {
            if question.status == QuestionStatus::Active
                && question.epoch_id.as_ref() != Some(current_epoch)
            {
                question.status = QuestionStatus::Aggregating;
                demoted += 1;
            }
        }
        Ok(demoted)
    }

    async fn answers_for(&self, question_id: QuestionId) -> Result<Vec<Answer>, StoreError> {
        let inner = self.inner.read();
        let mut answers: Vec<Answer> = inner
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        answers.sort_by_key(|a| a.id);
        Ok(answers)
    }

    async fn latest_closed(&self) -> Result<Option<Question>, StoreError> {
        Ok(self
            .inner
            .read()
            .questions
            .iter()
            .filter(|q| {
                matches!(
                    q.status,
                    QuestionStatus::Active | QuestionStatus::Aggregating | QuestionStatus::Finalized
                )
            })
            .filter(|q| q.closes_at.is_some())
            .max_by_key(|q| (q.closes_at, q.id))
            .cloned())
    }

    async fn finalize_epoch(&self, epoch_id: &EpochId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        let mut changed = 0;
        for question in inner.questions.iter_mut() {
            if question.epoch_id.as_ref() == Some(epoch_id)
                && question.status != QuestionStatus::Finalized
            {
                question.status = QuestionStatus::Finalized;
                changed += 1;
            }
        }
        Ok(changed)
    }
}
