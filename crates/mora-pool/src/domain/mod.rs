//! Domain logic for the question pool.

mod recycle;

pub use recycle::recycle_clone;

use serde::Serialize;
use shared_types::{Answer, Question};

/// A resolved question together with its answers in ordinal (bit) order.
#[derive(Clone, Debug, Serialize)]
pub struct ActiveQuestion {
    /// The question row.
    pub question: Question,
    /// Answers ordered by insertion; index 0 is answer A, index 1 answer B.
    pub answers: Vec<Answer>,
}
