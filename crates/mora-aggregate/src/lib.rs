//! # mora-aggregate
//!
//! Aggregation Engine: the deliberate, operator-triggered step that turns a
//! closed epoch's commitments into one immutable aggregate and finalizes the
//! epoch's question.
//!
//! ```text
//! operator ──aggregate(epoch)──→ tally bits ──→ insert aggregate
//!                                                    │
//!                                                    └──→ close_epoch → FINALIZED
//! ```
//!
//! The tally reads the transitional `plaintext_answer_bit` — the documented
//! privacy leak that stands in until a hiding aggregator exists. Ties resolve
//! to answer A.
//!
//! Aggregation is deliberately NOT idempotent: re-running an epoch would
//! double-insert. It is a one-shot operator action; the in-memory aggregate
//! store rejects a same-epoch re-insert so misuse surfaces as an error rather
//! than silent double counting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::memory::{InMemoryAggregateStore, InMemoryCommitmentStore};
pub use adapters::pool_closer::PoolEpochCloser;
pub use error::{AggregationError, AggregationResult, CommitmentError};
pub use ports::inbound::AggregationApi;
pub use ports::outbound::{AggregateStore, CommitmentStore, EpochCloser};
pub use service::AggregationService;
