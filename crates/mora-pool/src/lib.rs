//! # mora-pool
//!
//! Question Pool Manager: guarantees exactly one live question per UTC
//! hour-epoch out of a rotating pool, with self-healing recycling when the
//! pool runs dry.
//!
//! ## Lifecycle
//!
//! ```text
//! UPCOMING ──promote──→ ACTIVE ──demote──→ AGGREGATING ──close──→ FINALIZED
//!     ↑                                                              │
//!     └────────────────────── recycle (text clone) ──────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - At most one ACTIVE question per epoch; at most two ACTIVE system-wide
//!   (current epoch plus a not-yet-demoted previous one). Anything beyond
//!   that is a corrupted-state condition: resolution fails without mutating
//!   and an operator must repair the pool out-of-band.
//! - Promotion is a single conditional write on the store port
//!   (`promote_if_vacant`), so two concurrent resolutions cannot both promote
//!   for the same epoch.
//! - Demotion of stale ACTIVE questions is best-effort: failures are logged
//!   and never abort the caller's resolution.
//!
//! ## Architecture
//!
//! Hexagonal: [`ports::inbound::PoolApi`] is the driving port implemented by
//! [`service::PoolService`]; [`ports::outbound::QuestionStore`] is the driven
//! port, with an in-memory adapter in [`adapters::memory`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryQuestionStore;
pub use domain::{recycle_clone, ActiveQuestion};
pub use error::{PoolError, PoolResult};
pub use ports::inbound::PoolApi;
pub use ports::outbound::QuestionStore;
pub use service::PoolService;
