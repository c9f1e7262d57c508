//! # mora-gateway
//!
//! The HTTP surface over the poll subsystems.
//!
//! ## Routes
//!
//! | Method | Path | Auth | Purpose |
//! |--------|------|------|---------|
//! | GET | `/api/game/active-question` | session | resolve the live question |
//! | GET | `/api/game/active-question?sample=1` | none | preview the latest closed question |
//! | POST | `/api/game/commitments` | session | submit a vote commitment |
//! | GET | `/api/game/past-results` | session | finalized aggregates, newest first |
//! | POST | `/api/game/manage/aggregate` | operator key | run epoch aggregation |
//! | POST | `/api/game/manage/questions` | operator key | seed a question+answer set |
//! | GET | `/api/game/manage/commitments` | operator key | inspect an epoch's commitments |
//!
//! Payloads pass through one typed validator ([`validation`]) shared by every
//! entry point; handlers receive already-validated domain values. Session
//! tokens arrive in `x-session-token`, the operator key in `x-api-key`; both
//! are compared in constant time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod validation;

pub use auth::{SessionValidator, StaticTokenValidator};
pub use error::ApiError;
pub use router::{build_router, AppState};
