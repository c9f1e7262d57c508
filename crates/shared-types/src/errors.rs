//! # Error Types
//!
//! Store-level errors shared by the outbound ports of every subsystem.

use thiserror::Error;

/// Errors surfaced by a store adapter. Subsystem services wrap these in their
/// own error enums; nothing in this core retries a failed store call.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Row not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying store failure.
    #[error("Store backend error: {0}")]
    Backend(String),
}
