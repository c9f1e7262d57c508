//! Driving and driven ports for the question pool.

pub mod inbound;
pub mod outbound;
