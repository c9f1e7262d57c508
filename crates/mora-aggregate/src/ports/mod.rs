//! Driving and driven ports for the aggregation engine.

pub mod inbound;
pub mod outbound;
