//! Adapters implementing the aggregation engine's driven ports.

pub mod memory;
pub mod pool_closer;
