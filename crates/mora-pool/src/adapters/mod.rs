//! Adapters implementing the pool's driven ports.

pub mod memory;
