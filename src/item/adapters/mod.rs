//! Adapter implementations for item persistence.

pub mod memory;
pub mod postgres;
