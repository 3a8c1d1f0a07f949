//! User directory adapters.

pub mod memory;
pub mod postgres;
