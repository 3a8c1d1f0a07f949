//! Step definitions for board workflow scenarios.

pub mod then;
pub mod world;
