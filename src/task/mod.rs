//! Checklist tasks attached to board items.
//!
//! Tasks are created, renamed, toggled, and deleted by the board creator or
//! the creator of the item they belong to. The capability is re-derived from
//! the stored board and item on every mutating call.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
