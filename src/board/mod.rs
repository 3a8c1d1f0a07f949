//! Boards, their members, and the visibility rules guarding board content.
//!
//! A board is created by a user who is recorded atomically as its `owner`
//! member. The creator may invite and remove further members; everyone else
//! sees a private board only through membership. The module follows hexagonal
//! architecture:
//!
//! - Domain types and access guards in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
