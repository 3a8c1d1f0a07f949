//! Read-only view of the users owned by the external authentication system.
//!
//! Board services confirm that invited users exist, render creator and member
//! names, and list a team's users as invitation candidates.

pub mod adapters;
pub mod domain;
pub mod ports;
