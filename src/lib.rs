//! Taskboard: a multi-tenant kanban board service.
//!
//! Users create boards, invite members, and manage items that move through a
//! configurable set of status columns. Items carry sub-tasks, votes, and
//! comments.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: validated entities and value types with no I/O
//! - **Ports**: repository traits
//! - **Adapters**: in-memory and `PostgreSQL` implementations of the ports
//! - **Services**: orchestration with authorization re-derived per call
//!
//! # Modules
//!
//! - [`identity`]: lookups into the externally owned user table
//! - [`board`]: boards, membership, access rules, and the detail read model
//! - [`item`]: board items, votes, comments, and the kanban status engine
//! - [`task`]: checklist tasks attached to items
//! - [`http`]: the JSON API
//! - [`app`]: repository wiring and the server entry point

mod ids;

pub mod app;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod identity;
pub mod item;
pub mod task;
pub mod telemetry;
