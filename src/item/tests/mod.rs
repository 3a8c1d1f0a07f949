//! Unit tests for the item module.
//!
//! Kanban and status engine tests work on hand-built views; service tests run
//! against the in-memory adapters.
