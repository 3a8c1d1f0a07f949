//! Board items, their votes and comments, and the kanban status engine.
//!
//! Items live in status columns on a board. The [`domain::KanbanView`]
//! groups loaded items by column and applies drag-and-drop moves in memory;
//! [`services::StatusEngine`] persists cross-column moves through a
//! [`ports::StatusSink`] and restores the previous projection when that
//! fails. Reordering within a column is never persisted.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
