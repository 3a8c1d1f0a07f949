//! Application services for items, engagement, and the kanban status engine.

mod context;
mod engagement;
mod error;
mod lifecycle;
mod status_engine;

pub use context::ItemContext;
pub use engagement::ItemEngagementService;
pub use error::{ItemServiceError, ItemServiceResult};
pub use lifecycle::{CreateItemRequest, ItemLifecycleService};
pub use status_engine::{ActingStatusSink, StatusEngine};
