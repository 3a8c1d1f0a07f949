//! Domain model for item tasks.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
