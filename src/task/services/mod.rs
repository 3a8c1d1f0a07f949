//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{TaskLifecycleService, TaskServiceError, TaskServiceResult};
