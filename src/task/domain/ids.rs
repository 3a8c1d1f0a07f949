//! Identifier type for tasks.

use crate::ids::uuid_id;

uuid_id! {
    /// Unique identifier of a task.
    TaskId
}
