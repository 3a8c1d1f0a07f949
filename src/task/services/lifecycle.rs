//! Service layer for creating, renaming, toggling, and deleting tasks.

use crate::board::ports::{BoardRepository, BoardRepositoryError};
use crate::error::{AccessDenied, ValidationErrors};
use crate::identity::domain::UserId;
use crate::item::{
    domain::ItemId,
    ports::{BoardItemRepository, BoardItemRepositoryError},
    services::ItemContext,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The actor is neither the board creator nor the item creator.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// The owning item does not exist or was deleted.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Board repository operation failed.
    #[error(transparent)]
    Boards(#[from] BoardRepositoryError),
    /// Item repository operation failed.
    #[error(transparent)]
    Items(#[from] BoardItemRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    boards: Arc<dyn BoardRepository>,
    items: Arc<dyn BoardItemRepository>,
    tasks: Arc<dyn TaskRepository>,
    clock: Arc<C>,
}

impl<C> Clone for TaskLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            items: Arc::clone(&self.items),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> TaskLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        items: Arc<dyn BoardItemRepository>,
        tasks: Arc<dyn TaskRepository>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            boards,
            items,
            tasks,
            clock,
        }
    }

    /// Creates an open task on an item.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ItemNotFound`] for missing items,
    /// [`TaskServiceError::Forbidden`] unless the actor created the board or
    /// the item, and [`TaskServiceError::Validation`] for a blank or oversized
    /// title.
    pub async fn create_task(
        &self,
        actor: UserId,
        item_id: ItemId,
        title: &str,
    ) -> TaskServiceResult<Task> {
        self.authorize(actor, item_id).await?;
        let task = Task::create(item_id, title, &*self.clock).map_err(ValidationErrors::from)?;
        self.tasks.store(&task).await?;
        info!(task_id = %task.id(), %item_id, "task created");
        Ok(task)
    }

    /// Renames a task. A blank or unchanged title is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for missing tasks,
    /// [`TaskServiceError::Forbidden`] for unauthorized actors, and
    /// [`TaskServiceError::Validation`] for an oversized title.
    pub async fn rename_task(
        &self,
        actor: UserId,
        task_id: TaskId,
        title: &str,
    ) -> TaskServiceResult<Task> {
        let mut task = self.authorized_task(actor, task_id).await?;
        if task
            .rename(title, &*self.clock)
            .map_err(ValidationErrors::from)?
        {
            self.tasks.update(&task).await?;
            info!(%task_id, "task renamed");
        } else {
            debug!(%task_id, "task rename skipped");
        }
        Ok(task)
    }

    /// Flips a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for missing tasks and
    /// [`TaskServiceError::Forbidden`] for unauthorized actors.
    pub async fn toggle_task(&self, actor: UserId, task_id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.authorized_task(actor, task_id).await?;
        let completed = task.toggle(&*self.clock);
        self.tasks.update(&task).await?;
        info!(%task_id, completed, "task toggled");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for missing tasks and
    /// [`TaskServiceError::Forbidden`] for unauthorized actors.
    pub async fn delete_task(&self, actor: UserId, task_id: TaskId) -> TaskServiceResult<()> {
        self.authorized_task(actor, task_id).await?;
        if !self.tasks.delete(task_id).await? {
            return Err(TaskServiceError::TaskNotFound(task_id));
        }
        info!(%task_id, "task deleted");
        Ok(())
    }

    async fn authorized_task(&self, actor: UserId, task_id: TaskId) -> TaskServiceResult<Task> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))?;
        self.authorize(actor, task.board_item_id()).await?;
        Ok(task)
    }

    async fn authorize(&self, actor: UserId, item_id: ItemId) -> TaskServiceResult<()> {
        let context = ItemContext::load::<TaskServiceError>(
            self.boards.as_ref(),
            self.items.as_ref(),
            item_id,
            actor,
        )
        .await?
        .ok_or(TaskServiceError::ItemNotFound(item_id))?;
        if let Err(denied) = context
            .board()
            .access()
            .require_task_management(context.item().creator_id())
        {
            warn!(%item_id, %actor, "task change rejected");
            return Err(denied.into());
        }
        Ok(())
    }
}
