//! Service layer for creating, moving, and deleting board items.

use super::{ItemContext, ItemServiceError, ItemServiceResult};
use crate::board::{domain::BoardId, ports::BoardRepository, services::BoardContext};
use crate::db::PersistenceFailure;
use crate::error::ValidationErrors;
use crate::identity::domain::UserId;
use crate::item::{
    domain::{
        BoardItem, ColumnSet, ItemDomainError, ItemId, NewBoardItem, Priority, StatusLabel,
    },
    ports::{BoardItemRepository, BoardItemRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for creating an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    board_id: BoardId,
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
}

impl CreateItemRequest {
    /// Creates a request for `board_id`; status defaults to the first column
    /// and priority to `medium`.
    #[must_use]
    pub fn new(board_id: BoardId, title: impl Into<String>) -> Self {
        Self {
            board_id,
            title: title.into(),
            description: None,
            status: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial column by label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority by name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Item lifecycle orchestration service.
pub struct ItemLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    boards: Arc<dyn BoardRepository>,
    items: Arc<dyn BoardItemRepository>,
    columns: ColumnSet,
    clock: Arc<C>,
}

impl<C> Clone for ItemLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            items: Arc::clone(&self.items),
            columns: self.columns.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> ItemLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new item lifecycle service rendering `columns`.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        items: Arc<dyn BoardItemRepository>,
        columns: ColumnSet,
        clock: Arc<C>,
    ) -> Self {
        Self {
            boards,
            items,
            columns,
            clock,
        }
    }

    /// Returns the configured columns.
    #[must_use]
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Creates an item on a board the actor can edit.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::BoardNotFound`] for missing boards,
    /// [`ItemServiceError::Forbidden`] unless the actor is the creator or an
    /// editing member, and [`ItemServiceError::Validation`] for invalid fields.
    pub async fn create_item(
        &self,
        actor: UserId,
        request: CreateItemRequest,
    ) -> ItemServiceResult<BoardItem> {
        let board_id = request.board_id;
        let context = BoardContext::load(self.boards.as_ref(), board_id, actor)
            .await?
            .ok_or(ItemServiceError::BoardNotFound(board_id))?;
        if let Err(denied) = context.access().require_edit() {
            warn!(%board_id, %actor, "item creation rejected");
            return Err(denied.into());
        }

        let mut errors = ValidationErrors::new();
        let status = match request.status.as_deref() {
            None => self.columns.first().clone(),
            Some(raw) => self.column_label(raw).unwrap_or_else(|err| {
                errors.merge(err.into());
                self.columns.first().clone()
            }),
        };
        let priority = match request.priority.as_deref() {
            None => Priority::default(),
            Some(raw) => Priority::try_from(raw).unwrap_or_else(|err| {
                errors.merge(err.into());
                Priority::default()
            }),
        };

        let existing = self.items.list_for_board(board_id).await?.len();
        let position = i32::try_from(existing).map_err(BoardItemRepositoryError::persistence)?;
        let created = BoardItem::create(
            NewBoardItem {
                board_id,
                creator_id: actor,
                title: request.title,
                description: request.description,
                status,
                priority,
                position,
            },
            &*self.clock,
        );
        let item = match created {
            Ok(item) => {
                errors.into_result()?;
                item
            }
            Err(item_errors) => {
                errors.merge(item_errors);
                return Err(errors.into());
            }
        };

        self.items.store(&item).await?;
        info!(item_id = %item.id(), %board_id, status = %item.status(), "item created");
        Ok(item)
    }

    /// Moves an item to another configured column.
    ///
    /// Switching to the current column changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::ItemNotFound`] for missing items,
    /// [`ItemServiceError::Forbidden`] unless the actor may edit the board,
    /// and [`ItemServiceError::Validation`] when the status is blank, too
    /// long, or not a configured column.
    pub async fn switch_status(
        &self,
        actor: UserId,
        item_id: ItemId,
        status: &str,
    ) -> ItemServiceResult<BoardItem> {
        let context = self.item_context(actor, item_id).await?;
        if let Err(denied) = context.board().access().require_edit() {
            warn!(%item_id, %actor, "status switch rejected");
            return Err(denied.into());
        }
        let label = self.column_label(status).map_err(ValidationErrors::from)?;

        let mut item = context.into_item();
        let from = item.status().clone();
        if item.switch_status(label, &*self.clock) {
            self.items.update(&item).await?;
            info!(%item_id, %from, to = %item.status(), "item status switched");
        } else {
            debug!(%item_id, status = %from, "item already in column");
        }
        Ok(item)
    }

    /// Soft-deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::ItemNotFound`] for missing items and
    /// [`ItemServiceError::Forbidden`] unless the actor created the board or
    /// the item.
    pub async fn delete_item(&self, actor: UserId, item_id: ItemId) -> ItemServiceResult<()> {
        let context = self.item_context(actor, item_id).await?;
        if let Err(denied) = context
            .board()
            .access()
            .require_item_deletion(context.item().creator_id())
        {
            warn!(%item_id, %actor, "item deletion rejected");
            return Err(denied.into());
        }

        let mut item = context.into_item();
        item.mark_deleted(&*self.clock);
        self.items.update(&item).await?;
        info!(%item_id, "item deleted");
        Ok(())
    }

    async fn item_context(&self, actor: UserId, item_id: ItemId) -> ItemServiceResult<ItemContext> {
        ItemContext::load::<ItemServiceError>(
            self.boards.as_ref(),
            self.items.as_ref(),
            item_id,
            actor,
        )
        .await?
        .ok_or(ItemServiceError::ItemNotFound(item_id))
    }

    fn column_label(&self, raw: &str) -> Result<StatusLabel, ItemDomainError> {
        let label = StatusLabel::new(raw)?;
        if !self.columns.contains(&label) {
            return Err(ItemDomainError::UnknownStatus(label.as_str().to_owned()));
        }
        Ok(label)
    }
}
