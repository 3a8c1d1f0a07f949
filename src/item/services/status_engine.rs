//! Optimistic kanban moves backed by a durable status sink.

use super::ItemLifecycleService;
use crate::identity::domain::UserId;
use crate::item::{
    domain::{DropTarget, ItemId, KanbanView, MoveOutcome, MoveRequest, StatusLabel},
    ports::{StatusSink, StatusSinkError},
};
use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

/// Applies moves to a [`KanbanView`] and persists column changes.
///
/// A move is applied to the view first. When it changes an item's column the
/// sink is called exactly once; if that call fails the view is restored to
/// its state before the move and the error is returned. Moves within a
/// column never reach the sink.
#[derive(Debug)]
pub struct StatusEngine<S>
where
    S: StatusSink,
{
    view: KanbanView,
    sink: S,
}

impl<S> StatusEngine<S>
where
    S: StatusSink,
{
    /// Creates an engine over a freshly built view.
    #[must_use]
    pub const fn new(view: KanbanView, sink: S) -> Self {
        Self { view, sink }
    }

    /// Returns the current projection.
    #[must_use]
    pub const fn view(&self) -> &KanbanView {
        &self.view
    }

    /// Consumes the engine, returning the projection.
    #[must_use]
    pub fn into_view(self) -> KanbanView {
        self.view
    }

    /// Applies a resolved move.
    ///
    /// # Errors
    ///
    /// Returns the sink error after restoring the view when a cross-column
    /// move could not be persisted.
    pub async fn apply(&mut self, request: &MoveRequest) -> Result<MoveOutcome, StatusSinkError> {
        let snapshot = self.view.clone();
        let outcome = self.view.move_item(request);

        match &outcome {
            MoveOutcome::Transitioned { item_id, to, .. } => {
                if let Err(err) = self.sink.switch_status(*item_id, to).await {
                    self.view = snapshot;
                    warn!(%item_id, status = %to, error = %err, "status update failed, move reverted");
                    return Err(err);
                }
            }
            MoveOutcome::Reordered { item_id, index } => {
                debug!(%item_id, index, "item reordered within column");
            }
            MoveOutcome::Unchanged => {
                debug!(item_id = %request.item_id, "move ignored");
            }
        }
        Ok(outcome)
    }

    /// Resolves a drop of `dragged` onto `target` and applies it.
    ///
    /// Unresolvable drops leave the view unchanged.
    ///
    /// # Errors
    ///
    /// Returns the sink error after restoring the view when a cross-column
    /// move could not be persisted.
    pub async fn drop_on(
        &mut self,
        dragged: ItemId,
        target: &DropTarget,
    ) -> Result<MoveOutcome, StatusSinkError> {
        match self.view.resolve_drop(dragged, target) {
            Some(request) => self.apply(&request).await,
            None => {
                debug!(item_id = %dragged, "drop ignored");
                Ok(MoveOutcome::Unchanged)
            }
        }
    }
}

/// [`StatusSink`] that persists through [`ItemLifecycleService`] as a fixed
/// acting user, so every move is re-authorized.
pub struct ActingStatusSink<C>
where
    C: Clock + Send + Sync,
{
    service: ItemLifecycleService<C>,
    actor: UserId,
}

impl<C> Clone for ActingStatusSink<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            actor: self.actor,
        }
    }
}

impl<C> ActingStatusSink<C>
where
    C: Clock + Send + Sync,
{
    /// Binds `actor` to `service`.
    #[must_use]
    pub const fn new(service: ItemLifecycleService<C>, actor: UserId) -> Self {
        Self { service, actor }
    }
}

#[async_trait]
impl<C> StatusSink for ActingStatusSink<C>
where
    C: Clock + Send + Sync,
{
    async fn switch_status(
        &self,
        item: ItemId,
        status: &StatusLabel,
    ) -> Result<(), StatusSinkError> {
        self.service
            .switch_status(self.actor, item, status.as_str())
            .await
            .map(|_| ())
            .map_err(StatusSinkError::new)
    }
}
