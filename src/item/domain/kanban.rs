//! Kanban projection of a board's items and the drag-and-drop move rules.
//!
//! The view is built once from loaded items in load order and then mutated
//! in place. Only a move between two columns changes an item's status; a
//! reorder inside a column stays local to the view.

use super::{BoardItem, ColumnSet, ItemId, Priority, StatusLabel};
use crate::identity::domain::UserId;
use crate::task::domain::Task;
use serde::Serialize;

/// Card shown for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    id: ItemId,
    title: String,
    description: Option<String>,
    priority: Priority,
    status: StatusLabel,
    creator_id: UserId,
    tasks: Vec<Task>,
}

impl ItemCard {
    /// Builds a card for `item` carrying its tasks.
    #[must_use]
    pub fn new(item: &BoardItem, tasks: Vec<Task>) -> Self {
        Self {
            id: item.id(),
            title: item.title().to_owned(),
            description: item.description().map(str::to_owned),
            priority: item.priority(),
            status: item.status().clone(),
            creator_id: item.creator_id(),
            tasks,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the status the card currently shows.
    #[must_use]
    pub const fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Returns the item creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the item's tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// One status column and its cards in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn {
    status: StatusLabel,
    cards: Vec<ItemCard>,
}

impl KanbanColumn {
    /// Returns the column's status label.
    #[must_use]
    pub const fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[ItemCard] {
        &self.cards
    }

    /// Returns the card identifiers in display order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<ItemId> {
        self.cards.iter().map(ItemCard::id).collect()
    }

    fn position_of(&self, item: ItemId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == item)
    }
}

/// Where a dragged card was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over another card.
    Card(ItemId),
    /// Released over a column's empty area.
    Column(StatusLabel),
}

/// A fully resolved move of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Card being moved.
    pub item_id: ItemId,
    /// Column the card is expected to be in.
    pub source: StatusLabel,
    /// Column the card moves to.
    pub destination: StatusLabel,
    /// Insertion index in the destination; `None` appends.
    pub index: Option<usize>,
}

/// Effect of applying a [`MoveRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Preconditions failed; the view is unchanged.
    Unchanged,
    /// The card moved within its column; nothing needs persisting.
    Reordered {
        /// Moved card.
        item_id: ItemId,
        /// Final index in the column.
        index: usize,
    },
    /// The card changed column; its new status must be persisted.
    Transitioned {
        /// Moved card.
        item_id: ItemId,
        /// Previous column.
        from: StatusLabel,
        /// New column.
        to: StatusLabel,
        /// Final index in the new column.
        index: usize,
    },
}

impl MoveOutcome {
    /// Returns `true` when the move changed the item's status.
    #[must_use]
    pub const fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Items grouped into status columns, plus the items matching no column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanView {
    columns: Vec<KanbanColumn>,
    orphaned: Vec<ItemCard>,
}

impl KanbanView {
    /// Groups `cards` into `columns`, keeping load order inside each column.
    ///
    /// Cards whose status matches no column are kept in
    /// [`KanbanView::orphaned`].
    #[must_use]
    pub fn build(columns: &ColumnSet, cards: impl IntoIterator<Item = ItemCard>) -> Self {
        let mut view = Self {
            columns: columns
                .iter()
                .map(|status| KanbanColumn {
                    status: status.clone(),
                    cards: Vec::new(),
                })
                .collect(),
            orphaned: Vec::new(),
        };

        for card in cards {
            match view
                .columns
                .iter_mut()
                .find(|column| column.status == card.status)
            {
                Some(column) => column.cards.push(card),
                None => view.orphaned.push(card),
            }
        }
        view
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[KanbanColumn] {
        &self.columns
    }

    /// Returns the column labelled `status`, if rendered.
    #[must_use]
    pub fn column(&self, status: &StatusLabel) -> Option<&KanbanColumn> {
        self.columns.iter().find(|column| &column.status == status)
    }

    /// Returns the cards whose status matches no column.
    #[must_use]
    pub fn orphaned(&self) -> &[ItemCard] {
        &self.orphaned
    }

    /// Finds the column and index of `item`.
    #[must_use]
    pub fn locate(&self, item: ItemId) -> Option<(&StatusLabel, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .position_of(item)
                .map(|index| (&column.status, index))
        })
    }

    /// Resolves a drop of `dragged` onto `target` into a move.
    ///
    /// A drop on a card places the dragged card just before it, counting
    /// positions after the dragged card has left its column; a drop on a
    /// column appends to it. Returns `None` when the dragged card is not in
    /// the view, the target is the dragged card itself, or the target is
    /// unknown.
    #[must_use]
    pub fn resolve_drop(&self, dragged: ItemId, target: &DropTarget) -> Option<MoveRequest> {
        let (source, dragged_index) = self.locate(dragged)?;
        let (destination, index) = match target {
            DropTarget::Card(over) if *over == dragged => return None,
            DropTarget::Card(over) => {
                let (status, over_index) = self.locate(*over)?;
                let index = if status == source && over_index > dragged_index {
                    over_index - 1
                } else {
                    over_index
                };
                (status.clone(), Some(index))
            }
            DropTarget::Column(status) => (self.column(status)?.status.clone(), None),
        };

        Some(MoveRequest {
            item_id: dragged,
            source: source.clone(),
            destination,
            index,
        })
    }

    /// Applies `request` to the view.
    ///
    /// The card must be in `request.source` and `request.destination` must be
    /// a rendered column; otherwise the view is left unchanged. Indexes past
    /// the end of the destination append.
    pub fn move_item(&mut self, request: &MoveRequest) -> MoveOutcome {
        let Some(source_index) = self.column_index(&request.source) else {
            return MoveOutcome::Unchanged;
        };
        let Some(destination_index) = self.column_index(&request.destination) else {
            return MoveOutcome::Unchanged;
        };
        let Some(source) = self.columns.get_mut(source_index) else {
            return MoveOutcome::Unchanged;
        };
        let Some(card_index) = source.position_of(request.item_id) else {
            return MoveOutcome::Unchanged;
        };
        let mut card = source.cards.remove(card_index);

        let Some(destination) = self.columns.get_mut(destination_index) else {
            return MoveOutcome::Unchanged;
        };
        let index = request
            .index
            .map_or(destination.cards.len(), |wanted| {
                wanted.min(destination.cards.len())
            });

        if source_index == destination_index {
            destination.cards.insert(index, card);
            return MoveOutcome::Reordered {
                item_id: request.item_id,
                index,
            };
        }

        let from = std::mem::replace(&mut card.status, destination.status.clone());
        let to = destination.status.clone();
        destination.cards.insert(index, card);
        MoveOutcome::Transitioned {
            item_id: request.item_id,
            from,
            to,
            index,
        }
    }

    fn column_index(&self, status: &StatusLabel) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| &column.status == status)
    }
}
