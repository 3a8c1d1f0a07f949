//! Read model for a single board: columns, members, and capabilities.

use super::BoardContext;
use crate::board::{
    domain::{Board, BoardId, BoardMember, MemberRole},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::error::AccessDenied;
use crate::identity::{
    domain::{UserId, UserSummary},
    ports::{UserDirectory, UserDirectoryError},
};
use crate::item::{
    domain::{BoardItem, ColumnSet, ItemCard, ItemId, KanbanView, StatusLabel},
    ports::{BoardItemRepository, BoardItemRepositoryError, CommentRepository, CommentRepositoryError},
};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors returned while assembling board detail.
#[derive(Debug, Error)]
pub enum BoardDetailError {
    /// The board is private and the actor is neither creator nor member.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// The board does not exist or was deleted.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// Board repository operation failed.
    #[error(transparent)]
    Boards(#[from] BoardRepositoryError),
    /// Item repository operation failed.
    #[error(transparent)]
    Items(#[from] BoardItemRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Comment repository operation failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
}

/// A board as seen by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardDetail {
    /// The board.
    pub board: Board,
    /// Creator display data, when the user is known.
    pub creator: Option<UserSummary>,
    /// Members other than the creator.
    pub members: Vec<MemberDetail>,
    /// Users of the board's team who are neither members nor the viewer.
    ///
    /// Empty when the board has no team.
    pub invitable_users: Vec<UserSummary>,
    /// Status columns in display order.
    pub columns: Vec<ColumnDetail>,
    /// Items whose status matches no column.
    pub orphaned: Vec<ItemDetail>,
    /// The viewer's effective role; the creator is always owner.
    pub role: Option<MemberRole>,
    /// Whether the viewer may create and move items.
    pub can_edit: bool,
    /// Whether the viewer may archive or delete the board.
    pub can_delete: bool,
    /// Whether the viewer may invite or remove members.
    pub can_manage_members: bool,
}

/// A member listed on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDetail {
    /// Member display data.
    pub user: UserSummary,
    /// Stored role.
    pub role: MemberRole,
    /// When the membership was recorded.
    pub joined_at: DateTime<Utc>,
}

/// One rendered status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDetail {
    /// Column label.
    pub status: StatusLabel,
    /// Items most recent first.
    pub items: Vec<ItemDetail>,
}

/// An item card with engagement figures and the viewer's capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    /// Card data.
    #[serde(flatten)]
    pub card: ItemCard,
    /// Creator display data; omitted when the board hides creators.
    pub creator: Option<UserSummary>,
    /// Number of votes.
    pub votes_count: u32,
    /// Number of live comments.
    pub comments_count: usize,
    /// Whether the viewer has voted.
    pub is_voted: bool,
    /// Whether the viewer may manage the item's tasks.
    pub can_add_tasks: bool,
}

/// Board detail query service.
#[derive(Clone)]
pub struct BoardDetailService {
    boards: Arc<dyn BoardRepository>,
    items: Arc<dyn BoardItemRepository>,
    tasks: Arc<dyn TaskRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserDirectory>,
    columns: ColumnSet,
}

impl BoardDetailService {
    /// Creates a new detail service rendering `columns`.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        items: Arc<dyn BoardItemRepository>,
        tasks: Arc<dyn TaskRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserDirectory>,
        columns: ColumnSet,
    ) -> Self {
        Self {
            boards,
            items,
            tasks,
            comments,
            users,
            columns,
        }
    }

    /// Builds the kanban projection of a board's live items.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDetailError::NotFound`] for missing boards and
    /// [`BoardDetailError::Forbidden`] when the board is invisible.
    pub async fn kanban(&self, actor: UserId, board_id: BoardId) -> Result<KanbanView, BoardDetailError> {
        let context = self.visible_context(actor, board_id).await?;
        let items = self.items.list_for_board(context.board().id()).await?;
        let mut tasks = self.tasks_by_item(&items).await?;
        Ok(KanbanView::build(
            &self.columns,
            items.iter().map(|item| {
                ItemCard::new(item, tasks.remove(&item.id()).unwrap_or_default())
            }),
        ))
    }

    /// Returns the detail of a board visible to `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDetailError::NotFound`] for missing boards,
    /// [`BoardDetailError::Forbidden`] when the board is invisible, and the
    /// repository error of any failing lookup.
    pub async fn show_board(
        &self,
        actor: UserId,
        board_id: BoardId,
    ) -> Result<BoardDetail, BoardDetailError> {
        let context = self.visible_context(actor, board_id).await?;
        let board = context.board();
        let access = context.access();

        let items = self.items.list_for_board(board_id).await?;
        let item_ids: Vec<ItemId> = items.iter().map(BoardItem::id).collect();
        let mut tasks = self.tasks_by_item(&items).await?;
        let voted: HashSet<ItemId> = self
            .items
            .voted_by(actor, &item_ids)
            .await?
            .into_iter()
            .collect();
        let comment_counts = self.comments.count_for_items(&item_ids).await?;
        let all_members = self.boards.members(board_id).await?;
        let invitable_users = self.invitable_users(board, actor, &all_members).await?;
        let members: Vec<_> = all_members
            .into_iter()
            .filter(|member| !board.is_creator(member.user_id()))
            .collect();

        let mut user_ids: Vec<UserId> = vec![board.creator_id()];
        user_ids.extend(members.iter().map(|member| member.user_id()));
        if board.settings().show_creator {
            user_ids.extend(items.iter().map(BoardItem::creator_id));
        }
        user_ids.sort_unstable();
        user_ids.dedup();
        let users: HashMap<UserId, UserSummary> = self
            .users
            .find_many(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id(), user))
            .collect();

        let vote_counts: HashMap<ItemId, u32> = items
            .iter()
            .map(|item| (item.id(), item.vote_count()))
            .collect();
        let view = KanbanView::build(
            &self.columns,
            items.iter().map(|item| {
                ItemCard::new(item, tasks.remove(&item.id()).unwrap_or_default())
            }),
        );

        let describe = |card: &ItemCard| ItemDetail {
            creator: users
                .get(&card.creator_id())
                .filter(|_| board.settings().show_creator)
                .cloned(),
            votes_count: vote_counts.get(&card.id()).copied().unwrap_or_default(),
            comments_count: comment_counts.get(&card.id()).copied().unwrap_or_default(),
            is_voted: voted.contains(&card.id()),
            can_add_tasks: access.can_manage_tasks(card.creator_id()),
            card: card.clone(),
        };

        let columns = view
            .columns()
            .iter()
            .map(|column| ColumnDetail {
                status: column.status().clone(),
                items: column.cards().iter().map(describe).collect(),
            })
            .collect();
        let orphaned = view.orphaned().iter().map(describe).collect();
        let member_details = members
            .iter()
            .filter_map(|member| {
                users.get(&member.user_id()).map(|user| MemberDetail {
                    user: user.clone(),
                    role: member.role(),
                    joined_at: member.joined_at(),
                })
            })
            .collect();

        Ok(BoardDetail {
            creator: users.get(&board.creator_id()).cloned(),
            members: member_details,
            invitable_users,
            columns,
            orphaned,
            role: access.effective_role(),
            can_edit: access.can_edit(),
            can_delete: access.can_delete(),
            can_manage_members: access.can_manage_members(),
            board: board.clone(),
        })
    }

    async fn visible_context(
        &self,
        actor: UserId,
        board_id: BoardId,
    ) -> Result<BoardContext, BoardDetailError> {
        let context = BoardContext::load(self.boards.as_ref(), board_id, actor)
            .await?
            .ok_or(BoardDetailError::NotFound(board_id))?;
        if let Err(denied) = context.access().require_view() {
            warn!(%board_id, %actor, "board view rejected");
            return Err(denied.into());
        }
        Ok(context)
    }

    async fn invitable_users(
        &self,
        board: &Board,
        actor: UserId,
        members: &[BoardMember],
    ) -> Result<Vec<UserSummary>, BoardDetailError> {
        let Some(team) = board.team_id() else {
            return Ok(Vec::new());
        };
        let taken: HashSet<UserId> = members
            .iter()
            .map(BoardMember::user_id)
            .chain([actor, board.creator_id()])
            .collect();
        Ok(self
            .users
            .team_users(team)
            .await?
            .into_iter()
            .filter(|user| !taken.contains(&user.id()))
            .collect())
    }

    async fn tasks_by_item(
        &self,
        items: &[BoardItem],
    ) -> Result<HashMap<ItemId, Vec<Task>>, BoardDetailError> {
        let item_ids: Vec<ItemId> = items.iter().map(BoardItem::id).collect();
        let mut grouped: HashMap<ItemId, Vec<Task>> = HashMap::new();
        for task in self.tasks.list_for_items(&item_ids).await? {
            grouped.entry(task.board_item_id()).or_default().push(task);
        }
        Ok(grouped)
    }
}
