//! Service layer for creating, listing, archiving, and deleting boards.

use super::{BoardContext, BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Board, BoardId, BoardSettings, BoardStatus, BoardTypeId, NewBoard, TeamId},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::error::ValidationErrors;
use crate::identity::domain::UserId;
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    name: String,
    description: Option<String>,
    type_id: i64,
    team_id: Option<TeamId>,
    is_private: bool,
    settings: Option<BoardSettings>,
    status: Option<String>,
}

impl CreateBoardRequest {
    /// Creates a request with the required fields; the board is public,
    /// active, and uses default settings unless overridden.
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: i64) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_id,
            team_id: None,
            is_private: false,
            settings: None,
            status: None,
        }
    }

    /// Sets the board description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scopes the board to a team.
    #[must_use]
    pub const fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Sets the privacy flag.
    #[must_use]
    pub const fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Overrides the default feature toggles.
    #[must_use]
    pub const fn with_settings(mut self, settings: BoardSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the requested initial status by name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// One page of boards visible to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardPage {
    /// Boards on this page, newest first.
    pub boards: Vec<Board>,
    /// One-based page number.
    pub page: usize,
    /// Configured page size.
    pub page_size: usize,
    /// Whether a further page exists.
    pub has_more: bool,
}

/// Board lifecycle orchestration service.
pub struct BoardLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    boards: Arc<dyn BoardRepository>,
    clock: Arc<C>,
    page_size: usize,
}

impl<C> Clone for BoardLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            clock: Arc::clone(&self.clock),
            page_size: self.page_size,
        }
    }
}

impl<C> BoardLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new board lifecycle service. A zero page size is raised to
    /// one.
    #[must_use]
    pub fn new(boards: Arc<dyn BoardRepository>, clock: Arc<C>, page_size: usize) -> Self {
        Self {
            boards,
            clock,
            page_size: page_size.max(1),
        }
    }

    /// Creates a board owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when a field is invalid or the
    /// derived slug is already taken, and [`BoardServiceError::Repository`]
    /// when persistence fails.
    pub async fn create_board(
        &self,
        actor: UserId,
        request: CreateBoardRequest,
    ) -> BoardServiceResult<Board> {
        let mut errors = ValidationErrors::new();

        let type_id = BoardTypeId::new(request.type_id)
            .map_err(|err| errors.merge(err.into()))
            .ok();
        let status = match request.status.as_deref() {
            None => Some(BoardStatus::Active),
            Some(raw) => BoardStatus::try_from(raw)
                .map_err(|err| errors.add("status", err.to_string()))
                .ok(),
        };

        let candidate = match (type_id, status) {
            (Some(board_type), Some(initial_status)) => {
                let new_board = NewBoard {
                    name: request.name,
                    description: request.description,
                    type_id: board_type,
                    creator_id: actor,
                    team_id: request.team_id,
                    is_private: request.is_private,
                    settings: request.settings.unwrap_or_default(),
                    status: initial_status,
                };
                Board::create(new_board, &*self.clock)
                    .map_err(|err| errors.merge(err))
                    .ok()
            }
            _ => None,
        };

        errors.into_result()?;
        let Some(board) = candidate else {
            return Err(ValidationErrors::single("name", "board could not be created").into());
        };

        match self.boards.create_with_owner(&board).await {
            Ok(()) => {}
            Err(BoardRepositoryError::DuplicateSlug(slug)) => {
                debug!(%slug, "rejected board with duplicate slug");
                return Err(
                    ValidationErrors::single("name", "The name has already been taken.").into(),
                );
            }
            Err(err) => return Err(err.into()),
        }

        info!(board_id = %board.id(), slug = %board.slug(), creator = %actor, "board created");
        Ok(board)
    }

    /// Lists boards visible to `actor`, newest first. Page numbers start at
    /// one; zero is treated as the first page.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the lookup fails.
    pub async fn list_boards(&self, actor: UserId, page: usize) -> BoardServiceResult<BoardPage> {
        let page_number = page.max(1);
        let offset = (page_number - 1).saturating_mul(self.page_size);
        let mut boards = self
            .boards
            .list_visible(actor, offset, self.page_size.saturating_add(1))
            .await?;
        let has_more = boards.len() > self.page_size;
        boards.truncate(self.page_size);

        Ok(BoardPage {
            boards,
            page: page_number,
            page_size: self.page_size,
            has_more,
        })
    }

    /// Archives a board. Archiving an archived board is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] for missing boards,
    /// [`BoardServiceError::Forbidden`] unless `actor` created the board, and
    /// [`BoardServiceError::Repository`] when persistence fails.
    pub async fn archive_board(&self, actor: UserId, board_id: BoardId) -> BoardServiceResult<Board> {
        let context = self.creator_context(actor, board_id).await?;
        let mut board = context.into_board();
        if board.archive(&*self.clock) {
            self.boards.update(&board).await?;
            info!(%board_id, "board archived");
        } else {
            debug!(%board_id, "board already archived");
        }
        Ok(board)
    }

    /// Soft-deletes a board; its items are no longer reachable.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] for missing boards,
    /// [`BoardServiceError::Forbidden`] unless `actor` created the board, and
    /// [`BoardServiceError::Repository`] when persistence fails.
    pub async fn delete_board(&self, actor: UserId, board_id: BoardId) -> BoardServiceResult<()> {
        let context = self.creator_context(actor, board_id).await?;
        let mut board = context.into_board();
        board.mark_deleted(&*self.clock);
        self.boards.update(&board).await?;
        info!(%board_id, "board deleted");
        Ok(())
    }

    async fn creator_context(
        &self,
        actor: UserId,
        board_id: BoardId,
    ) -> BoardServiceResult<BoardContext> {
        let context = BoardContext::load(self.boards.as_ref(), board_id, actor)
            .await?
            .ok_or(BoardServiceError::NotFound(board_id))?;
        if let Err(denied) = context.access().require_delete() {
            warn!(%board_id, %actor, "board change rejected");
            return Err(denied.into());
        }
        Ok(context)
    }
}
