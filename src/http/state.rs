//! Shared handler state.

use crate::app::Repositories;
use crate::board::services::{BoardDetailService, BoardLifecycleService, BoardMembershipService};
use crate::item::domain::ColumnSet;
use crate::item::services::{ItemEngagementService, ItemLifecycleService};
use crate::task::services::TaskLifecycleService;
use mockable::DefaultClock;
use std::sync::Arc;

/// Services available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Board creation, listing, archiving, and deletion.
    pub boards: BoardLifecycleService<DefaultClock>,
    /// Member invitations and removals.
    pub members: BoardMembershipService<DefaultClock>,
    /// Board detail read model.
    pub detail: BoardDetailService,
    /// Item creation, status switches, and deletion.
    pub items: ItemLifecycleService<DefaultClock>,
    /// Votes and comments.
    pub engagement: ItemEngagementService<DefaultClock>,
    /// Item tasks.
    pub tasks: TaskLifecycleService<DefaultClock>,
}

impl AppState {
    /// Wires every service over `repositories`.
    #[must_use]
    pub fn new(repositories: &Repositories, columns: &ColumnSet, page_size: usize) -> Self {
        let clock = Arc::new(DefaultClock);
        let Repositories {
            users,
            boards,
            items,
            comments,
            tasks,
        } = repositories.clone();

        Self {
            boards: BoardLifecycleService::new(Arc::clone(&boards), Arc::clone(&clock), page_size),
            members: BoardMembershipService::new(
                Arc::clone(&boards),
                Arc::clone(&users),
                Arc::clone(&clock),
            ),
            detail: BoardDetailService::new(
                Arc::clone(&boards),
                Arc::clone(&items),
                Arc::clone(&tasks),
                Arc::clone(&comments),
                users,
                columns.clone(),
            ),
            items: ItemLifecycleService::new(
                Arc::clone(&boards),
                Arc::clone(&items),
                columns.clone(),
                Arc::clone(&clock),
            ),
            engagement: ItemEngagementService::new(
                Arc::clone(&boards),
                Arc::clone(&items),
                comments,
                Arc::clone(&clock),
            ),
            tasks: TaskLifecycleService::new(boards, items, tasks, clock),
        }
    }
}
