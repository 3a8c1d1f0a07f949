//! Per-board feature toggles persisted as a JSON blob.

use serde::{Deserialize, Serialize};

/// Feature toggles stored with each board.
///
/// Missing keys in a persisted blob fall back to `true`, matching the
/// defaults applied when a board is created without explicit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Whether members may vote on items.
    #[serde(default = "enabled")]
    pub enable_voting: bool,
    /// Whether members may comment on items.
    #[serde(default = "enabled")]
    pub allow_comments: bool,
    /// Whether item creators are shown on cards.
    #[serde(default = "enabled")]
    pub show_creator: bool,
}

const fn enabled() -> bool {
    true
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            enable_voting: true,
            allow_comments: true,
            show_creator: true,
        }
    }
}
