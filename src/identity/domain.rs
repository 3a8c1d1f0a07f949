//! User identity value types.

use crate::ids::uuid_id;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Identifier of a user in the external authentication system.
    UserId
}

uuid_id! {
    /// Identifier of a team in the external authentication system.
    TeamId
}

/// Display data for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    id: UserId,
    name: String,
    email: String,
}

impl UserSummary {
    /// Creates a user summary.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
