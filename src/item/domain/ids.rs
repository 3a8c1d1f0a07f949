//! Identifier types for items and comments.

use crate::ids::uuid_id;

uuid_id! {
    /// Unique identifier of a board item.
    ItemId
}

uuid_id! {
    /// Unique identifier of an item comment.
    CommentId
}
