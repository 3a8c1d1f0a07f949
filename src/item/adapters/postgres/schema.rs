//! Diesel schema for board items, votes, and comments.

diesel::table! {
    /// Board item records.
    board_items (id) {
        /// Item identifier.
        id -> Uuid,
        /// Owning board.
        board_id -> Uuid,
        /// Creating user.
        creator_id -> Uuid,
        /// Item title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Status column label.
        #[max_length = 50]
        status -> Varchar,
        /// Priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Creation-time position.
        position -> Int4,
        /// Cached vote count.
        votes -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// One vote per user and item.
    board_item_votes (board_item_id, user_id) {
        /// Voted item.
        board_item_id -> Uuid,
        /// Voting user.
        user_id -> Uuid,
        /// Vote timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Item comments.
    board_item_comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Commented item.
        board_item_id -> Uuid,
        /// Author.
        author_id -> Uuid,
        /// Comment body.
        content -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(board_item_votes -> board_items (board_item_id));
diesel::joinable!(board_item_comments -> board_items (board_item_id));
diesel::allow_tables_to_appear_in_same_query!(board_items, board_item_votes, board_item_comments);
