//! Diesel schema for tasks.

diesel::table! {
    /// Checklist tasks on board items.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning board item.
        board_item_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
