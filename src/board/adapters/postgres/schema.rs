//! Diesel schema for boards and board membership.

diesel::table! {
    /// Board records.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique slug derived from the name at creation.
        #[max_length = 255]
        slug -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Publication status.
        #[max_length = 20]
        status -> Varchar,
        /// Board type identifier.
        type_id -> Int8,
        /// Creating user.
        creator_id -> Uuid,
        /// Optional owning team.
        team_id -> Nullable<Uuid>,
        /// Privacy flag.
        is_private -> Bool,
        /// Feature toggles.
        settings -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Board membership pivot.
    board_members (board_id, user_id) {
        /// Board identifier.
        board_id -> Uuid,
        /// Member user identifier.
        user_id -> Uuid,
        /// Member role.
        #[max_length = 20]
        role -> Varchar,
        /// Membership timestamp.
        joined_at -> Timestamptz,
    }
}

diesel::joinable!(board_members -> boards (board_id));
diesel::allow_tables_to_appear_in_same_query!(boards, board_members);
