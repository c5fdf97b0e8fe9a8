//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the embedded migrations under `backend/migrations`.

diesel::table! {
    /// Registered user accounts. Rows are soft-deleted via `status`.
    users (user_idx) {
        /// Store-assigned surrogate key.
        user_idx -> Int4,
        /// Unique login identifier.
        user_id -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        /// Display name.
        nickname -> Varchar,
        /// `'A'` active or `'D'` deleted.
        status -> Bpchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Restaurant listings reviewed on video.
    restaurants (restaurant_idx) {
        restaurant_idx -> Int4,
        title -> Varchar,
        address -> Varchar,
        category -> Varchar,
        video_url -> Varchar,
        /// `'A'` listed or `'D'` hidden.
        status -> Bpchar,
        created_at -> Timestamptz,
    }
}
