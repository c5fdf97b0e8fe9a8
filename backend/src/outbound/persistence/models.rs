//! Internal Diesel row structs. Never exposed beyond the persistence layer.

use diesel::prelude::*;

use super::schema::{restaurants, users};

/// Columns read when authenticating a user.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserCredentialRow {
    pub user_idx: i32,
    pub nickname: String,
    pub password_hash: String,
}

/// Insertable struct for new accounts; `status` and timestamps use column
/// defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub user_id: &'a str,
    pub password_hash: &'a str,
    pub nickname: &'a str,
}

/// Columns returned by the restaurant listing.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub title: String,
    pub address: String,
    pub category: String,
    pub video_url: String,
}
