//! Profile entity model.
//!
//! There is no create or update DTO: a profile is only ever written by
//! [`UserService`](crate::services::UserService) alongside its user, and
//! its `user_id` is read-only afterwards.

use issuetrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A profile row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
