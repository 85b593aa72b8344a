//! Repository for the `profiles` table.
//!
//! Writes that create, re-save or remove a profile take a connection
//! rather than the pool and are crate-private: they only run inside the
//! user transactions of [`UserService`](crate::services::UserService).

use issuetrack_core::scope::RecordScope;
use issuetrack_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::profile::Profile;
use crate::repositories::SoftDeletable;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, deleted, created_at, updated_at";

/// Provides read and soft-delete operations for profiles.
pub struct ProfileRepo;

impl SoftDeletable for ProfileRepo {
    const ENTITY: &'static str = "Profile";
    const TABLE: &'static str = "profiles";
    const COLUMNS: &'static str = COLUMNS;

    type Row = Profile;
}

impl ProfileRepo {
    /// Insert the profile of a freshly created user.
    pub(crate) async fn create_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!("INSERT INTO profiles (user_id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_one(conn)
            .await
    }

    /// Re-save a user's profile, bumping its `updated_at`.
    ///
    /// Returns `None` if the user has no profile.
    pub(crate) async fn touch(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET updated_at = NOW() WHERE user_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(conn)
            .await
    }

    /// Remove a user's profile, deleted or not, ahead of removing the user.
    pub(crate) async fn delete_for_user(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Find the profile belonging to a user, if it lies in `scope`.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
        scope: RecordScope,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles WHERE user_id = $1 AND {}",
            scope.predicate("profiles")
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles, newest first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        Self::only_active(pool).await
    }

    /// List soft-deleted profiles.
    pub async fn show_deleted(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        Self::deleted(pool).await
    }
}
