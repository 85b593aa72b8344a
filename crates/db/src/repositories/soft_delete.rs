//! Soft-delete capability shared by every flag-carrying table.
//!
//! A repository opts in by naming its table, its column list and its row
//! type; all delete / restore / scoped-read operations then come from the
//! default methods below, so every entity gets identical semantics.
//!
//! "Deleting" only ever sets `deleted = TRUE`. Physical removal is the
//! separate [`Purgeable`] capability, implemented only by entities the
//! trash may purge on their own. Profiles live and die with their user.

use std::future::Future;

use issuetrack_core::scope::RecordScope;
use issuetrack_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

pub trait SoftDeletable {
    /// Entity name used in not-found errors (e.g. `"Project"`).
    const ENTITY: &'static str;
    /// Backing table.
    const TABLE: &'static str;
    /// Column list selected into [`Self::Row`].
    const COLUMNS: &'static str;
    /// `ORDER BY` clause for list queries.
    const ORDER_BY: &'static str = "id DESC";

    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static;

    /// Flag a live row as deleted. Returns `true` if a row was flagged,
    /// `false` if it does not exist or is already deleted.
    fn soft_delete(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "UPDATE {} SET deleted = TRUE WHERE id = $1 AND deleted = FALSE",
                Self::TABLE
            );
            let result = sqlx::query(&query).bind(id).execute(pool).await?;
            Ok(result.rows_affected() > 0)
        }
    }

    /// Clear the deleted flag. Returns `true` if a deleted row was restored.
    fn restore(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "UPDATE {} SET deleted = FALSE WHERE id = $1 AND deleted = TRUE",
                Self::TABLE
            );
            let result = sqlx::query(&query).bind(id).execute(pool).await?;
            Ok(result.rows_affected() > 0)
        }
    }

    /// Flag every live row in `ids` as deleted with a single statement.
    ///
    /// Returns the number of rows flagged.
    fn soft_delete_many(
        pool: &PgPool,
        ids: &[DbId],
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "UPDATE {} SET deleted = TRUE WHERE id = ANY($1) AND deleted = FALSE",
                Self::TABLE
            );
            let result = sqlx::query(&query).bind(ids).execute(pool).await?;
            Ok(result.rows_affected())
        }
    }

    /// Find a row by ID within the default scope (not deleted).
    fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Row>, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "SELECT {} FROM {} WHERE id = $1 AND deleted = FALSE",
                Self::COLUMNS,
                Self::TABLE
            );
            sqlx::query_as::<_, Self::Row>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await
        }
    }

    /// Find a row by ID regardless of its deleted flag.
    fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Row>, sqlx::Error>> + Send {
        async move {
            let query = format!("SELECT {} FROM {} WHERE id = $1", Self::COLUMNS, Self::TABLE);
            sqlx::query_as::<_, Self::Row>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await
        }
    }

    /// List rows in the given scope.
    fn list_in_scope(
        pool: &PgPool,
        scope: RecordScope,
    ) -> impl Future<Output = Result<Vec<Self::Row>, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "SELECT {} FROM {} WHERE {} ORDER BY {}",
                Self::COLUMNS,
                Self::TABLE,
                scope.predicate(Self::TABLE),
                Self::ORDER_BY
            );
            sqlx::query_as::<_, Self::Row>(&query).fetch_all(pool).await
        }
    }

    /// Every row not flagged deleted.
    fn only_active(
        pool: &PgPool,
    ) -> impl Future<Output = Result<Vec<Self::Row>, sqlx::Error>> + Send {
        Self::list_in_scope(pool, RecordScope::Active)
    }

    /// Every row flagged deleted.
    fn deleted(
        pool: &PgPool,
    ) -> impl Future<Output = Result<Vec<Self::Row>, sqlx::Error>> + Send {
        Self::list_in_scope(pool, RecordScope::Deleted)
    }
}

/// Purge (hard delete) of soft-deleted rows, for entities that can be
/// removed independently of any owner.
pub trait Purgeable: SoftDeletable {
    /// Physically remove a soft-deleted row. Returns `true` if a row was
    /// removed, `false` if no deleted row with this id exists.
    ///
    /// Fails with a foreign-key violation while a protected reference to
    /// the row exists.
    fn purge(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = Result<bool, sqlx::Error>> + Send {
        async move {
            let query = format!(
                "DELETE FROM {} WHERE id = $1 AND deleted = TRUE",
                Self::TABLE
            );
            let result = sqlx::query(&query).bind(id).execute(pool).await?;
            Ok(result.rows_affected() > 0)
        }
    }
}
