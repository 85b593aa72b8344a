//! Repository for cross-table trash operations.
//!
//! Provides a unified view of soft-deleted rows across all soft-deletable
//! tables, plus single-item and bulk purge (hard delete) of the purgeable
//! ones. Trashed profiles are listed but never purged: a profile is only
//! removed together with its user.

use issuetrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::PgPool;

use crate::repositories::{IssueRepo, ProfileRepo, ProjectRepo, Purgeable, SoftDeletable};

/// Known entity types that support soft-delete.
const KNOWN_ENTITY_TYPES: &[&str] = &[ProjectRepo::TABLE, IssueRepo::TABLE, ProfileRepo::TABLE];

/// Entity types that can be purged, leaves first so [`TrashRepo::purge_all`]
/// never removes a project before the issues that reference it.
const PURGE_ORDER: &[&str] = &[IssueRepo::TABLE, ProjectRepo::TABLE];

/// A single soft-deleted item surfaced in the trash list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TrashedItem {
    pub id: DbId,
    pub entity_type: String,
    pub name_or_label: Option<String>,
    pub updated_at: Timestamp,
}

/// Summary returned by [`TrashRepo::list_trashed`].
#[derive(Debug, Clone, Serialize)]
pub struct TrashSummary {
    pub items: Vec<TrashedItem>,
    pub total_count: i64,
}

/// Returns `true` if `entity_type` is one of the known types.
pub fn is_known_entity_type(entity_type: &str) -> bool {
    KNOWN_ENTITY_TYPES.contains(&entity_type)
}

/// Returns `true` if trashed rows of `entity_type` may be purged.
pub fn is_purgeable_entity_type(entity_type: &str) -> bool {
    PURGE_ORDER.contains(&entity_type)
}

/// Provides cross-table trash operations.
pub struct TrashRepo;

impl TrashRepo {
    // ── Listing ───────────────────────────────────────────────────────

    /// List all soft-deleted items across entity tables.
    ///
    /// When `entity_type` is `Some`, only that single table is queried.
    /// Results are ordered by `updated_at DESC`.
    pub async fn list_trashed(
        pool: &PgPool,
        entity_type: Option<&str>,
    ) -> Result<TrashSummary, sqlx::Error> {
        let selects: Vec<String> = match entity_type {
            Some(et) => trashed_select(et).into_iter().collect(),
            None => KNOWN_ENTITY_TYPES
                .iter()
                .filter_map(|et| trashed_select(et))
                .collect(),
        };
        if selects.is_empty() {
            return Ok(TrashSummary {
                items: Vec::new(),
                total_count: 0,
            });
        }
        let sql = format!("{} ORDER BY updated_at DESC", selects.join(" UNION ALL "));
        let items = sqlx::query_as::<_, TrashedItem>(&sql).fetch_all(pool).await?;
        let total_count = items.len() as i64;
        Ok(TrashSummary { items, total_count })
    }

    // ── Purge (hard delete) ───────────────────────────────────────────

    /// Hard-delete every soft-deleted issue and project in one transaction.
    ///
    /// Fails, purging nothing, if a deleted project is still referenced by
    /// a live issue.
    pub async fn purge_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut total: u64 = 0;
        for table in PURGE_ORDER {
            let sql = format!("DELETE FROM {table} WHERE deleted = TRUE");
            let result = sqlx::query(&sql).execute(&mut *tx).await?;
            total += result.rows_affected();
        }
        tx.commit().await?;
        Ok(total)
    }

    /// Hard-delete a single soft-deleted record.
    ///
    /// Returns `true` if a row was removed, `false` if no matching
    /// soft-deleted row exists or the entity type is not purgeable.
    pub async fn purge_one(
        pool: &PgPool,
        entity_type: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        if entity_type == IssueRepo::TABLE {
            IssueRepo::purge(pool, id).await
        } else if entity_type == ProjectRepo::TABLE {
            ProjectRepo::purge(pool, id).await
        } else {
            Ok(false)
        }
    }
}

// ── Private helpers ──────────────────────────────────────────────────

/// `SELECT` of the soft-deleted rows of one entity table as [`TrashedItem`]s.
fn trashed_select(entity_type: &str) -> Option<String> {
    let table = KNOWN_ENTITY_TYPES.iter().find(|t| **t == entity_type)?;
    let label = label_expr(table);
    Some(format!(
        "SELECT id, '{table}' AS entity_type, {label} AS name_or_label, \
         updated_at FROM {table} WHERE deleted = TRUE"
    ))
}

/// Human-readable label of a trashed row, per table.
fn label_expr(table: &str) -> &'static str {
    match table {
        "projects" => "name",
        "issues" => "summary",
        _ => "'profile of user ' || user_id::text",
    }
}
