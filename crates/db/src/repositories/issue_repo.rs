//! Repository for the `issues` table.

use issuetrack_core::scope::RecordScope;
use issuetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::issue::{CreateIssue, Issue, UpdateIssue};
use crate::repositories::{Purgeable, SoftDeletable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, summary, description, identified_by, identified_on, \
                       related_project_id, assignee_id, priority, target_resolution, progress, \
                       actual_resolution, resolution_summary, created_on, created_by, deleted, \
                       updated_at";

/// Provides CRUD operations for issues. Delete and restore come from
/// [`SoftDeletable`].
pub struct IssueRepo;

impl SoftDeletable for IssueRepo {
    const ENTITY: &'static str = "Issue";
    const TABLE: &'static str = "issues";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_on DESC, id DESC";

    type Row = Issue;
}

impl Purgeable for IssueRepo {}

impl IssueRepo {
    /// Insert a new issue, returning the created row.
    ///
    /// If `priority` is `None` in the input, defaults to 2 (Medium).
    pub async fn create(
        pool: &PgPool,
        input: &CreateIssue,
        created_by: Option<DbId>,
    ) -> Result<Issue, sqlx::Error> {
        let query = format!(
            "INSERT INTO issues (summary, description, identified_by, related_project_id,
                                 assignee_id, priority, target_resolution, progress,
                                 actual_resolution, resolution_summary, created_by)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 2), $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(input.identified_by)
            .bind(input.related_project_id)
            .bind(input.assignee_id)
            .bind(input.priority)
            .bind(input.target_resolution)
            .bind(&input.progress)
            .bind(input.actual_resolution)
            .bind(&input.resolution_summary)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List all issues ordered by most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Issue>, sqlx::Error> {
        Self::only_active(pool).await
    }

    /// Update a live issue. Only fields present in `input` are applied;
    /// nullable fields may be present as `None` to clear them.
    ///
    /// `created_by`, when given, replaces the recorded creator. The
    /// identifying user and both creation timestamps are never touched.
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIssue,
        created_by: Option<DbId>,
    ) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!(
            "UPDATE issues SET
                summary = COALESCE($2, summary),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                related_project_id = CASE WHEN $5 THEN $6 ELSE related_project_id END,
                assignee_id = CASE WHEN $7 THEN $8 ELSE assignee_id END,
                priority = COALESCE($9, priority),
                target_resolution = COALESCE($10, target_resolution),
                progress = CASE WHEN $11 THEN $12 ELSE progress END,
                actual_resolution = CASE WHEN $13 THEN $14 ELSE actual_resolution END,
                resolution_summary = CASE WHEN $15 THEN $16 ELSE resolution_summary END,
                created_by = COALESCE($17, created_by)
             WHERE id = $1 AND deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .bind(&input.summary)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.related_project_id.is_some())
            .bind(input.related_project_id.flatten())
            .bind(input.assignee_id.is_some())
            .bind(input.assignee_id.flatten())
            .bind(input.priority)
            .bind(input.target_resolution)
            .bind(input.progress.is_some())
            .bind(input.progress.as_ref().and_then(|v| v.as_deref()))
            .bind(input.actual_resolution.is_some())
            .bind(input.actual_resolution.flatten())
            .bind(input.resolution_summary.is_some())
            .bind(input.resolution_summary.as_ref().and_then(|v| v.as_deref()))
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    /// Issues related to a project, in the given scope, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        scope: RecordScope,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM issues
             WHERE related_project_id = $1 AND {}
             ORDER BY created_on ASC, id ASC",
            scope.predicate("issues")
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Issues related to a project with no actual resolution date, in the
    /// given scope, oldest first.
    pub async fn list_unresolved_by_project(
        pool: &PgPool,
        project_id: DbId,
        scope: RecordScope,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM issues
             WHERE related_project_id = $1 AND actual_resolution IS NULL AND {}
             ORDER BY created_on ASC, id ASC",
            scope.predicate("issues")
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete every live issue of a project in one statement.
    ///
    /// Returns the number of issues flagged.
    pub async fn soft_delete_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE issues SET deleted = TRUE WHERE related_project_id = $1 AND deleted = FALSE",
        )
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
