//! Repository for the `projects` table.

use issuetrack_core::scope::RecordScope;
use issuetrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::issue::Issue;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::{IssueRepo, Purgeable, SoftDeletable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, start_date, target_end, actual_end, created_on, \
                       created_by, assignee_id, deleted, updated_at";

/// Provides CRUD operations for projects. Delete and restore come from
/// [`SoftDeletable`].
pub struct ProjectRepo;

impl SoftDeletable for ProjectRepo {
    const ENTITY: &'static str = "Project";
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_on DESC, id DESC";

    type Row = Project;
}

impl Purgeable for ProjectRepo {}

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        created_by: Option<DbId>,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, start_date, target_end, actual_end, created_by, assignee_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.target_end)
            .bind(input.actual_end)
            .bind(created_by)
            .bind(input.assignee_id)
            .fetch_one(pool)
            .await
    }

    /// List all projects ordered by most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        Self::only_active(pool).await
    }

    /// List projects the user created or is assigned to, in the given scope.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        scope: RecordScope,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE (created_by = $1 OR assignee_id = $1) AND {}
             ORDER BY created_on DESC, id DESC",
            scope.predicate("projects")
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a live project. Only fields present in `input` are applied;
    /// `actual_end` and `assignee_id` may be present as `None` to clear them.
    ///
    /// `created_by`, when given, replaces the recorded creator: saving a
    /// project attributes it to the saving user. `created_on` is never
    /// touched. Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        created_by: Option<DbId>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                target_end = COALESCE($4, target_end),
                actual_end = CASE WHEN $5 THEN $6 ELSE actual_end END,
                assignee_id = CASE WHEN $7 THEN $8 ELSE assignee_id END,
                created_by = COALESCE($9, created_by)
             WHERE id = $1 AND deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.target_end)
            .bind(input.actual_end.is_some())
            .bind(input.actual_end.flatten())
            .bind(input.assignee_id.is_some())
            .bind(input.assignee_id.flatten())
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    /// Issues whose related project is `project_id`, in the given scope.
    pub async fn pr_issues(
        pool: &PgPool,
        project_id: DbId,
        scope: RecordScope,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        IssueRepo::list_by_project(pool, project_id, scope).await
    }

    /// Issues of `project_id` with no actual resolution date, in the given scope.
    pub async fn unresolved_issues(
        pool: &PgPool,
        project_id: DbId,
        scope: RecordScope,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        IssueRepo::list_unresolved_by_project(pool, project_id, scope).await
    }
}
