//! Handlers for the `/projects` resource and its nested issue listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use issuetrack_core::error::CoreError;
use issuetrack_core::types::DbId;
use issuetrack_core::validation;
use issuetrack_db::models::issue::{Issue, IssueResponse};
use issuetrack_db::models::project::{CreateProject, Project, UpdateProject};
use issuetrack_db::repositories::{IssueRepo, ProjectRepo};
use serde::Serialize;

use super::{find_or_404, restore_or_404, soft_delete_or_404};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ScopeParams;
use crate::state::AppState;

/// Result of a bulk soft delete.
#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// POST /api/v1/projects
///
/// The caller is recorded as the project's creator.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validation::validate_project_name(&input.name)?;
    validation::validate_project_dates(input.start_date, input.target_end, input.actual_end)?;

    let project = ProjectRepo::create(&state.pool, &input, Some(auth.user_id)).await?;
    tracing::info!(project_id = project.id, user_id = auth.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = find_or_404::<ProjectRepo>(&state.pool, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Saving a project attributes it to the caller. Date ordering is checked
/// against the row as it will look after the update.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(ref name) = input.name {
        validation::validate_project_name(name)?;
    }
    let current = find_or_404::<ProjectRepo>(&state.pool, id).await?;
    validation::validate_project_dates(
        input.start_date.unwrap_or(current.start_date),
        input.target_end.unwrap_or(current.target_end),
        input.actual_end.unwrap_or(current.actual_end),
    )?;

    let project = ProjectRepo::update(&state.pool, id, &input, Some(auth.user_id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    soft_delete_or_404::<ProjectRepo>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/restore
pub async fn restore(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = restore_or_404::<ProjectRepo>(&state.pool, id).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/issues?scope=
///
/// Issues related to the project. The scope defaults to `all`.
pub async fn list_issues(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ScopeParams>,
) -> AppResult<Json<Vec<IssueResponse>>> {
    find_or_404::<ProjectRepo>(&state.pool, id).await?;
    let issues = ProjectRepo::pr_issues(&state.pool, id, params.scope_or_all()).await?;
    Ok(Json(with_derived_state(issues)))
}

/// GET /api/v1/projects/{id}/issues/unresolved?scope=
pub async fn list_unresolved_issues(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ScopeParams>,
) -> AppResult<Json<Vec<IssueResponse>>> {
    find_or_404::<ProjectRepo>(&state.pool, id).await?;
    let issues = ProjectRepo::unresolved_issues(&state.pool, id, params.scope_or_all()).await?;
    Ok(Json(with_derived_state(issues)))
}

/// DELETE /api/v1/projects/{id}/issues
///
/// Soft-deletes every live issue of the project.
pub async fn delete_issues(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BulkDeleteResponse>> {
    find_or_404::<ProjectRepo>(&state.pool, id).await?;
    let deleted = IssueRepo::soft_delete_by_project(&state.pool, id).await?;
    tracing::info!(project_id = id, deleted, "Soft-deleted project issues");
    Ok(Json(BulkDeleteResponse { deleted }))
}

fn with_derived_state(issues: Vec<Issue>) -> Vec<IssueResponse> {
    let today = Utc::now().date_naive();
    issues.into_iter().map(|i| i.into_response(today)).collect()
}
