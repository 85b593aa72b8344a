//! Handlers for the `/issues` resource.
//!
//! Responses carry the derived `resolved` and `overdue` state, computed
//! against the server's current date.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use issuetrack_core::error::CoreError;
use issuetrack_core::issue::{IssuePriority, PriorityId};
use issuetrack_core::types::DbId;
use issuetrack_core::validation;
use issuetrack_db::models::issue::{CreateIssue, IssueResponse, UpdateIssue};
use issuetrack_db::repositories::IssueRepo;

use super::{find_or_404, restore_or_404, soft_delete_or_404};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn validate_priority(priority: Option<PriorityId>) -> AppResult<()> {
    if let Some(p) = priority {
        IssuePriority::try_from(p)?;
    }
    Ok(())
}

/// POST /api/v1/issues
///
/// The caller is recorded as the creator and, unless the body names
/// someone else, as the user who identified the issue.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateIssue>,
) -> AppResult<(StatusCode, Json<IssueResponse>)> {
    validation::validate_issue_summary(&input.summary)?;
    validate_priority(input.priority)?;
    input.identified_by.get_or_insert(auth.user_id);

    let issue = IssueRepo::create(&state.pool, &input, Some(auth.user_id)).await?;
    tracing::info!(issue_id = issue.id, user_id = auth.user_id, "Issue created");
    Ok((
        StatusCode::CREATED,
        Json(issue.into_response(Utc::now().date_naive())),
    ))
}

/// GET /api/v1/issues
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<IssueResponse>>> {
    let today = Utc::now().date_naive();
    let issues = IssueRepo::list(&state.pool).await?;
    Ok(Json(
        issues.into_iter().map(|i| i.into_response(today)).collect(),
    ))
}

/// GET /api/v1/issues/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<IssueResponse>> {
    let issue = find_or_404::<IssueRepo>(&state.pool, id).await?;
    Ok(Json(issue.into_response(Utc::now().date_naive())))
}

/// PUT /api/v1/issues/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIssue>,
) -> AppResult<Json<IssueResponse>> {
    if let Some(ref summary) = input.summary {
        validation::validate_issue_summary(summary)?;
    }
    validate_priority(input.priority)?;

    let issue = IssueRepo::update(&state.pool, id, &input, Some(auth.user_id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Issue", id }))?;
    Ok(Json(issue.into_response(Utc::now().date_naive())))
}

/// DELETE /api/v1/issues/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    soft_delete_or_404::<IssueRepo>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/issues/{id}/restore
pub async fn restore(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<IssueResponse>> {
    let issue = restore_or_404::<IssueRepo>(&state.pool, id).await?;
    Ok(Json(issue.into_response(Utc::now().date_naive())))
}
