//! Handlers for the `/profiles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use issuetrack_core::scope::RecordScope;
use issuetrack_core::types::DbId;
use issuetrack_db::models::profile::Profile;
use issuetrack_db::models::project::Project;
use issuetrack_db::repositories::{ProfileRepo, ProjectRepo};
use serde::Serialize;

use super::{find_or_404, restore_or_404, soft_delete_or_404};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A profile with the live projects its user created or is assigned to.
#[derive(Debug, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: Profile,
    pub projects: Vec<Project>,
}

/// GET /api/v1/profiles
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    let profiles = ProfileRepo::list(&state.pool).await?;
    Ok(Json(profiles))
}

/// GET /api/v1/profiles/deleted
pub async fn list_deleted(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Profile>>> {
    let profiles = ProfileRepo::show_deleted(&state.pool).await?;
    Ok(Json(profiles))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileDetail>> {
    let profile = find_or_404::<ProfileRepo>(&state.pool, id).await?;
    let projects =
        ProjectRepo::list_for_user(&state.pool, profile.user_id, RecordScope::Active).await?;
    Ok(Json(ProfileDetail { profile, projects }))
}

/// DELETE /api/v1/profiles/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    soft_delete_or_404::<ProfileRepo>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profiles/{id}/restore
pub async fn restore(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = restore_or_404::<ProfileRepo>(&state.pool, id).await?;
    Ok(Json(profile))
}
