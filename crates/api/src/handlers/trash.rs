//! Handlers for the `/trash` resource.
//!
//! Lists soft-deleted rows across projects, issues and profiles, and lets
//! admins hard-delete (purge) trashed projects and issues. Profiles are
//! only removed together with their user.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use issuetrack_core::error::CoreError;
use issuetrack_core::types::DbId;
use issuetrack_db::repositories::trash_repo::{
    is_known_entity_type, is_purgeable_entity_type, TrashRepo, TrashSummary,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the trash listing endpoint.
#[derive(Debug, Deserialize)]
pub struct TrashQuery {
    /// Optional entity type filter (e.g. "projects", "issues").
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
}

/// GET /api/v1/trash
///
/// List all soft-deleted items, optionally filtered by entity type.
pub async fn list_trashed(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TrashQuery>,
) -> AppResult<Json<TrashSummary>> {
    if let Some(ref et) = params.entity_type {
        validate_entity_type(et)?;
    }
    let summary = TrashRepo::list_trashed(&state.pool, params.entity_type.as_deref()).await?;
    Ok(Json(summary))
}

/// DELETE /api/v1/trash/purge
///
/// Hard-delete every soft-deleted issue and project. Returns 409 and
/// purges nothing if a trashed project is still referenced by a live issue.
pub async fn purge_all(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    let purged = TrashRepo::purge_all(&state.pool).await?;
    tracing::info!(purged, admin_id = admin.user_id, "Purged trash");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/trash/{entity_type}/{id}/purge
///
/// Hard-delete a single soft-deleted project or issue. Any other entity
/// type, profiles included, is a 400.
pub async fn purge_one(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((entity_type, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    if !is_purgeable_entity_type(&entity_type) {
        return Err(AppError::BadRequest(format!(
            "Entity type cannot be purged: {entity_type}"
        )));
    }
    let deleted = TrashRepo::purge_one(&state.pool, &entity_type, id).await?;
    if deleted {
        tracing::info!(%entity_type, id, admin_id = admin.user_id, "Purged trashed item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TrashedItem",
            id,
        }))
    }
}

/// Validate that `entity_type` is one of the known soft-deletable types.
fn validate_entity_type(entity_type: &str) -> AppResult<()> {
    if is_known_entity_type(entity_type) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Unknown entity type: {entity_type}"
        )))
    }
}
