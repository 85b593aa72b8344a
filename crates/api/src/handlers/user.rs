//! Handlers for the `/users` resource (admin only).
//!
//! Writes go through [`UserService`] so every user keeps exactly one
//! profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use issuetrack_core::error::CoreError;
use issuetrack_core::types::DbId;
use issuetrack_core::validation;
use issuetrack_db::models::user::{CreateUser, UpdateUser, User};
use issuetrack_db::repositories::UserRepo;
use issuetrack_db::services::{UserService, UserWithProfile};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/v1/users
///
/// Creates the user and its profile in one transaction.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserWithProfile>)> {
    validation::validate_username(&input.username)?;
    validation::validate_email(&input.email)?;
    validation::validate_name(&input.name)?;

    let created = UserService::create_with_profile(&state.pool, &input).await?;
    tracing::info!(
        user_id = created.user.id,
        admin_id = admin.user_id,
        "User created via admin API"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
///
/// Applies the changes and re-saves the user's profile.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserWithProfile>> {
    if let Some(ref username) = input.username {
        validation::validate_username(username)?;
    }
    if let Some(ref email) = input.email {
        validation::validate_email(email)?;
    }
    if let Some(ref name) = input.name {
        validation::validate_name(name)?;
    }

    let updated = UserService::update_with_profile(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/users/{id}
///
/// Removes the user together with its profile. Responds 409 while the user
/// is still referenced by projects or issues.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserService::delete_with_profile(&state.pool, id).await? {
        tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted via admin API");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
