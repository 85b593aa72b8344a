//! Request handlers for the issue tracker entities.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository or service in
//! `issuetrack_db` and map errors via [`AppError`].

pub mod issue;
pub mod profile;
pub mod project;
pub mod trash;
pub mod user;

use issuetrack_core::error::CoreError;
use issuetrack_core::types::DbId;
use issuetrack_db::repositories::SoftDeletable;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

fn not_found<R: SoftDeletable>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::ENTITY,
        id,
    })
}

/// Load a live row of `R`, or 404.
pub(crate) async fn find_or_404<R: SoftDeletable>(pool: &PgPool, id: DbId) -> AppResult<R::Row> {
    R::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))
}

/// Soft delete a live row of `R`, or 404 if there is none.
pub(crate) async fn soft_delete_or_404<R: SoftDeletable>(pool: &PgPool, id: DbId) -> AppResult<()> {
    if R::soft_delete(pool, id).await? {
        tracing::info!(entity = R::ENTITY, id, "Soft-deleted");
        Ok(())
    } else {
        Err(not_found::<R>(id))
    }
}

/// Restore a soft-deleted row of `R` and return it, or 404 if no deleted
/// row with that id exists.
pub(crate) async fn restore_or_404<R: SoftDeletable>(pool: &PgPool, id: DbId) -> AppResult<R::Row> {
    if !R::restore(pool, id).await? {
        return Err(not_found::<R>(id));
    }
    tracing::info!(entity = R::ENTITY, id, "Restored");
    find_or_404::<R>(pool, id).await
}
