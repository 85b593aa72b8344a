//! Route definitions for the `/profiles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /                -> list
/// GET    /deleted         -> list_deleted
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// POST   /{id}/restore    -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::list))
        .route("/deleted", get(profile::list_deleted))
        .route("/{id}", get(profile::get_by_id).delete(profile::delete))
        .route("/{id}/restore", post(profile::restore))
}
