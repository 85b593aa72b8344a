//! Route definitions for the `/projects` resource.
//!
//! Also nests the project's issue listings under `/projects/{id}/issues`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// POST   /{id}/restore                -> restore
///
/// GET    /{id}/issues                 -> list_issues
/// DELETE /{id}/issues                 -> delete_issues
/// GET    /{id}/issues/unresolved      -> list_unresolved_issues
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/restore", post(project::restore))
        .route(
            "/{id}/issues",
            get(project::list_issues).delete(project::delete_issues),
        )
        .route(
            "/{id}/issues/unresolved",
            get(project::list_unresolved_issues),
        )
}
