//! Route definitions for the `/issues` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::issue;
use crate::state::AppState;

/// Routes mounted at `/issues`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/restore    -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(issue::list).post(issue::create))
        .route(
            "/{id}",
            get(issue::get_by_id)
                .put(issue::update)
                .delete(issue::delete),
        )
        .route("/{id}/restore", post(issue::restore))
}
