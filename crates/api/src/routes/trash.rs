//! Route definitions for the `/trash` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/trash`.
///
/// ```text
/// GET    /                            -> list_trashed
/// DELETE /purge                       -> purge_all (admin)
/// DELETE /{entity_type}/{id}/purge    -> purge_one (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list_trashed))
        .route("/purge", delete(trash::purge_all))
        .route("/{entity_type}/{id}/purge", delete(trash::purge_one))
}
