pub mod health;
pub mod issue;
pub mod profile;
pub mod project;
pub mod trash;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                              list, create (admin only)
/// /users/{id}                         get, update (admin only)
///
/// /profiles                           list active
/// /profiles/deleted                   list soft-deleted
/// /profiles/{id}                      get (with projects), delete
/// /profiles/{id}/restore              restore (POST)
///
/// /projects                           list, create
/// /projects/{id}                      get, update, delete
/// /projects/{id}/restore              restore (POST)
/// /projects/{id}/issues               list (?scope=), bulk delete
/// /projects/{id}/issues/unresolved    list unresolved (?scope=)
///
/// /issues                             list, create
/// /issues/{id}                        get, update, delete
/// /issues/{id}/restore                restore (POST)
///
/// /trash                              list trashed (?type=)
/// /trash/purge                        purge all (admin only)
/// /trash/{entity_type}/{id}/purge     purge one (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/profiles", profile::router())
        .nest("/projects", project::router())
        .nest("/issues", issue::router())
        .nest("/trash", trash::router())
}
