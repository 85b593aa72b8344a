//! Shared query parameter types for API handlers.

use issuetrack_core::scope::RecordScope;
use serde::Deserialize;

/// Query parameters for project-scoped issue listings (`?scope=`).
///
/// The scope defaults to `all`: issue listings under a project include
/// soft-deleted issues unless the caller narrows them.
#[derive(Debug, Deserialize)]
pub struct ScopeParams {
    pub scope: Option<RecordScope>,
}

impl ScopeParams {
    pub fn scope_or_all(&self) -> RecordScope {
        self.scope.unwrap_or(RecordScope::All)
    }
}
