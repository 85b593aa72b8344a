//! Project entity model and DTOs.

use issuetrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `created_on` is assigned by the database on insert and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub start_date: Date,
    pub target_end: Date,
    pub actual_end: Option<Date>,
    pub created_on: Timestamp,
    pub created_by: Option<DbId>,
    pub assignee_id: Option<DbId>,
    pub deleted: bool,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. The creator is supplied separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub start_date: Date,
    pub target_end: Date,
    pub actual_end: Option<Date>,
    pub assignee_id: Option<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `actual_end` and `assignee_id` can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub target_end: Option<Date>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub actual_end: Option<Option<Date>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub assignee_id: Option<Option<DbId>>,
}
