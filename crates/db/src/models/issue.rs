//! Issue entity model and DTOs.

use issuetrack_core::issue::{self, IssuePriority, PriorityId};
use issuetrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An issue row from the `issues` table.
///
/// `identified_on` and `created_on` are assigned by the database on insert
/// and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Issue {
    pub id: DbId,
    pub summary: String,
    pub description: Option<String>,
    pub identified_by: DbId,
    pub identified_on: Timestamp,
    pub related_project_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
    pub priority: PriorityId,
    pub target_resolution: Date,
    pub progress: Option<String>,
    pub actual_resolution: Option<Date>,
    pub resolution_summary: Option<String>,
    pub created_on: Timestamp,
    pub created_by: Option<DbId>,
    pub deleted: bool,
    pub updated_at: Timestamp,
}

impl Issue {
    /// `true` once an actual resolution date has been recorded.
    pub fn resolved(&self) -> bool {
        issue::is_resolved(self.actual_resolution)
    }

    /// Whether the issue is past its target date as of `today`.
    ///
    /// `None` for resolved issues.
    pub fn overdue(&self, today: Date) -> Option<bool> {
        issue::is_overdue(self.target_resolution, self.actual_resolution, today)
    }

    /// Typed priority. `None` only if the stored value is out of range,
    /// which the table's check constraint prevents.
    pub fn priority_level(&self) -> Option<IssuePriority> {
        IssuePriority::try_from(self.priority).ok()
    }

    /// Attach the derived state computed against `today`.
    pub fn into_response(self, today: Date) -> IssueResponse {
        IssueResponse {
            resolved: self.resolved(),
            overdue: self.overdue(today),
            priority_label: self.priority_level().map(IssuePriority::label),
            issue: self,
        }
    }
}

/// Issue plus derived resolution state, for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct IssueResponse {
    #[serde(flatten)]
    pub issue: Issue,
    pub resolved: bool,
    pub overdue: Option<bool>,
    pub priority_label: Option<&'static str>,
}

/// DTO for creating a new issue. The creator is supplied separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIssue {
    pub summary: String,
    pub description: Option<String>,
    /// Defaults to the creating user if omitted.
    pub identified_by: Option<DbId>,
    pub related_project_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
    /// Defaults to 2 (Medium) if omitted.
    pub priority: Option<PriorityId>,
    pub target_resolution: Date,
    pub progress: Option<String>,
    pub actual_resolution: Option<Date>,
    pub resolution_summary: Option<String>,
}

/// DTO for updating an existing issue. All fields are optional.
///
/// `identified_by` is absent: the identifying user is read-only. Nullable
/// columns are cleared with an explicit `null`; clearing
/// `actual_resolution` reopens the issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIssue {
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub related_project_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub assignee_id: Option<Option<DbId>>,
    pub priority: Option<PriorityId>,
    pub target_resolution: Option<Date>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub progress: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub actual_resolution: Option<Option<Date>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub resolution_summary: Option<Option<String>>,
}
