//! Issue priority and resolution-state rules.
//!
//! An issue is *resolved* once it has an actual resolution date. It is
//! *overdue* when it is still unresolved and its target resolution date
//! lies before the reference day. For a resolved issue "overdue" is not
//! meaningful, so [`is_overdue`] returns `None` rather than `Some(false)`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Priority ID type matching the SMALLINT `issues.priority` column.
pub type PriorityId = i16;

/// Issue priority. Discriminants match the values stored in the database.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum IssuePriority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
    Extra = 4,
}

impl IssuePriority {
    /// All priorities, lowest first.
    pub const ALL: [IssuePriority; 4] = [
        IssuePriority::Low,
        IssuePriority::Medium,
        IssuePriority::High,
        IssuePriority::Extra,
    ];

    /// Return the database priority ID.
    pub fn id(self) -> PriorityId {
        self as PriorityId
    }

    /// Human-readable label, as shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            IssuePriority::Low => "Low",
            IssuePriority::Medium => "Medium",
            IssuePriority::High => "High",
            IssuePriority::Extra => "Extra",
        }
    }
}

impl From<IssuePriority> for PriorityId {
    fn from(value: IssuePriority) -> Self {
        value as PriorityId
    }
}

impl TryFrom<PriorityId> for IssuePriority {
    type Error = CoreError;

    fn try_from(id: PriorityId) -> Result<Self, Self::Error> {
        IssuePriority::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid priority {id}. Must be between {} and {}",
                    IssuePriority::Low.id(),
                    IssuePriority::Extra.id()
                ))
            })
    }
}

/// An issue is resolved iff its actual resolution date is set.
pub fn is_resolved(actual_resolution: Option<Date>) -> bool {
    actual_resolution.is_some()
}

/// Overdue state of an issue relative to `today`.
///
/// Returns `None` for resolved issues, otherwise whether the target
/// resolution date has already passed. An issue due today is not overdue.
pub fn is_overdue(
    target_resolution: Date,
    actual_resolution: Option<Date>,
    today: Date,
) -> Option<bool> {
    if is_resolved(actual_resolution) {
        None
    } else {
        Some(target_resolution < today)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
