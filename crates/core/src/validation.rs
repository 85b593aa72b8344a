//! Input validation for user, project and issue writes.
//!
//! Only length and date-ordering rules live here; nullability and types
//! are enforced by the DTOs and the schema.

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project name.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Maximum length of an issue summary.
pub const MAX_ISSUE_SUMMARY_LEN: usize = 200;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 150;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of a user's display name.
pub const MAX_NAME_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn validate_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max} characters"
        )));
    }
    Ok(())
}

/// Validate a project name: non-blank and within the length limit.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_text("Project name", name, MAX_PROJECT_NAME_LEN)
}

/// Validate an issue summary: non-blank and within the length limit.
pub fn validate_issue_summary(summary: &str) -> Result<(), CoreError> {
    validate_text("Issue summary", summary, MAX_ISSUE_SUMMARY_LEN)
}

/// Validate a username: non-blank and within the length limit.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_text("Username", username, MAX_USERNAME_LEN)
}

/// Validate a display name. Empty names are allowed.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address: within the length limit and containing a
/// single `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_text("Email", email, MAX_EMAIL_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!(
            "Email '{email}' is not a valid address"
        ))),
    }
}

/// Validate a project's schedule: the target end and, if set, the actual
/// end may not precede the start date.
pub fn validate_project_dates(
    start_date: Date,
    target_end: Date,
    actual_end: Option<Date>,
) -> Result<(), CoreError> {
    if target_end < start_date {
        return Err(CoreError::Validation(
            "Project target end must not precede its start date".to_string(),
        ));
    }
    if let Some(actual) = actual_end {
        if actual < start_date {
            return Err(CoreError::Validation(
                "Project actual end must not precede its start date".to_string(),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
