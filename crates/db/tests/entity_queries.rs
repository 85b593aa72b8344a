//! Integration tests for project/issue CRUD and derived queries.
//!
//! Covers:
//! - Defaults assigned on insert (priority, creation dates, deleted flag)
//! - Creation dates surviving updates unchanged
//! - `pr_issues` / `unresolved_issues` under each record scope
//! - Resolved / overdue state of stored issues

use chrono::{Days, NaiveDate, Utc};
use issuetrack_core::issue::IssuePriority;
use issuetrack_core::scope::RecordScope;
use issuetrack_db::models::issue::{CreateIssue, UpdateIssue};
use issuetrack_db::models::project::{CreateProject, UpdateProject};
use issuetrack_db::models::user::CreateUser;
use issuetrack_db::repositories::{IssueRepo, ProjectRepo, SoftDeletable};
use issuetrack_db::services::UserService;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn new_user_id(pool: &PgPool, username: &str) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        name: "Test User".to_string(),
    };
    UserService::create_with_profile(pool, &input)
        .await
        .unwrap()
        .user
        .id
}

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        start_date: date(2024, 1, 1),
        target_end: date(2024, 6, 1),
        actual_end: None,
        assignee_id: None,
    }
}

fn new_issue(identified_by: i64, project_id: i64, target: NaiveDate) -> CreateIssue {
    CreateIssue {
        summary: "Login button misaligned".to_string(),
        description: Some("Off by a few pixels on mobile".to_string()),
        identified_by: Some(identified_by),
        related_project_id: Some(project_id),
        assignee_id: None,
        priority: None,
        target_resolution: target,
        progress: None,
        actual_resolution: None,
        resolution_summary: None,
    }
}

fn resolve_on(day: NaiveDate) -> UpdateIssue {
    UpdateIssue {
        actual_resolution: Some(Some(day)),
        resolution_summary: Some(Some("Fixed".to_string())),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: defaults on insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let user = new_user_id(&pool, "defaults").await;
    let project = ProjectRepo::create(&pool, &new_project("Defaults"), Some(user))
        .await
        .unwrap();
    assert_eq!(project.created_by, Some(user));
    assert_eq!(project.assignee_id, None);
    assert!(!project.deleted);

    let issue = IssueRepo::create(&pool, &new_issue(user, project.id, date(2024, 5, 1)), Some(user))
        .await
        .unwrap();
    assert_eq!(issue.priority, IssuePriority::Medium.id());
    assert_eq!(issue.priority_level(), Some(IssuePriority::Medium));
    assert_eq!(issue.identified_by, user);
    assert_eq!(issue.created_by, Some(user));
    assert!(!issue.deleted);
    assert!(!issue.resolved());
}

// ---------------------------------------------------------------------------
// Test: creation dates are immutable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_creation_dates_survive_updates(pool: PgPool) {
    let creator = new_user_id(&pool, "creator").await;
    let editor = new_user_id(&pool, "editor").await;
    let project = ProjectRepo::create(&pool, &new_project("Immutable"), Some(creator))
        .await
        .unwrap();

    let update = UpdateProject {
        name: Some("Renamed".to_string()),
        actual_end: Some(Some(date(2024, 5, 30))),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update, Some(editor))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.actual_end, Some(date(2024, 5, 30)));
    assert_eq!(updated.created_on, project.created_on);
    assert_eq!(updated.created_by, Some(editor), "saving attributes to the saver");
    assert!(updated.updated_at >= project.updated_at);

    let issue = IssueRepo::create(&pool, &new_issue(creator, project.id, date(2024, 5, 1)), Some(creator))
        .await
        .unwrap();
    let updated = IssueRepo::update(&pool, issue.id, &resolve_on(date(2024, 4, 20)), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.identified_on, issue.identified_on);
    assert_eq!(updated.created_on, issue.created_on);
    assert_eq!(updated.identified_by, creator);
    assert_eq!(updated.created_by, Some(creator), "None keeps the recorded creator");
}

// ---------------------------------------------------------------------------
// Test: updates skip soft-deleted rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_ignores_soft_deleted(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Gone"), None)
        .await
        .unwrap();
    ProjectRepo::soft_delete(&pool, project.id).await.unwrap();

    let update = UpdateProject {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = ProjectRepo::update(&pool, project.id, &update, None)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: unresolved issues scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unresolved_issues_track_resolution(pool: PgPool) {
    let user = new_user_id(&pool, "resolver").await;
    let project = ProjectRepo::create(&pool, &new_project("P"), Some(user))
        .await
        .unwrap();
    let i1 = IssueRepo::create(&pool, &new_issue(user, project.id, date(2024, 5, 1)), Some(user))
        .await
        .unwrap();

    let unresolved = ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::All)
        .await
        .unwrap();
    let ids: Vec<i64> = unresolved.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![i1.id]);

    let resolved = IssueRepo::update(&pool, i1.id, &resolve_on(date(2024, 4, 20)), Some(user))
        .await
        .unwrap()
        .unwrap();
    assert!(resolved.resolved());

    let unresolved = ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::All)
        .await
        .unwrap();
    assert!(unresolved.is_empty());
}

// ---------------------------------------------------------------------------
// Test: derived queries follow the requested scope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_issue_queries_respect_scope(pool: PgPool) {
    let user = new_user_id(&pool, "scoper").await;
    let project = ProjectRepo::create(&pool, &new_project("Scoped"), None)
        .await
        .unwrap();
    let other = ProjectRepo::create(&pool, &new_project("Other"), None)
        .await
        .unwrap();

    let live = IssueRepo::create(&pool, &new_issue(user, project.id, date(2024, 5, 1)), None)
        .await
        .unwrap();
    let binned = IssueRepo::create(&pool, &new_issue(user, project.id, date(2024, 5, 2)), None)
        .await
        .unwrap();
    let done = IssueRepo::create(&pool, &new_issue(user, project.id, date(2024, 5, 3)), None)
        .await
        .unwrap();
    IssueRepo::create(&pool, &new_issue(user, other.id, date(2024, 5, 4)), None)
        .await
        .unwrap();
    IssueRepo::soft_delete(&pool, binned.id).await.unwrap();
    IssueRepo::update(&pool, done.id, &resolve_on(date(2024, 4, 1)), None)
        .await
        .unwrap();

    let ids = |issues: Vec<issuetrack_db::models::issue::Issue>| -> Vec<i64> {
        issues.iter().map(|i| i.id).collect()
    };

    let all = ProjectRepo::pr_issues(&pool, project.id, RecordScope::All).await.unwrap();
    assert_eq!(ids(all), vec![live.id, binned.id, done.id]);

    let active = ProjectRepo::pr_issues(&pool, project.id, RecordScope::Active).await.unwrap();
    assert_eq!(ids(active), vec![live.id, done.id]);

    let unresolved_all = ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::All)
        .await
        .unwrap();
    assert_eq!(ids(unresolved_all), vec![live.id, binned.id]);

    let unresolved_active = ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::Active)
        .await
        .unwrap();
    assert_eq!(ids(unresolved_active), vec![live.id]);

    let unresolved_deleted =
        ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::Deleted)
            .await
            .unwrap();
    assert_eq!(ids(unresolved_deleted), vec![binned.id]);
}

// ---------------------------------------------------------------------------
// Test: overdue state of stored issues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overdue_until_resolved(pool: PgPool) {
    let user = new_user_id(&pool, "late").await;
    let project = ProjectRepo::create(&pool, &new_project("Late"), None)
        .await
        .unwrap();
    let today = Utc::now().date_naive();
    let past = today.checked_sub_days(Days::new(7)).unwrap();
    let future = today.checked_add_days(Days::new(7)).unwrap();

    let late = IssueRepo::create(&pool, &new_issue(user, project.id, past), None)
        .await
        .unwrap();
    let on_time = IssueRepo::create(&pool, &new_issue(user, project.id, future), None)
        .await
        .unwrap();
    assert_eq!(late.overdue(today), Some(true));
    assert_eq!(on_time.overdue(today), Some(false));

    let resolved = IssueRepo::update(&pool, late.id, &resolve_on(today), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.overdue(today), None);

    let response = resolved.into_response(today);
    assert!(response.resolved);
    assert_eq!(response.priority_label, Some("Medium"));
}

// ---------------------------------------------------------------------------
// Test: clearing the resolution date reopens an issue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clearing_resolution_reopens_issue(pool: PgPool) {
    let user = new_user_id(&pool, "reopener").await;
    let project = ProjectRepo::create(&pool, &new_project("Reopen"), None)
        .await
        .unwrap();
    let today = Utc::now().date_naive();
    let past = today.checked_sub_days(Days::new(3)).unwrap();
    let mut input = new_issue(user, project.id, past);
    input.assignee_id = Some(user);
    input.progress = Some("Investigating".to_string());
    let issue = IssueRepo::create(&pool, &input, None).await.unwrap();

    let resolved = IssueRepo::update(&pool, issue.id, &resolve_on(today), None)
        .await
        .unwrap()
        .unwrap();
    assert!(resolved.resolved());
    assert_eq!(resolved.overdue(today), None);

    let reopen = UpdateIssue {
        actual_resolution: Some(None),
        resolution_summary: Some(None),
        assignee_id: Some(None),
        related_project_id: Some(None),
        ..Default::default()
    };
    let reopened = IssueRepo::update(&pool, issue.id, &reopen, None)
        .await
        .unwrap()
        .unwrap();
    assert!(!reopened.resolved());
    assert_eq!(reopened.overdue(today), Some(true));
    assert_eq!(reopened.actual_resolution, None);
    assert_eq!(reopened.resolution_summary, None);
    assert_eq!(reopened.assignee_id, None);
    assert_eq!(reopened.related_project_id, None);
    // Absent fields keep their stored value.
    assert_eq!(reopened.progress.as_deref(), Some("Investigating"));
    assert_eq!(reopened.summary, issue.summary);

    let unresolved = ProjectRepo::unresolved_issues(&pool, project.id, RecordScope::All)
        .await
        .unwrap();
    assert!(unresolved.is_empty(), "issue no longer belongs to the project");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clearing_project_end_and_assignee(pool: PgPool) {
    let user = new_user_id(&pool, "owner").await;
    let mut input = new_project("Clearable");
    input.actual_end = Some(date(2024, 5, 1));
    input.assignee_id = Some(user);
    let project = ProjectRepo::create(&pool, &input, None).await.unwrap();

    let update = UpdateProject {
        actual_end: Some(None),
        assignee_id: Some(None),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.actual_end, None);
    assert_eq!(updated.assignee_id, None);
    assert_eq!(updated.name, "Clearable");
}

// ---------------------------------------------------------------------------
// Test: explicit priority is stored
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_priority(pool: PgPool) {
    let user = new_user_id(&pool, "urgent").await;
    let project = ProjectRepo::create(&pool, &new_project("Urgent"), None)
        .await
        .unwrap();
    let mut input = new_issue(user, project.id, date(2024, 5, 1));
    input.priority = Some(IssuePriority::Extra.id());

    let issue = IssueRepo::create(&pool, &input, None).await.unwrap();
    assert_eq!(issue.priority_level(), Some(IssuePriority::Extra));

    let update = UpdateIssue {
        priority: Some(IssuePriority::Low.id()),
        ..Default::default()
    };
    let issue = IssueRepo::update(&pool, issue.id, &update, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(issue.priority_level(), Some(IssuePriority::Low));
}

// ---------------------------------------------------------------------------
// Test: projects listed for a user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_user(pool: PgPool) {
    let alice = new_user_id(&pool, "alice").await;
    let bob = new_user_id(&pool, "bob").await;

    let created = ProjectRepo::create(&pool, &new_project("By Alice"), Some(alice))
        .await
        .unwrap();
    let mut assigned_input = new_project("For Alice");
    assigned_input.assignee_id = Some(alice);
    let assigned = ProjectRepo::create(&pool, &assigned_input, Some(bob))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Bob only"), Some(bob))
        .await
        .unwrap();

    let mut ids: Vec<i64> = ProjectRepo::list_for_user(&pool, alice, RecordScope::Active)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![created.id, assigned.id]);
}
