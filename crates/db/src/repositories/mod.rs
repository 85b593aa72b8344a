//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Soft-deletable entities
//! additionally implement [`SoftDeletable`]; those the trash may remove
//! on their own also implement [`Purgeable`].

pub mod issue_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod soft_delete;
pub mod trash_repo;
pub mod user_repo;

pub use issue_repo::IssueRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use soft_delete::{Purgeable, SoftDeletable};
pub use trash_repo::TrashRepo;
pub use user_repo::UserRepo;
