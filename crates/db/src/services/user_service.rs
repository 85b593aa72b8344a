//! User writes that keep the one-to-one user/profile pairing intact.
//!
//! Creating a user inserts its profile in the same transaction; updating a
//! user re-saves the profile in the same transaction. If the profile write
//! fails, the user write is rolled back and the error is returned.

use issuetrack_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use crate::models::profile::Profile;
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{ProfileRepo, UserRepo};

/// A user together with its profile.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: Profile,
}

/// Application service for user writes.
pub struct UserService;

impl UserService {
    /// Insert a user and its profile in one transaction.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<UserWithProfile, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let user = UserRepo::insert(&mut *tx, input).await?;
        let profile = ProfileRepo::create_for_user(&mut *tx, user.id).await?;
        tx.commit().await?;

        tracing::info!(
            user_id = user.id,
            profile_id = profile.id,
            "Created user with profile"
        );
        Ok(UserWithProfile { user, profile })
    }

    /// Update a user and re-save its profile in one transaction.
    ///
    /// Returns `None` if the user does not exist. A user without a profile
    /// is a broken invariant and surfaces as [`sqlx::Error::RowNotFound`].
    pub async fn update_with_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<UserWithProfile>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(user) = UserRepo::update(&mut *tx, id, input).await? else {
            return Ok(None);
        };
        let profile = ProfileRepo::touch(&mut *tx, user.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        tracing::debug!(
            user_id = user.id,
            profile_id = profile.id,
            "Updated user and re-saved profile"
        );
        Ok(Some(UserWithProfile { user, profile }))
    }

    /// Remove a user and its profile in one transaction.
    ///
    /// Returns `false` if the user does not exist. While the user is still
    /// referenced as a creator, identifier or issue assignee the delete
    /// fails with a foreign-key violation and the profile is kept.
    pub async fn delete_with_profile(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let profiles = ProfileRepo::delete_for_user(&mut *tx, id).await?;
        let deleted = UserRepo::delete(&mut *tx, id).await?;
        if !deleted {
            return Ok(false);
        }
        tx.commit().await?;

        tracing::info!(user_id = id, profiles, "Deleted user with profile");
        Ok(true)
    }
}
