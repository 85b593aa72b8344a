//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns in update DTOs are `Option<Option<T>>`: an absent key
//! keeps the stored value, an explicit `null` clears it.

pub mod issue;
pub mod profile;
pub mod project;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a present key, including an explicit `null`, as `Some(..)`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so a missing key
/// still falls back to `None`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
