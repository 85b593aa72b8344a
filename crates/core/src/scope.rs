//! Record scope for soft-deletable tables.
//!
//! Every soft-deletable table splits into an *active* partition
//! (`deleted = FALSE`) and a *deleted* partition. Queries that return rows
//! from such a table take a [`RecordScope`] so the partition being read is
//! always stated by the caller.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordScope {
    /// Rows not flagged deleted (the default scope).
    #[default]
    Active,
    /// Only rows flagged deleted.
    Deleted,
    /// Every row regardless of the flag.
    All,
}

impl RecordScope {
    /// SQL predicate selecting this scope on the given table alias or name.
    ///
    /// Always yields a complete boolean expression so it can be joined with
    /// `AND` unconditionally.
    pub fn predicate(self, table: &str) -> String {
        match self {
            RecordScope::Active => format!("{table}.deleted = FALSE"),
            RecordScope::Deleted => format!("{table}.deleted = TRUE"),
            RecordScope::All => "TRUE".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_is_active() {
        assert_eq!(RecordScope::default(), RecordScope::Active);
    }

    #[test]
    fn predicates_reference_the_table() {
        assert_eq!(RecordScope::Active.predicate("issues"), "issues.deleted = FALSE");
        assert_eq!(RecordScope::Deleted.predicate("i"), "i.deleted = TRUE");
        assert_eq!(RecordScope::All.predicate("issues"), "TRUE");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let scope: RecordScope = serde_json::from_str("\"deleted\"").unwrap();
        assert_eq!(scope, RecordScope::Deleted);
        let scope: RecordScope = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(scope, RecordScope::All);
    }
}
