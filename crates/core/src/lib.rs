//! Domain logic shared by the database and API crates.
//!
//! Nothing in here performs I/O: these modules hold the type aliases,
//! the error taxonomy, and the pure rules (priority mapping, resolution
//! state, record scope, input validation) that the other crates build on.

pub mod error;
pub mod issue;
pub mod roles;
pub mod scope;
pub mod types;
pub mod validation;
