//! Authentication primitives.
//!
//! - [`jwt`] -- verification (and, for the identity provider and tests,
//!   issuance) of HS256 access tokens.

pub mod jwt;
