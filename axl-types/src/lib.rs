//! Core type definitions for the AXL object mapper.
//!
//! This crate defines the small, transport-agnostic types shared by every
//! other crate in the workspace:
//! - Remote record identifiers in canonical UUID form
//! - Decoding of the textual booleans the CallManager database returns
//!
//! Entity shapes and the mapping logic live in `axl-model`.

mod ids;

pub use ids::Identity;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed identity {0:?}: expected 8-4-4-4-12 hex digits, optionally in braces")]
    MalformedIdentity(String),
}

/// Decodes a textual AXL boolean.
///
/// `None` stays unknown, an empty string is `false`, and only a
/// case-insensitive `"true"` or `"t"` is `true`.
#[must_use]
pub fn axl_bool(value: Option<&str>) -> Option<bool> {
    let value = value?;
    Some(value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("t"))
}

/// Encodes a boolean the way the CallManager database stores it.
#[must_use]
pub const fn sql_bool(value: bool) -> &'static str {
    if value { "t" } else { "f" }
}
