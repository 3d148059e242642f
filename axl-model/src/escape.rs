//! Local aliases for field names that are reserved words.
//!
//! The schema uses `class` on several device types. Locally the field is
//! called `cls`; outgoing create/update payloads rename it back. Incoming
//! records already carry the local name.

use serde_json::{Map, Value};

/// Pairs of `(local, remote)` field names.
pub const ESCAPES: &[(&str, &str)] = &[("cls", "class")];

/// Remote name for a local alias, if the field is escaped.
pub fn remote_name(local: &str) -> Option<&'static str> {
    ESCAPES.iter().find(|(l, _)| *l == local).map(|(_, r)| *r)
}

/// Local aliases, which are always legal in outgoing payloads.
pub fn aliases() -> impl Iterator<Item = &'static str> {
    ESCAPES.iter().map(|(l, _)| *l)
}

/// Renames escaped keys to their remote names, keeping order and values.
pub fn to_remote(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(k, v)| match remote_name(&k) {
            Some(remote) => (remote.to_string(), v),
            None => (k, v),
        })
        .collect()
}
