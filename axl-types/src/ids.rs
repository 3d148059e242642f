//! Identifier type for records held by the remote CallManager.
//!
//! The remote API and its database hand out UUIDs in several spellings
//! (`{...}` wrapped, upper case). Every identity entering the system is
//! normalised to lowercase, hyphenated 8-4-4-4-12 form without braces.

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a persisted remote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(Uuid);

impl Identity {
    /// Creates an identity from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parses an identity, accepting an optional `{}` wrapper and upper case.
    ///
    /// The simple (unhyphenated) and URN spellings that `Uuid::parse_str`
    /// would otherwise accept are rejected.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let inner = s.strip_prefix('{').unwrap_or(s);
        let inner = inner.strip_suffix('}').unwrap_or(inner);
        if !is_hyphenated(inner) {
            return Err(Error::MalformedIdentity(s.to_string()));
        }
        Uuid::parse_str(inner)
            .map(Self)
            .map_err(|_| Error::MalformedIdentity(s.to_string()))
    }
}

fn is_hyphenated(s: &str) -> bool {
    s.len() == 36
        && s.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit(),
        })
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Identity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Identity {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
