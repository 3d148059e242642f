//! Connection settings for one named AXL configuration.

use crate::error::ServiceResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Schema namespace prefix used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "ns0";

/// Settings for reaching one CallManager.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL, e.g. `https://cucm.example.com:8443`.
    pub host: String,
    pub user: String,
    pub passwd: String,
    /// Path of the AXL endpoint below `host`.
    pub path: String,
    /// Schema version, always `major.minor`.
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,
    /// Directory holding the WSDL/XSD bundle, if not using a prebuilt cache.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
    #[serde(default)]
    pub proxy: BTreeMap<String, String>,
    /// Ask the transport to confirm every request before sending it.
    #[serde(default)]
    pub transport_debugger: bool,
    /// Namespace prefix for schema type names.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Extra options handed to the transport unchanged.
    #[serde(default)]
    pub transport_options: Map<String, Value>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn deserialize_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(normalize_version(&s)),
        Value::Number(n) => Ok(normalize_version(&n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "version must be a string or number, got {other}"
        ))),
    }
}

/// Reduces a version to `major.minor`, padding a missing minor with `0`.
#[must_use]
pub fn normalize_version(version: &str) -> String {
    let mut parts = version.split('.').chain(std::iter::once("0"));
    let major = parts.next().unwrap_or_default();
    let minor = parts.next().unwrap_or("0");
    format!("{major}.{minor}")
}

impl ClientSettings {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        passwd: impl Into<String>,
        path: impl Into<String>,
        version: &str,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            passwd: passwd.into(),
            path: path.into(),
            version: normalize_version(version),
            schema_path: None,
            proxy: BTreeMap::new(),
            transport_debugger: false,
            namespace: default_namespace(),
            transport_options: Map::new(),
        }
    }

    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Full URL of the AXL endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.host, self.path)
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("passwd", &"***REDACTED***")
            .field("path", &self.path)
            .field("version", &self.version)
            .field("schema_path", &self.schema_path)
            .field("proxy", &self.proxy)
            .field("transport_debugger", &self.transport_debugger)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
