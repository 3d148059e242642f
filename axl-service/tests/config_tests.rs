use axl_service::{ClientSettings, ServiceError, normalize_version};
use pretty_assertions::assert_eq;

// ── Version normalisation ────────────────────────────────────────

#[test]
fn major_only_version_gets_minor_zero() {
    assert_eq!(normalize_version("10"), "10.0");
}

#[test]
fn patch_level_is_dropped() {
    assert_eq!(normalize_version("10.5.2"), "10.5");
}

#[test]
fn major_minor_is_kept() {
    assert_eq!(normalize_version("11.5"), "11.5");
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_applies_defaults() {
    let s = ClientSettings::new("https://cucm:8443", "axl", "secret", "axl/", "9");
    assert_eq!(s.version, "9.0");
    assert_eq!(s.namespace, "ns0");
    assert!(s.schema_path.is_none());
    assert!(s.proxy.is_empty());
    assert!(!s.transport_debugger);
}

#[test]
fn endpoint_joins_host_and_path() {
    let s = ClientSettings::new("https://cucm:8443", "axl", "secret", "axl/", "10.5");
    assert_eq!(s.endpoint(), "https://cucm:8443/axl/");
}

#[test]
fn builders_override_fields() {
    let s = ClientSettings::new("h", "u", "p", "axl", "10")
        .with_schema_path("/opt/axl/10.0")
        .with_namespace("ns");
    assert_eq!(s.schema_path.as_deref(), Some(std::path::Path::new("/opt/axl/10.0")));
    assert_eq!(s.namespace, "ns");
}

#[test]
fn debug_redacts_password() {
    let s = ClientSettings::new("h", "u", "hunter2", "axl", "10");
    let debug = format!("{s:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("***"));
}

// ── JSON ─────────────────────────────────────────────────────────

#[test]
fn from_json_with_numeric_version() {
    let s = ClientSettings::from_json(
        r#"{"host": "https://cucm", "user": "axl", "passwd": "pw", "path": "axl/", "version": 10.5}"#,
    )
    .unwrap();
    assert_eq!(s.version, "10.5");
    assert_eq!(s.namespace, "ns0");
}

#[test]
fn from_json_with_string_version_and_options() {
    let s = ClientSettings::from_json(
        r#"{
            "host": "https://cucm",
            "user": "axl",
            "passwd": "pw",
            "path": "axl/",
            "version": "8",
            "proxy": {"https": "http://proxy:3128"},
            "transport_debugger": true,
            "transport_options": {"timeout": 30}
        }"#,
    )
    .unwrap();
    assert_eq!(s.version, "8.0");
    assert_eq!(s.proxy.get("https").map(String::as_str), Some("http://proxy:3128"));
    assert!(s.transport_debugger);
    assert_eq!(s.transport_options["timeout"], 30);
}

#[test]
fn from_json_rejects_bad_version_type() {
    let err = ClientSettings::from_json(
        r#"{"host": "h", "user": "u", "passwd": "p", "path": "x", "version": true}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Serialization(_)));
}

#[test]
fn from_json_rejects_missing_host() {
    assert!(ClientSettings::from_json(r#"{"user": "u"}"#).is_err());
}
