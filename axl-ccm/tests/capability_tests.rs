mod common;

use axl_ccm::{
    DeviceProfile, Entity, Line, LineAssociation, Phone, REMOTE_DESTINATION_PROFILE_CLASS,
    RemoteDestinationProfile, Templated, User,
};
use axl_model::{ModelError, ModelState, XType};
use axl_service::testing::StubService;
use common::{LINE2_ID, LINE_ID, PHONE_ID, client, respond_record, stub};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

// ── Entity types ─────────────────────────────────────────────────

#[test]
fn entity_type_names_match_schema_types() {
    assert_eq!(User::TYPE_NAME, "User");
    assert_eq!(DeviceProfile::TYPE_NAME, "DeviceProfile");
    assert_eq!(axl_ccm::Css::TYPE_NAME, "Css");
    assert_eq!(axl_ccm::TodAccess::TYPE_NAME, "TodAccess");
}

#[test]
fn entities_expose_model_lifecycle() {
    let stub = stub();
    stub.respond("addLine", json!(LINE_ID));

    let mut line = Line::new(&client(&stub)).unwrap();
    line.set("pattern", "1000");
    line.create().unwrap();

    assert_eq!(line.state(), ModelState::Attached);
    assert_eq!(
        stub.last_request().unwrap().payload,
        json!({"line": {"pattern": "1000"}})
    );
}

// ── Templates ────────────────────────────────────────────────────

#[test]
fn template_returns_unbound_copy_of_record() {
    let stub = stub();
    respond_record(
        &stub,
        "Phone",
        PHONE_ID,
        json!({"name": "SEPTEMPLATE", "cls": "Phone", "protocol": "SIP", "description": "tpl"}),
    );

    let phone = Phone::template(&client(&stub), json!({"name": "SEPTEMPLATE"})).unwrap();

    assert_eq!(phone.state(), ModelState::Unbound);
    assert_eq!(phone.identity(), None);
    assert_eq!(phone.get_str("description"), Some("tpl"));
    assert!(phone.changes().is_empty());
    assert_eq!(stub.calls_to("getPhone"), 1);
}

#[test]
fn remote_destination_profile_template_sets_class() {
    let stub = stub();
    respond_record(
        &stub,
        "RemoteDestinationProfile",
        PHONE_ID,
        json!({"name": "RDP-TPL", "cls": "Phone"}),
    );

    let profile =
        RemoteDestinationProfile::template(&client(&stub), json!({"name": "RDP-TPL"})).unwrap();

    assert_eq!(profile.get_str("cls"), Some(REMOTE_DESTINATION_PROFILE_CLASS));
    assert!(profile.changes().is_dirty("cls"));
}

#[test]
fn template_class_can_be_overridden() {
    let stub = stub();
    respond_record(&stub, "DeviceProfile", PHONE_ID, json!({"name": "UDP-TPL"}));

    let profile = DeviceProfile::template_with_class(
        &client(&stub),
        json!({"name": "UDP-TPL"}),
        Some("Device Profile"),
    )
    .unwrap();

    assert_eq!(profile.get_str("cls"), Some("Device Profile"));
}

#[test]
fn template_of_missing_record_fails() {
    let stub = stub();
    stub.fail("getUser", "Server", "not found");
    let err = User::template(&client(&stub), json!({"userid": "template"})).unwrap_err();
    assert!(matches!(err, ModelError::Lookup { .. }));
}

// ── Line association ─────────────────────────────────────────────

fn attached_line(stub: &Arc<StubService>, id: &str, pattern: &str) -> Line {
    respond_record(stub, "Line", id, json!({"pattern": pattern}));
    Line::fetch(&client(stub), json!({"pattern": pattern})).unwrap()
}

#[test]
fn set_lines_numbers_lines_from_one() {
    let stub = stub();
    let first = attached_line(&stub, LINE_ID, "1000");
    let second = attached_line(&stub, LINE2_ID, "1001");
    let mut phone = Phone::new(&client(&stub)).unwrap();

    phone.set_lines([&first, &second]).unwrap();

    assert_eq!(
        phone.get("lines"),
        Some(&json!([
            {"line": {"index": 1, "dirn": {"_uuid": LINE_ID}}},
            {"line": {"index": 2, "dirn": {"_uuid": LINE2_ID}}}
        ]))
    );
    assert!(phone.changes().is_dirty("lines"));
}

#[test]
fn set_lines_requires_attached_lines() {
    let stub = stub();
    let unsaved = Line::new(&client(&stub)).unwrap();
    let mut profile = DeviceProfile::new(&client(&stub)).unwrap();

    let err = profile.set_lines([&unsaved]).unwrap_err();

    assert!(matches!(err, ModelError::NotAttached { .. }));
    assert_eq!(profile.get("lines"), Some(&json!([])));
}

#[test]
fn set_phone_lines_overwrites_index() {
    let stub = stub();
    let client = client(&stub);
    let mut first = XType::new(&client, "XPhoneLine").unwrap();
    first.set("index", "7").unwrap();
    first.set("label", "Main").unwrap();
    let second = XType::new(&client, "XPhoneLine").unwrap();
    let mut profile = RemoteDestinationProfile::new(&client).unwrap();

    profile.set_phone_lines([first, second]).unwrap();

    let lines = profile.get("lines").unwrap();
    assert_eq!(lines[0]["line"]["index"], json!(1));
    assert_eq!(lines[0]["line"]["label"], json!("Main"));
    assert_eq!(lines[1]["line"]["index"], json!(2));
}
