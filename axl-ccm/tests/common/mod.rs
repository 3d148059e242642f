//! Shared fixtures for CallManager entity tests.

#![allow(dead_code)]

use axl_service::testing::StubService;
use axl_service::{Client, ClientSettings};
use serde_json::{Value, json};
use std::sync::Arc;

pub const USER_ID: &str = "11111111-2222-4333-8444-555555555555";
pub const PHONE_ID: &str = "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee";
pub const PROFILE_ID: &str = "99999999-8888-4777-8666-555555555555";
pub const LINE_ID: &str = "01234567-89ab-4cde-8f01-23456789abcd";
pub const LINE2_ID: &str = "fedcba98-7654-4321-8fed-cba987654321";

fn device_shape(extra: &[&str]) -> Value {
    let mut fields = vec!["name", "cls", "protocol", "description", "lines"];
    fields.extend_from_slice(extra);
    let mut shape = StubService::blank(&fields);
    shape["lines"] = json!([]);
    shape
}

/// A stub for a release without the BFCP schema field.
pub fn stub() -> Arc<StubService> {
    Arc::new(stub_with_phone(device_shape(&[])))
}

/// A stub for a release whose phone schema has the BFCP field.
pub fn bfcp_stub() -> Arc<StubService> {
    Arc::new(
        stub_with_phone(device_shape(&["AllowPresentationSharingUsingBfcp"])).with_shape(
            "ns0:updatePhone",
            StubService::blank(&["uuid", "name", "description", "AllowPresentationSharingUsingBfcp"]),
        ),
    )
}

fn stub_with_phone(phone: Value) -> StubService {
    StubService::new()
        .with_shape("ns0:XPhone", phone.clone())
        .with_shape("ns0:addPhone", json!({ "phone": phone }))
        .with_shape(
            "ns0:updatePhone",
            StubService::blank(&["uuid", "name", "description"]),
        )
        .with_shape("ns0:XDeviceProfile", device_shape(&[]))
        .with_shape("ns0:XRemoteDestinationProfile", device_shape(&[]))
        .with_shape("ns0:XLine", StubService::blank(&["pattern", "routePartitionName"]))
        .with_shape(
            "ns0:addLine",
            json!({"line": {"pattern": "", "routePartitionName": ""}}),
        )
        .with_shape(
            "ns0:XUser",
            json!({
                "userid": "",
                "firstName": "",
                "lastName": "",
                "associatedDevices": [],
                "ctiControlledDeviceProfiles": [],
                "phoneProfiles": []
            }),
        )
        .with_shape(
            "ns0:XPhoneLine",
            json!({"index": "", "label": "", "dirn": {"pattern": ""}}),
        )
        .with_shape("ns0:XRemoteDestination", StubService::blank(&["name", "destination"]))
        .with_shape("ns0:XTimeSchedule", StubService::blank(&["name", "members"]))
}

pub fn client(stub: &Arc<StubService>) -> Arc<Client> {
    let settings = ClientSettings::new("https://cucm:8443", "axl", "secret", "axl/", "10.5");
    Arc::new(Client::new("default", settings, stub.clone()))
}

/// Queues a `get{type}` answer for a record with the given identity and fields.
pub fn respond_record(stub: &StubService, type_name: &str, identity: &str, fields: Value) {
    let mut record = fields;
    record["_uuid"] = json!(format!("{{{}}}", identity.to_uppercase()));
    let mut element = type_name.to_string();
    element[..1].make_ascii_lowercase();
    stub.respond(&format!("get{type_name}"), json!({ element: record }));
}
