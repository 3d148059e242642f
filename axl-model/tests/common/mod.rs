//! Shared fixtures for model tests.

#![allow(dead_code)]

use axl_model::Model;
use axl_service::testing::StubService;
use axl_service::{Client, ClientSettings};
use serde_json::{Value, json};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Installs a test log writer once, when `RUST_LOG` is set.
pub fn init_test_logging() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init()
                .ok();
        }
    });
}

pub const USER_ID: &str = "1234abcd-0000-4def-8abc-0123456789ab";
pub const OTHER_ID: &str = "aaaabbbb-cccc-4ddd-8eee-ffff00001111";

/// A stub knowing the `User` and `Phone` schema types.
///
/// `status` is readable but accepted by neither add nor update;
/// `primaryExtension` is accepted on add only; `newUserid` on update only.
pub fn stub() -> Arc<StubService> {
    Arc::new(
        StubService::new()
            .with_shape(
                "ns0:XUser",
                json!({
                    "userid": "",
                    "firstName": "",
                    "lastName": "",
                    "mailid": "",
                    "status": "",
                    "enableCti": "",
                    "primaryExtension": {"pattern": "", "routePartitionName": ""},
                    "associatedDevices": []
                }),
            )
            .with_shape(
                "ns0:addUser",
                json!({
                    "user": {
                        "userid": "",
                        "firstName": "",
                        "lastName": "",
                        "mailid": "",
                        "enableCti": "",
                        "primaryExtension": {"pattern": "", "routePartitionName": ""},
                        "associatedDevices": []
                    }
                }),
            )
            .with_shape(
                "ns0:updateUser",
                json!({
                    "uuid": "",
                    "newUserid": "",
                    "userid": "",
                    "firstName": "",
                    "lastName": "",
                    "mailid": "",
                    "enableCti": "",
                    "associatedDevices": []
                }),
            )
            .with_shape(
                "ns0:XPhone",
                json!({"name": "", "cls": "", "protocol": "", "description": ""}),
            )
            .with_shape(
                "ns0:addPhone",
                json!({"phone": {"name": "", "cls": "", "protocol": "", "description": ""}}),
            )
            .with_shape(
                "ns0:updatePhone",
                json!({"uuid": "", "name": "", "description": ""}),
            )
            .with_shape(
                "ns0:XPhoneLine",
                json!({"index": "", "label": "", "dirn": {"pattern": ""}}),
            ),
    )
}

pub fn client(stub: &Arc<StubService>) -> Arc<Client> {
    let settings = ClientSettings::new("https://cucm:8443", "axl", "secret", "axl/", "10.5");
    Arc::new(Client::new("default", settings, stub.clone()))
}

/// A `getUser` answer, with the identity spelled the way the server does.
pub fn user_record() -> Value {
    json!({
        "user": {
            "_uuid": "{1234ABCD-0000-4DEF-8ABC-0123456789AB}",
            "userid": "jdoe",
            "firstName": "John",
            "lastName": "Doe",
            "mailid": "jdoe@example.com",
            "status": "1",
            "enableCti": "true",
            "primaryExtension": {"pattern": "1000", "routePartitionName": "Internal"},
            "associatedDevices": [],
            "ldapDirectoryName": "corp"
        }
    })
}

/// An attached user loaded through the stub.
pub fn loaded_user(stub: &Arc<StubService>) -> Model {
    stub.respond("getUser", user_record());
    Model::fetch(client(stub), "User", json!({"userid": "jdoe"})).unwrap()
}
