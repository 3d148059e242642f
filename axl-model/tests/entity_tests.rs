mod common;

use axl_model::{Entity, Model, ModelError, Page, XType};
use axl_types::Identity;
use common::{USER_ID, client, stub, user_record};
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug)]
struct User(Model);

impl Entity for User {
    const TYPE_NAME: &'static str = "User";

    fn from_model(model: Model) -> Self {
        Self(model)
    }

    fn model(&self) -> &Model {
        &self.0
    }

    fn model_mut(&mut self) -> &mut Model {
        &mut self.0
    }

    fn into_model(self) -> Model {
        self.0
    }
}

#[test]
fn typed_entity_uses_its_type_name() {
    let stub = stub();
    let user = User::new(&client(&stub)).unwrap();
    assert_eq!(user.model().type_name(), "User");
    assert!(user.model().has_field("userid"));
}

#[test]
fn fetch_by_identity_sends_canonical_uuid() {
    let stub = stub();
    stub.respond("getUser", user_record());
    let identity: Identity = USER_ID.parse().unwrap();

    let user = User::fetch_by_identity(&client(&stub), identity).unwrap();

    assert_eq!(user.model().identity(), Some(identity));
    assert_eq!(stub.last_request().unwrap().payload, json!({"uuid": USER_ID}));
}

#[test]
fn list_obj_yields_typed_entities() {
    let stub = stub();
    stub.respond("listUser", json!({"row": [{"_uuid": USER_ID}]}));
    stub.respond("getUser", user_record());

    let users: Vec<User> = User::list_obj(&client(&stub), json!({"userid": "jdoe"}), Page::all())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].model().get_str("userid"), Some("jdoe"));
}

#[test]
fn typed_clone_is_detached() {
    let stub = stub();
    stub.respond("getUser", user_record());
    let user = User::fetch(&client(&stub), json!({"userid": "jdoe"})).unwrap();
    let copy = user.clone_detached();
    assert!(!copy.model().is_attached());
    assert_eq!(copy.into_model().get_str("lastName"), Some("Doe"));
}

// ── XType ────────────────────────────────────────────────────────

#[test]
fn xtype_starts_blank_and_rejects_unknown_fields() {
    let stub = stub();
    let mut line = XType::new(&client(&stub), "XPhoneLine").unwrap();
    assert_eq!(line.get("label"), Some(&json!("")));

    line.set("index", "1").unwrap();
    line.set("dirn", json!({"pattern": "1000"})).unwrap();
    assert!(matches!(
        line.set("ringSetting", "Ring").unwrap_err(),
        ModelError::InvalidArgument(_)
    ));
    assert_eq!(line.get("index"), Some(&json!("1")));
}

#[test]
fn xtype_list_item_is_keyed_without_prefix() {
    let stub = stub();
    let mut line = XType::new(&client(&stub), "XPhoneLine").unwrap();
    line.set("index", "1").unwrap();
    let item = line.into_list_item();
    assert_eq!(item["PhoneLine"]["index"], json!("1"));
}

#[test]
fn unknown_xtype_is_schema_not_found() {
    let stub = stub();
    assert!(matches!(
        XType::new(&client(&stub), "XNothing").unwrap_err(),
        ModelError::SchemaNotFound(_)
    ));
}
