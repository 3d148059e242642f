use crate::error::{ModelError, ModelResult};
use crate::escape;
use axl_service::Client;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Verb of a remote operation; the operation name is `{verb}{TypeName}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Add,
    Update,
    Remove,
    List,
}

impl Verb {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Add => "add",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::List => "list",
        }
    }
}

/// Remote naming for one entity type (e.g. `User`).
///
/// The blank entity is the schema type `X{TypeName}`; each operation has
/// its own message type named like the operation, and each message type
/// defines which fields that operation accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSchema {
    type_name: String,
}

impl TypeSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Remote operation name, e.g. `updateUser`.
    pub fn operation(&self, verb: Verb) -> String {
        format!("{}{}", verb.prefix(), self.type_name)
    }

    /// Element the entity is wrapped in on the wire, e.g. `user`.
    pub fn element(&self) -> String {
        let mut chars = self.type_name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Schema type of the blank entity, e.g. `XUser`.
    pub fn shape_type(&self) -> String {
        format!("X{}", self.type_name)
    }

    /// Fresh copy of the blank entity shape.
    pub fn blank(&self, client: &Client) -> ModelResult<Map<String, Value>> {
        let shape_type = self.shape_type();
        client
            .shape(&shape_type)?
            .as_object()
            .cloned()
            .ok_or_else(|| ModelError::protocol(&shape_type, "schema shape is not a structure"))
    }

    /// Fields the remote operation accepts, plus the local aliases.
    ///
    /// The add message wraps the entity in an element, so its legal fields
    /// are those of the wrapped structure; the other messages are flat.
    pub fn legal_fields(&self, client: &Client, verb: Verb) -> ModelResult<BTreeSet<String>> {
        let operation = self.operation(verb);
        let message = client.shape(&operation)?;
        let message = message
            .as_object()
            .ok_or_else(|| ModelError::protocol(&operation, "message shape is not a structure"))?;

        let fields = match verb {
            Verb::Add => message
                .get(&self.element())
                .and_then(Value::as_object)
                .or_else(|| message.values().find_map(Value::as_object))
                .ok_or_else(|| ModelError::protocol(&operation, "add message wraps no entity"))?,
            _ => message,
        };

        Ok(fields
            .keys()
            .cloned()
            .chain(escape::aliases().map(str::to_string))
            .collect())
    }
}
