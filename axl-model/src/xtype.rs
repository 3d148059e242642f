use crate::error::{ModelError, ModelResult};
use axl_service::Client;
use serde_json::{Map, Value};

/// A blank nested schema value, e.g. `XPhoneLine`.
///
/// XTypes are never loaded or persisted on their own; they are built from
/// the schema, filled in, and embedded into a model field.
#[derive(Debug, Clone, PartialEq)]
pub struct XType {
    name: String,
    fields: Map<String, Value>,
}

impl XType {
    pub fn new(client: &Client, name: &str) -> ModelResult<Self> {
        let fields = client
            .shape(name)?
            .as_object()
            .cloned()
            .ok_or_else(|| ModelError::protocol(name, "schema shape is not a structure"))?;
        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Writes a schema field; unknown names are rejected.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> ModelResult<()> {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ModelError::InvalidArgument(format!(
                "{} has no field {field}",
                self.name
            ))),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Wraps the value for a list, keyed by the name without its `X` prefix.
    pub fn into_list_item(self) -> Value {
        let key = self.name.strip_prefix('X').unwrap_or(&self.name).to_string();
        let mut item = Map::new();
        item.insert(key, Value::Object(self.fields));
        Value::Object(item)
    }
}
