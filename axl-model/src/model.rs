use crate::error::{ModelError, ModelResult};
use crate::escape;
use crate::prune::{is_empty_scalar, prune_map};
use crate::schema::{TypeSchema, Verb};
use crate::tracker::ChangeTracker;
use axl_service::{Client, RETURN};
use axl_types::Identity;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Attribute carrying the record identity in remote responses.
pub const IDENTITY_FIELD: &str = "_uuid";

/// Lifecycle state of a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Freshly constructed or cloned; no remote record.
    Unbound,
    /// Corresponds to a persisted remote record.
    Attached,
    /// The remote record was removed; behaves like `Unbound`.
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Unbound,
    Attached(Identity),
    Removed,
}

/// A local, mutable mirror of one remote entity.
///
/// The field set comes from the schema shape of the entity type. Writes to
/// those fields are tracked so that [`Model::update`] sends only what the
/// caller changed; writes to any other name are kept as local attributes
/// and never sent.
#[derive(Debug)]
pub struct Model {
    client: Arc<Client>,
    schema: TypeSchema,
    fields: Map<String, Value>,
    locals: Map<String, Value>,
    binding: Binding,
    changes: ChangeTracker,
}

impl Model {
    /// Creates an unbound model with the blank schema shape of `type_name`.
    pub fn empty(client: Arc<Client>, type_name: impl Into<String>) -> ModelResult<Self> {
        let schema = TypeSchema::new(type_name);
        let fields = schema.blank(&client)?;
        Ok(Self {
            client,
            schema,
            fields,
            locals: Map::new(),
            binding: Binding::Unbound,
            changes: ChangeTracker::new(),
        })
    }

    /// Creates a model and loads it with the given `get` criteria.
    pub fn fetch(
        client: Arc<Client>,
        type_name: impl Into<String>,
        criteria: Value,
    ) -> ModelResult<Self> {
        let mut model = Self::empty(client, type_name)?;
        model.load(criteria)?;
        Ok(model)
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn type_name(&self) -> &str {
        self.schema.type_name()
    }

    pub fn schema(&self) -> &TypeSchema {
        &self.schema
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    pub fn state(&self) -> ModelState {
        match self.binding {
            Binding::Unbound => ModelState::Unbound,
            Binding::Attached(_) => ModelState::Attached,
            Binding::Removed => ModelState::Removed,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.binding, Binding::Attached(_))
    }

    pub fn identity(&self) -> Option<Identity> {
        match self.binding {
            Binding::Attached(identity) => Some(identity),
            _ => None,
        }
    }

    /// The identity, or `NotAttached` if there is none.
    pub fn require_identity(&self) -> ModelResult<Identity> {
        self.identity().ok_or_else(|| ModelError::NotAttached {
            type_name: self.type_name().to_string(),
        })
    }

    /// Whether `field` belongs to the schema shape of this type.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Schema fields with their current values.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Attributes outside the schema shape.
    pub fn locals(&self) -> &Map<String, Value> {
        &self.locals
    }

    pub fn changes(&self) -> &ChangeTracker {
        &self.changes
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).or_else(|| self.locals.get(field))
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Reads a flag stored either as a JSON boolean or as AXL text.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => axl_types::axl_bool(Some(s)),
            _ => None,
        }
    }

    /// Writes a field. Schema fields are tracked, other names stay local.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        let value = value.into();
        if self.fields.contains_key(field) {
            self.fields.insert(field.to_string(), value);
            self.changes.mark(field);
        } else {
            self.locals.insert(field.to_string(), value);
        }
    }

    /// Bulk-assigns a remote record without tracking it.
    fn bind(&mut self, record: &Map<String, Value>) {
        for (key, value) in record {
            if key == IDENTITY_FIELD {
                continue;
            }
            let target = if self.fields.contains_key(key) {
                &mut self.fields
            } else {
                &mut self.locals
            };
            target.insert(key.clone(), value.clone());
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Loads the record matching `criteria` (e.g. `{"uuid": ...}` or a name key).
    pub fn load(&mut self, criteria: Value) -> ModelResult<()> {
        let operation = self.schema.operation(Verb::Get);
        let response = self
            .client
            .call(&operation, criteria)
            .map_err(|source| ModelError::Lookup {
                operation: operation.clone(),
                source,
            })?;

        let element = self.schema.element();
        let record = response
            .get(RETURN)
            .and_then(|r| r.get(&element))
            .and_then(Value::as_object)
            .ok_or_else(|| ModelError::protocol(&operation, format!("missing return/{element}")))?;
        let identity = record
            .get(IDENTITY_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| ModelError::protocol(&operation, "record carries no identity"))?;
        let identity = Identity::parse(identity)?;

        self.fields = self.schema.blank(&self.client)?;
        self.locals.clear();
        self.bind(record);
        self.binding = Binding::Attached(identity);
        self.changes.clear();
        debug!("{} was loaded, uuid={}", self.type_name(), identity);
        Ok(())
    }

    /// Adds this model as a new remote record and returns its identity.
    ///
    /// Sends every non-empty field the add operation accepts, not just the
    /// dirty ones.
    pub fn create(&mut self) -> ModelResult<Identity> {
        if let Binding::Attached(identity) = self.binding {
            return Err(ModelError::AlreadyAttached {
                type_name: self.type_name().to_string(),
                identity,
            });
        }

        let legal = self.schema.legal_fields(&self.client, Verb::Add)?;
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(key, value)| legal.contains(key.as_str()) && !is_empty_scalar(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let payload = prune_map(&escape::to_remote(fields));

        let operation = self.schema.operation(Verb::Add);
        let response = self
            .client
            .call(&operation, json!({ self.schema.element(): payload }))?;
        let identity = response
            .get(RETURN)
            .and_then(Value::as_str)
            .ok_or_else(|| ModelError::protocol(&operation, "no identity returned"))?;
        let identity = Identity::parse(identity)?;

        self.binding = Binding::Attached(identity);
        self.changes.clear();
        info!("new {} was created, uuid={}", self.type_name(), identity);
        Ok(identity)
    }

    /// Sends the dirty fields the update operation accepts.
    pub fn update(&mut self) -> ModelResult<()> {
        let identity = self.require_identity()?;
        let legal = self.schema.legal_fields(&self.client, Verb::Update)?;
        let mut payload: Map<String, Value> = self
            .changes
            .fields()
            .filter(|field| legal.contains(*field))
            .filter_map(|field| {
                self.fields
                    .get(field)
                    .map(|value| (field.to_string(), value.clone()))
            })
            .collect();
        payload.insert("uuid".into(), Value::String(identity.to_string()));

        self.client.call(
            &self.schema.operation(Verb::Update),
            Value::Object(escape::to_remote(payload)),
        )?;
        self.changes.clear();
        info!("{} was updated, uuid={}", self.type_name(), identity);
        Ok(())
    }

    /// Sends one field through the update operation, leaving other edits pending.
    pub fn commit_field(&mut self, field: &str, value: impl Into<Value>) -> ModelResult<()> {
        let identity = self.require_identity()?;
        let legal = self.schema.legal_fields(&self.client, Verb::Update)?;
        if !legal.contains(field) {
            return Err(ModelError::InvalidArgument(format!(
                "{} does not accept {field} on update",
                self.type_name()
            )));
        }

        let value = value.into();
        let mut payload = Map::new();
        payload.insert(field.to_string(), value.clone());
        payload.insert("uuid".into(), Value::String(identity.to_string()));
        self.client.call(
            &self.schema.operation(Verb::Update),
            Value::Object(escape::to_remote(payload)),
        )?;

        if self.fields.contains_key(field) {
            self.fields.insert(field.to_string(), value);
        } else {
            self.locals.insert(field.to_string(), value);
        }
        self.changes.unmark(field);
        info!("{}.{} was updated, uuid={}", self.type_name(), field, identity);
        Ok(())
    }

    /// Removes the remote record. The model stays usable as a template.
    pub fn remove(&mut self) -> ModelResult<()> {
        let identity = self.require_identity()?;
        self.client.call(
            &self.schema.operation(Verb::Remove),
            json!({ "uuid": identity.to_string() }),
        )?;
        self.binding = Binding::Removed;
        info!("{} was removed, uuid={}", self.type_name(), identity);
        Ok(())
    }

    /// Reloads from the remote record, refusing to drop local edits unless `force`.
    pub fn reload(&mut self, force: bool) -> ModelResult<()> {
        let identity = self.require_identity()?;
        if !force && !self.changes.is_empty() {
            return Err(ModelError::UnsavedChanges {
                type_name: self.type_name().to_string(),
                fields: self.changes.fields().map(str::to_string).collect(),
            });
        }
        self.load(json!({ "uuid": identity.to_string() }))
    }

    /// Deep copy of the field values with no identity and no pending edits.
    ///
    /// The copy can be added as a new record with [`Model::create`].
    pub fn clone_detached(&self) -> Self {
        debug!("{} was cloned", self.type_name());
        Self {
            client: Arc::clone(&self.client),
            schema: self.schema.clone(),
            fields: self.fields.clone(),
            locals: self.locals.clone(),
            binding: Binding::Unbound,
            changes: ChangeTracker::new(),
        }
    }
}
