//! Paginated searches over the `list{Type}` operations.
//!
//! A search is one remote call. The response rows are then projected
//! lazily onto the requested fields, or turned into full models with one
//! extra `get` per row.

use crate::error::{ModelError, ModelResult};
use crate::model::{IDENTITY_FIELD, Model};
use crate::schema::{TypeSchema, Verb};
use axl_service::{Client, RETURN, ROW};
use axl_types::Identity;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::vec;
use tracing::debug;

/// Optional `skip`/`first` window of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl Page {
    /// No window: every match.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip, limit }
    }

    /// At most `limit` matches, starting at the first.
    pub fn first(limit: u64) -> Self {
        Self::new(None, Some(limit))
    }

    /// Adds the window to a list payload; `skip` defaults to 0 once either bound is set.
    fn apply(&self, payload: &mut Map<String, Value>) {
        if self.skip.is_none() && self.limit.is_none() {
            return;
        }
        payload.insert("skip".into(), json!(self.skip.unwrap_or(0)));
        if let Some(limit) = self.limit {
            payload.insert("first".into(), json!(limit));
        }
    }
}

/// Unwraps the records of a row-oriented response.
///
/// A scalar `return` (usually `""`) or a missing `row` means no matches.
pub(crate) fn rows(operation: &str, response: Value) -> ModelResult<Vec<Value>> {
    let Value::Object(mut envelope) = response else {
        return Err(ModelError::protocol(operation, "response is not a structure"));
    };
    match envelope.remove(RETURN) {
        None => Err(ModelError::protocol(operation, "missing return")),
        Some(Value::Object(mut body)) => match body.remove(ROW) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(rows)) => Ok(rows),
            Some(row @ Value::Object(_)) => Ok(vec![row]),
            Some(other) => Err(ModelError::protocol(
                operation,
                format!("unexpected row value {other}"),
            )),
        },
        Some(_) => Ok(Vec::new()),
    }
}

/// Lazy sequence of projected rows. Single pass.
#[derive(Debug)]
pub struct ListCursor {
    returns: Vec<String>,
    rows: vec::IntoIter<Value>,
}

impl ListCursor {
    /// Runs `list{TypeName}` and returns a cursor over the matches.
    ///
    /// Each item holds the values of `returns`, in that order; a field
    /// missing from a row yields `null`.
    pub fn open(
        client: &Client,
        type_name: &str,
        criteria: Value,
        returns: &[&str],
        page: Page,
    ) -> ModelResult<Self> {
        let operation = TypeSchema::new(type_name).operation(Verb::List);
        let returned_tags: Map<String, Value> = returns
            .iter()
            .map(|r| ((*r).to_string(), Value::Bool(true)))
            .collect();
        debug!("fetch list of {}s, search criteria={}", type_name, criteria);

        let mut payload = Map::new();
        payload.insert("searchCriteria".into(), criteria);
        payload.insert("returnedTags".into(), Value::Object(returned_tags));
        page.apply(&mut payload);

        let response = client.call(&operation, Value::Object(payload))?;
        Ok(Self {
            returns: returns.iter().map(|r| (*r).to_string()).collect(),
            rows: rows(&operation, response)?.into_iter(),
        })
    }

    /// The only row, `None` when empty, `TooManyResults` otherwise.
    pub fn single(mut self) -> ModelResult<Option<Vec<Value>>> {
        let first = self.next();
        let rest = self.rows.len();
        if rest > 0 {
            return Err(ModelError::TooManyResults { count: rest + 1 });
        }
        Ok(first)
    }

    fn project(&self, row: &Value) -> Vec<Value> {
        self.returns
            .iter()
            .map(|field| row.get(field).cloned().unwrap_or(Value::Null))
            .collect()
    }
}

impl Iterator for ListCursor {
    type Item = Vec<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.project(&row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for ListCursor {}

/// Lazy sequence of fully loaded models, one `get` call per row.
#[derive(Debug)]
pub struct ModelCursor {
    client: Arc<Client>,
    type_name: String,
    identities: ListCursor,
}

impl ModelCursor {
    /// Lists only identities, loading each match as the cursor advances.
    pub fn open(
        client: Arc<Client>,
        type_name: &str,
        criteria: Value,
        page: Page,
    ) -> ModelResult<Self> {
        let identities = ListCursor::open(&client, type_name, criteria, &[IDENTITY_FIELD], page)?;
        Ok(Self {
            client,
            type_name: type_name.to_string(),
            identities,
        })
    }

    fn materialize(&self, row: Vec<Value>) -> ModelResult<Model> {
        let raw = row.first().and_then(Value::as_str).ok_or_else(|| {
            ModelError::protocol(
                &TypeSchema::new(&self.type_name).operation(Verb::List),
                "row carries no identity",
            )
        })?;
        let identity = Identity::parse(raw)?;
        Model::fetch(
            Arc::clone(&self.client),
            self.type_name.clone(),
            json!({ "uuid": identity.to_string() }),
        )
    }
}

impl Iterator for ModelCursor {
    type Item = ModelResult<Model>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.identities.next()?;
        Some(self.materialize(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.identities.size_hint()
    }
}

impl Model {
    /// Searches `type_name` records, yielding the `returns` fields of each match.
    pub fn list(
        client: &Client,
        type_name: &str,
        criteria: Value,
        returns: &[&str],
        page: Page,
    ) -> ModelResult<ListCursor> {
        ListCursor::open(client, type_name, criteria, returns, page)
    }

    /// Searches `type_name` records, yielding each match as a loaded model.
    pub fn list_obj(
        client: Arc<Client>,
        type_name: &str,
        criteria: Value,
        page: Page,
    ) -> ModelResult<ModelCursor> {
        ModelCursor::open(client, type_name, criteria, page)
    }
}
