use crate::error::ModelResult;
use crate::list::{ListCursor, ModelCursor, Page};
use crate::model::Model;
use axl_service::Client;
use axl_types::Identity;
use serde_json::{Value, json};
use std::marker::PhantomData;
use std::sync::Arc;

/// A typed entity backed by a [`Model`].
///
/// Implementors only name their schema type and wrap/unwrap the model;
/// construction, lookup and search come for free. Shared capabilities
/// (templates, line association) are separate traits layered on top.
pub trait Entity: Sized {
    /// Schema type name, e.g. `"User"`.
    const TYPE_NAME: &'static str;

    fn from_model(model: Model) -> Self;

    fn model(&self) -> &Model;

    fn model_mut(&mut self) -> &mut Model;

    fn into_model(self) -> Model;

    /// An unbound entity with the blank schema shape.
    fn new(client: &Arc<Client>) -> ModelResult<Self> {
        Model::empty(Arc::clone(client), Self::TYPE_NAME).map(Self::from_model)
    }

    /// Loads the entity matching `get` criteria such as `{"userid": "jdoe"}`.
    fn fetch(client: &Arc<Client>, criteria: Value) -> ModelResult<Self> {
        Model::fetch(Arc::clone(client), Self::TYPE_NAME, criteria).map(Self::from_model)
    }

    fn fetch_by_identity(client: &Arc<Client>, identity: Identity) -> ModelResult<Self> {
        Self::fetch(client, json!({ "uuid": identity.to_string() }))
    }

    /// Projected search; see [`ListCursor`].
    fn list(
        client: &Arc<Client>,
        criteria: Value,
        returns: &[&str],
        page: Page,
    ) -> ModelResult<ListCursor> {
        Model::list(client, Self::TYPE_NAME, criteria, returns, page)
    }

    /// Search yielding loaded entities; see [`ModelCursor`].
    fn list_obj(client: &Arc<Client>, criteria: Value, page: Page) -> ModelResult<EntityCursor<Self>> {
        Model::list_obj(Arc::clone(client), Self::TYPE_NAME, criteria, page).map(EntityCursor::new)
    }

    /// Detached deep copy; see [`Model::clone_detached`].
    fn clone_detached(&self) -> Self {
        Self::from_model(self.model().clone_detached())
    }
}

/// [`ModelCursor`] yielding a concrete entity type.
#[derive(Debug)]
pub struct EntityCursor<E> {
    inner: ModelCursor,
    marker: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityCursor<E> {
    fn new(inner: ModelCursor) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<E: Entity> Iterator for EntityCursor<E> {
    type Item = ModelResult<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|model| model.map(E::from_model))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
