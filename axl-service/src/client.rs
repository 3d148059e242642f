//! Client handle for one named configuration.

use crate::config::ClientSettings;
use crate::error::ServiceResult;
use crate::service::AxlService;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A connected AXL endpoint plus its schema shape cache.
///
/// Blank shapes are fetched from the service once per schema type and kept
/// until [`Client::purge_cache`] is called.
pub struct Client {
    name: String,
    settings: ClientSettings,
    service: Arc<dyn AxlService>,
    shapes: RwLock<HashMap<String, Arc<Value>>>,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        settings: ClientSettings,
        service: Arc<dyn AxlService>,
    ) -> Self {
        Self {
            name: name.into(),
            settings,
            service,
            shapes: RwLock::new(HashMap::new()),
        }
    }

    /// Name of the configuration this client was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Prefixes a schema type name with the configured namespace.
    pub fn qualify(&self, type_name: &str) -> String {
        format!("{}:{}", self.settings.namespace, type_name)
    }

    /// Returns the blank shape of a schema type such as `XUser` or `addUser`.
    pub fn shape(&self, type_name: &str) -> ServiceResult<Arc<Value>> {
        let qualified = self.qualify(type_name);
        if let Some(shape) = self
            .shapes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&qualified)
        {
            return Ok(Arc::clone(shape));
        }

        let shape = Arc::new(self.service.create_empty(&qualified)?);
        debug!("Cached schema shape {} for configuration {}", qualified, self.name);
        self.shapes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(qualified, Arc::clone(&shape));
        Ok(shape)
    }

    /// Number of schema shapes currently cached.
    pub fn cached_shapes(&self) -> usize {
        self.shapes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drops every cached shape; the next lookup asks the service again.
    pub fn purge_cache(&self) {
        self.shapes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!("Purged schema cache for configuration {}", self.name);
    }

    /// Performs one remote call.
    pub fn call(&self, operation: &str, payload: Value) -> ServiceResult<Value> {
        debug!("Calling {} on {}", operation, self.name);
        self.service.call(operation, payload)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("cached_shapes", &self.cached_shapes())
            .finish_non_exhaustive()
    }
}
