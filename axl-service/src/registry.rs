//! Named configurations and the one-client-per-configuration cache.

use crate::client::Client;
use crate::config::ClientSettings;
use crate::error::{ServiceError, ServiceResult};
use crate::service::AxlService;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info};

/// Configuration name used when the caller does not pick one.
pub const DEFAULT_CONFIG: &str = "default";

/// Builds the service backing a configuration.
pub trait Connector: Send + Sync {
    fn connect(&self, name: &str, settings: &ClientSettings) -> ServiceResult<Arc<dyn AxlService>>;
}

impl<F> Connector for F
where
    F: Fn(&str, &ClientSettings) -> ServiceResult<Arc<dyn AxlService>> + Send + Sync,
{
    fn connect(&self, name: &str, settings: &ClientSettings) -> ServiceResult<Arc<dyn AxlService>> {
        self(name, settings)
    }
}

/// Registry of configurations and the clients built from them.
///
/// Reads are the common case after the first [`ClientRegistry::client`]
/// call per name; construction happens under a mutex so concurrent first
/// lookups build a single client.
pub struct ClientRegistry {
    connector: Box<dyn Connector>,
    settings: RwLock<HashMap<String, ClientSettings>>,
    clients: Mutex<HashMap<String, Arc<Client>>>,
}

impl ClientRegistry {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            settings: RwLock::new(HashMap::new()),
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Registers settings under `name`, replacing any previous ones.
    ///
    /// A client already built for `name` is dropped from the cache.
    pub fn register(&self, name: impl Into<String>, settings: ClientSettings) {
        let name = name.into();
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&name);
        info!("Registered configuration {} for {}", name, settings.endpoint());
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, settings);
    }

    /// Returns the settings registered under `name`.
    pub fn settings(&self, name: &str) -> ServiceResult<ClientSettings> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownConfiguration(name.to_string()))
    }

    /// Returns the cached client for `name`, building it on first use.
    pub fn client(&self, name: &str) -> ServiceResult<Arc<Client>> {
        self.client_with(name, false)
    }

    /// Like [`ClientRegistry::client`], but rebuilds the client when `recreate` is set.
    pub fn client_with(&self, name: &str, recreate: bool) -> ServiceResult<Arc<Client>> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if !recreate {
            if let Some(client) = clients.get(name) {
                return Ok(Arc::clone(client));
            }
        }

        let settings = self.settings(name)?;
        let service = self.connector.connect(name, &settings)?;
        let client = Arc::new(Client::new(name, settings, service));
        debug!("Built client for configuration {}", name);
        clients.insert(name.to_string(), Arc::clone(&client));
        Ok(client)
    }

    /// Returns the client for [`DEFAULT_CONFIG`].
    pub fn default_client(&self) -> ServiceResult<Arc<Client>> {
        self.client(DEFAULT_CONFIG)
    }
}
