use crate::entities::{DeviceProfile, Phone, RemoteDestinationProfile, User};
use axl_model::{Entity, ModelResult};
use axl_service::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Device class the remote destination profile templates are created with.
pub const REMOTE_DESTINATION_PROFILE_CLASS: &str = "Remote Destination Profile";

/// Entities that can be created from an existing record.
pub trait Templated: Entity {
    /// Device class set on every template copy, if any.
    const TEMPLATE_CLASS: Option<&'static str> = None;

    /// Loads the record matching `criteria` and returns an unbound copy of it.
    ///
    /// The copy is ready to be edited and added with `create`.
    fn template(client: &Arc<Client>, criteria: Value) -> ModelResult<Self> {
        Self::template_with_class(client, criteria, Self::TEMPLATE_CLASS)
    }

    /// Like [`Templated::template`], overriding the device class.
    fn template_with_class(
        client: &Arc<Client>,
        criteria: Value,
        class: Option<&str>,
    ) -> ModelResult<Self> {
        debug!("{} created from template, criteria: {}", Self::TYPE_NAME, criteria);
        let template = Self::fetch(client, criteria)?;
        let mut copy = template.clone_detached();
        if let Some(class) = class {
            copy.model_mut().set("cls", class);
        }
        Ok(copy)
    }
}

impl Templated for DeviceProfile {}

impl Templated for Phone {}

impl Templated for User {}

impl Templated for RemoteDestinationProfile {
    const TEMPLATE_CLASS: Option<&'static str> = Some(REMOTE_DESTINATION_PROFILE_CLASS);
}
