use crate::entities::{DeviceProfile, Phone, User};
use crate::sql::CcmSql;
use axl_model::{IDENTITY_FIELD, ModelError, ModelResult};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Schema field for BFCP presentation sharing, present on newer releases.
pub const BFCP_FIELD: &str = "AllowPresentationSharingUsingBfcp";

/// Device protocol required for BFCP.
pub const SIP: &str = "SIP";

impl Phone {
    /// Logs `user` in to this phone with `profile` for `duration` hours.
    pub fn login(&self, user: &User, profile: &DeviceProfile, duration: u32) -> ModelResult<()> {
        let identity = self.require_identity()?;
        let profile = profile.require_identity()?;
        let user_id = user
            .get_str("userid")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ModelError::InvalidArgument("login requires a user with a userid".into())
            })?;
        self.client().call(
            "doDeviceLogin",
            json!({
                "deviceName": { IDENTITY_FIELD: identity.to_string() },
                "loginDuration": duration,
                "profileName": { IDENTITY_FIELD: profile.to_string() },
                "userId": user_id,
            }),
        )?;
        info!("{} logged in to phone {}", user_id, identity);
        Ok(())
    }

    pub fn logout(&self) -> ModelResult<()> {
        let identity = self.require_identity()?;
        self.client().call(
            "doDeviceLogout",
            json!({ "deviceName": { IDENTITY_FIELD: identity.to_string() } }),
        )?;
        info!("phone {} logged out", identity);
        Ok(())
    }

    /// Turns BFCP presentation sharing on or off. SIP phones only.
    ///
    /// Releases whose schema lacks the setting get it through the database.
    pub fn update_bfcp(&mut self, enabled: bool) -> ModelResult<()> {
        let identity = self.require_identity()?;
        if self.get_str("protocol") != Some(SIP) {
            return Err(ModelError::InvalidArgument(
                "BFCP can only be changed on SIP phones".into(),
            ));
        }

        if self.has_field(BFCP_FIELD) {
            self.commit_field(BFCP_FIELD, enabled.to_string())
        } else {
            warn!("{} not in schema, updating phone {} through SQL", BFCP_FIELD, identity);
            CcmSql::new(Arc::clone(self.client())).update_bfcp(identity, enabled)?;
            Ok(())
        }
    }
}
