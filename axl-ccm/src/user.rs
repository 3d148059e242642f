use crate::entities::{DeviceProfile, Phone, User};
use crate::sql::{CcmSql, CupsLicense};
use axl_model::{Entity, IDENTITY_FIELD, ModelError, ModelResult, SqlRow};
use axl_service::Client;
use axl_types::Identity;
use serde_json::{Value, json};
use std::sync::Arc;
use std::vec;
use tracing::debug;

impl User {
    /// Replaces `associatedDevices` with the names of `phones`.
    pub fn set_associated_devices<'a, I>(&mut self, phones: I)
    where
        I: IntoIterator<Item = &'a Phone>,
    {
        let devices = phones
            .into_iter()
            .map(|phone| json!({ "device": phone.get("name").cloned().unwrap_or(Value::Null) }))
            .collect();
        self.set("associatedDevices", Value::Array(devices));
    }

    pub fn set_cti_controlled_device_profiles<'a, I>(&mut self, profiles: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = &'a DeviceProfile>,
    {
        let items = profile_refs(profiles)?;
        self.set("ctiControlledDeviceProfiles", items);
        Ok(())
    }

    pub fn set_phone_profiles<'a, I>(&mut self, profiles: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = &'a DeviceProfile>,
    {
        let items = profile_refs(profiles)?;
        self.set("phoneProfiles", items);
        Ok(())
    }

    /// Phones this user is currently logged in to through extension mobility.
    ///
    /// Runs one query now; each phone is loaded as the iterator advances.
    pub fn mobility_association(&self) -> ModelResult<MobilityPhones> {
        let identity = self.require_identity()?;
        let rows = CcmSql::new(Arc::clone(self.client())).user_phone_association(identity)?;
        debug!("{} mobility associations for user {}", rows.len(), identity);
        Ok(MobilityPhones {
            client: Arc::clone(self.client()),
            rows: rows.into_iter(),
        })
    }

    /// Presence licensing, `None` when the user has no license row.
    pub fn cups_cupc(&self) -> ModelResult<Option<CupsLicense>> {
        let identity = self.require_identity()?;
        CcmSql::new(Arc::clone(self.client())).cups_license(identity)
    }

    /// Enables or disables CUPS and CUPC; CUPC requires CUPS.
    pub fn set_cups_cupc(&self, cups: bool, cupc: bool) -> ModelResult<()> {
        if cupc && !cups {
            return Err(ModelError::InvalidArgument(
                "cupc can only be enabled together with cups".into(),
            ));
        }
        let identity = self.require_identity()?;
        let sql = CcmSql::new(Arc::clone(self.client()));
        match (sql.cups_license(identity)?, cups) {
            (None, true) => {
                sql.insert_cups(identity, cupc)?;
            }
            (Some(current), false) if current.cups => {
                sql.remove_cups(identity)?;
            }
            (Some(current), true) if current.cups => {
                sql.update_cupc(identity, cupc)?;
            }
            _ => {}
        }
        Ok(())
    }
}

fn profile_refs<'a, I>(profiles: I) -> ModelResult<Value>
where
    I: IntoIterator<Item = &'a DeviceProfile>,
{
    profiles
        .into_iter()
        .map(|profile| {
            let identity = profile.require_identity()?;
            Ok(json!({ "profileName": { IDENTITY_FIELD: identity.to_string() } }))
        })
        .collect::<ModelResult<Vec<_>>>()
        .map(Value::Array)
}

/// Phones of a user's mobility logins, loaded one `getPhone` per step.
#[derive(Debug)]
pub struct MobilityPhones {
    client: Arc<Client>,
    rows: vec::IntoIter<SqlRow>,
}

impl Iterator for MobilityPhones {
    type Item = ModelResult<Phone>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(load_phone(&self.client, &row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for MobilityPhones {}

fn load_phone(client: &Arc<Client>, row: &SqlRow) -> ModelResult<Phone> {
    let raw = row.get("fkdevice").and_then(Value::as_str).ok_or_else(|| {
        ModelError::Protocol {
            operation: "executeSQLQuery".into(),
            message: "mobility row carries no fkdevice".into(),
        }
    })?;
    Phone::fetch_by_identity(client, Identity::parse(raw)?)
}
