use crate::entities::{DeviceProfile, Line, Phone, RemoteDestinationProfile};
use axl_model::{Entity, IDENTITY_FIELD, ModelResult, XType};
use serde_json::{Value, json};

const LINES_FIELD: &str = "lines";

/// Devices and profiles that carry directory numbers.
///
/// Both setters replace the whole `lines` field. Positions are 1-based and
/// follow the order of the input.
pub trait LineAssociation: Entity {
    /// Associates attached [`Line`]s by identity.
    fn set_lines<'a, I>(&mut self, lines: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = &'a Line>,
    {
        let items = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let identity = line.model().require_identity()?;
                Ok(json!({
                    "line": {
                        "index": index + 1,
                        "dirn": { IDENTITY_FIELD: identity.to_string() }
                    }
                }))
            })
            .collect::<ModelResult<Vec<_>>>()?;
        self.model_mut().set(LINES_FIELD, Value::Array(items));
        Ok(())
    }

    /// Associates fully described `XPhoneLine` values, overwriting their index.
    fn set_phone_lines<I>(&mut self, lines: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = XType>,
    {
        let items = lines
            .into_iter()
            .enumerate()
            .map(|(index, mut line)| {
                line.set("index", index + 1)?;
                Ok(json!({ "line": line.into_value() }))
            })
            .collect::<ModelResult<Vec<_>>>()?;
        self.model_mut().set(LINES_FIELD, Value::Array(items));
        Ok(())
    }
}

impl LineAssociation for DeviceProfile {}

impl LineAssociation for Phone {}

impl LineAssociation for RemoteDestinationProfile {}
