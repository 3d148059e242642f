use crate::entities::TimeSchedule;
use axl_model::{IDENTITY_FIELD, ModelResult, Verb};
use axl_types::Identity;
use serde_json::{Map, Value, json};
use tracing::info;

impl TimeSchedule {
    /// Adds time periods to the schedule immediately.
    pub fn add_members<I>(&self, periods: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = Identity>,
    {
        self.change_members("addMembers", periods)
    }

    /// Removes time periods from the schedule immediately.
    pub fn remove_members<I>(&self, periods: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = Identity>,
    {
        self.change_members("removeMembers", periods)
    }

    fn change_members<I>(&self, key: &str, periods: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = Identity>,
    {
        let identity = self.require_identity()?;
        let members: Vec<Value> = periods
            .into_iter()
            .map(|period| json!({ "member": { "timePeriodName": { IDENTITY_FIELD: period.to_string() } } }))
            .collect();
        let count = members.len();

        let mut payload = Map::new();
        payload.insert(key.to_string(), Value::Array(members));
        payload.insert("uuid".into(), Value::String(identity.to_string()));
        let operation = self.schema().operation(Verb::Update);
        self.client().call(&operation, Value::Object(payload))?;
        info!("{} {} time periods of schedule {}", key, count, identity);
        Ok(())
    }
}
