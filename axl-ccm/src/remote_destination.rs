use crate::entities::RemoteDestination;
use crate::sql::CcmSql;
use axl_model::ModelResult;
use std::sync::Arc;

// Single number reach cannot be changed through the typed update on 10.5,
// so both directions go through the database.
impl RemoteDestination {
    /// Whether single number reach is on; `false` when the destination has no dynamic row.
    pub fn single_number_reach(&self) -> ModelResult<bool> {
        let identity = self.require_identity()?;
        let enabled = CcmSql::new(Arc::clone(self.client())).single_number_reach(identity)?;
        Ok(enabled.unwrap_or(false))
    }

    pub fn set_single_number_reach(&self, enabled: bool) -> ModelResult<()> {
        let identity = self.require_identity()?;
        CcmSql::new(Arc::clone(self.client())).set_single_number_reach(identity, enabled)?;
        Ok(())
    }
}
