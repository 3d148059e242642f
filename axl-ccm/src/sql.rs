//! Database statements for settings the schema does not expose.
//!
//! Only canonical identities and `t`/`f` flags are interpolated.

use axl_model::{ModelResult, Sql, SqlRow};
use axl_service::Client;
use axl_types::{Identity, axl_bool, sql_bool};
use std::sync::Arc;

/// Presence licensing of an end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CupsLicense {
    pub cups: bool,
    pub cupc: bool,
}

/// CallManager-specific statements on top of [`Sql`].
#[derive(Debug, Clone)]
pub struct CcmSql {
    sql: Sql,
}

impl CcmSql {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            sql: Sql::new(client),
        }
    }

    /// Extension mobility logins of a user, one row per device.
    pub fn user_phone_association(&self, user: Identity) -> ModelResult<Vec<SqlRow>> {
        self.sql.query(&format!(
            "SELECT * FROM extensionmobilitydynamic WHERE fkenduser=\"{user}\""
        ))
    }

    pub fn cups_license(&self, user: Identity) -> ModelResult<Option<CupsLicense>> {
        let row = self.sql.query_one(&format!(
            "SELECT * FROM enduserlicense WHERE fkenduser=\"{user}\""
        ))?;
        Ok(row.map(|row| CupsLicense {
            cups: flag(&row, "enablecups"),
            cupc: flag(&row, "enablecupc"),
        }))
    }

    pub fn insert_cups(&self, user: Identity, cupc: bool) -> ModelResult<u64> {
        self.sql.execute(&format!(
            "INSERT INTO enduserlicense (fkenduser, enablecups, enablecupc) VALUES (\"{user}\", \"t\", \"{}\")",
            sql_bool(cupc)
        ))
    }

    pub fn remove_cups(&self, user: Identity) -> ModelResult<u64> {
        self.sql.execute(&format!(
            "DELETE FROM enduserlicense WHERE fkenduser = \"{user}\""
        ))
    }

    pub fn update_cupc(&self, user: Identity, cupc: bool) -> ModelResult<u64> {
        self.sql.execute(&format!(
            "UPDATE enduserlicense SET enablecupc = \"{}\" WHERE fkenduser = \"{user}\"",
            sql_bool(cupc)
        ))
    }

    pub fn update_bfcp(&self, device: Identity, enabled: bool) -> ModelResult<u64> {
        self.sql.execute(&format!(
            "UPDATE device SET enablebfcp = \"{}\" WHERE pkid = \"{device}\"",
            sql_bool(enabled)
        ))
    }

    pub fn set_single_number_reach(&self, destination: Identity, enabled: bool) -> ModelResult<u64> {
        self.sql.execute(&format!(
            "UPDATE remotedestinationdynamic SET enablesinglenumberreach = \"{}\" WHERE fkremotedestination = \"{destination}\"",
            sql_bool(enabled)
        ))
    }

    /// `None` when the destination has no dynamic row yet.
    pub fn single_number_reach(&self, destination: Identity) -> ModelResult<Option<bool>> {
        let row = self.sql.query_one(&format!(
            "SELECT enablesinglenumberreach FROM remotedestinationdynamic WHERE fkremotedestination = \"{destination}\""
        ))?;
        Ok(row.map(|row| flag(&row, "enablesinglenumberreach")))
    }
}

fn flag(row: &SqlRow, column: &str) -> bool {
    axl_bool(row.get(column).and_then(|v| v.as_str())).unwrap_or(false)
}
