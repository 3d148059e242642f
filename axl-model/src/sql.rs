//! Direct SQL against the CallManager database.
//!
//! Some settings are not reachable through the typed operations on every
//! server version. [`Sql`] runs raw statements through
//! `executeSQLQuery` / `executeSQLUpdate` and unwraps the row-oriented
//! answers. Callers interpolate only canonical identities and `t`/`f`
//! flags into statements.

use crate::error::{ModelError, ModelResult};
use crate::list::rows;
use axl_service::{Client, RETURN};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

const QUERY: &str = "executeSQLQuery";
const UPDATE: &str = "executeSQLUpdate";

/// One database row, column name to value.
pub type SqlRow = Map<String, Value>;

/// SQL pass-through bound to one client.
#[derive(Debug, Clone)]
pub struct Sql {
    client: Arc<Client>,
}

impl Sql {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Runs a `SELECT` and returns every row.
    pub fn query(&self, sql: &str) -> ModelResult<Vec<SqlRow>> {
        info!("Execute SqlQuery \"{}\"", sql);
        let response = self.client.call(QUERY, json!({ "sql": sql }))?;
        rows(QUERY, response)?
            .into_iter()
            .map(|row| match row {
                Value::Object(map) => Ok(map),
                other => Err(ModelError::protocol(QUERY, format!("row is not a structure: {other}"))),
            })
            .collect()
    }

    /// Runs a `SELECT` expected to match at most one row.
    pub fn query_one(&self, sql: &str) -> ModelResult<Option<SqlRow>> {
        let mut rows = self.query(sql)?;
        if rows.len() > 1 {
            return Err(ModelError::TooManyResults { count: rows.len() });
        }
        Ok(rows.pop())
    }

    /// Runs an `INSERT`, `UPDATE` or `DELETE` and returns the affected row count.
    pub fn execute(&self, sql: &str) -> ModelResult<u64> {
        info!("Execute SqlUpdate \"{}\"", sql);
        let response = self.client.call(UPDATE, json!({ "sql": sql }))?;
        let updated = response.get(RETURN).and_then(|r| r.get("rowsUpdated"));
        let count = match updated {
            None | Some(Value::Null) => Some(0),
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        };
        count.ok_or_else(|| {
            let raw = updated.map(Value::to_string).unwrap_or_default();
            ModelError::protocol(UPDATE, format!("malformed rowsUpdated {raw}"))
        })
    }
}
