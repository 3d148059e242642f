//! Object mapper between AXL schema entities and local mutable models.
//!
//! Defines the pieces that turn field writes and lifecycle calls into
//! remote operations:
//! - [`Model`] — one remote entity: identity, state, tracked fields
//! - [`ChangeTracker`] — which fields changed since the last sync
//! - [`prune`] — strips empty leaf fields before sending
//! - [`escape`] — local aliases for reserved field names (`cls` ↔ `class`)
//! - [`ListCursor`] / [`ModelCursor`] — paginated searches
//! - [`Entity`] — typed wrappers over [`Model`]
//! - [`Sql`] — raw SQL pass-through for settings the schema lacks
//!
//! Transport and schema loading are provided by an [`axl_service::AxlService`].

mod entity;
mod error;
pub mod escape;
mod list;
mod model;
pub mod prune;
mod schema;
mod sql;
mod tracker;
mod xtype;

pub use entity::{Entity, EntityCursor};
pub use error::{ModelError, ModelResult};
pub use list::{ListCursor, ModelCursor, Page};
pub use model::{IDENTITY_FIELD, Model, ModelState};
pub use schema::{TypeSchema, Verb};
pub use sql::{Sql, SqlRow};
pub use tracker::ChangeTracker;
pub use xtype::XType;
