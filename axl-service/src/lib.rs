//! Remote service contract for the AXL object mapper.
//!
//! The object mapper sits on top of an existing SOAP toolkit. This crate
//! pins down what it needs from that toolkit and the plumbing around it:
//! - [`AxlService`] — blank schema values plus remote calls
//! - [`Client`] — one connected endpoint with its schema shape cache
//! - [`ClientRegistry`] — named configurations, one cached client per name
//! - [`ClientSettings`] — host, credentials and schema version
//!
//! With the `testing` feature, [`testing::StubService`] provides a scripted
//! service for tests.

mod client;
mod config;
mod error;
mod registry;
mod service;

#[cfg(feature = "testing")]
pub mod testing;

pub use client::Client;
pub use config::{ClientSettings, DEFAULT_NAMESPACE, normalize_version};
pub use error::{ServiceError, ServiceResult};
pub use registry::{ClientRegistry, Connector, DEFAULT_CONFIG};
pub use service::{AxlService, RETURN, ROW};
