//! Remote service abstraction.
//!
//! The object mapper never talks SOAP itself. It relies on a service that
//! can hand out blank schema-shaped values and perform remote calls, so any
//! backend (a real WSDL client, a recording stub) can sit behind it.

use crate::error::ServiceResult;
use serde_json::Value;

/// Key of the envelope every remote response is wrapped in.
pub const RETURN: &str = "return";

/// Key holding the records of a row-oriented response.
pub const ROW: &str = "row";

/// A typed factory plus remote-call capability for one AXL endpoint.
///
/// Values crossing this boundary use local-safe field names: reserved
/// words such as `class` arrive already escaped (`cls`), the way a SOAP
/// toolkit exposes them. Outgoing payloads are converted back by the
/// caller before [`AxlService::call`].
pub trait AxlService: Send + Sync {
    /// Produces a blank value for a namespaced schema type (e.g. `ns0:XUser`).
    ///
    /// Scalar fields are empty, nested and list fields are present but
    /// empty. Fails with `SchemaNotFound` for unknown types.
    fn create_empty(&self, type_name: &str) -> ServiceResult<Value>;

    /// Performs one blocking remote procedure call.
    ///
    /// The response is the `{"return": ...}` envelope as sent by the server.
    fn call(&self, operation: &str, payload: Value) -> ServiceResult<Value>;
}
