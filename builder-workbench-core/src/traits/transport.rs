//! Server transport abstraction Trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreResult;
use crate::types::TabLoadResponse;

/// Server request transport.
///
/// Issues one request in the context of the given form to a named server
/// handler. Retries, timeouts and user-facing failure reporting are the
/// transport's own concern; the controller only reacts to the settled
/// result.
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// Request a rendered tab from the server.
    ///
    /// # Arguments
    /// * `form_id` - Form used as the request context
    /// * `handler` - Server handler name
    /// * `data` - Request payload
    async fn request(
        &self,
        form_id: &str,
        handler: &str,
        data: &Value,
    ) -> CoreResult<TabLoadResponse>;
}
