//! Remote invocation client capability
//!
//! The engine submits serialized request payloads through this seam and
//! observes status code, payload bytes, and a transport request id. It
//! never looks inside the transport: timeouts, credentials, and throttling
//! live behind the trait.

pub mod http;

pub use http::HttpInvokeClient;

use async_trait::async_trait;

use crate::common::Result;

/// Response surface of one remote invocation
#[derive(Debug, Clone, Default)]
pub struct InvokeOutput {
    /// Transport-level status code
    pub status_code: u16,
    /// Untouched response payload bytes, if any
    pub payload: Option<Vec<u8>>,
    /// Transport-assigned request id, if any
    pub request_id: Option<String>,
}

/// Synchronous-style invocation of a remote function
///
/// Implementations submit the payload and wait for the response
/// (request-response, not fire-and-forget). Errors must carry a
/// human-readable message: the engine converts them into `error` report
/// entries rather than propagating them out of a run.
#[async_trait]
pub trait InvokeClient: Send + Sync {
    /// Invoke `function_name` with the serialized JSON `payload`
    async fn invoke(&self, function_name: &str, payload: &str) -> Result<InvokeOutput>;
}
