//! HTTP implementation of the invocation client
//!
//! Speaks the Lambda `Invoke` REST shape
//! (`POST /2015-03-31/functions/{name}/invocations`), which local
//! Lambda-compatible stacks and invoke gateways expose as well. Credential
//! resolution is out of scope; callers needing auth supply a static
//! `Authorization` header value.

use async_trait::async_trait;
use reqwest::header;

use crate::common::{Error, Result};

use super::{InvokeClient, InvokeOutput};

/// Invocation client over plain HTTP
pub struct HttpInvokeClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: Option<String>,
}

impl HttpInvokeClient {
    /// Create a client against an invoke endpoint, e.g. `http://localhost:4566`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_header: None,
        }
    }

    /// Attach a static `Authorization` header to every invocation
    pub fn with_auth_header(mut self, value: impl Into<String>) -> Self {
        self.auth_header = Some(value.into());
        self
    }

    fn invoke_url(&self, function_name: &str) -> String {
        format!(
            "{}/2015-03-31/functions/{}/invocations",
            self.base_url.trim_end_matches('/'),
            function_name
        )
    }
}

#[async_trait]
impl InvokeClient for HttpInvokeClient {
    async fn invoke(&self, function_name: &str, payload: &str) -> Result<InvokeOutput> {
        let mut request = self
            .http
            .post(self.invoke_url(function_name))
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Amz-Invocation-Type", "RequestResponse")
            .body(payload.to_owned());

        if let Some(auth) = &self.auth_header {
            request = request.header(header::AUTHORIZATION, auth.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::invoke(function_name, e.to_string()))?;

        let status_code = response.status().as_u16();
        let request_id = response
            .headers()
            .get("x-amzn-requestid")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::invoke(function_name, e.to_string()))?;

        Ok(InvokeOutput {
            status_code,
            payload: if bytes.is_empty() {
                None
            } else {
                Some(bytes.to_vec())
            },
            request_id,
        })
    }
}
