//! Request materialization from case generators

use serde_json::{json, Map, Value};

use crate::common::Result;

use super::case::Continuation;

/// User agent advertised in the default wire headers
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Validator deciding pass/fail from the normalized response and the raw
/// payload; `true` means the response is acceptable
pub type Validator = Box<dyn Fn(&Value, Option<&str>) -> bool + Send + Sync>;

/// Generator computing a case's request from the previous case's result
///
/// Receives the previous case's normalized response data and raw payload,
/// `None` for both when there is no prior case.
pub type Generator = Box<dyn Fn(Option<&Value>, Option<&str>) -> RequestSpec + Send + Sync>;

/// Request produced by a case generator
///
/// Payload fields are what the invoked function receives; headers, the
/// authorizer context, the validator, and the continuation policies steer
/// the harness and never appear among the payload fields.
#[derive(Default)]
pub struct RequestSpec {
    pub(crate) payload: Map<String, Value>,
    pub(crate) headers: Map<String, Value>,
    pub(crate) authorizer: Option<Value>,
    pub(crate) valid: Option<Validator>,
    pub(crate) on_success: Continuation,
    pub(crate) on_failure: Continuation,
}

impl RequestSpec {
    /// An empty request: no payload, no validator, continue on both paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one payload field
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Merge a map of payload fields
    pub fn payload(mut self, fields: Map<String, Value>) -> Self {
        self.payload.extend(fields);
        self
    }

    /// Set a request header, merged over the harness defaults
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Propagate an authorizer context object with the request
    pub fn authorizer(mut self, authorizer: Value) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Decide pass/fail with a custom predicate instead of the default
    /// status-code heuristic
    pub fn valid(
        mut self,
        predicate: impl Fn(&Value, Option<&str>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.valid = Some(Box::new(predicate));
        self
    }

    /// Continuation policy applied after this case succeeds
    pub fn on_success(mut self, policy: Continuation) -> Self {
        self.on_success = policy;
        self
    }

    /// Continuation policy applied after this case fails or errors
    pub fn on_failure(mut self, policy: Continuation) -> Self {
        self.on_failure = policy;
        self
    }

    /// Serialize the invocation payload wire shape: default headers merged
    /// under user-supplied ones, the authorizer context when present, and
    /// payload fields spread at the top level
    pub(crate) fn wire_payload(&self) -> Result<String> {
        let mut headers = Map::new();
        headers.insert("User-Agent".to_string(), Value::String(USER_AGENT.to_string()));
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut body = Map::new();
        body.insert("headers".to_string(), Value::Object(headers));
        if let Some(authorizer) = &self.authorizer {
            body.insert("requestContext".to_string(), json!({ "authorizer": authorizer }));
        }
        for (key, value) in &self.payload {
            body.insert(key.clone(), value.clone());
        }

        Ok(serde_json::to_string(&Value::Object(body))?)
    }
}

/// Materialize a request from a case's generator and the previous result
///
/// An absent generator yields the default request: empty payload, no
/// validator, continue on both paths.
pub(crate) fn materialize(
    generator: Option<&Generator>,
    prev_data: Option<&Value>,
    prev_raw: Option<&str>,
) -> RequestSpec {
    match generator {
        Some(generator) => generator(prev_data, prev_raw),
        None => RequestSpec::default(),
    }
}
