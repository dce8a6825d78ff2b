//! Single-case execution
//!
//! One invocation walks build -> invoke -> classify with no retries; a
//! failure at any stage is terminal for the case's single attempt. The
//! produced outcome feeds the next case's generator, and every branch
//! ends in a report entry.

use serde_json::Value;

use crate::client::{InvokeClient, InvokeOutput};
use crate::common::{ChainConfig, Result};

use super::case::{Case, CaseStatus, Continuation};
use super::normalize::normalize_payload;
use super::report::ReportEntry;
use super::request::{self, RequestSpec};

/// What a single case produced
pub(crate) struct CaseExecution {
    pub on_success: Continuation,
    pub on_failure: Continuation,
    pub outcome: CaseOutcome,
    pub report: ReportEntry,
}

/// The "previous result" threaded between consecutive cases
#[derive(Debug, Clone, Default)]
pub(crate) struct CaseOutcome {
    /// Normalized response data, or the error message for errored cases
    pub data: Option<Value>,
    /// Untouched textual response payload
    pub raw: Option<String>,
    /// Transport-assigned request id
    pub request_id: Option<String>,
}

/// Execute exactly one case given the previous case's outcome
#[tracing::instrument(skip_all, fields(case = case.id, function = %case.function_name))]
pub(crate) async fn invoke<C: InvokeClient>(
    client: &C,
    config: &ChainConfig,
    case: &Case,
    prev: &CaseOutcome,
) -> CaseExecution {
    let req = request::materialize(Some(&case.generator), prev.data.as_ref(), prev.raw.as_deref());
    let function = config.qualified_name(&case.function_name);
    tracing::debug!("request built");

    let (status, outcome) = match submit(client, &function, &req).await {
        Ok(output) => classify(&req, output),
        Err(err) => {
            tracing::debug!(error = %err, "invocation raised");
            // Carry the transport's own message, not our wrapper around it
            let message = match err {
                crate::common::Error::Invoke { message, .. } => message,
                other => other.to_string(),
            };
            (
                CaseStatus::Error,
                CaseOutcome {
                    data: Some(Value::String(message)),
                    raw: None,
                    request_id: None,
                },
            )
        }
    };
    tracing::debug!(?status, "case finished");

    let response = match status {
        CaseStatus::Error => outcome.data.clone().unwrap_or(Value::Null),
        _ => outcome
            .raw
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null),
    };

    let report = ReportEntry {
        id: case.id,
        status,
        title: case.title.clone(),
        function_name: case.function_name.clone(),
        request_id: outcome.request_id.clone(),
        request: Value::Object(req.payload.clone()),
        response,
    };

    CaseExecution {
        on_success: req.on_success,
        on_failure: req.on_failure,
        outcome,
        report,
    }
}

/// Serialize the payload and submit it through the transport
async fn submit<C: InvokeClient>(
    client: &C,
    function: &str,
    req: &RequestSpec,
) -> Result<InvokeOutput> {
    let payload = req.wire_payload()?;
    tracing::debug!(bytes = payload.len(), "invoking");
    client.invoke(function, &payload).await
}

/// Classify a transport response into a case status and outcome
///
/// A non-200 transport status fails the case before any parsing. On 200
/// the payload is normalized and judged by the request's validator, or by
/// the default heuristic when none was declared.
fn classify(req: &RequestSpec, output: InvokeOutput) -> (CaseStatus, CaseOutcome) {
    if output.status_code != 200 {
        tracing::debug!(status_code = output.status_code, "transport status not ok");
        return (CaseStatus::Fail, CaseOutcome::default());
    }

    let raw = output
        .payload
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
    let data = raw.as_deref().map(normalize_payload);

    let fail = match &req.valid {
        Some(valid) => !valid(data.as_ref().unwrap_or(&Value::Null), raw.as_deref()),
        None => inner_status_fails(data.as_ref()),
    };

    let status = if fail {
        CaseStatus::Fail
    } else {
        CaseStatus::Success
    };

    (
        status,
        CaseOutcome {
            data,
            raw,
            request_id: output.request_id,
        },
    )
}

/// Default heuristic: a numeric inner `statusCode` other than 200 fails
fn inner_status_fails(data: Option<&Value>) -> bool {
    data.and_then(|d| d.get("statusCode"))
        .and_then(Value::as_i64)
        .map_or(false, |code| code != 200)
}
