//! Response payload normalization
//!
//! Remote functions frequently answer with gateway-style envelopes whose
//! `body` member is itself a JSON-encoded string, sometimes several layers
//! deep. Normalization undoes that wrapping so validators and downstream
//! generators see structured data.

use serde_json::Value;

/// Upper bound on nested `body` decoding; deeper strings stay encoded
const MAX_DECODE_DEPTH: usize = 16;

/// Decode a raw textual payload into structured data
///
/// Strings that do not look like a JSON object or array pass through
/// unchanged (plain-text error messages are common). Parse failures are
/// logged and swallowed, returning the original string. On success a
/// top-level `headers` member is dropped as transport plumbing, and a
/// string `body` member is decoded recursively in place.
pub fn normalize_payload(raw: &str) -> Value {
    decode(Value::String(raw.to_string()), 0)
}

fn decode(value: Value, depth: usize) -> Value {
    let text = match value {
        Value::String(text) => text,
        structured => return structured,
    };

    if depth >= MAX_DECODE_DEPTH || !looks_like_json(&text) {
        return Value::String(text);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(mut parsed) => {
            if let Value::Object(map) = &mut parsed {
                map.remove("headers");
                if let Some(body) = map.remove("body") {
                    map.insert("body".to_string(), decode(body, depth + 1));
                }
            }
            parsed
        }
        Err(err) => {
            tracing::warn!(error = %err, "payload looked like JSON but failed to parse");
            Value::String(text)
        }
    }
}

/// `{...}` or `[...]`, gated on the raw bytes without attempting a parse
fn looks_like_json(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(
        (bytes.first(), bytes.last()),
        (Some(b'{'), Some(b'}')) | (Some(b'['), Some(b']'))
    )
}
