//! Response decoding for the batchexecute chunked format.
//!
//! Responses open with the anti-hijacking prefix `)]}'` followed by
//! alternating length lines and JSON payload lines. The length counts are
//! advisory only: proxies and the upstream itself re-split payloads, so
//! the decoder accumulates lines until a JSON document parses instead of
//! trusting the declared byte counts.
//!
//! Within the parsed chunks, `["wrb.fr", token, payload_json, ...]`
//! carries a successful result (the payload string is JSON-decoded a
//! second time) and `["er", token, info]` carries an error. Only chunks
//! matching the requested token are considered; everything else is
//! framing noise.

use serde_json::Value;
use tracing::debug;

use crate::error::{RemoteCode, RpcError};
use crate::method::RpcMethod;

/// Anti-hijacking prefix every well-formed response starts with.
pub const RESPONSE_PREFIX: &str = ")]}'";

const SUCCESS_TAG: &str = "wrb.fr";
const ERROR_TAG: &str = "er";

/// What the upstream said about one RPC, separated from transport
/// failures. `Missing` is a first-class outcome: the upstream answers
/// some valid calls with no chunk at all.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    /// Decoded payload. `Value::Null` when the success chunk carried no
    /// payload, which some mutations legitimately do.
    Success(Value),
    /// The upstream processed the call and rejected it with a code.
    Error(RemoteCode),
    /// No chunk matched the requested method token.
    Missing,
}

/// Decodes a raw response body for one method.
pub fn decode_response(body: &str, method: RpcMethod) -> Result<RpcOutcome, RpcError> {
    let rest = body.strip_prefix(RESPONSE_PREFIX).ok_or_else(|| {
        RpcError::Protocol(String::from("response missing anti-hijacking prefix"))
    })?;

    let mut pending = String::new();
    for line in rest.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // A bare integer between chunks is a length declaration.
        if pending.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(line);

        let Ok(chunk) = serde_json::from_str::<Value>(&pending) else {
            // Payload was re-split across lines; keep accumulating.
            continue;
        };
        pending.clear();

        if let Some(outcome) = scan_chunk(&chunk, method)? {
            return Ok(outcome);
        }
    }

    if !pending.is_empty() {
        debug!(method = method.name(), "trailing bytes never parsed as a chunk");
    }
    Ok(RpcOutcome::Missing)
}

/// A chunk is either a single entry (`["wrb.fr", ...]`) or an array of
/// entries; both occur in captured traffic.
fn scan_chunk(chunk: &Value, method: RpcMethod) -> Result<Option<RpcOutcome>, RpcError> {
    let Some(items) = chunk.as_array() else {
        return Ok(None);
    };

    if items.first().map(Value::is_string).unwrap_or(false) {
        return decode_entry(items, method);
    }
    for entry in items {
        if let Some(entry_items) = entry.as_array() {
            if let Some(outcome) = decode_entry(entry_items, method)? {
                return Ok(Some(outcome));
            }
        }
    }
    Ok(None)
}

fn decode_entry(entry: &[Value], method: RpcMethod) -> Result<Option<RpcOutcome>, RpcError> {
    let (Some(tag), Some(entry_token)) = (
        entry.first().and_then(Value::as_str),
        entry.get(1).and_then(Value::as_str),
    ) else {
        return Ok(None);
    };
    if entry_token != method.token() {
        return Ok(None);
    }

    match tag {
        SUCCESS_TAG => match entry.get(2) {
            None | Some(Value::Null) => Ok(Some(RpcOutcome::Success(Value::Null))),
            Some(Value::String(payload)) => {
                let decoded = serde_json::from_str(payload).map_err(|error| {
                    RpcError::Protocol(format!(
                        "inner payload for `{}` is not valid JSON: {error}",
                        method.name()
                    ))
                })?;
                Ok(Some(RpcOutcome::Success(decoded)))
            }
            Some(other) => Err(RpcError::Protocol(format!(
                "success chunk for `{}` carried a non-string payload: {other}",
                method.name()
            ))),
        },
        ERROR_TAG => {
            let info = entry.get(2).unwrap_or(&Value::Null);
            Ok(Some(RpcOutcome::Error(remote_code(info))))
        }
        _ => Ok(None),
    }
}

/// Pulls the most specific code out of an error-chunk info blob. The
/// textual rate-limit sentinel wins over positional numbers when both
/// are present.
fn remote_code(info: &Value) -> RemoteCode {
    fn find(value: &Value) -> Option<RemoteCode> {
        match value {
            Value::Number(number) => number.as_i64().map(RemoteCode::Number),
            Value::String(text) => Some(RemoteCode::Text(text.clone())),
            Value::Array(items) => {
                if let Some(sentinel) = items.iter().find(|item| {
                    item.as_str() == Some(RemoteCode::RATE_LIMIT_SENTINEL)
                }) {
                    return find(sentinel);
                }
                items.iter().find_map(find)
            }
            _ => None,
        }
    }
    find(info).unwrap_or_else(|| {
        RemoteCode::Text(
            serde_json::to_string(info).unwrap_or_else(|_| String::from("unknown")),
        )
    })
}
