//! Request encoding for the batchexecute wire format.
//!
//! Every call POSTs to one fixed endpoint. The method and its parameters
//! travel inside a triple-nested envelope, and the parameter tree is
//! JSON-encoded twice: once into a string embedded in the envelope, then
//! again when the envelope itself is serialized into the form body. The
//! UI context path (`source-path`) is a URL parameter, never part of the
//! parameter tree.

use serde_json::{json, Value};

use crate::method::RpcMethod;

/// The single endpoint all RPCs are POSTed to.
pub const BATCHEXECUTE_URL: &str =
    "https://notebooklm.google.com/_/LabsTailwindUi/data/batchexecute";

/// URL query inputs that are not derived from the method itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlContext<'a> {
    /// UI page the call pretends to originate from, e.g. `/notebook/{id}`.
    pub source_path: &'a str,
    /// Session id (`f.sid`) scraped at login, when available.
    pub session_id: Option<&'a str>,
    /// Frontend build label (`bl`), when available.
    pub build_label: Option<&'a str>,
    /// Monotonic request id (`_reqid`) from the shared counter.
    pub request_id: Option<u64>,
}

fn compact(value: &Value) -> String {
    // Value maps always have string keys, so serialization cannot fail.
    serde_json::to_string(value).unwrap_or_else(|_| String::from("null"))
}

/// Wraps a parameter tree into the `[[[token, json(params), null,
/// "generic"]]]` envelope. The params are serialized compactly here; the
/// envelope is serialized a second time by [`build_request_body`].
pub fn encode_rpc_request(method: RpcMethod, params: &Value) -> Value {
    json!([[[method.token(), compact(params), null, "generic"]]])
}

/// Renders the form body: `f.req=<pct-encoded envelope>&at=<pct-encoded
/// csrf>&`. The trailing `&` is part of the observed format. Without a
/// CSRF token the `at` pair is omitted entirely.
pub fn build_request_body(envelope: &Value, csrf_token: Option<&str>) -> String {
    let payload = compact(envelope);
    let mut body = format!("f.req={}&", urlencoding::encode(&payload));
    if let Some(token) = csrf_token {
        body.push_str(&format!("at={}&", urlencoding::encode(token)));
    }
    body
}

/// Builds the full batchexecute URL with its query parameters.
pub fn build_url(method: RpcMethod, context: &UrlContext<'_>) -> String {
    let source_path = if context.source_path.is_empty() {
        "/"
    } else {
        context.source_path
    };

    let mut pairs: Vec<(&str, String)> = vec![
        ("rpcids", String::from(method.token())),
        ("source-path", String::from(source_path)),
        ("hl", String::from("en")),
    ];
    if let Some(session_id) = context.session_id {
        pairs.push(("f.sid", String::from(session_id)));
    }
    if let Some(build_label) = context.build_label {
        pairs.push(("bl", String::from(build_label)));
    }
    if let Some(request_id) = context.request_id {
        pairs.push(("_reqid", request_id.to_string()));
    }
    pairs.push(("rt", String::from("c")));

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{BATCHEXECUTE_URL}?{query}")
}
