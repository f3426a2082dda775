//! Scripted transport doubles shared by the unit suites.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::auth::AuthTokens;
use crate::client::RpcClient;
use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport double that records requests and replays scripted
/// responses in order. Once the script is exhausted it answers with an
/// empty, correctly prefixed body.
pub(crate) struct RecordingHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
}

impl RecordingHttpClient {
    pub(crate) fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request log lock").clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("request log lock").push(request);
        let next = {
            let mut responses = self.responses.lock().expect("response log lock");
            if responses.is_empty() {
                Ok(HttpResponse::ok(")]}'\n"))
            } else {
                responses.remove(0)
            }
        };
        Box::pin(async move { next })
    }
}

/// Frames `payload` as the double-encoded success chunk for `token`.
pub(crate) fn success_body(token: &str, payload: &Value) -> String {
    let chunk = json!([[
        "wrb.fr",
        token,
        serde_json::to_string(payload).expect("payload serializes"),
        null,
        null
    ]]);
    let line = serde_json::to_string(&chunk).expect("chunk serializes");
    format!(")]}}'\n{}\n{}\n", line.len(), line)
}

/// A client wired to a recording transport with fixed session tokens.
pub(crate) fn client_with(
    responses: Vec<Result<HttpResponse, HttpError>>,
) -> (RpcClient, Arc<RecordingHttpClient>) {
    let http = Arc::new(RecordingHttpClient::new(responses));
    let auth = AuthTokens::new("SID=abc")
        .with_csrf_token("csrf-1")
        .with_session_id("-42");
    (
        RpcClient::new(Arc::clone(&http) as Arc<dyn HttpClient>, auth),
        http,
    )
}

/// Shorthand for a 200 response carrying a framed success chunk.
pub(crate) fn ok_response(token: &str, payload: &Value) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok(success_body(token, payload)))
}
