//! The RPC invoker: one `call` is one paced, counted, decoded exchange.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::AuthTokens;
use crate::counter::RequestCounter;
use crate::decoder::{decode_response, RpcOutcome};
use crate::encoder::{build_request_body, build_url, encode_rpc_request, UrlContext};
use crate::error::RpcError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::schema::BuiltCall;
use crate::throttling::ThrottlingQueue;
use crate::{artifacts, notebooks, notes, research, sources};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Client for the batchexecute surface. The transport is injected; the
/// request counter and throttle are shared across everything this
/// client dispatches, concurrent callers included.
pub struct RpcClient {
    http: Arc<dyn HttpClient>,
    auth: AuthTokens,
    counter: Arc<RequestCounter>,
    throttle: ThrottlingQueue,
    timeout_ms: u64,
}

impl RpcClient {
    pub fn new(http: Arc<dyn HttpClient>, auth: AuthTokens) -> Self {
        Self {
            http,
            auth,
            counter: Arc::new(RequestCounter::new()),
            throttle: ThrottlingQueue::default(),
            timeout_ms: 30_000,
        }
    }

    pub fn with_throttle(mut self, throttle: ThrottlingQueue) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn notebooks(&self) -> notebooks::NotebooksApi<'_> {
        notebooks::NotebooksApi::new(self)
    }

    pub fn sources(&self) -> sources::SourcesApi<'_> {
        sources::SourcesApi::new(self)
    }

    pub fn artifacts(&self) -> artifacts::ArtifactsApi<'_> {
        artifacts::ArtifactsApi::new(self)
    }

    pub fn notes(&self) -> notes::NotesApi<'_> {
        notes::NotesApi::new(self)
    }

    pub fn research(&self) -> research::ResearchApi<'_> {
        research::ResearchApi::new(self)
    }

    /// Dispatches one call and decodes its outcome. A missing response
    /// chunk is an error here; use [`call_optional`](Self::call_optional)
    /// for operations the upstream legitimately answers with nothing.
    pub async fn call(&self, call: BuiltCall, source_path: &str) -> Result<Value, RpcError> {
        match self.dispatch(&call, source_path).await? {
            RpcOutcome::Success(value) => Ok(value),
            RpcOutcome::Error(code) if code.is_rate_limit() => Err(RpcError::RateLimited),
            RpcOutcome::Error(code) => Err(RpcError::Remote {
                method: call.method.name(),
                code,
            }),
            RpcOutcome::Missing => Err(RpcError::NotFound {
                method: call.method.name(),
            }),
        }
    }

    /// Like [`call`](Self::call), but a missing chunk or a null payload
    /// decodes to `None`.
    pub async fn call_optional(
        &self,
        call: BuiltCall,
        source_path: &str,
    ) -> Result<Option<Value>, RpcError> {
        match self.dispatch(&call, source_path).await? {
            RpcOutcome::Success(Value::Null) | RpcOutcome::Missing => Ok(None),
            RpcOutcome::Success(value) => Ok(Some(value)),
            RpcOutcome::Error(code) if code.is_rate_limit() => Err(RpcError::RateLimited),
            RpcOutcome::Error(code) => Err(RpcError::Remote {
                method: call.method.name(),
                code,
            }),
        }
    }

    async fn dispatch(&self, call: &BuiltCall, source_path: &str) -> Result<RpcOutcome, RpcError> {
        // Local pacing: sleep out the recommended delay once rather than
        // bouncing off the upstream quota.
        if let Err(delay) = self.throttle.acquire() {
            debug!(delay_ms = delay.as_millis() as u64, "throttled before dispatch");
            tokio::time::sleep(delay).await;
            self.throttle.complete_one();
        }

        // One draw per attempt, after pacing, so retried attempts never
        // reuse an id.
        let request_id = self.counter.next_id();
        let url = build_url(
            call.method,
            &UrlContext {
                source_path,
                session_id: self.auth.session_id.as_deref(),
                build_label: self.auth.build_label.as_deref(),
                request_id: Some(request_id),
            },
        );
        let envelope = encode_rpc_request(call.method, &call.params);
        let body = build_request_body(&envelope, self.auth.csrf_token.as_deref());

        let request = HttpRequest::post(url)
            .with_header("content-type", FORM_CONTENT_TYPE)
            .with_auth(&self.auth.http_auth())
            .with_body(body)
            .with_timeout_ms(self.timeout_ms);

        debug!(method = call.method.name(), request_id, "dispatching rpc");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| RpcError::Transport {
                message: String::from(error.message()),
                retryable: error.retryable(),
            })?;

        match response.status {
            401 | 403 => {
                warn!(method = call.method.name(), "session cookies rejected");
                return Err(RpcError::AuthExpired);
            }
            429 => return Err(RpcError::RateLimited),
            status if !response.is_success() => return Err(RpcError::Status { status }),
            _ => {}
        }

        decode_response(&response.body, call.method)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use crate::schema::{self, Fields, Operation};
    use crate::testing::{client_with, success_body};

    fn list_notebooks_call() -> BuiltCall {
        schema::build(Operation::ListNotebooks, &Fields::new()).unwrap()
    }

    #[tokio::test]
    async fn call_posts_form_body_with_auth_and_counter() {
        let payload = json!([[]]);
        let (client, http) = client_with(vec![Ok(HttpResponse::ok(success_body(
            "wXbhsf", &payload,
        )))]);

        let value = client.call(list_notebooks_call(), "/").await.unwrap();
        assert_eq!(value, payload);

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.url.contains("rpcids=wXbhsf"));
        assert!(request.url.contains("_reqid=100000"));
        assert!(request.url.contains("f.sid=-42"));
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some(FORM_CONTENT_TYPE)
        );
        assert_eq!(
            request.headers.get("cookie").map(String::as_str),
            Some("SID=abc")
        );
        let body = request.body.as_deref().unwrap();
        assert!(body.starts_with("f.req="));
        assert!(body.contains("at=csrf-1"));
        assert!(body.ends_with('&'));
    }

    #[tokio::test]
    async fn consecutive_calls_advance_the_counter() {
        let payload = json!([[]]);
        let body = success_body("wXbhsf", &payload);
        let (client, http) = client_with(vec![
            Ok(HttpResponse::ok(body.clone())),
            Ok(HttpResponse::ok(body)),
        ]);

        client.call(list_notebooks_call(), "/").await.unwrap();
        client.call(list_notebooks_call(), "/").await.unwrap();

        let requests = http.requests();
        assert!(requests[0].url.contains("_reqid=100000"));
        assert!(requests[1].url.contains("_reqid=200000"));
    }

    #[tokio::test]
    async fn auth_failures_surface_as_auth_expired() {
        for status in [401u16, 403] {
            let (client, _http) = client_with(vec![Ok(HttpResponse {
                status,
                body: String::new(),
            })]);
            let err = client.call(list_notebooks_call(), "/").await.unwrap_err();
            assert_eq!(err, RpcError::AuthExpired);
        }
    }

    #[tokio::test]
    async fn http_429_maps_to_rate_limited() {
        let (client, _http) = client_with(vec![Ok(HttpResponse {
            status: 429,
            body: String::new(),
        })]);
        let err = client.call(list_notebooks_call(), "/").await.unwrap_err();
        assert_eq!(err, RpcError::RateLimited);
    }

    #[tokio::test]
    async fn sentinel_error_chunk_maps_to_rate_limited() {
        let chunk = json!([["er", "wXbhsf", ["USER_DISPLAYABLE_ERROR"]]]);
        let line = serde_json::to_string(&chunk).unwrap();
        let body = format!(")]}}'\n{}\n{}\n", line.len(), line);
        let (client, _http) = client_with(vec![Ok(HttpResponse::ok(body))]);

        let err = client.call(list_notebooks_call(), "/").await.unwrap_err();
        assert_eq!(err, RpcError::RateLimited);
    }

    #[tokio::test]
    async fn missing_chunk_is_not_found_unless_optional() {
        let empty = || Ok(HttpResponse::ok(")]}'\n"));
        let (client, _http) = client_with(vec![empty(), empty()]);

        let err = client.call(list_notebooks_call(), "/").await.unwrap_err();
        assert_eq!(err, RpcError::NotFound { method: "list_notebooks" });

        let value = client
            .call_optional(list_notebooks_call(), "/")
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn transport_errors_carry_retryability() {
        let (client, _http) = client_with(vec![Err(HttpError::new("connection failed"))]);
        let err = client.call(list_notebooks_call(), "/").await.unwrap_err();
        match err {
            RpcError::Transport { retryable, .. } => assert!(retryable),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
