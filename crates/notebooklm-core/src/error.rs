use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Parameter template failures. These are programmer errors: a call site
/// asked for a shape the registry cannot produce. Never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing required field `{field}` for {operation}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("no parameter template registered for {operation}")]
    UnsupportedOperation { operation: &'static str },
}

/// Error code carried by an upstream `er` chunk. Numeric and textual codes
/// both occur in the wild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCode {
    Number(i64),
    Text(String),
}

impl RemoteCode {
    /// The textual sentinel the backend uses for quota and rate-limit
    /// rejections, alongside plain HTTP 429.
    pub const RATE_LIMIT_SENTINEL: &'static str = "USER_DISPLAYABLE_ERROR";

    pub fn is_rate_limit(&self) -> bool {
        match self {
            Self::Number(code) => *code == 429,
            Self::Text(text) => text == Self::RATE_LIMIT_SENTINEL,
        }
    }
}

impl Display for RemoteCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(code) => write!(f, "{code}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Failure categories for a single RPC exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RpcError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The response did not look like a batchexecute response at all.
    /// Retrying cannot help; the upstream wire format has changed.
    #[error("malformed upstream response: {0}")]
    Protocol(String),

    /// The response carried no chunk for the requested method. Often
    /// transient; callers that expect it use `call_optional`.
    #[error("no response chunk for rpc `{method}`")]
    NotFound { method: &'static str },

    /// The upstream rejected the call for quota reasons, either with
    /// HTTP 429 or with the displayable-error sentinel.
    #[error("rate limited by upstream")]
    RateLimited,

    /// The upstream answered with an error chunk. The code is surfaced
    /// verbatim; this layer assigns it no meaning.
    #[error("upstream rejected rpc `{method}` with code {code}")]
    Remote {
        method: &'static str,
        code: RemoteCode,
    },

    /// Session cookies are no longer accepted. Re-authentication happens
    /// outside this crate; the error is only propagated.
    #[error("authentication expired: capture fresh session cookies and retry")]
    AuthExpired,

    #[error("unexpected http status {status}")]
    Status { status: u16 },

    #[error("transport failure: {message}")]
    Transport { message: String, retryable: bool },
}

impl RpcError {
    /// Whether a caller-side retry with backoff is reasonable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::RateLimited => true,
            Self::Transport { retryable, .. } => *retryable,
            Self::Status { status } => *status >= 500,
            Self::Schema(_) | Self::Protocol(_) | Self::Remote { .. } | Self::AuthExpired => false,
        }
    }
}
