use thiserror::Error;

use notebooklm_core::{AuthError, RpcError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("operation did not finish within the wait budget")]
    TimedOut,

    #[error("remote job failed: {0}")]
    Failed(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// 2: the request never left the machine (schema or usage).
    /// 3: the upstream answered and refused.
    /// 4: the wait budget ran out with the job still running.
    /// 10: transport, credentials, or local I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Rpc(RpcError::Schema(_)) => 2,
            Self::Failed(_)
            | Self::Rpc(
                RpcError::Remote { .. }
                | RpcError::NotFound { .. }
                | RpcError::RateLimited
                | RpcError::Protocol(_),
            ) => 3,
            Self::TimedOut => 4,
            Self::Auth(_)
            | Self::Rpc(
                RpcError::AuthExpired | RpcError::Transport { .. } | RpcError::Status { .. },
            )
            | Self::Serialization(_)
            | Self::Io(_) => 10,
        }
    }
}
