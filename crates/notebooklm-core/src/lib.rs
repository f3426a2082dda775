//! Client for NotebookLM's private batchexecute RPC surface.
//!
//! The upstream exposes no documented API; every operation rides a
//! single POST endpoint carrying double-encoded positional JSON arrays.
//! This crate pins those shapes declaratively and layers typed
//! operation families on top.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session cookies and tokens, sourced from the environment |
//! | [`method`] | RPC method tokens and verification state |
//! | [`schema`] | Declarative parameter templates per operation |
//! | [`params`] | Wrapping helpers for the positional array dialect |
//! | [`encoder`] | Envelope, form body, and URL construction |
//! | [`decoder`] | Streamed response parsing and chunk selection |
//! | [`counter`] | Process-wide request id sequence |
//! | [`client`] | The paced, counted, decoded RPC invoker |
//! | [`poller`] | Waiting loop for server-side long-running jobs |
//! | [`throttling`] | Local pacing under the upstream session quota |
//! | [`backoff`] | Interval schedules for repeated waits |
//! | [`types`] | Domain records and studio option code tables |
//! | [`notebooks`] | Notebook lifecycle operations |
//! | [`notes`] | User-written notes and stored mind maps |
//! | [`sources`] | Source management and freshness |
//! | [`artifacts`] | Studio generation, polling, and management |
//! | [`research`] | Web and Drive research runs |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use notebooklm_core::auth::AuthTokens;
//! use notebooklm_core::client::RpcClient;
//! use notebooklm_core::http_client::ReqwestHttpClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = AuthTokens::from_env()?;
//! let client = RpcClient::new(Arc::new(ReqwestHttpClient::new()), auth);
//! for notebook in client.notebooks().list().await? {
//!     println!("{} {}", notebook.id, notebook.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod auth;
pub mod backoff;
pub mod client;
pub mod counter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod http_client;
pub mod method;
pub mod notebooks;
pub mod notes;
pub mod params;
pub mod poller;
pub mod research;
pub mod schema;
pub mod sources;
pub mod throttling;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use artifacts::{
    ArtifactsApi, AudioOptions, DataTableOptions, InfographicOptions, QuizOptions, ReportOptions,
    SlideDeckOptions, VideoOptions,
};
pub use auth::{AuthError, AuthTokens};
pub use backoff::Backoff;
pub use client::RpcClient;
pub use counter::RequestCounter;
pub use decoder::RpcOutcome;
pub use error::{RemoteCode, RpcError, SchemaError};
pub use http_client::{HttpClient, ReqwestHttpClient};
pub use method::RpcMethod;
pub use notebooks::{NotebookDetails, NotebooksApi};
pub use notes::NotesApi;
pub use poller::{PollConfig, PollOutcome, PollProgress};
pub use research::{ResearchApi, ResearchHandle};
pub use schema::{BuiltCall, Fields, Operation};
pub use sources::SourcesApi;
pub use throttling::{ThrottlePolicy, ThrottlingQueue};
pub use types::{
    Artifact, ArtifactKind, AudioFormat, AudioLength, DriveMimeType, ExportFormat,
    GenerationState, GenerationStatus, InfographicDetail, InfographicOrientation, Note, Notebook,
    NotebookDescription, QuizDifficulty, QuizQuantity, ReportFormat, ReportSuggestion,
    ResearchScope, ResearchSource, ResearchTask, SlideDeckFormat, SlideDeckLength, Source,
    SourceGuide, SourceKind, SuggestedTopic, VideoFormat, VideoStyle,
};
