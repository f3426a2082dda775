//! Web and Drive research runs: discovering sources before importing
//! them into a notebook.

use serde_json::{json, Value};
use tracing::debug;

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::poller::{self, PollConfig, PollOutcome, PollProgress};
use crate::schema::{self, Fields, Operation};
use crate::types::{ResearchScope, ResearchSource, ResearchTask, Source};

fn notebook_path(notebook_id: &str) -> String {
    format!("/notebook/{notebook_id}")
}

/// Ids handed back when a research run starts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResearchHandle {
    pub task_id: String,
    pub report_id: Option<String>,
}

impl ResearchHandle {
    fn from_payload(value: &Value) -> Result<Self, RpcError> {
        let task_id = value
            .get(0)
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| {
                RpcError::Protocol(String::from("research start carried no task id"))
            })?;
        let report_id = value.get(1).and_then(Value::as_str).map(String::from);
        Ok(Self { task_id, report_id })
    }
}

pub struct ResearchApi<'a> {
    client: &'a RpcClient,
}

impl<'a> ResearchApi<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Starts a fast research run over the given scope.
    pub async fn start_fast(
        &self,
        notebook_id: &str,
        query: &str,
        scope: ResearchScope,
    ) -> Result<ResearchHandle, RpcError> {
        let call = schema::build(
            Operation::StartFastResearch,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("query", query)
                .set("source_type", scope.code()),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        let handle = ResearchHandle::from_payload(&value)?;
        debug!(task_id = %handle.task_id, "fast research started");
        Ok(handle)
    }

    /// Starts a deep research run. Deep runs only search the web.
    pub async fn start_deep(
        &self,
        notebook_id: &str,
        query: &str,
    ) -> Result<ResearchHandle, RpcError> {
        let call = schema::build(
            Operation::StartDeepResearch,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("query", query)
                .set("source_type", ResearchScope::Web.code()),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        let handle = ResearchHandle::from_payload(&value)?;
        debug!(task_id = %handle.task_id, "deep research started");
        Ok(handle)
    }

    /// Latest research run in the notebook, or `None` when no run has
    /// ever been started.
    pub async fn poll(&self, notebook_id: &str) -> Result<Option<ResearchTask>, RpcError> {
        let call = schema::build(
            Operation::PollResearch,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self
            .client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(value.as_ref().and_then(ResearchTask::from_poll_payload))
    }

    /// Polls until the current research run completes or the budget
    /// runs out.
    pub async fn wait(
        &self,
        notebook_id: &str,
        config: &PollConfig,
    ) -> Result<PollOutcome<ResearchTask>, RpcError> {
        poller::wait(config, move || async move {
            let progress = match self.poll(notebook_id).await? {
                Some(task) if task.completed => PollProgress::Completed(task),
                Some(_) => PollProgress::InProgress,
                None => PollProgress::Pending,
            };
            Ok(progress)
        })
        .await
    }

    /// Imports discovered sources into the notebook and returns the
    /// created source entries.
    pub async fn import(
        &self,
        notebook_id: &str,
        task_id: &str,
        sources: &[ResearchSource],
    ) -> Result<Vec<Source>, RpcError> {
        let rows: Vec<Value> = sources
            .iter()
            .map(|source| {
                let url = source
                    .url
                    .as_deref()
                    .map_or(Value::Null, |u| Value::String(String::from(u)));
                json!([
                    null,
                    null,
                    [url, source.title],
                    null, null, null, null, null, null, null,
                    2
                ])
            })
            .collect();

        let call = schema::build(
            Operation::ImportResearch,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("task_id", task_id)
                .set("sources", Value::Array(rows)),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;

        let entries = value
            .get(0)
            .filter(|v| v.is_array())
            .unwrap_or(&value)
            .as_array()
            .map(|rows| rows.iter().filter_map(Source::from_entry).collect())
            .unwrap_or_default();
        Ok(entries)
    }
}
