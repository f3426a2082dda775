//! Source management: attaching material to a notebook and keeping it
//! current.

use serde_json::Value;
use tracing::debug;

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::poller::{self, PollConfig, PollOutcome, PollProgress};
use crate::schema::{self, Fields, Operation};
use crate::types::{DriveMimeType, Source, SourceGuide, SourceKind};

fn notebook_path(notebook_id: &str) -> String {
    format!("/notebook/{notebook_id}")
}

pub struct SourcesApi<'a> {
    client: &'a RpcClient,
}

impl<'a> SourcesApi<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    async fn add(
        &self,
        notebook_id: &str,
        call: schema::BuiltCall,
        fallback_kind: SourceKind,
    ) -> Result<Source, RpcError> {
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        let source = Source::from_entry(&value)
            .map(|mut source| {
                if source.url.is_none() && source.kind == SourceKind::Text {
                    source.kind = fallback_kind;
                }
                source
            })
            .ok_or_else(|| {
                RpcError::Protocol(String::from("add-source response carried no source entry"))
            })?;
        debug!(source_id = %source.id, "added source");
        Ok(source)
    }

    pub async fn add_text(
        &self,
        notebook_id: &str,
        title: &str,
        content: &str,
    ) -> Result<Source, RpcError> {
        let call = schema::build(
            Operation::AddTextSource,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("title", title)
                .set("content", content),
        )?;
        self.add(notebook_id, call, SourceKind::Text).await
    }

    pub async fn add_url(&self, notebook_id: &str, url: &str) -> Result<Source, RpcError> {
        let call = schema::build(
            Operation::AddUrlSource,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("url", url),
        )?;
        self.add(notebook_id, call, SourceKind::Url).await
    }

    pub async fn add_youtube(&self, notebook_id: &str, url: &str) -> Result<Source, RpcError> {
        let call = schema::build(
            Operation::AddYoutubeSource,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("url", url),
        )?;
        self.add(notebook_id, call, SourceKind::Youtube).await
    }

    pub async fn add_drive(
        &self,
        notebook_id: &str,
        file_id: &str,
        mime_type: DriveMimeType,
        title: &str,
    ) -> Result<Source, RpcError> {
        let call = schema::build(
            Operation::AddDriveSource,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("file_id", file_id)
                .set("mime_type", mime_type.as_str())
                .set("title", title),
        )?;
        self.add(notebook_id, call, SourceKind::Drive).await
    }

    /// Registers an upcoming file upload and returns the source id the
    /// upload must be associated with.
    pub async fn register_file(
        &self,
        notebook_id: &str,
        filename: &str,
    ) -> Result<String, RpcError> {
        let call = schema::build(
            Operation::RegisterFileSource,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("filename", filename),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        value
            .get(0)
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| {
                RpcError::Protocol(String::from(
                    "file registration response carried no source id",
                ))
            })
    }

    pub async fn delete(&self, notebook_id: &str, source_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::DeleteSource,
            &Fields::new().set("source_id", source_id),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    pub async fn rename(
        &self,
        notebook_id: &str,
        source_id: &str,
        title: &str,
    ) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::RenameSource,
            &Fields::new()
                .set("source_id", source_id)
                .set("title", title),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    /// Asks the upstream to re-fetch a URL-backed source.
    pub async fn refresh(&self, notebook_id: &str, source_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::RefreshSource,
            &Fields::new().set("source_id", source_id),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    /// True when the stored copy of the source is current.
    pub async fn check_freshness(
        &self,
        notebook_id: &str,
        source_id: &str,
    ) -> Result<bool, RpcError> {
        let call = schema::build(
            Operation::CheckSourceFreshness,
            &Fields::new().set("source_id", source_id),
        )?;
        let value = self
            .client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        let fresh = match value {
            Some(Value::Bool(flag)) => flag,
            Some(value) => value.get(0).and_then(Value::as_bool).unwrap_or(false),
            None => false,
        };
        Ok(fresh)
    }

    /// Polls freshness until the source settles or the budget runs out.
    pub async fn wait_until_fresh(
        &self,
        notebook_id: &str,
        source_id: &str,
        config: &PollConfig,
    ) -> Result<PollOutcome<()>, RpcError> {
        poller::wait(config, move || async move {
            let fresh = self.check_freshness(notebook_id, source_id).await?;
            Ok(if fresh {
                PollProgress::Completed(())
            } else {
                PollProgress::InProgress
            })
        })
        .await
    }

    /// AI-generated summary and keywords for a single source.
    pub async fn guide(&self, notebook_id: &str, source_id: &str) -> Result<SourceGuide, RpcError> {
        let call = schema::build(
            Operation::GetSourceGuide,
            &Fields::new().set("source_id", source_id),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        Ok(SourceGuide::from_payload(&value))
    }
}
