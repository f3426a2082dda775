//! Notebook lifecycle operations.

use serde_json::Value;
use tracing::debug;

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::schema::{self, Fields, Operation};
use crate::types::{Notebook, NotebookDescription, Source};

fn notebook_path(notebook_id: &str) -> String {
    format!("/notebook/{notebook_id}")
}

/// A notebook together with its attached sources, as returned by a
/// full fetch.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NotebookDetails {
    pub notebook: Notebook,
    pub sources: Vec<Source>,
}

pub struct NotebooksApi<'a> {
    client: &'a RpcClient,
}

impl<'a> NotebooksApi<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Lists notebooks visible on the home page, owned and shared.
    pub async fn list(&self) -> Result<Vec<Notebook>, RpcError> {
        let call = schema::build(Operation::ListNotebooks, &Fields::new())?;
        let value = self.client.call(call, "/").await?;
        let notebooks = value
            .get(0)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Notebook::from_entry).collect())
            .unwrap_or_default();
        Ok(notebooks)
    }

    pub async fn create(&self, title: &str) -> Result<Notebook, RpcError> {
        let call = schema::build(Operation::CreateNotebook, &Fields::new().set("title", title))?;
        let value = self.client.call(call, "/").await?;
        let notebook = Notebook::from_entry(&value);
        debug!(notebook_id = %notebook.id, "created notebook");
        Ok(notebook)
    }

    /// Fetches one notebook with its source list.
    pub async fn get(&self, notebook_id: &str) -> Result<NotebookDetails, RpcError> {
        let call = schema::build(
            Operation::GetNotebook,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;

        let info = value.get(0).cloned().unwrap_or(Value::Null);
        let notebook = Notebook::from_entry(&info);
        let sources = info
            .get(1)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Source::from_entry).collect())
            .unwrap_or_default();
        Ok(NotebookDetails { notebook, sources })
    }

    pub async fn rename(&self, notebook_id: &str, title: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::RenameNotebook,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("title", title),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, notebook_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::DeleteNotebook,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        self.client.call_optional(call, "/").await?;
        Ok(())
    }

    /// Asks for the AI summary plus suggested topics for a notebook.
    pub async fn describe(&self, notebook_id: &str) -> Result<NotebookDescription, RpcError> {
        let call = schema::build(
            Operation::Summarize,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        Ok(NotebookDescription::from_payload(&value))
    }

    /// Lists curated notebooks from the featured gallery.
    pub async fn list_featured(
        &self,
        page_size: i64,
        page_token: Option<&str>,
    ) -> Result<Vec<Notebook>, RpcError> {
        let token = page_token.map_or(Value::Null, |t| Value::String(String::from(t)));
        let call = schema::build(
            Operation::ListFeaturedProjects,
            &Fields::new()
                .set("page_size", page_size)
                .set("page_token", token),
        )?;
        let value = self.client.call(call, "/").await?;
        let notebooks = value
            .get(0)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Notebook::from_entry).collect())
            .unwrap_or_default();
        Ok(notebooks)
    }

    pub async fn remove_recently_viewed(&self, notebook_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::RemoveRecentlyViewed,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        self.client.call_optional(call, "/").await?;
        Ok(())
    }

    /// Raw usage analytics for a notebook. The payload layout varies by
    /// frontend build, so it is passed through undecoded.
    pub async fn analytics(&self, notebook_id: &str) -> Result<Option<Value>, RpcError> {
        let call = schema::build(
            Operation::ProjectAnalytics,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await
    }

    /// Updates sharing settings; `settings` is the positional settings
    /// array expected by the upstream.
    pub async fn share(&self, notebook_id: &str, settings: Value) -> Result<Option<Value>, RpcError> {
        let call = schema::build(
            Operation::ShareProject,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("settings", settings),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await
    }
}
