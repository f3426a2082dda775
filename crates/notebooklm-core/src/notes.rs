//! User-written notes, distinct from AI-generated studio artifacts.
//!
//! Notes and mind maps share one backing store upstream; the listing
//! call returns both and the content shape tells them apart.

use serde_json::Value;
use tracing::debug;

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::schema::{self, Fields, Operation};
use crate::types::Note;

fn notebook_path(notebook_id: &str) -> String {
    format!("/notebook/{notebook_id}")
}

pub struct NotesApi<'a> {
    client: &'a RpcClient,
}

impl<'a> NotesApi<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Lists text notes in a notebook, mind maps excluded.
    pub async fn list(&self, notebook_id: &str) -> Result<Vec<Note>, RpcError> {
        let notes = self
            .fetch_entries(notebook_id)
            .await?
            .into_iter()
            .filter(|note| !note.is_mind_map())
            .collect();
        Ok(notes)
    }

    /// Fetches one note by id, or `None` when the notebook has no such
    /// note.
    pub async fn get(&self, notebook_id: &str, note_id: &str) -> Result<Option<Note>, RpcError> {
        let note = self
            .fetch_entries(notebook_id)
            .await?
            .into_iter()
            .find(|note| note.id == note_id);
        Ok(note)
    }

    /// Creates a note and sets its title and content. The create call
    /// alone yields an empty placeholder, so an update follows it.
    pub async fn create(
        &self,
        notebook_id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, RpcError> {
        let call = schema::build(
            Operation::CreateNote,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;

        // The new id comes back either wrapped or bare.
        let note_id = value
            .get(0)
            .and_then(|first| {
                first
                    .get(0)
                    .and_then(Value::as_str)
                    .or_else(|| first.as_str())
            })
            .map(String::from)
            .ok_or(RpcError::Protocol(String::from(
                "create note response carried no note id",
            )))?;

        self.update(notebook_id, &note_id, content, title).await?;
        debug!(notebook_id, note_id = %note_id, "created note");

        Ok(Note {
            id: note_id,
            title: String::from(title),
            content: String::from(content),
        })
    }

    /// Replaces a note's content and title.
    pub async fn update(
        &self,
        notebook_id: &str,
        note_id: &str,
        content: &str,
        title: &str,
    ) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::UpdateNote,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("note_id", note_id)
                .set("content", content)
                .set("title", title),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    /// Deletes a note or mind map. The upstream clears the entry rather
    /// than removing it; cleared entries drop out of listings.
    pub async fn delete(&self, notebook_id: &str, note_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::DeleteNote,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("note_id", note_id),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    /// Raw mind map entries stored alongside the notes.
    pub async fn list_mind_maps(&self, notebook_id: &str) -> Result<Vec<Note>, RpcError> {
        let maps = self
            .fetch_entries(notebook_id)
            .await?
            .into_iter()
            .filter(Note::is_mind_map)
            .collect();
        Ok(maps)
    }

    async fn fetch_entries(&self, notebook_id: &str) -> Result<Vec<Note>, RpcError> {
        let call = schema::build(
            Operation::GetNotes,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self
            .client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;

        let notes = value
            .as_ref()
            .and_then(|v| v.get(0))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Note::from_entry).collect())
            .unwrap_or_default();
        Ok(notes)
    }
}
