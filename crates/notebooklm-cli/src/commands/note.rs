use notebooklm_core::RpcClient;

use super::read_content;
use crate::cli::NoteCommand;
use crate::error::CliError;
use crate::output;

pub async fn run(client: &RpcClient, command: &NoteCommand, pretty: bool) -> Result<(), CliError> {
    let api = client.notes();
    match command {
        NoteCommand::List { notebook_id } => {
            let notes = api.list(notebook_id).await?;
            output::render(&notes, pretty)
        }
        NoteCommand::Get {
            notebook_id,
            note_id,
        } => match api.get(notebook_id, note_id).await? {
            Some(note) => output::render(&note, pretty),
            None => Err(CliError::Usage(format!(
                "notebook {notebook_id} has no note {note_id}"
            ))),
        },
        NoteCommand::Create {
            notebook_id,
            title,
            content,
        } => {
            let content = read_content(content)?;
            let note = api.create(notebook_id, title, &content).await?;
            output::render(&note, pretty)
        }
        NoteCommand::Update {
            notebook_id,
            note_id,
            content,
            title,
        } => {
            let content = read_content(content)?;
            api.update(notebook_id, note_id, &content, title).await?;
            output::render_status("updated", pretty)
        }
        NoteCommand::Delete {
            notebook_id,
            note_id,
        } => {
            api.delete(notebook_id, note_id).await?;
            output::render_status("deleted", pretty)
        }
    }
}
