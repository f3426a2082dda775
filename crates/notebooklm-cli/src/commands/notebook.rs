use notebooklm_core::RpcClient;

use crate::cli::NotebookCommand;
use crate::error::CliError;
use crate::output;

pub async fn run(
    client: &RpcClient,
    command: &NotebookCommand,
    pretty: bool,
) -> Result<(), CliError> {
    let api = client.notebooks();
    match command {
        NotebookCommand::List => {
            let notebooks = api.list().await?;
            output::render(&notebooks, pretty)
        }
        NotebookCommand::Create { title } => {
            let notebook = api.create(title).await?;
            output::render(&notebook, pretty)
        }
        NotebookCommand::Get { notebook_id } => {
            let details = api.get(notebook_id).await?;
            output::render(&details, pretty)
        }
        NotebookCommand::Rename { notebook_id, title } => {
            api.rename(notebook_id, title).await?;
            output::render_status("renamed", pretty)
        }
        NotebookCommand::Delete { notebook_id } => {
            api.delete(notebook_id).await?;
            output::render_status("deleted", pretty)
        }
        NotebookCommand::Describe { notebook_id } => {
            let description = api.describe(notebook_id).await?;
            output::render(&description, pretty)
        }
        NotebookCommand::Featured {
            page_size,
            page_token,
        } => {
            let notebooks = api.list_featured(*page_size, page_token.as_deref()).await?;
            output::render(&notebooks, pretty)
        }
    }
}
