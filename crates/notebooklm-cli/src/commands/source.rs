use notebooklm_core::{PollConfig, RpcClient};

use crate::cli::SourceCommand;
use crate::error::CliError;
use crate::output;

use super::{finish, read_content};

pub async fn run(
    client: &RpcClient,
    command: &SourceCommand,
    wait: &PollConfig,
    pretty: bool,
) -> Result<(), CliError> {
    let api = client.sources();
    match command {
        SourceCommand::AddText {
            notebook_id,
            title,
            content,
        } => {
            let content = read_content(content)?;
            let source = api.add_text(notebook_id, title, &content).await?;
            output::render(&source, pretty)
        }
        SourceCommand::AddUrl { notebook_id, url } => {
            let source = api.add_url(notebook_id, url).await?;
            output::render(&source, pretty)
        }
        SourceCommand::AddYoutube { notebook_id, url } => {
            let source = api.add_youtube(notebook_id, url).await?;
            output::render(&source, pretty)
        }
        SourceCommand::AddDrive {
            notebook_id,
            file_id,
            mime,
            title,
        } => {
            let source = api
                .add_drive(notebook_id, file_id, (*mime).into(), title)
                .await?;
            output::render(&source, pretty)
        }
        SourceCommand::Rename {
            notebook_id,
            source_id,
            title,
        } => {
            api.rename(notebook_id, source_id, title).await?;
            output::render_status("renamed", pretty)
        }
        SourceCommand::Delete {
            notebook_id,
            source_id,
        } => {
            api.delete(notebook_id, source_id).await?;
            output::render_status("deleted", pretty)
        }
        SourceCommand::Refresh {
            notebook_id,
            source_id,
            wait: block,
        } => {
            api.refresh(notebook_id, source_id).await?;
            if *block {
                let outcome = api.wait_until_fresh(notebook_id, source_id, wait).await?;
                finish(outcome.map(|()| "fresh"), pretty)
            } else {
                output::render_status("refresh requested", pretty)
            }
        }
        SourceCommand::Guide {
            notebook_id,
            source_id,
        } => {
            let guide = api.guide(notebook_id, source_id).await?;
            output::render(&guide, pretty)
        }
    }
}
