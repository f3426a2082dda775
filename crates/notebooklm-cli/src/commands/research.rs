use notebooklm_core::{PollConfig, RpcClient};

use crate::cli::ResearchCommand;
use crate::error::CliError;
use crate::output;

use super::finish;

pub async fn run(
    client: &RpcClient,
    command: &ResearchCommand,
    wait: &PollConfig,
    pretty: bool,
) -> Result<(), CliError> {
    let api = client.research();
    match command {
        ResearchCommand::Fast {
            notebook_id,
            query,
            scope,
            wait: block,
        } => {
            let handle = api.start_fast(notebook_id, query, (*scope).into()).await?;
            if *block {
                let outcome = api.wait(notebook_id, wait).await?;
                finish(outcome, pretty)
            } else {
                output::render(&handle, pretty)
            }
        }
        ResearchCommand::Deep {
            notebook_id,
            query,
            wait: block,
        } => {
            let handle = api.start_deep(notebook_id, query).await?;
            if *block {
                let outcome = api.wait(notebook_id, wait).await?;
                finish(outcome, pretty)
            } else {
                output::render(&handle, pretty)
            }
        }
        ResearchCommand::Poll { notebook_id } => {
            let task = api.poll(notebook_id).await?;
            output::render(&task, pretty)
        }
        ResearchCommand::Import {
            notebook_id,
            task_id,
        } => {
            let task = api.poll(notebook_id).await?.ok_or_else(|| {
                CliError::Usage(format!("notebook {notebook_id} has no research run"))
            })?;
            if task.task_id != *task_id {
                return Err(CliError::Usage(format!(
                    "latest research run is {}, not {task_id}",
                    task.task_id
                )));
            }
            if !task.completed {
                return Err(CliError::Usage(format!(
                    "research run {task_id} has not completed yet"
                )));
            }
            let imported = api.import(notebook_id, task_id, &task.sources).await?;
            output::render(&imported, pretty)
        }
    }
}
