mod artifact;
mod note;
mod notebook;
mod research;
mod source;

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use notebooklm_core::{AuthTokens, PollConfig, PollOutcome, ReqwestHttpClient, RpcClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let auth = AuthTokens::from_env()?;
    let client = RpcClient::new(Arc::new(ReqwestHttpClient::new()), auth);
    let wait = PollConfig {
        timeout: Duration::from_secs(cli.wait_secs),
        ..PollConfig::default()
    };

    match &cli.command {
        Command::Notebook(command) => notebook::run(&client, command, cli.pretty).await,
        Command::Source(command) => source::run(&client, command, &wait, cli.pretty).await,
        Command::Note(command) => note::run(&client, command, cli.pretty).await,
        Command::Artifact(command) => artifact::run(&client, command, &wait, cli.pretty).await,
        Command::Research(command) => research::run(&client, command, &wait, cli.pretty).await,
    }
}

/// Renders a wait outcome or converts it into the matching exit class.
fn finish<T: Serialize>(outcome: PollOutcome<T>, pretty: bool) -> Result<(), CliError> {
    match outcome {
        PollOutcome::Completed(value) => output::render(&value, pretty),
        PollOutcome::Failed(reason) => Err(CliError::Failed(reason)),
        PollOutcome::TimedOut | PollOutcome::Cancelled => Err(CliError::TimedOut),
    }
}

/// Resolves `-` to stdin, anything else to itself.
fn read_content(argument: &str) -> Result<String, CliError> {
    if argument != "-" {
        return Ok(String::from(argument));
    }
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Source ids for a generation call: the explicit selection, or every
/// source in the notebook when none was given.
async fn resolve_sources(
    client: &RpcClient,
    notebook_id: &str,
    selected: &[String],
) -> Result<Vec<String>, CliError> {
    if !selected.is_empty() {
        return Ok(selected.to_vec());
    }
    let details = client.notebooks().get(notebook_id).await?;
    if details.sources.is_empty() {
        return Err(CliError::Usage(format!(
            "notebook {notebook_id} has no sources to generate from"
        )));
    }
    Ok(details.sources.into_iter().map(|source| source.id).collect())
}
