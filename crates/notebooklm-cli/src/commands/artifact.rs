use notebooklm_core::{
    AudioOptions, DataTableOptions, GenerationStatus, InfographicOptions, PollConfig,
    QuizOptions, ReportFormat, ReportOptions, RpcClient, SlideDeckOptions, VideoOptions,
};

use crate::cli::{ArtifactCommand, GenerateArgs};
use crate::error::CliError;
use crate::output;

use super::{finish, read_content, resolve_sources};

/// Renders the task handle, or blocks on completion when asked to.
async fn after_generate(
    client: &RpcClient,
    args: &GenerateArgs,
    status: GenerationStatus,
    wait: &PollConfig,
    pretty: bool,
) -> Result<(), CliError> {
    if let Some(error) = &status.error {
        return Err(CliError::Failed(error.clone()));
    }
    if args.wait {
        let outcome = client
            .artifacts()
            .wait_for_completion(&args.notebook_id, &status.task_id, wait)
            .await?;
        finish(outcome, pretty)
    } else {
        output::render(&status, pretty)
    }
}

pub async fn run(
    client: &RpcClient,
    command: &ArtifactCommand,
    wait: &PollConfig,
    pretty: bool,
) -> Result<(), CliError> {
    let api = client.artifacts();
    match command {
        ArtifactCommand::List { notebook_id } => {
            let artifacts = api.list(notebook_id).await?;
            output::render(&artifacts, pretty)
        }
        ArtifactCommand::Audio {
            common,
            format,
            length,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = AudioOptions {
                format: format.map(Into::into),
                length: length.map(Into::into),
                language: common.language.clone(),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_audio(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Video {
            common,
            format,
            style,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = VideoOptions {
                format: format.map(Into::into),
                style: style.map(Into::into),
                language: common.language.clone(),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_video(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Report {
            common,
            format,
            prompt,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let format = if prompt.is_some() {
                ReportFormat::Custom
            } else {
                (*format).into()
            };
            let options = ReportOptions {
                format,
                language: common.language.clone(),
                prompt: prompt.clone(),
            };
            let status = api
                .generate_report(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Quiz {
            common,
            quantity,
            difficulty,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = QuizOptions {
                quantity: quantity.map(Into::into),
                difficulty: difficulty.map(Into::into),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_quiz(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Flashcards {
            common,
            quantity,
            difficulty,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = QuizOptions {
                quantity: quantity.map(Into::into),
                difficulty: difficulty.map(Into::into),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_flashcards(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Infographic {
            common,
            orientation,
            detail,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = InfographicOptions {
                orientation: orientation.map(Into::into),
                detail: detail.map(Into::into),
                language: common.language.clone(),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_infographic(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::SlideDeck {
            common,
            format,
            length,
        } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = SlideDeckOptions {
                format: format.map(Into::into),
                length: length.map(Into::into),
                language: common.language.clone(),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_slide_deck(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::DataTable { common } => {
            let sources = resolve_sources(client, &common.notebook_id, &common.sources).await?;
            let options = DataTableOptions {
                language: common.language.clone(),
                instructions: common.instructions.clone(),
            };
            let status = api
                .generate_data_table(&common.notebook_id, &sources, &options)
                .await?;
            after_generate(client, common, status, wait, pretty).await
        }
        ArtifactCommand::Status {
            notebook_id,
            task_id,
        } => {
            let status = api.poll_status(notebook_id, task_id).await?;
            output::render(&status, pretty)
        }
        ArtifactCommand::Rename {
            notebook_id,
            artifact_id,
            title,
        } => {
            api.rename(notebook_id, artifact_id, title).await?;
            output::render_status("renamed", pretty)
        }
        ArtifactCommand::Delete {
            notebook_id,
            artifact_id,
        } => {
            api.delete(notebook_id, artifact_id).await?;
            output::render_status("deleted", pretty)
        }
        ArtifactCommand::Export {
            notebook_id,
            artifact_id,
            content,
            title,
            to,
        } => {
            let content = read_content(content)?;
            let result = api
                .export(notebook_id, artifact_id, &content, title, (*to).into())
                .await?;
            output::render(&result, pretty)
        }
        ArtifactCommand::SuggestReports {
            notebook_id,
            sources,
        } => {
            let sources = resolve_sources(client, notebook_id, sources).await?;
            let suggestions = api.suggest_reports(notebook_id, &sources).await?;
            output::render(&suggestions, pretty)
        }
        ArtifactCommand::MindMap {
            notebook_id,
            sources,
        } => {
            let sources = resolve_sources(client, notebook_id, sources).await?;
            let map = api.generate_mind_map(notebook_id, &sources).await?;
            output::render(&map, pretty)
        }
    }
}
