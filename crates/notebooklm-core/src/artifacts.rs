//! Studio artifact operations: generation, polling, and management.
//!
//! Generation is asynchronous upstream. A generate call returns a task
//! id almost immediately; the artifact then moves through the studio
//! panel's statuses and is observed by re-listing.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::RpcClient;
use crate::error::RpcError;
use crate::params::{wrap_each_double, wrap_each_single};
use crate::poller::{self, PollConfig, PollOutcome, PollProgress};
use crate::schema::{self, Fields, Operation};
use crate::types::{
    Artifact, AudioFormat, AudioLength, ExportFormat, GenerationState, GenerationStatus,
    InfographicDetail, InfographicOrientation, QuizDifficulty, QuizQuantity, ReportFormat,
    ReportSuggestion, SlideDeckFormat, SlideDeckLength, VideoFormat, VideoStyle,
};

fn notebook_path(notebook_id: &str) -> String {
    format!("/notebook/{notebook_id}")
}

fn or_null(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(String::from(v)))
}

#[derive(Debug, Clone, Default)]
pub struct AudioOptions {
    pub format: Option<AudioFormat>,
    pub length: Option<AudioLength>,
    pub language: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    pub format: Option<VideoFormat>,
    pub style: Option<VideoStyle>,
    pub language: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub language: Option<String>,
    /// Overrides the preset prompt; required reading for custom reports.
    pub prompt: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::BriefingDoc,
            language: None,
            prompt: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizOptions {
    pub quantity: Option<QuizQuantity>,
    pub difficulty: Option<QuizDifficulty>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InfographicOptions {
    pub orientation: Option<InfographicOrientation>,
    pub detail: Option<InfographicDetail>,
    pub language: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SlideDeckOptions {
    pub format: Option<SlideDeckFormat>,
    pub length: Option<SlideDeckLength>,
    pub language: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DataTableOptions {
    pub language: Option<String>,
    pub instructions: Option<String>,
}

pub struct ArtifactsApi<'a> {
    client: &'a RpcClient,
}

impl<'a> ArtifactsApi<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Lists studio artifacts, suggested placeholders excluded.
    pub async fn list(&self, notebook_id: &str) -> Result<Vec<Artifact>, RpcError> {
        let call = schema::build(
            Operation::ListArtifacts,
            &Fields::new().set("notebook_id", notebook_id),
        )?;
        let value = self
            .client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        let artifacts = value
            .as_ref()
            .and_then(|v| v.get(0))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Artifact::from_entry).collect())
            .unwrap_or_default();
        Ok(artifacts)
    }

    /// Dispatches a generation call. A quota rejection is a failed
    /// generation, not a client error: the task never started and there
    /// is nothing to retry server-side.
    async fn call_generate(
        &self,
        notebook_id: &str,
        call: schema::BuiltCall,
    ) -> Result<GenerationStatus, RpcError> {
        match self.client.call(call, &notebook_path(notebook_id)).await {
            Ok(value) => Ok(GenerationStatus::from_create_result(&value)),
            Err(RpcError::RateLimited) => {
                warn!(notebook_id, "generation refused by upstream quota");
                Ok(GenerationStatus::failed(
                    "generation refused: upstream quota exhausted",
                ))
            }
            Err(error) => Err(error),
        }
    }

    pub async fn generate_audio(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &AudioOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateAudio,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("source_ids_double", wrap_each_single(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set("length", options.length.unwrap_or(AudioLength::Default).code())
                .set("language", options.language.as_deref().unwrap_or("en"))
                .set(
                    "format",
                    options.format.unwrap_or(AudioFormat::DeepDive).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_video(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &VideoOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateVideo,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("source_ids_double", wrap_each_single(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set("language", options.language.as_deref().unwrap_or("en"))
                .set(
                    "format",
                    options.format.unwrap_or(VideoFormat::Explainer).code(),
                )
                .set(
                    "style",
                    options.style.unwrap_or(VideoStyle::AutoSelect).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_report(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &ReportOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let format = options.format;
        let prompt = options
            .prompt
            .as_deref()
            .unwrap_or_else(|| format.default_prompt());
        let call = schema::build(
            Operation::GenerateReport,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("source_ids_double", wrap_each_single(source_ids))
                .set("title", format.title())
                .set("description", format.description())
                .set("language", options.language.as_deref().unwrap_or("en"))
                .set("prompt", prompt),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_quiz(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &QuizOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateQuiz,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set(
                    "quantity",
                    options.quantity.unwrap_or(QuizQuantity::Standard).code(),
                )
                .set(
                    "difficulty",
                    options.difficulty.unwrap_or(QuizDifficulty::Medium).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_flashcards(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &QuizOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateFlashcards,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set(
                    "quantity",
                    options.quantity.unwrap_or(QuizQuantity::Standard).code(),
                )
                .set(
                    "difficulty",
                    options.difficulty.unwrap_or(QuizDifficulty::Medium).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_infographic(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &InfographicOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateInfographic,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set("language", options.language.as_deref().unwrap_or("en"))
                .set(
                    "orientation",
                    options
                        .orientation
                        .unwrap_or(InfographicOrientation::Landscape)
                        .code(),
                )
                .set(
                    "detail",
                    options.detail.unwrap_or(InfographicDetail::Standard).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_slide_deck(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &SlideDeckOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateSlideDeck,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set("language", options.language.as_deref().unwrap_or("en"))
                .set(
                    "format",
                    options
                        .format
                        .unwrap_or(SlideDeckFormat::DetailedDeck)
                        .code(),
                )
                .set(
                    "length",
                    options.length.unwrap_or(SlideDeckLength::Default).code(),
                ),
        )?;
        self.call_generate(notebook_id, call).await
    }

    pub async fn generate_data_table(
        &self,
        notebook_id: &str,
        source_ids: &[String],
        options: &DataTableOptions,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::GenerateDataTable,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("instructions", or_null(options.instructions.as_deref()))
                .set("language", options.language.as_deref().unwrap_or("en")),
        )?;
        self.call_generate(notebook_id, call).await
    }

    /// One status observation for a generation task. The dedicated poll
    /// endpoint answers null for some content types; the artifact list
    /// is the fallback source of truth.
    pub async fn poll_status(
        &self,
        notebook_id: &str,
        task_id: &str,
    ) -> Result<GenerationStatus, RpcError> {
        let call = schema::build(
            Operation::PollStudio,
            &Fields::new()
                .set("notebook_id", notebook_id)
                .set("task_id", task_id),
        )?;
        if let Some(value) = self
            .client
            .call_optional(call, &notebook_path(notebook_id))
            .await?
        {
            let status = GenerationStatus::from_create_result(&value);
            if status.state != GenerationState::Failed {
                return Ok(status);
            }
        }

        debug!(task_id, "direct poll empty, scanning artifact list");
        let artifacts = self.list(notebook_id).await?;
        let state = match artifacts.iter().find(|artifact| artifact.id == task_id) {
            Some(artifact) if artifact.is_in_progress() => GenerationState::InProgress,
            Some(_) => GenerationState::Completed,
            None => GenerationState::Pending,
        };
        Ok(GenerationStatus::new(task_id, state))
    }

    /// Polls the artifact list until `task_id` completes, fails, or the
    /// budget runs out.
    pub async fn wait_for_completion(
        &self,
        notebook_id: &str,
        task_id: &str,
        config: &PollConfig,
    ) -> Result<PollOutcome<Artifact>, RpcError> {
        poller::wait(config, move || async move {
            let artifacts = self.list(notebook_id).await?;
            let progress = match artifacts.into_iter().find(|a| a.id == task_id) {
                None => PollProgress::Pending,
                Some(artifact) if artifact.is_completed() => PollProgress::Completed(artifact),
                Some(artifact) if artifact.is_in_progress() => PollProgress::InProgress,
                Some(artifact) if artifact.status_code == 0 => PollProgress::Pending,
                Some(artifact) => PollProgress::Failed(format!(
                    "artifact entered status {}",
                    artifact.status_code
                )),
            };
            Ok(progress)
        })
        .await
    }

    pub async fn rename(
        &self,
        notebook_id: &str,
        artifact_id: &str,
        title: &str,
    ) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::RenameArtifact,
            &Fields::new()
                .set("artifact_id", artifact_id)
                .set("title", title),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, notebook_id: &str, artifact_id: &str) -> Result<(), RpcError> {
        let call = schema::build(
            Operation::DeleteArtifact,
            &Fields::new().set("artifact_id", artifact_id),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await?;
        Ok(())
    }

    /// Exports artifact content to Docs or Sheets; the payload carries
    /// the destination document when the upstream returns one.
    pub async fn export(
        &self,
        notebook_id: &str,
        artifact_id: &str,
        content: &str,
        title: &str,
        format: ExportFormat,
    ) -> Result<Option<Value>, RpcError> {
        let call = schema::build(
            Operation::ExportArtifact,
            &Fields::new()
                .set("artifact_id", artifact_id)
                .set("content", content)
                .set("title", title)
                .set("export_type", format.code()),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await
    }

    /// Asks for report formats tailored to the given sources.
    pub async fn suggest_reports(
        &self,
        notebook_id: &str,
        source_ids: &[String],
    ) -> Result<Vec<ReportSuggestion>, RpcError> {
        let call = schema::build(
            Operation::ActOnSources,
            &Fields::new()
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("action", "suggested_report_formats"),
        )?;
        let value = self.client.call(call, &notebook_path(notebook_id)).await?;
        let rows = value
            .get(0)
            .filter(|v| v.is_array())
            .cloned()
            .unwrap_or(value);
        Ok(ReportSuggestion::from_payload(&rows))
    }

    /// Generates an interactive mind map over the given sources. The
    /// node graph layout is frontend-defined, so it is passed through
    /// undecoded.
    pub async fn generate_mind_map(
        &self,
        notebook_id: &str,
        source_ids: &[String],
    ) -> Result<Option<Value>, RpcError> {
        let call = schema::build(
            Operation::ActOnSources,
            &Fields::new()
                .set("source_ids_triple", wrap_each_double(source_ids))
                .set("action", "interactive_mindmap"),
        )?;
        self.client
            .call_optional(call, &notebook_path(notebook_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::http_client::HttpResponse;
    use crate::testing::{client_with, ok_response, success_body};
    use crate::types::ArtifactKind;

    fn sources(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| String::from(*id)).collect()
    }

    fn instant_config() -> PollConfig {
        PollConfig {
            initial_interval: Duration::ZERO,
            max_interval: Duration::ZERO,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn list_parses_artifact_entries() {
        let payload = json!([[
            ["art_1", "Deep Dive", 1, null, 3],
            ["art_2", "Quiz", 4, null, 1, null, null, null, null, [null, [2]]]
        ]]);
        let (client, http) = client_with(vec![ok_response("gArtLc", &payload)]);

        let artifacts = client.artifacts().list("nb_1").await.unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].kind, ArtifactKind::Audio);
        assert!(artifacts[0].is_completed());
        assert!(artifacts[1].is_in_progress());
        assert!(artifacts[1].is_quiz());

        let body = http.requests()[0].body.clone().unwrap();
        assert!(body.contains("ARTIFACT_STATUS_SUGGESTED"));
    }

    #[tokio::test]
    async fn generate_audio_returns_the_task_handle() {
        let payload = json!([["task_9", null, null, null, 1]]);
        let (client, http) = client_with(vec![ok_response("R7cb6c", &payload)]);

        let status = client
            .artifacts()
            .generate_audio("nb_1", &sources(&["s1", "s2"]), &AudioOptions::default())
            .await
            .unwrap();
        assert_eq!(status.task_id, "task_9");
        assert_eq!(status.state, GenerationState::InProgress);

        let request = &http.requests()[0];
        assert!(request.url.contains("rpcids=R7cb6c"));
        assert!(request.url.contains("source-path=%2Fnotebook%2Fnb_1"));
    }

    #[tokio::test]
    async fn quota_rejection_is_a_failed_generation() {
        let chunk = json!([["er", "R7cb6c", ["USER_DISPLAYABLE_ERROR"]]]);
        let line = serde_json::to_string(&chunk).unwrap();
        let body = format!(")]}}'\n{}\n{}\n", line.len(), line);
        let (client, _http) = client_with(vec![Ok(HttpResponse::ok(body))]);

        let status = client
            .artifacts()
            .generate_video("nb_1", &sources(&["s1"]), &VideoOptions::default())
            .await
            .unwrap();
        assert_eq!(status.state, GenerationState::Failed);
        assert!(status.error.unwrap().contains("quota"));
    }

    #[tokio::test]
    async fn custom_report_prompt_overrides_the_preset() {
        let payload = json!([["task_5", null, null, null, 1]]);
        let (client, http) = client_with(vec![ok_response("R7cb6c", &payload)]);

        let options = ReportOptions {
            format: ReportFormat::Custom,
            language: None,
            prompt: Some(String::from("Summarize only the disagreements.")),
        };
        client
            .artifacts()
            .generate_report("nb_1", &sources(&["s1"]), &options)
            .await
            .unwrap();

        let body = http.requests()[0].body.clone().unwrap();
        let decoded = urlencoding::decode(&body).unwrap().into_owned();
        assert!(decoded.contains("Summarize only the disagreements."));
        assert!(decoded.contains("Custom Report"));
    }

    #[tokio::test]
    async fn poll_status_falls_back_to_the_artifact_list() {
        // Direct poll answers nothing; the listing carries the artifact
        // as still running.
        let empty = Ok(HttpResponse::ok(String::from(")]}'\n")));
        let listing = ok_response("gArtLc", &json!([[["task_3", "Audio", 1, null, 1]]]));
        let (client, _http) = client_with(vec![empty, listing]);

        let status = client.artifacts().poll_status("nb_1", "task_3").await.unwrap();
        assert_eq!(status.state, GenerationState::InProgress);
        assert_eq!(status.task_id, "task_3");
    }

    #[tokio::test]
    async fn wait_for_completion_returns_the_finished_artifact() {
        let running = success_body("gArtLc", &json!([[["task_3", "Audio", 1, null, 1]]]));
        let done = success_body("gArtLc", &json!([[["task_3", "Audio", 1, null, 3]]]));
        let (client, http) = client_with(vec![
            Ok(HttpResponse::ok(running.clone())),
            Ok(HttpResponse::ok(running)),
            Ok(HttpResponse::ok(done)),
        ]);

        let outcome = client
            .artifacts()
            .wait_for_completion("nb_1", "task_3", &instant_config())
            .await
            .unwrap();
        match outcome {
            PollOutcome::Completed(artifact) => {
                assert_eq!(artifact.id, "task_3");
                assert!(artifact.is_completed());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(http.requests().len(), 3);
    }

    #[tokio::test]
    async fn wait_times_out_while_the_task_is_absent() {
        let config = PollConfig {
            initial_interval: Duration::from_millis(1),
            max_interval: Duration::from_millis(2),
            timeout: Duration::from_millis(20),
        };
        let (client, _http) = client_with(vec![]);
        let outcome = client
            .artifacts()
            .wait_for_completion("nb_1", "task_x", &config)
            .await
            .unwrap();
        assert_eq!(outcome, PollOutcome::TimedOut);
    }

    #[tokio::test]
    async fn suggest_reports_parses_suggestion_rows() {
        let payload = json!([[
            ["Meeting Notes", "Decisions and action items", null, null, "Write up the meeting"],
            ["Timeline", "Chronological events", null, null, "Build a timeline"]
        ]]);
        let (client, http) = client_with(vec![ok_response("yyryJe", &payload)]);

        let suggestions = client
            .artifacts()
            .suggest_reports("nb_1", &sources(&["s1"]))
            .await
            .unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "Meeting Notes");
        assert_eq!(suggestions[1].prompt, "Build a timeline");

        let body = http.requests()[0].body.clone().unwrap();
        let decoded = urlencoding::decode(&body).unwrap().into_owned();
        assert!(decoded.contains("suggested_report_formats"));
    }
}
