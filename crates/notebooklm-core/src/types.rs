//! Domain records parsed from positional wire arrays, and the option
//! code tables for studio generation.
//!
//! All index positions come from traffic capture. Parsing is tolerant:
//! a missing or oddly-typed position degrades to a default instead of
//! failing the whole response, because the upstream pads and reshuffles
//! trailing positions between frontend builds.

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

fn str_at(data: &Value, index: usize) -> Option<String> {
    data.get(index)
        .and_then(Value::as_str)
        .map(String::from)
}

fn int_at(data: &Value, index: usize) -> Option<i64> {
    data.get(index).and_then(Value::as_i64)
}

fn timestamp_from(value: Option<&Value>) -> Option<OffsetDateTime> {
    let seconds = value?.as_i64()?;
    OffsetDateTime::from_unix_timestamp(seconds).ok()
}

/// A notebook as listed on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notebook {
    pub id: String,
    pub title: String,
    pub created_at: Option<OffsetDateTime>,
    pub is_owner: bool,
}

impl Notebook {
    /// Positions: title 0 (sometimes prefixed with model reasoning
    /// noise), id 2, ownership 5.1 (false means owned), created 5.5.0.
    pub fn from_entry(data: &Value) -> Self {
        let raw_title = str_at(data, 0).unwrap_or_default();
        let title = raw_title.replace("thought\n", "").trim().to_string();
        let id = str_at(data, 2).unwrap_or_default();

        let meta = data.get(5);
        let created_at =
            timestamp_from(meta.and_then(|m| m.get(5)).and_then(|ts| ts.get(0)));
        let is_owner = meta
            .and_then(|m| m.get(1))
            .map(|shared| shared == &Value::Bool(false))
            .unwrap_or(true);

        Self {
            id,
            title,
            created_at,
            is_owner,
        }
    }
}

/// Summary plus suggested questions, as shown in the chat panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookDescription {
    pub summary: String,
    pub suggested_topics: Vec<SuggestedTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedTopic {
    pub question: String,
    pub prompt: String,
}

impl NotebookDescription {
    /// Summary at 0.0, topics at 1.0 as `[question, prompt]` pairs.
    pub fn from_payload(data: &Value) -> Self {
        let summary = data
            .get(0)
            .and_then(|s| s.get(0))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let suggested_topics = data
            .get(1)
            .and_then(|t| t.get(0))
            .and_then(Value::as_array)
            .map(|topics| {
                topics
                    .iter()
                    .filter_map(|topic| {
                        let question = topic.get(0)?.as_str()?.to_string();
                        let prompt = str_at(topic, 1).unwrap_or_default();
                        Some(SuggestedTopic { question, prompt })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            summary,
            suggested_topics,
        }
    }
}

/// How a source got into the notebook, inferred from its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Text,
    TextFile,
    Url,
    Youtube,
    Upload,
    Drive,
}

impl SourceKind {
    fn detect(url: Option<&str>, title: Option<&str>) -> Self {
        if let Some(url) = url {
            if url.contains("youtube.com") || url.contains("youtu.be") {
                return Self::Youtube;
            }
            return Self::Url;
        }
        if let Some(title) = title {
            if title.ends_with(".pdf") || title.ends_with(".txt") {
                return Self::TextFile;
            }
        }
        Self::Text
    }
}

/// One source attached to a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub kind: SourceKind,
}

impl Source {
    pub fn new(id: impl Into<String>, title: Option<String>, kind: SourceKind) -> Self {
        Self {
            id: id.into(),
            title,
            url: None,
            kind,
        }
    }

    /// Parses the several nestings the upstream answers source
    /// operations with: `[[[[id], title, meta]]]` after adds,
    /// `[[[id], title, meta], ...]` entries in listings, and bare
    /// `[id, title]` rows.
    pub fn from_entry(data: &Value) -> Option<Self> {
        let outer = data.as_array()?;
        let first = outer.first()?;

        if let Some(level_one) = first.as_array() {
            if let Some(level_two) = level_one.first() {
                let entry: &Value = if level_two
                    .as_array()
                    .and_then(|inner| inner.first())
                    .map(Value::is_array)
                    .unwrap_or(false)
                {
                    // Deeply wrapped add response: the row is two in.
                    level_two
                } else if level_two.is_array() {
                    // Singly wrapped: `first` is the row itself.
                    first
                } else {
                    // `data` is already a flat `[[id], title, meta]` row.
                    data
                };
                return Self::from_flat_entry(entry);
            }
        }

        let id = first.as_str()?.to_string();
        let title = str_at(data, 1);
        let kind = SourceKind::detect(None, title.as_deref());
        Some(Self {
            id,
            title,
            url: None,
            kind,
        })
    }

    fn from_flat_entry(entry: &Value) -> Option<Self> {
        let id = match entry.get(0)? {
            Value::Array(wrapped) => wrapped.first()?.as_str()?.to_string(),
            Value::String(id) => id.clone(),
            _ => return None,
        };
        let title = str_at(entry, 1);

        // URL hides at meta.7.0, or meta.0 when it is a bare link.
        let meta = entry.get(2);
        let url = meta
            .and_then(|m| m.get(7))
            .and_then(|u| u.get(0))
            .and_then(Value::as_str)
            .or_else(|| {
                meta.and_then(|m| m.get(0))
                    .and_then(Value::as_str)
                    .filter(|s| s.starts_with("http"))
            })
            .map(String::from);

        let kind = SourceKind::detect(url.as_deref(), title.as_deref());
        Some(Self {
            id,
            title,
            url,
            kind,
        })
    }
}

/// AI summary and keywords for a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceGuide {
    pub summary: String,
    pub keywords: Vec<String>,
}

impl SourceGuide {
    /// Shape: `[[null, [summary], [[keyword, ...]]]]`.
    pub fn from_payload(data: &Value) -> Self {
        let inner = data.get(0);
        let summary = inner
            .and_then(|i| i.get(1))
            .and_then(|s| s.get(0))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let keywords = inner
            .and_then(|i| i.get(2))
            .and_then(|k| k.get(0))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self { summary, keywords }
    }
}

/// A user-written note. Notes live in the same backing store as mind
/// maps; a mind map entry is a note whose content is the serialized
/// node tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Entries come in two layouts: `[id, content]` on older backends
    /// and `[id, [id, content, metadata, null, title]]` on current ones.
    pub fn from_entry(data: &Value) -> Option<Self> {
        let id = data.get(0)?.as_str()?.to_string();

        let mut title = String::new();
        let mut content = String::new();
        match data.get(1) {
            Some(Value::String(body)) => content = body.clone(),
            Some(inner @ Value::Array(_)) => {
                content = str_at(inner, 1).unwrap_or_default();
                title = str_at(inner, 4).unwrap_or_default();
            }
            _ => {}
        }

        Some(Self { id, title, content })
    }

    /// Mind maps are stored as notes with a JSON node tree for content.
    pub fn is_mind_map(&self) -> bool {
        self.content.contains("\"children\":") || self.content.contains("\"nodes\":")
    }
}

/// Studio content type codes. Code 6 is unassigned in captured traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Audio,
    Report,
    Video,
    QuizOrFlashcards,
    MindMap,
    Infographic,
    SlideDeck,
    DataTable,
    Unknown,
}

impl ArtifactKind {
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Audio,
            2 => Self::Report,
            3 => Self::Video,
            4 => Self::QuizOrFlashcards,
            5 => Self::MindMap,
            7 => Self::Infographic,
            8 => Self::SlideDeck,
            9 => Self::DataTable,
            _ => Self::Unknown,
        }
    }

    pub const fn code(self) -> Option<i64> {
        match self {
            Self::Audio => Some(1),
            Self::Report => Some(2),
            Self::Video => Some(3),
            Self::QuizOrFlashcards => Some(4),
            Self::MindMap => Some(5),
            Self::Infographic => Some(7),
            Self::SlideDeck => Some(8),
            Self::DataTable => Some(9),
            Self::Unknown => None,
        }
    }
}

/// Generated studio content (audio overview, report, quiz, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    pub kind: ArtifactKind,
    pub status_code: i64,
    /// Distinguishes quiz (2) from flashcards (1) within kind 4.
    pub variant: Option<i64>,
    pub created_at: Option<OffsetDateTime>,
}

impl Artifact {
    pub const STATUS_IN_PROGRESS: i64 = 1;
    pub const STATUS_COMPLETED: i64 = 3;

    /// Positions: id 0, title 1, type 2, status 4, variant 9.1.0,
    /// created 15.0.
    pub fn from_entry(data: &Value) -> Self {
        let id = str_at(data, 0).unwrap_or_default();
        let title = str_at(data, 1).unwrap_or_default();
        let kind = ArtifactKind::from_code(int_at(data, 2).unwrap_or(0));
        let status_code = int_at(data, 4).unwrap_or(0);
        let variant = data
            .get(9)
            .and_then(|options| options.get(1))
            .and_then(|v| v.get(0))
            .and_then(Value::as_i64);
        let created_at = timestamp_from(data.get(15).and_then(|ts| ts.get(0)));

        Self {
            id,
            title,
            kind,
            status_code,
            variant,
            created_at,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status_code == Self::STATUS_COMPLETED
    }

    pub fn is_in_progress(&self) -> bool {
        self.status_code == Self::STATUS_IN_PROGRESS
    }

    pub fn is_quiz(&self) -> bool {
        self.kind == ArtifactKind::QuizOrFlashcards && self.variant == Some(2)
    }

    pub fn is_flashcards(&self) -> bool {
        self.kind == ArtifactKind::QuizOrFlashcards && self.variant == Some(1)
    }
}

/// Lifecycle of a generation task as observed by polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Snapshot of one generation task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationStatus {
    pub task_id: String,
    pub state: GenerationState,
    pub url: Option<String>,
    pub error: Option<String>,
}

impl GenerationStatus {
    pub fn new(task_id: impl Into<String>, state: GenerationState) -> Self {
        Self {
            task_id: task_id.into(),
            state,
            url: None,
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            task_id: String::new(),
            state: GenerationState::Failed,
            url: None,
            error: Some(reason.into()),
        }
    }

    /// Parses the creation response: `[[artifact_id, _, _, _, status]]`
    /// with status 1 meaning in progress and 3 meaning completed.
    pub fn from_create_result(data: &Value) -> Self {
        let artifact = data.get(0);
        let task_id = artifact
            .and_then(|a| a.get(0))
            .and_then(Value::as_str)
            .unwrap_or_default();
        if task_id.is_empty() {
            return Self::failed("generation returned no artifact id");
        }
        let state = match artifact.and_then(|a| a.get(4)).and_then(Value::as_i64) {
            Some(Artifact::STATUS_IN_PROGRESS) => GenerationState::InProgress,
            Some(Artifact::STATUS_COMPLETED) => GenerationState::Completed,
            _ => GenerationState::Pending,
        };
        Self::new(task_id, state)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            GenerationState::Completed | GenerationState::Failed
        )
    }
}

/// Where research queries are allowed to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchScope {
    Web,
    Drive,
}

impl ResearchScope {
    pub const fn code(self) -> i64 {
        match self {
            Self::Web => 1,
            Self::Drive => 2,
        }
    }
}

/// A candidate source discovered by a research run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchSource {
    pub url: Option<String>,
    pub title: String,
}

/// State of the most recent research run in a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchTask {
    pub task_id: String,
    pub completed: bool,
    pub query: String,
    pub summary: String,
    pub sources: Vec<ResearchSource>,
}

impl ResearchTask {
    /// Task rows look like `[task_id, [_, [query], mode,
    /// [sources, summary], status], ...]`; status 2 means completed.
    /// Fast-research source rows are `[url, title, ...]`, deep-research
    /// rows are `[null, title, ...]`.
    pub fn from_poll_payload(data: &Value) -> Option<Self> {
        let mut rows = data.as_array()?.as_slice();
        // One level of wrapping when multiple tasks are returned.
        if let Some(first) = rows.first() {
            if first
                .as_array()
                .and_then(|row| row.first())
                .map(Value::is_array)
                .unwrap_or(false)
            {
                rows = first.as_array()?.as_slice();
            }
        }

        for row in rows {
            let Some(task_id) = row.get(0).and_then(Value::as_str) else {
                continue;
            };
            let Some(info) = row.get(1).filter(|info| info.is_array()) else {
                continue;
            };

            let query = info
                .get(1)
                .and_then(|q| q.get(0))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let completed = info.get(4).and_then(Value::as_i64) == Some(2);

            let sources_and_summary = info.get(3);
            let summary = sources_and_summary
                .and_then(|s| s.get(1))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let sources = sources_and_summary
                .and_then(|s| s.get(0))
                .and_then(Value::as_array)
                .map(|rows| rows.iter().filter_map(research_source).collect())
                .unwrap_or_default();

            return Some(Self {
                task_id: task_id.to_string(),
                completed,
                query,
                summary,
                sources,
            });
        }
        None
    }
}

fn research_source(row: &Value) -> Option<ResearchSource> {
    let items = row.as_array()?;
    if items.len() < 2 {
        return None;
    }
    let url = items.first().and_then(Value::as_str).map(String::from);
    let title = items.get(1).and_then(Value::as_str).unwrap_or_default();
    if url.is_none() && title.is_empty() {
        return None;
    }
    Some(ResearchSource {
        url,
        title: title.to_string(),
    })
}

/// AI-suggested report format for a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSuggestion {
    pub title: String,
    pub description: String,
    pub prompt: String,
}

impl ReportSuggestion {
    /// Rows: `[title, description, _, _, prompt, ...]`.
    pub fn from_payload(data: &Value) -> Vec<Self> {
        data.as_array()
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| {
                        if row.as_array().map(Vec::len).unwrap_or(0) < 5 {
                            return None;
                        }
                        Some(Self {
                            title: str_at(row, 0).unwrap_or_default(),
                            description: str_at(row, 1).unwrap_or_default(),
                            prompt: str_at(row, 4).unwrap_or_default(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------
// Studio option code tables.
// ---------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    DeepDive,
    Brief,
    Critique,
    Debate,
}

impl AudioFormat {
    pub const fn code(self) -> i64 {
        match self {
            Self::DeepDive => 1,
            Self::Brief => 2,
            Self::Critique => 3,
            Self::Debate => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioLength {
    Short,
    Default,
    Long,
}

impl AudioLength {
    pub const fn code(self) -> i64 {
        match self {
            Self::Short => 1,
            Self::Default => 2,
            Self::Long => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoFormat {
    Explainer,
    Brief,
}

impl VideoFormat {
    pub const fn code(self) -> i64 {
        match self {
            Self::Explainer => 1,
            Self::Brief => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    AutoSelect,
    Custom,
    Classic,
    Whiteboard,
    Kawaii,
    Anime,
    Watercolor,
    RetroPrint,
    Heritage,
    PaperCraft,
}

impl VideoStyle {
    pub const fn code(self) -> i64 {
        match self {
            Self::AutoSelect => 1,
            Self::Custom => 2,
            Self::Classic => 3,
            Self::Whiteboard => 4,
            Self::Kawaii => 5,
            Self::Anime => 6,
            Self::Watercolor => 7,
            Self::RetroPrint => 8,
            Self::Heritage => 9,
            Self::PaperCraft => 10,
        }
    }
}

/// The upstream collapses "standard" and "more" onto the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizQuantity {
    Fewer,
    Standard,
}

impl QuizQuantity {
    pub const fn code(self) -> i64 {
        match self {
            Self::Fewer => 1,
            Self::Standard => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuizDifficulty {
    pub const fn code(self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfographicOrientation {
    Landscape,
    Portrait,
    Square,
}

impl InfographicOrientation {
    pub const fn code(self) -> i64 {
        match self {
            Self::Landscape => 1,
            Self::Portrait => 2,
            Self::Square => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfographicDetail {
    Concise,
    Standard,
    Detailed,
}

impl InfographicDetail {
    pub const fn code(self) -> i64 {
        match self {
            Self::Concise => 1,
            Self::Standard => 2,
            Self::Detailed => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDeckFormat {
    DetailedDeck,
    PresenterSlides,
}

impl SlideDeckFormat {
    pub const fn code(self) -> i64 {
        match self {
            Self::DetailedDeck => 1,
            Self::PresenterSlides => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDeckLength {
    Default,
    Short,
}

impl SlideDeckLength {
    pub const fn code(self) -> i64 {
        match self {
            Self::Default => 1,
            Self::Short => 2,
        }
    }
}

/// Report presets. All reports use content type 2 and differ only in
/// the title/description/prompt trio sent with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    BriefingDoc,
    StudyGuide,
    BlogPost,
    Custom,
}

impl ReportFormat {
    pub const fn title(self) -> &'static str {
        match self {
            Self::BriefingDoc => "Briefing Doc",
            Self::StudyGuide => "Study Guide",
            Self::BlogPost => "Blog Post",
            Self::Custom => "Custom Report",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::BriefingDoc => "Key insights and important quotes",
            Self::StudyGuide => "Short-answer quiz, essay questions, glossary",
            Self::BlogPost => "Insightful takeaways in readable article format",
            Self::Custom => "Custom format",
        }
    }

    pub const fn default_prompt(self) -> &'static str {
        match self {
            Self::BriefingDoc => {
                "Create a comprehensive briefing document that includes an \
                 Executive Summary, detailed analysis of key themes, important \
                 quotes with context, and actionable insights."
            }
            Self::StudyGuide => {
                "Create a comprehensive study guide that includes key concepts, \
                 short-answer practice questions, essay prompts for deeper \
                 exploration, and a glossary of important terms."
            }
            Self::BlogPost => {
                "Write an engaging blog post that presents the key insights in \
                 an accessible, reader-friendly format. Include an attention-\
                 grabbing introduction, well-organized sections, and a \
                 compelling conclusion with takeaways."
            }
            Self::Custom => "Create a report based on the provided sources.",
        }
    }
}

/// Export destinations for artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Docs,
    Sheets,
}

impl ExportFormat {
    pub const fn code(self) -> i64 {
        match self {
            Self::Docs => 1,
            Self::Sheets => 2,
        }
    }
}

/// Google Drive MIME types accepted as source material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMimeType {
    GoogleDoc,
    GoogleSlides,
    GoogleSheets,
    Pdf,
}

impl DriveMimeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoogleDoc => "application/vnd.google-apps.document",
            Self::GoogleSlides => "application/vnd.google-apps.presentation",
            Self::GoogleSheets => "application/vnd.google-apps.spreadsheet",
            Self::Pdf => "application/pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn notebook_parses_title_id_and_ownership() {
        let data = json!([
            "thought\nClimate Research",
            [],
            "nb_42",
            "🌍",
            null,
            [null, false, null, null, null, [1_700_000_000, 0]]
        ]);
        let notebook = Notebook::from_entry(&data);
        assert_eq!(notebook.id, "nb_42");
        assert_eq!(notebook.title, "Climate Research");
        assert!(notebook.is_owner);
        assert_eq!(
            notebook.created_at.map(|t| t.unix_timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn shared_notebook_is_not_owned() {
        let data = json!(["Shared", [], "nb_9", null, null, [null, true]]);
        assert!(!Notebook::from_entry(&data).is_owner);
    }

    #[test]
    fn source_parses_deeply_nested_add_response() {
        let data = json!([[[["src_1"], "Paper.pdf", [null]]]]);
        let source = Source::from_entry(&data).unwrap();
        assert_eq!(source.id, "src_1");
        assert_eq!(source.title.as_deref(), Some("Paper.pdf"));
        assert_eq!(source.kind, SourceKind::TextFile);
    }

    #[test]
    fn source_detects_youtube_from_url_position() {
        let data = json!([[
            ["src_2"],
            "Talk",
            [null, null, null, null, null, null, null, ["https://youtu.be/abc"]]
        ]]);
        let source = Source::from_entry(&data).unwrap();
        assert_eq!(source.kind, SourceKind::Youtube);
        assert_eq!(source.url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn note_parses_both_entry_layouts() {
        let old_layout = json!(["note_1", "plain body"]);
        let note = Note::from_entry(&old_layout).unwrap();
        assert_eq!(note.id, "note_1");
        assert_eq!(note.content, "plain body");
        assert_eq!(note.title, "");

        let new_layout = json!([
            "note_2",
            ["note_2", "structured body", [1], null, "Reading notes"]
        ]);
        let note = Note::from_entry(&new_layout).unwrap();
        assert_eq!(note.content, "structured body");
        assert_eq!(note.title, "Reading notes");
        assert!(!note.is_mind_map());
    }

    #[test]
    fn mind_map_content_is_recognized() {
        let data = json!(["map_1", ["map_1", "{\"children\": []}", [1], null, ""]]);
        let note = Note::from_entry(&data).unwrap();
        assert!(note.is_mind_map());
    }

    #[test]
    fn artifact_parses_status_variant_and_kind() {
        let data = json!([
            "art_1",
            "Quiz on chapter 2",
            4,
            null,
            3,
            null, null, null, null,
            [null, [2]],
            null, null, null, null, null,
            [1_700_000_100, 500]
        ]);
        let artifact = Artifact::from_entry(&data);
        assert_eq!(artifact.kind, ArtifactKind::QuizOrFlashcards);
        assert!(artifact.is_completed());
        assert!(artifact.is_quiz());
        assert!(!artifact.is_flashcards());
    }

    #[test]
    fn generation_status_from_create_result() {
        let in_progress = json!([["task_1", null, null, null, 1]]);
        let status = GenerationStatus::from_create_result(&in_progress);
        assert_eq!(status.state, GenerationState::InProgress);
        assert_eq!(status.task_id, "task_1");
        assert!(!status.is_terminal());

        let missing_id = json!([[]]);
        let failed = GenerationStatus::from_create_result(&missing_id);
        assert_eq!(failed.state, GenerationState::Failed);
        assert!(failed.is_terminal());
    }

    #[test]
    fn research_task_parses_fast_rows() {
        let data = json!([[
            [
                "research_1",
                [
                    null,
                    ["solar panel efficiency"],
                    1,
                    [
                        [
                            ["https://a.example", "Solar A", "desc", 1],
                            ["https://b.example", "Solar B", "desc", 1]
                        ],
                        "Two promising sources."
                    ],
                    2
                ]
            ],
            [1_700_000_000],
            [1_700_000_100]
        ]]);
        let task = ResearchTask::from_poll_payload(&data).unwrap();
        assert_eq!(task.task_id, "research_1");
        assert!(task.completed);
        assert_eq!(task.query, "solar panel efficiency");
        assert_eq!(task.summary, "Two promising sources.");
        assert_eq!(task.sources.len(), 2);
        assert_eq!(task.sources[0].url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn deep_research_rows_have_no_url() {
        let data = json!([[[
            "research_2",
            [
                null,
                ["quantum error correction"],
                5,
                [[[null, "Survey of QEC", null, 2]], ""],
                1
            ]
        ]]]);
        let task = ResearchTask::from_poll_payload(&data).unwrap();
        assert!(!task.completed);
        assert_eq!(task.sources.len(), 1);
        assert_eq!(task.sources[0].url, None);
        assert_eq!(task.sources[0].title, "Survey of QEC");
    }

    #[test]
    fn no_research_yields_none() {
        assert_eq!(ResearchTask::from_poll_payload(&json!([])), None);
        assert_eq!(ResearchTask::from_poll_payload(&json!(null)), None);
    }

    #[test]
    fn option_codes_match_the_wire_tables() {
        assert_eq!(AudioFormat::Debate.code(), 4);
        assert_eq!(VideoStyle::PaperCraft.code(), 10);
        assert_eq!(QuizQuantity::Fewer.code(), 1);
        assert_eq!(QuizDifficulty::Hard.code(), 3);
        assert_eq!(SlideDeckLength::Short.code(), 2);
        assert_eq!(ExportFormat::Sheets.code(), 2);
        assert_eq!(ArtifactKind::from_code(7), ArtifactKind::Infographic);
        assert_eq!(ArtifactKind::from_code(6), ArtifactKind::Unknown);
    }
}
