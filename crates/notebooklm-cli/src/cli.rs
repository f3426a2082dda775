use clap::{Args, Parser, Subcommand, ValueEnum};

use notebooklm_core::{
    AudioFormat, AudioLength, DriveMimeType, ExportFormat, InfographicDetail,
    InfographicOrientation, QuizDifficulty, QuizQuantity, ReportFormat, ResearchScope,
    SlideDeckFormat, SlideDeckLength, VideoFormat, VideoStyle,
};

/// Drive NotebookLM from the terminal using captured session cookies.
///
/// Credentials come from the environment: NOTEBOOKLM_COOKIES (required),
/// NOTEBOOKLM_AT, NOTEBOOKLM_SID, and NOTEBOOKLM_BL.
#[derive(Debug, Parser)]
#[command(name = "nlm", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Budget in seconds for --wait style commands.
    #[arg(long, global = true, default_value_t = 300)]
    pub wait_secs: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Notebook lifecycle.
    #[command(subcommand)]
    Notebook(NotebookCommand),
    /// Source material attached to a notebook.
    #[command(subcommand)]
    Source(SourceCommand),
    /// User-written notes.
    #[command(subcommand)]
    Note(NoteCommand),
    /// Studio artifacts: generation and management.
    #[command(subcommand)]
    Artifact(ArtifactCommand),
    /// Web and Drive research runs.
    #[command(subcommand)]
    Research(ResearchCommand),
}

#[derive(Debug, Subcommand)]
pub enum NotebookCommand {
    /// List notebooks on the home page.
    List,
    /// Create an empty notebook.
    Create { title: String },
    /// Fetch one notebook with its sources.
    Get { notebook_id: String },
    Rename {
        notebook_id: String,
        title: String,
    },
    Delete { notebook_id: String },
    /// AI summary and suggested topics.
    Describe { notebook_id: String },
    /// Curated notebooks from the featured gallery.
    Featured {
        #[arg(long, default_value_t = 20)]
        page_size: i64,
        #[arg(long)]
        page_token: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SourceCommand {
    /// Add pasted text as a source.
    AddText {
        notebook_id: String,
        title: String,
        /// Literal content, or `-` to read stdin.
        content: String,
    },
    AddUrl { notebook_id: String, url: String },
    AddYoutube { notebook_id: String, url: String },
    AddDrive {
        notebook_id: String,
        file_id: String,
        #[arg(long, value_enum, default_value_t = MimeArg::GoogleDoc)]
        mime: MimeArg,
        #[arg(long)]
        title: String,
    },
    Rename {
        notebook_id: String,
        source_id: String,
        title: String,
    },
    Delete {
        notebook_id: String,
        source_id: String,
    },
    /// Ask the upstream to re-fetch a URL-backed source.
    Refresh {
        notebook_id: String,
        source_id: String,
        /// Block until the source is fresh again.
        #[arg(long)]
        wait: bool,
    },
    /// AI summary and keywords for one source.
    Guide {
        notebook_id: String,
        source_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List notes in a notebook (mind maps excluded).
    List { notebook_id: String },
    /// Fetch one note by id.
    Get {
        notebook_id: String,
        note_id: String,
    },
    Create {
        notebook_id: String,
        title: String,
        /// Literal content, or `-` to read stdin.
        content: String,
    },
    Update {
        notebook_id: String,
        note_id: String,
        /// Literal content, or `-` to read stdin.
        content: String,
        #[arg(long)]
        title: String,
    },
    Delete {
        notebook_id: String,
        note_id: String,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    pub notebook_id: String,
    /// Source ids to generate from; defaults to every source.
    #[arg(long = "source")]
    pub sources: Vec<String>,
    #[arg(long)]
    pub instructions: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    /// Block until the artifact completes.
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Subcommand)]
pub enum ArtifactCommand {
    /// List studio artifacts in a notebook.
    List { notebook_id: String },
    Audio {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        format: Option<AudioFormatArg>,
        #[arg(long, value_enum)]
        length: Option<AudioLengthArg>,
    },
    Video {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        format: Option<VideoFormatArg>,
        #[arg(long, value_enum)]
        style: Option<VideoStyleArg>,
    },
    Report {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum, default_value_t = ReportFormatArg::BriefingDoc)]
        format: ReportFormatArg,
        /// Custom generation prompt; implies --format custom.
        #[arg(long)]
        prompt: Option<String>,
    },
    Quiz {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        quantity: Option<QuizQuantityArg>,
        #[arg(long, value_enum)]
        difficulty: Option<QuizDifficultyArg>,
    },
    Flashcards {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        quantity: Option<QuizQuantityArg>,
        #[arg(long, value_enum)]
        difficulty: Option<QuizDifficultyArg>,
    },
    Infographic {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,
        #[arg(long, value_enum)]
        detail: Option<DetailArg>,
    },
    SlideDeck {
        #[command(flatten)]
        common: GenerateArgs,
        #[arg(long, value_enum)]
        format: Option<SlideDeckFormatArg>,
        #[arg(long, value_enum)]
        length: Option<SlideDeckLengthArg>,
    },
    DataTable {
        #[command(flatten)]
        common: GenerateArgs,
    },
    /// One status observation for a generation task.
    Status {
        notebook_id: String,
        task_id: String,
    },
    Rename {
        notebook_id: String,
        artifact_id: String,
        title: String,
    },
    Delete {
        notebook_id: String,
        artifact_id: String,
    },
    /// Export artifact content to Docs or Sheets.
    Export {
        notebook_id: String,
        artifact_id: String,
        /// Content to export, or `-` to read stdin.
        content: String,
        #[arg(long)]
        title: String,
        #[arg(long, value_enum, default_value_t = ExportArg::Docs)]
        to: ExportArg,
    },
    /// Report formats suggested for the given sources.
    SuggestReports {
        notebook_id: String,
        #[arg(long = "source")]
        sources: Vec<String>,
    },
    MindMap {
        notebook_id: String,
        #[arg(long = "source")]
        sources: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ResearchCommand {
    /// Start a fast research run.
    Fast {
        notebook_id: String,
        query: String,
        #[arg(long, value_enum, default_value_t = ScopeArg::Web)]
        scope: ScopeArg,
        /// Block until the run completes.
        #[arg(long)]
        wait: bool,
    },
    /// Start a deep research run (web only).
    Deep {
        notebook_id: String,
        query: String,
        #[arg(long)]
        wait: bool,
    },
    /// Latest research run in the notebook.
    Poll { notebook_id: String },
    /// Import every source discovered by a completed run.
    Import {
        notebook_id: String,
        task_id: String,
    },
}

macro_rules! value_enum_for {
    ($arg:ident => $core:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
        pub enum $arg {
            $($variant),+
        }

        impl From<$arg> for $core {
            fn from(value: $arg) -> Self {
                match value {
                    $($arg::$variant => $core::$variant),+
                }
            }
        }

        // Display is what clap renders for default values in help text.
        impl std::fmt::Display for $arg {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.to_possible_value()
                    .expect("no skipped variants")
                    .get_name()
                    .fmt(f)
            }
        }
    };
}

value_enum_for!(AudioFormatArg => AudioFormat { DeepDive, Brief, Critique, Debate });
value_enum_for!(AudioLengthArg => AudioLength { Short, Default, Long });
value_enum_for!(VideoFormatArg => VideoFormat { Explainer, Brief });
value_enum_for!(VideoStyleArg => VideoStyle {
    AutoSelect, Custom, Classic, Whiteboard, Kawaii, Anime, Watercolor, RetroPrint,
    Heritage, PaperCraft,
});
value_enum_for!(ReportFormatArg => ReportFormat { BriefingDoc, StudyGuide, BlogPost, Custom });
value_enum_for!(QuizQuantityArg => QuizQuantity { Fewer, Standard });
value_enum_for!(QuizDifficultyArg => QuizDifficulty { Easy, Medium, Hard });
value_enum_for!(OrientationArg => InfographicOrientation { Landscape, Portrait, Square });
value_enum_for!(DetailArg => InfographicDetail { Concise, Standard, Detailed });
value_enum_for!(SlideDeckFormatArg => SlideDeckFormat { DetailedDeck, PresenterSlides });
value_enum_for!(SlideDeckLengthArg => SlideDeckLength { Default, Short });
value_enum_for!(MimeArg => DriveMimeType { GoogleDoc, GoogleSlides, GoogleSheets, Pdf });
value_enum_for!(ExportArg => ExportFormat { Docs, Sheets });
value_enum_for!(ScopeArg => ResearchScope { Web, Drive });
