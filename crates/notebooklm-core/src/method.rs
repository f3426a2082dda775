//! Obfuscated RPC method identifiers for the batchexecute endpoint.
//!
//! The backend does not route by URL path; every call goes to the same
//! endpoint and the method is named by a short scrambled token inside the
//! request envelope. The tokens below come from network traffic capture
//! and can change without notice when the frontend is redeployed.

use std::fmt::{Display, Formatter};

/// One remote procedure on the private batchexecute surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    ListNotebooks,
    CreateNotebook,
    GetNotebook,
    RenameNotebook,
    DeleteNotebook,
    AddSource,
    AddSourceFile,
    DeleteSource,
    RefreshSource,
    CheckSourceFreshness,
    UpdateSource,
    Summarize,
    GetSourceGuide,
    CreateNote,
    GetNotes,
    UpdateNote,
    DeleteNote,
    GenerateArtifact,
    PollStudio,
    ListArtifacts,
    DeleteStudio,
    RenameArtifact,
    DeleteArtifact,
    ExportArtifact,
    ActOnSources,
    StartFastResearch,
    StartDeepResearch,
    PollResearch,
    ImportResearch,
    ListFeaturedProjects,
    RemoveRecentlyViewed,
    ProjectAnalytics,
    ShareProject,
    GetGuidebooks,
}

impl RpcMethod {
    /// The scrambled wire token sent in the `rpcids` URL parameter and the
    /// request envelope. `PollStudio` and `ListArtifacts` share a token:
    /// the backend answers both shapes on the same method id.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ListNotebooks => "wXbhsf",
            Self::CreateNotebook => "CCqFvf",
            Self::GetNotebook => "rLM1Ne",
            Self::RenameNotebook => "s0tc2d",
            Self::DeleteNotebook => "WWINqb",
            Self::AddSource => "izAoDd",
            Self::AddSourceFile => "o4cbdc",
            Self::DeleteSource => "tGMBJ",
            Self::RefreshSource => "FLmJqe",
            Self::CheckSourceFreshness => "yR9Yof",
            Self::UpdateSource => "b7Wfje",
            Self::Summarize => "VfAZjd",
            Self::GetSourceGuide => "tr032e",
            Self::CreateNote => "CYK0Xb",
            Self::GetNotes => "cFji9",
            Self::UpdateNote => "cYAfTb",
            Self::DeleteNote => "AH0mwd",
            Self::GenerateArtifact => "R7cb6c",
            Self::PollStudio | Self::ListArtifacts => "gArtLc",
            Self::DeleteStudio => "V5N4be",
            Self::RenameArtifact => "rc3d8d",
            Self::DeleteArtifact => "WxBZtb",
            Self::ExportArtifact => "Krh3pd",
            Self::ActOnSources => "yyryJe",
            Self::StartFastResearch => "Ljjv0c",
            Self::StartDeepResearch => "QA9ei",
            Self::PollResearch => "e3bVqc",
            Self::ImportResearch => "LBwxtb",
            Self::ListFeaturedProjects => "nS9Qlc",
            Self::RemoveRecentlyViewed => "fejl7e",
            Self::ProjectAnalytics => "AUrzMb",
            Self::ShareProject => "QDyure",
            Self::GetGuidebooks => "YJBpHc",
        }
    }

    /// Stable human-readable name used in errors and log events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListNotebooks => "list_notebooks",
            Self::CreateNotebook => "create_notebook",
            Self::GetNotebook => "get_notebook",
            Self::RenameNotebook => "rename_notebook",
            Self::DeleteNotebook => "delete_notebook",
            Self::AddSource => "add_source",
            Self::AddSourceFile => "add_source_file",
            Self::DeleteSource => "delete_source",
            Self::RefreshSource => "refresh_source",
            Self::CheckSourceFreshness => "check_source_freshness",
            Self::UpdateSource => "update_source",
            Self::Summarize => "summarize",
            Self::GetSourceGuide => "get_source_guide",
            Self::CreateNote => "create_note",
            Self::GetNotes => "get_notes",
            Self::UpdateNote => "update_note",
            Self::DeleteNote => "delete_note",
            Self::GenerateArtifact => "generate_artifact",
            Self::PollStudio => "poll_studio",
            Self::ListArtifacts => "list_artifacts",
            Self::DeleteStudio => "delete_studio",
            Self::RenameArtifact => "rename_artifact",
            Self::DeleteArtifact => "delete_artifact",
            Self::ExportArtifact => "export_artifact",
            Self::ActOnSources => "act_on_sources",
            Self::StartFastResearch => "start_fast_research",
            Self::StartDeepResearch => "start_deep_research",
            Self::PollResearch => "poll_research",
            Self::ImportResearch => "import_research",
            Self::ListFeaturedProjects => "list_featured_projects",
            Self::RemoveRecentlyViewed => "remove_recently_viewed",
            Self::ProjectAnalytics => "project_analytics",
            Self::ShareProject => "share_project",
            Self::GetGuidebooks => "get_guidebooks",
        }
    }

    /// Tokens observed in traffic but whose parameter shape has not been
    /// confirmed. The schema registry refuses to build params for these.
    pub const fn is_verified(self) -> bool {
        !matches!(self, Self::GetGuidebooks)
    }
}

impl Display for RpcMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
