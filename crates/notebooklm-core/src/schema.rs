//! Parameter templates for every supported operation.
//!
//! The upstream takes positional arrays with meaning encoded purely by
//! position, and most positions are structural `null`s. Shapes were
//! recovered from traffic capture and are reproduced here declaratively:
//! each operation owns an ordered slot list mixing literal values with
//! named fields. A template never invents a value for a missing field;
//! building fails instead.
//!
//! | Slot kind | Meaning |
//! |-----------|---------|
//! | `Literal` | fixed value, emitted verbatim (including structural nulls) |
//! | `Field`   | looked up by name in the supplied [`Fields`] bag |
//! | `Nested`  | a sub-array of slots, rendered recursively |

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::error::SchemaError;
use crate::method::RpcMethod;

/// Operations the registry can build parameters for. Generation variants
/// are separate operations: their array shapes differ in both length and
/// field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListNotebooks,
    CreateNotebook,
    GetNotebook,
    RenameNotebook,
    DeleteNotebook,
    AddTextSource,
    AddUrlSource,
    AddYoutubeSource,
    AddDriveSource,
    RegisterFileSource,
    DeleteSource,
    RenameSource,
    RefreshSource,
    CheckSourceFreshness,
    GetSourceGuide,
    Summarize,
    CreateNote,
    GetNotes,
    UpdateNote,
    DeleteNote,
    GenerateAudio,
    GenerateVideo,
    GenerateReport,
    GenerateQuiz,
    GenerateFlashcards,
    GenerateInfographic,
    GenerateSlideDeck,
    GenerateDataTable,
    PollStudio,
    ListArtifacts,
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

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListNotebooks => "list_notebooks",
            Self::CreateNotebook => "create_notebook",
            Self::GetNotebook => "get_notebook",
            Self::RenameNotebook => "rename_notebook",
            Self::DeleteNotebook => "delete_notebook",
            Self::AddTextSource => "add_text_source",
            Self::AddUrlSource => "add_url_source",
            Self::AddYoutubeSource => "add_youtube_source",
            Self::AddDriveSource => "add_drive_source",
            Self::RegisterFileSource => "register_file_source",
            Self::DeleteSource => "delete_source",
            Self::RenameSource => "rename_source",
            Self::RefreshSource => "refresh_source",
            Self::CheckSourceFreshness => "check_source_freshness",
            Self::GetSourceGuide => "get_source_guide",
            Self::Summarize => "summarize",
            Self::CreateNote => "create_note",
            Self::GetNotes => "get_notes",
            Self::UpdateNote => "update_note",
            Self::DeleteNote => "delete_note",
            Self::GenerateAudio => "generate_audio",
            Self::GenerateVideo => "generate_video",
            Self::GenerateReport => "generate_report",
            Self::GenerateQuiz => "generate_quiz",
            Self::GenerateFlashcards => "generate_flashcards",
            Self::GenerateInfographic => "generate_infographic",
            Self::GenerateSlideDeck => "generate_slide_deck",
            Self::GenerateDataTable => "generate_data_table",
            Self::PollStudio => "poll_studio",
            Self::ListArtifacts => "list_artifacts",
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
}

/// One position in a parameter array.
#[derive(Debug, Clone)]
pub enum Slot {
    Literal(Value),
    Field(&'static str),
    Nested(Vec<Slot>),
}

/// Named field values supplied by a call site. Explicit nulls are legal
/// values (optional upstream fields are sent as null); an absent name is
/// a schema violation.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    values: BTreeMap<&'static str, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// A rendered call: the wire method plus its parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltCall {
    pub method: RpcMethod,
    pub params: Value,
}

/// Renders the parameter array for `operation` from `fields`.
pub fn build(operation: Operation, fields: &Fields) -> Result<BuiltCall, SchemaError> {
    let (method, slots) = template(operation)?;
    let params = slots
        .iter()
        .map(|slot| render(operation, slot, fields))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)?;
    Ok(BuiltCall { method, params })
}

fn render(operation: Operation, slot: &Slot, fields: &Fields) -> Result<Value, SchemaError> {
    match slot {
        Slot::Literal(value) => Ok(value.clone()),
        Slot::Field(name) => fields
            .get(name)
            .cloned()
            .ok_or(SchemaError::MissingField {
                operation: operation.name(),
                field: name,
            }),
        Slot::Nested(slots) => slots
            .iter()
            .map(|inner| render(operation, inner, fields))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
    }
}

fn lit(value: Value) -> Slot {
    Slot::Literal(value)
}

fn null() -> Slot {
    Slot::Literal(Value::Null)
}

fn field(name: &'static str) -> Slot {
    Slot::Field(name)
}

fn nested(slots: Vec<Slot>) -> Slot {
    Slot::Nested(slots)
}

fn nulls(count: usize) -> Vec<Slot> {
    std::iter::repeat_with(null).take(count).collect()
}

fn with_nulls(mut slots: Vec<Slot>, count: usize, tail: Vec<Slot>) -> Vec<Slot> {
    slots.extend(nulls(count));
    slots.extend(tail);
    slots
}

/// The per-artifact options block sits at a different depth for every
/// content type, padded to its position with structural nulls.
fn template(operation: Operation) -> Result<(RpcMethod, Vec<Slot>), SchemaError> {
    let built = match operation {
        Operation::ListNotebooks => (
            RpcMethod::ListNotebooks,
            vec![null(), lit(json!(1)), null(), lit(json!([2]))],
        ),
        Operation::CreateNotebook => (
            RpcMethod::CreateNotebook,
            vec![
                field("title"),
                null(),
                null(),
                lit(json!([2])),
                lit(json!([1])),
            ],
        ),
        Operation::GetNotebook => (
            RpcMethod::GetNotebook,
            vec![
                field("notebook_id"),
                null(),
                lit(json!([2])),
                null(),
                lit(json!(0)),
            ],
        ),
        Operation::RenameNotebook => (
            RpcMethod::RenameNotebook,
            vec![
                field("notebook_id"),
                nested(vec![nested(vec![
                    null(),
                    null(),
                    null(),
                    nested(vec![null(), field("title")]),
                ])]),
            ],
        ),
        Operation::DeleteNotebook => (
            RpcMethod::DeleteNotebook,
            vec![nested(vec![field("notebook_id")]), lit(json!([2]))],
        ),
        Operation::AddTextSource => (
            RpcMethod::AddSource,
            vec![
                nested(vec![nested(with_nulls(
                    vec![null(), nested(vec![field("title"), field("content")])],
                    6,
                    vec![],
                ))]),
                field("notebook_id"),
                lit(json!([2])),
                null(),
                null(),
            ],
        ),
        Operation::AddUrlSource => (
            RpcMethod::AddSource,
            vec![
                nested(vec![nested(with_nulls(
                    vec![null(), null(), nested(vec![field("url")])],
                    5,
                    vec![],
                ))]),
                field("notebook_id"),
                lit(json!([2])),
                null(),
                null(),
            ],
        ),
        Operation::AddYoutubeSource => (
            RpcMethod::AddSource,
            vec![
                nested(vec![nested(with_nulls(
                    nulls(7),
                    0,
                    vec![nested(vec![field("url")]), null(), null(), lit(json!(1))],
                ))]),
                field("notebook_id"),
                lit(json!([2])),
                upload_flags(),
            ],
        ),
        Operation::AddDriveSource => (
            RpcMethod::AddSource,
            vec![
                nested(vec![nested(vec![nested(with_nulls(
                    vec![nested(vec![
                        field("file_id"),
                        field("mime_type"),
                        lit(json!(1)),
                        field("title"),
                    ])],
                    9,
                    vec![lit(json!(1))],
                ))])]),
                field("notebook_id"),
                lit(json!([2])),
                upload_flags(),
            ],
        ),
        Operation::RegisterFileSource => (
            RpcMethod::AddSourceFile,
            vec![
                nested(vec![nested(vec![nested(vec![field("filename")])])]),
                field("notebook_id"),
                lit(json!([2])),
                upload_flags(),
            ],
        ),
        Operation::DeleteSource => (
            RpcMethod::DeleteSource,
            vec![nested(vec![nested(vec![field("source_id")])])],
        ),
        Operation::RenameSource => (
            RpcMethod::UpdateSource,
            vec![
                null(),
                nested(vec![field("source_id")]),
                nested(vec![nested(vec![nested(vec![field("title")])])]),
            ],
        ),
        Operation::RefreshSource => (
            RpcMethod::RefreshSource,
            vec![null(), nested(vec![field("source_id")]), lit(json!([2]))],
        ),
        Operation::CheckSourceFreshness => (
            RpcMethod::CheckSourceFreshness,
            vec![null(), nested(vec![field("source_id")]), lit(json!([2]))],
        ),
        Operation::GetSourceGuide => (
            RpcMethod::GetSourceGuide,
            vec![nested(vec![nested(vec![nested(vec![field("source_id")])])])],
        ),
        Operation::Summarize => (
            RpcMethod::Summarize,
            vec![field("notebook_id"), lit(json!([2]))],
        ),
        // The create call ignores its title position; callers follow up
        // with an update to set title and content.
        Operation::CreateNote => (
            RpcMethod::CreateNote,
            vec![
                field("notebook_id"),
                lit(json!("")),
                lit(json!([1])),
                null(),
                lit(json!("New Note")),
            ],
        ),
        Operation::GetNotes => (RpcMethod::GetNotes, vec![field("notebook_id")]),
        Operation::UpdateNote => (
            RpcMethod::UpdateNote,
            vec![
                field("notebook_id"),
                field("note_id"),
                nested(vec![nested(vec![nested(vec![
                    field("content"),
                    field("title"),
                    lit(json!([])),
                    lit(json!(0)),
                ])])]),
            ],
        ),
        Operation::DeleteNote => (
            RpcMethod::DeleteNote,
            vec![
                field("notebook_id"),
                null(),
                nested(vec![field("note_id")]),
            ],
        ),
        Operation::GenerateAudio => generation(
            1,
            with_nulls(
                vec![],
                2,
                vec![nested(vec![
                    null(),
                    nested(vec![
                        field("instructions"),
                        field("length"),
                        null(),
                        field("source_ids_double"),
                        field("language"),
                        null(),
                        field("format"),
                    ]),
                ])],
            ),
        ),
        Operation::GenerateVideo => generation(
            3,
            with_nulls(
                vec![],
                4,
                vec![nested(vec![
                    null(),
                    null(),
                    nested(vec![
                        field("source_ids_double"),
                        field("language"),
                        field("instructions"),
                        null(),
                        field("format"),
                        field("style"),
                    ]),
                ])],
            ),
        ),
        Operation::GenerateReport => generation(
            2,
            with_nulls(
                vec![],
                3,
                vec![nested(vec![
                    null(),
                    nested(vec![
                        field("title"),
                        field("description"),
                        null(),
                        field("source_ids_double"),
                        field("language"),
                        field("prompt"),
                        null(),
                        lit(json!(true)),
                    ]),
                ])],
            ),
        ),
        // Quiz and flashcards share content type 4 and differ by the
        // variant code. The trailing option pairs are mirror images:
        // quiz sends [quantity, difficulty] at position 7, flashcards
        // send [difficulty, quantity] at position 6.
        Operation::GenerateQuiz => generation(
            4,
            with_nulls(
                vec![],
                5,
                vec![nested(vec![
                    null(),
                    nested(with_nulls(
                        vec![lit(json!(2)), null(), field("instructions")],
                        4,
                        vec![nested(vec![field("quantity"), field("difficulty")])],
                    )),
                ])],
            ),
        ),
        Operation::GenerateFlashcards => generation(
            4,
            with_nulls(
                vec![],
                5,
                vec![nested(vec![
                    null(),
                    nested(with_nulls(
                        vec![lit(json!(1)), null(), field("instructions")],
                        3,
                        vec![nested(vec![field("difficulty"), field("quantity")])],
                    )),
                ])],
            ),
        ),
        Operation::GenerateInfographic => generation(
            7,
            with_nulls(
                vec![],
                10,
                vec![nested(vec![nested(vec![
                    field("instructions"),
                    field("language"),
                    null(),
                    field("orientation"),
                    field("detail"),
                ])])],
            ),
        ),
        Operation::GenerateSlideDeck => generation(
            8,
            with_nulls(
                vec![],
                12,
                vec![nested(vec![nested(vec![
                    field("instructions"),
                    field("language"),
                    field("format"),
                    field("length"),
                ])])],
            ),
        ),
        Operation::GenerateDataTable => generation(
            9,
            with_nulls(
                vec![],
                14,
                vec![nested(vec![
                    null(),
                    nested(vec![field("instructions"), field("language")]),
                ])],
            ),
        ),
        Operation::PollStudio => (
            RpcMethod::PollStudio,
            vec![field("task_id"), field("notebook_id"), lit(json!([2]))],
        ),
        Operation::ListArtifacts => (
            RpcMethod::ListArtifacts,
            vec![
                lit(json!([2])),
                field("notebook_id"),
                lit(json!("NOT artifact.status = \"ARTIFACT_STATUS_SUGGESTED\"")),
            ],
        ),
        Operation::RenameArtifact => (
            RpcMethod::RenameArtifact,
            vec![
                nested(vec![field("artifact_id"), field("title")]),
                lit(json!([["title"]])),
            ],
        ),
        Operation::DeleteArtifact => (
            RpcMethod::DeleteArtifact,
            vec![lit(json!([2])), field("artifact_id")],
        ),
        Operation::ExportArtifact => (
            RpcMethod::ExportArtifact,
            vec![
                null(),
                field("artifact_id"),
                field("content"),
                field("title"),
                field("export_type"),
            ],
        ),
        Operation::ActOnSources => (
            RpcMethod::ActOnSources,
            vec![
                field("source_ids_triple"),
                null(),
                null(),
                null(),
                null(),
                nested(vec![
                    field("action"),
                    lit(json!([["[CONTEXT]", ""]])),
                    lit(json!("")),
                ]),
                null(),
                lit(json!([2, null, [1]])),
            ],
        ),
        Operation::StartFastResearch => (
            RpcMethod::StartFastResearch,
            vec![
                nested(vec![field("query"), field("source_type")]),
                null(),
                lit(json!(1)),
                field("notebook_id"),
            ],
        ),
        Operation::StartDeepResearch => (
            RpcMethod::StartDeepResearch,
            vec![
                null(),
                lit(json!([1])),
                nested(vec![field("query"), field("source_type")]),
                lit(json!(5)),
                field("notebook_id"),
            ],
        ),
        Operation::PollResearch => (
            RpcMethod::PollResearch,
            vec![null(), null(), field("notebook_id")],
        ),
        Operation::ImportResearch => (
            RpcMethod::ImportResearch,
            vec![
                null(),
                lit(json!([1])),
                field("task_id"),
                field("notebook_id"),
                field("sources"),
            ],
        ),
        Operation::ListFeaturedProjects => (
            RpcMethod::ListFeaturedProjects,
            vec![field("page_size"), field("page_token")],
        ),
        Operation::RemoveRecentlyViewed => {
            (RpcMethod::RemoveRecentlyViewed, vec![field("notebook_id")])
        }
        Operation::ProjectAnalytics => (RpcMethod::ProjectAnalytics, vec![field("notebook_id")]),
        Operation::ShareProject => (
            RpcMethod::ShareProject,
            vec![field("notebook_id"), field("settings")],
        ),
        Operation::GetGuidebooks => {
            return Err(SchemaError::UnsupportedOperation {
                operation: operation.name(),
            })
        }
    };
    Ok(built)
}

/// Common outer frame for studio generation calls: `[[2], notebook_id,
/// [null, null, <content type>, <triple-wrapped source ids>, ...tail]]`.
fn generation(content_type: i64, tail: Vec<Slot>) -> (RpcMethod, Vec<Slot>) {
    let mut inner = vec![
        null(),
        null(),
        lit(json!(content_type)),
        field("source_ids_triple"),
    ];
    inner.extend(tail);
    (
        RpcMethod::GenerateArtifact,
        vec![lit(json!([2])), field("notebook_id"), nested(inner)],
    )
}

/// Trailing flag block sent with upload-style source additions.
fn upload_flags() -> Slot {
    lit(json!([1, null, null, null, null, null, null, null, null, null, [1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{wrap_each_double, wrap_each_single};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| String::from(*v)).collect()
    }

    #[test]
    fn create_notebook_shape() {
        let built = build(
            Operation::CreateNotebook,
            &Fields::new().set("title", "Field Notes"),
        )
        .unwrap();
        assert_eq!(built.method, RpcMethod::CreateNotebook);
        assert_eq!(built.params, json!(["Field Notes", null, null, [2], [1]]));
    }

    #[test]
    fn rename_notebook_shape() {
        let built = build(
            Operation::RenameNotebook,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("title", "Renamed"),
        )
        .unwrap();
        assert_eq!(
            built.params,
            json!(["nb_1", [[null, null, null, [null, "Renamed"]]]])
        );
    }

    #[test]
    fn add_text_source_shape() {
        let built = build(
            Operation::AddTextSource,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("title", "Notes")
                .set("content", "body"),
        )
        .unwrap();
        assert_eq!(built.method, RpcMethod::AddSource);
        assert_eq!(
            built.params,
            json!([
                [[null, ["Notes", "body"], null, null, null, null, null, null]],
                "nb_1",
                [2],
                null,
                null
            ])
        );
    }

    #[test]
    fn add_youtube_source_shape() {
        let built = build(
            Operation::AddYoutubeSource,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("url", "https://youtu.be/abc123"),
        )
        .unwrap();
        assert_eq!(
            built.params,
            json!([
                [[
                    null, null, null, null, null, null, null,
                    ["https://youtu.be/abc123"],
                    null, null, 1
                ]],
                "nb_1",
                [2],
                [1, null, null, null, null, null, null, null, null, null, [1]]
            ])
        );
    }

    #[test]
    fn note_shapes_are_pinned() {
        let create = build(
            Operation::CreateNote,
            &Fields::new().set("notebook_id", "nb_1"),
        )
        .unwrap();
        assert_eq!(create.method, RpcMethod::CreateNote);
        assert_eq!(create.params, json!(["nb_1", "", [1], null, "New Note"]));

        let update = build(
            Operation::UpdateNote,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("note_id", "note_1")
                .set("content", "body text")
                .set("title", "Reading notes"),
        )
        .unwrap();
        assert_eq!(
            update.params,
            json!(["nb_1", "note_1", [[["body text", "Reading notes", [], 0]]]])
        );

        let delete = build(
            Operation::DeleteNote,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("note_id", "note_1"),
        )
        .unwrap();
        assert_eq!(delete.params, json!(["nb_1", null, ["note_1"]]));
    }

    #[test]
    fn source_guide_uses_quadruple_wrapping() {
        let built = build(
            Operation::GetSourceGuide,
            &Fields::new().set("source_id", "src_9"),
        )
        .unwrap();
        assert_eq!(built.params, json!([[[["src_9"]]]]));
    }

    #[test]
    fn quiz_and_flashcards_disagree_on_option_order() {
        let sources = ids(&["s1"]);
        let fields = Fields::new()
            .set("notebook_id", "nb_1")
            .set("source_ids_triple", wrap_each_double(&sources))
            .set("instructions", Value::Null)
            .set("quantity", 2)
            .set("difficulty", 3);

        let quiz = build(Operation::GenerateQuiz, &fields).unwrap();
        assert_eq!(
            quiz.params,
            json!([
                [2],
                "nb_1",
                [
                    null, null, 4, [[["s1"]]],
                    null, null, null, null, null,
                    [null, [2, null, null, null, null, null, null, [2, 3]]]
                ]
            ])
        );

        let flashcards = build(Operation::GenerateFlashcards, &fields).unwrap();
        assert_eq!(
            flashcards.params,
            json!([
                [2],
                "nb_1",
                [
                    null, null, 4, [[["s1"]]],
                    null, null, null, null, null,
                    [null, [1, null, null, null, null, null, [3, 2]]]
                ]
            ])
        );
    }

    #[test]
    fn audio_shape_carries_options_at_position_six() {
        let sources = ids(&["s1", "s2"]);
        let built = build(
            Operation::GenerateAudio,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("source_ids_triple", wrap_each_double(&sources))
                .set("source_ids_double", wrap_each_single(&sources))
                .set("instructions", "focus on methods")
                .set("length", 2)
                .set("language", "en")
                .set("format", 1),
        )
        .unwrap();
        assert_eq!(
            built.params,
            json!([
                [2],
                "nb_1",
                [
                    null, null, 1, [[["s1"]], [["s2"]]],
                    null, null,
                    [null, ["focus on methods", 2, null, [["s1"], ["s2"]], "en", null, 1]]
                ]
            ])
        );
    }

    #[test]
    fn data_table_pads_to_position_eighteen() {
        let built = build(
            Operation::GenerateDataTable,
            &Fields::new()
                .set("notebook_id", "nb_1")
                .set("source_ids_triple", json!([]))
                .set("instructions", "compare models")
                .set("language", "en"),
        )
        .unwrap();
        let inner = built.params[2].as_array().unwrap();
        assert_eq!(inner.len(), 19);
        assert_eq!(inner[2], json!(9));
        assert_eq!(inner[18], json!([null, ["compare models", "en"]]));
    }

    #[test]
    fn shape_is_stable_across_field_values() {
        fn shape(value: &Value) -> Value {
            match value {
                Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
                Value::Null => Value::Null,
                _ => json!("x"),
            }
        }

        let a = build(
            Operation::RenameSource,
            &Fields::new().set("source_id", "s1").set("title", "short"),
        )
        .unwrap();
        let b = build(
            Operation::RenameSource,
            &Fields::new()
                .set("source_id", "another-source-id")
                .set("title", "a much longer title with spaces"),
        )
        .unwrap();
        assert_eq!(shape(&a.params), shape(&b.params));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = build(Operation::CreateNotebook, &Fields::new()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                operation: "create_notebook",
                field: "title",
            }
        );
    }

    #[test]
    fn explicit_null_field_is_not_missing() {
        let built = build(
            Operation::ListFeaturedProjects,
            &Fields::new().set("page_size", 10).set("page_token", Value::Null),
        )
        .unwrap();
        assert_eq!(built.params, json!([10, null]));
    }

    #[test]
    fn unverified_operation_is_refused() {
        let err = build(Operation::GetGuidebooks, &Fields::new()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnsupportedOperation {
                operation: "get_guidebooks",
            }
        );
    }
}
