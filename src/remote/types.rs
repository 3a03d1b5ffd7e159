//! Request/response payloads for the notes API.

use crate::model::NoteId;

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateNoteRequest<'a> {
    pub(super) title: &'a str,
    pub(super) content: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct UpdateNoteRequest<'a> {
    pub(super) id: &'a NoteId,
    pub(super) title: &'a str,
    pub(super) content: &'a str,
}

/// Error body some servers return alongside a non-2xx status.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
