use anyhow::{Context, Result};

use crate::model::{ClientConfig, Note, NoteDraft, NoteId};

mod http_client;
use self::http_client::with_retries;

mod types;
pub use self::types::*;
mod notes;

/// The four calls the note board needs from a backend.
pub trait NotesApi {
    fn list_notes(&self) -> Result<Vec<Note>>;
    fn create_note(&self, draft: &NoteDraft) -> Result<Note>;
    fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note>;
    fn delete_note(&self, id: &NoteId) -> Result<()>;
}

pub struct NotesClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl NotesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("notemaker/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
