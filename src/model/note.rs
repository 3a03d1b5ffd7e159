use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
///
/// The remote API does not pin down an id type; both numeric and string ids
/// are accepted and round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Text(String),
}

impl NoteId {
    /// Parses an id typed on the command line. Canonical integers stay
    /// integers so the `id` echoed in update bodies matches what the server
    /// handed out; anything else (including `007`) is kept as text.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            anyhow::bail!("note id must not be empty");
        }
        Ok(match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => NoteId::Int(n),
            _ => NoteId::Text(raw.to_string()),
        })
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(n) => write!(f, "{}", n),
            NoteId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Unsaved title/content pair, as edited in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields must be non-empty. Whitespace counts.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}
