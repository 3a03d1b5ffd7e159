mod config;
mod note;

pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::note::{Note, NoteDraft, NoteId};
