use super::*;

impl NotesApi for NotesClient {
    fn list_notes(&self) -> Result<Vec<Note>> {
        with_retries("list notes", || {
            let resp = self.send(self.client.get(self.url("/notes")), "list notes")?;
            let notes: Vec<Note> = self
                .ensure_ok(resp, "list notes")?
                .json()
                .context("parse notes")?;
            Ok(notes)
        })
    }

    fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        let req = self.client.post(self.url("/notes")).json(&CreateNoteRequest {
            title: &draft.title,
            content: &draft.content,
        });
        let resp = self.send(req, "create note")?;
        let note: Note = self
            .ensure_ok(resp, "create note")?
            .json()
            .context("parse created note")?;
        tracing::info!(id = %note.id, "created note");
        Ok(note)
    }

    fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note> {
        let req = self.client.put(self.note_url(id)?).json(&UpdateNoteRequest {
            id,
            title: &draft.title,
            content: &draft.content,
        });
        let resp = self.send(req, "update note")?;
        let note: Note = self
            .ensure_ok(resp, "update note")?
            .json()
            .context("parse updated note")?;
        tracing::info!(id = %note.id, "updated note");
        Ok(note)
    }

    fn delete_note(&self, id: &NoteId) -> Result<()> {
        let resp = self.send(self.client.delete(self.note_url(id)?), "delete note")?;
        self.ensure_ok(resp, "delete note")?;
        tracing::info!(%id, "deleted note");
        Ok(())
    }
}
