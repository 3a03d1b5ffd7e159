use super::*;

impl App {
    pub(in crate::tui_shell) fn fetch_notes(&mut self) {
        self.loading = true;
        match self.api.list_notes() {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "fetched notes");
                self.notes = notes;
                self.clear_error();
                self.push_output(vec![format!("Loaded {} note(s)", self.notes.len())]);
            }
            Err(err) => {
                self.push_error(format!("Failed to fetch notes: {:#}", err));
            }
        }
        self.loading = false;
        self.clamp_selection();
    }

    /// Opens an empty form. Ignored while any form is already open.
    pub(in crate::tui_shell) fn open_create_form(&mut self) {
        if self.form.is_some() {
            return;
        }
        self.form = Some(NoteForm::create());
    }

    /// Opens the form pre-filled from the selected note, replacing any open
    /// form.
    pub(in crate::tui_shell) fn start_editing_selected(&mut self) {
        let Some(note) = self.selected_note() else {
            return;
        };
        self.form = Some(NoteForm::edit(note));
    }

    pub(in crate::tui_shell) fn close_form(&mut self) {
        self.form = None;
    }

    /// Sends the form. No-op while either field is empty.
    pub(in crate::tui_shell) fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        if !form.can_submit() {
            return;
        }
        let draft = form.draft();
        match form.mode.clone() {
            FormMode::Create => self.create_note(&draft),
            FormMode::Edit(id) => self.update_note(&id, &draft),
        }
    }

    fn create_note(&mut self, draft: &crate::model::NoteDraft) {
        match self.api.create_note(draft) {
            Ok(note) => {
                self.push_output(vec![format!("Created \"{}\"", note.title)]);
                self.notes.insert(0, note);
                self.selected = 0;
                self.form = None;
                self.clear_error();
            }
            Err(err) => {
                self.push_error(format!("Failed to create note: {:#}", err));
            }
        }
    }

    fn update_note(&mut self, id: &NoteId, draft: &crate::model::NoteDraft) {
        match self.api.update_note(id, draft) {
            Ok(updated) => {
                self.push_output(vec![format!("Updated \"{}\"", updated.title)]);
                for note in self.notes.iter_mut().filter(|n| &n.id == id) {
                    *note = updated.clone();
                }
                self.form = None;
                self.clear_error();
            }
            Err(err) => {
                self.push_error(format!("Failed to update note: {:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn delete_selected(&mut self) {
        let Some(id) = self.selected_note().map(|n| n.id.clone()) else {
            return;
        };
        self.delete_note(&id);
    }

    fn delete_note(&mut self, id: &NoteId) {
        match self.api.delete_note(id) {
            Ok(()) => {
                self.notes.retain(|n| &n.id != id);
                if self.editing_id() == Some(id) {
                    self.form = None;
                }
                self.clear_error();
                self.clamp_selection();
                self.push_output(vec![format!("Deleted note {}", id)]);
            }
            Err(err) => {
                self.push_error(format!("Failed to delete note: {:#}", err));
            }
        }
    }
}
