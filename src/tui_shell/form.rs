use crate::model::{Note, NoteDraft, NoteId};

use super::input::Input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum FormMode {
    Create,
    Edit(NoteId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormField {
    Title,
    Content,
}

#[derive(Debug)]
pub(super) struct NoteForm {
    pub(super) mode: FormMode,
    pub(super) title: Input,
    pub(super) content: Input,
    pub(super) focus: FormField,
}

impl NoteForm {
    pub(super) fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: Input::default(),
            content: Input::default(),
            focus: FormField::Title,
        }
    }

    pub(super) fn edit(note: &Note) -> Self {
        Self {
            mode: FormMode::Edit(note.id.clone()),
            title: Input::with_text(&note.title),
            content: Input::with_text(&note.content),
            focus: FormField::Title,
        }
    }

    pub(super) fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub(super) fn editing_id(&self) -> Option<&NoteId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub(super) fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Note"
        } else {
            "Create New Note"
        }
    }

    pub(super) fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Note"
        } else {
            "Save Note"
        }
    }

    pub(super) fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.as_str(), self.content.as_str())
    }

    pub(super) fn can_submit(&self) -> bool {
        self.draft().is_submittable()
    }

    pub(super) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Title,
        };
    }

    pub(super) fn focused_mut(&mut self) -> &mut Input {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
        }
    }
}
