mod note_form;
mod notes_list;

pub(in crate::tui_shell) use note_form::{FORM_HEIGHT, render_note_form};
pub(in crate::tui_shell) use notes_list::{NotesListState, render_notes_list};
