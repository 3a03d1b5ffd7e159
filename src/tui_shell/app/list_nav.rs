use super::*;

impl App {
    pub(in crate::tui_shell) fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected)
    }

    pub(in crate::tui_shell) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        let max = self.notes.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub(in crate::tui_shell) fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.notes.len().saturating_sub(1));
    }
}
