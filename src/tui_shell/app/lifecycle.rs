use super::*;

impl App {
    pub(super) fn load(api: Box<dyn NotesApi>, origin: String) -> Self {
        let mut app = App::new(api, origin);
        app.request_refresh();
        app.push_output(vec![
            "n: new note  e/Enter: edit  d: delete  r: refresh  q: quit".to_string(),
        ]);
        app
    }

    /// Shows the loading placeholder and defers the list request until after
    /// the next frame is drawn.
    pub(super) fn request_refresh(&mut self) {
        self.loading = true;
        self.fetch_pending = true;
    }

    pub(super) fn run_pending_fetch(&mut self) {
        if !self.fetch_pending {
            return;
        }
        self.fetch_pending = false;
        self.fetch_notes();
    }
}
