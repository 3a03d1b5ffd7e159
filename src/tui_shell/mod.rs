use anyhow::Result;

use crate::remote::NotesApi;

mod app;
mod form;
mod input;
mod view;
mod views;

pub(crate) fn run(api: Box<dyn NotesApi>, origin: String) -> Result<()> {
    app::run(api, origin)
}
