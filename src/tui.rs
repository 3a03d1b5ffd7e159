use anyhow::Result;

use crate::remote::NotesClient;

/// Runs the interactive note board against `client` until the user quits.
pub fn run(client: NotesClient) -> Result<()> {
    let origin = client.base_url().to_string();
    tracing::info!(%origin, "starting note board");
    crate::tui_shell::run(Box::new(client), origin)
}
