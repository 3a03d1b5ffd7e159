use anyhow::{Context, Result};

use notemaker::model::{Note, NoteDraft, NoteId};
use notemaker::remote::{NotesApi, NotesClient};

use crate::Commands;

mod notes;

pub(super) fn handle_command(client: &NotesClient, command: Commands) -> Result<()> {
    match command {
        Commands::List(args) => notes::handle_list_command(client, args.json)?,
        Commands::Create(args) => {
            notes::handle_create_command(client, NoteDraft::new(args.title, args.content), args.json)?
        }
        Commands::Update(args) => notes::handle_update_command(
            client,
            NoteId::parse(&args.id)?,
            NoteDraft::new(args.title, args.content),
            args.json,
        )?,
        Commands::Delete(args) => notes::handle_delete_command(client, NoteId::parse(&args.id)?)?,
    }
    Ok(())
}
