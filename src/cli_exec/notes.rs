use super::*;

pub(super) fn handle_list_command(client: &NotesClient, json: bool) -> Result<()> {
    let notes = client
        .list_notes()
        .context("Failed to fetch notes")?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&notes).context("serialize notes json")?
        );
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes yet");
        return Ok(());
    }
    for note in &notes {
        print_note(note);
    }
    Ok(())
}

pub(super) fn handle_create_command(
    client: &NotesClient,
    draft: NoteDraft,
    json: bool,
) -> Result<()> {
    require_submittable(&draft)?;
    let note = client
        .create_note(&draft)
        .context("Failed to create note")?;
    print_result(&note, json)
}

pub(super) fn handle_update_command(
    client: &NotesClient,
    id: NoteId,
    draft: NoteDraft,
    json: bool,
) -> Result<()> {
    require_submittable(&draft)?;
    let note = client
        .update_note(&id, &draft)
        .context("Failed to update note")?;
    print_result(&note, json)
}

pub(super) fn handle_delete_command(client: &NotesClient, id: NoteId) -> Result<()> {
    client
        .delete_note(&id)
        .context("Failed to delete note")?;
    println!("Deleted {}", id);
    Ok(())
}

fn require_submittable(draft: &NoteDraft) -> Result<()> {
    if draft.title.is_empty() {
        anyhow::bail!("title must not be empty");
    }
    if draft.content.is_empty() {
        anyhow::bail!("content must not be empty");
    }
    Ok(())
}

fn print_result(note: &Note, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(note).context("serialize note json")?
        );
    } else {
        println!("{}", note.id);
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!("[{}] {}", note.id, note.title);
    for line in note.content.lines() {
        println!("    {}", line);
    }
}
