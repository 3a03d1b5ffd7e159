use super::super::super::*;

pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_editing_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.selected = app.notes.len().saturating_sub(1),
        _ => {}
    }
}
