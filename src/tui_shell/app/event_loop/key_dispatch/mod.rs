use super::super::*;

mod form_keys;
mod list_keys;

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.form.is_some() {
        form_keys::handle_form_key(app, key);
        return;
    }

    list_keys::handle_list_key(app, key);
}
