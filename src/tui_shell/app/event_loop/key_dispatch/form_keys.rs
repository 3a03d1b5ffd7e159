use super::super::super::*;

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Char('s') if ctrl => app.submit_form(),
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(form) = app.form.as_mut() {
                form.toggle_focus();
            }
        }
        _ => {
            if let Some(form) = app.form.as_mut() {
                apply_edit_key(form, key);
            }
        }
    }
}

fn apply_edit_key(form: &mut NoteForm, key: KeyEvent) {
    let focus = form.focus;
    match key.code {
        // Title is single-line; Enter moves on to the content.
        KeyCode::Enter if focus == FormField::Title => form.toggle_focus(),
        KeyCode::Enter => form.focused_mut().insert_char('\n'),
        KeyCode::Backspace => form.focused_mut().backspace(),
        KeyCode::Delete => form.focused_mut().delete(),
        KeyCode::Left => form.focused_mut().move_left(),
        KeyCode::Right => form.focused_mut().move_right(),
        KeyCode::Home => form.focused_mut().move_home(),
        KeyCode::End => form.focused_mut().move_end(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                form.focused_mut().insert_char(c);
            }
        }
        _ => {}
    }
}
