use super::*;

use super::super::views::{FORM_HEIGHT, NotesListState, render_note_form, render_notes_list};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let error_height = if app.error.is_some() { 3 } else { 0 };
    let form_height = if app.form.is_some() { FORM_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Length(form_height),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let mut spans = vec![
        Span::styled(
            " Note Maker ",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.origin.as_str(), Style::default().fg(Color::Gray)),
    ];
    if app.form.is_none() && !app.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("n: New Note", Style::default().fg(Color::Blue)));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if let Some(err) = &app.error {
        frame.render_widget(
            Paragraph::new(err.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                ),
            chunks[1],
        );
    }

    if let Some(form) = &app.form {
        render_note_form(frame, form, chunks[2]);
    }

    let list = NotesListState {
        notes: &app.notes,
        selected: app.selected,
        loading: app.loading,
        creating: app.is_creating(),
        list_focused: app.form.is_none(),
    };
    render_notes_list(frame, &list, chunks[3]);

    // Last result
    let mut lines = Vec::new();
    if let Some(r) = app.last_result() {
        let style = match r.kind {
            EntryKind::Output => Style::default().fg(Color::White),
            EntryKind::Error => Style::default().fg(Color::Red),
        };
        let text = r.lines.join(" ");
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", fmt_ts_ui(&r.ts)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(text, style),
        ]));
    } else {
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().add_modifier(Modifier::DIM)),
        ),
        chunks[4],
    );
}
