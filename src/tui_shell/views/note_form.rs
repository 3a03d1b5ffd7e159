use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::form::{FormField, NoteForm};
use super::super::input::Input;

const CONTENT_ROWS: u16 = 5;

/// Outer height of the form panel, borders included.
pub(in crate::tui_shell) const FORM_HEIGHT: u16 = 3 + (CONTENT_ROWS + 2) + 1 + 2;

pub(in crate::tui_shell) fn render_note_form(
    frame: &mut ratatui::Frame,
    form: &NoteForm,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Line::from(vec![
            Span::styled(
                form.heading(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Esc to close", Style::default().fg(Color::Gray)),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_field(
        frame,
        parts[0],
        "Title",
        "Note Title",
        &form.title,
        form.focus == FormField::Title,
    );
    render_field(
        frame,
        parts[1],
        "Content",
        "Note Content",
        &form.content,
        form.focus == FormField::Content,
    );

    let submit_style = if form.can_submit() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" Ctrl+S  {} ", form.submit_label()), submit_style),
            Span::raw("  "),
            Span::styled("Tab to switch fields", Style::default().fg(Color::Gray)),
        ])),
        parts[2],
    );
}

fn render_field(
    frame: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    input: &Input,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(label.to_string());
    let inner = block.inner(area);

    let (line, col) = input.cursor_line_col();
    let rows = inner.height.max(1) as usize;
    let scroll = line.saturating_sub(rows - 1);

    let body = if input.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
    } else {
        Paragraph::new(input.as_str().to_string()).scroll((scroll as u16, 0))
    };
    frame.render_widget(body.block(block), area);

    if focused {
        let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (line - scroll) as u16;
        frame.set_cursor_position((x, y));
    }
}
