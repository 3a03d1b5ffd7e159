use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Note;

use super::super::view::render_view_chrome;

/// What the list panel needs from the board.
pub(in crate::tui_shell) struct NotesListState<'a> {
    pub(in crate::tui_shell) notes: &'a [Note],
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) loading: bool,
    pub(in crate::tui_shell) creating: bool,
    pub(in crate::tui_shell) list_focused: bool,
}

pub(in crate::tui_shell) fn render_notes_list(
    frame: &mut ratatui::Frame,
    state: &NotesListState<'_>,
    area: Rect,
) {
    let detail = if state.loading {
        String::new()
    } else {
        format!("{} note(s)", state.notes.len())
    };
    let inner = render_view_chrome(frame, "Notes", &detail, area);

    if state.loading {
        frame.render_widget(
            Paragraph::new(centered_lines(
                inner,
                vec![Line::from(Span::styled(
                    "Loading notes...",
                    Style::default().fg(Color::Gray),
                ))],
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if state.notes.is_empty() {
        if !state.creating {
            let lines = vec![
                Line::from(Span::styled(
                    "No Notes Yet",
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Press n to create your first note!",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(centered_lines(inner, lines)).alignment(Alignment::Center),
                inner,
            );
        }
        return;
    }

    let (lines, sel_start, sel_end) = note_lines(state);
    let height = inner.height as usize;
    let mut scroll = 0usize;
    if sel_end > height {
        scroll = (sel_end - height).min(sel_start);
    }
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
}

/// Renders each note as a title row followed by its content lines; returns
/// the line span of the selected note.
fn note_lines<'a>(state: &NotesListState<'a>) -> (Vec<Line<'a>>, usize, usize) {
    let mut lines = Vec::new();
    let mut sel_start = 0;
    let mut sel_end = 0;
    let selected = state.selected.min(state.notes.len().saturating_sub(1));

    for (i, note) in state.notes.iter().enumerate() {
        let is_sel = i == selected;
        if i > 0 {
            lines.push(Line::from(""));
        }
        if is_sel {
            sel_start = lines.len();
        }

        let (marker, title_style) = if is_sel && state.list_focused {
            (
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if is_sel {
            (
                Span::styled("> ", Style::default().fg(Color::DarkGray)),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            (Span::raw("  "), Style::default().add_modifier(Modifier::BOLD))
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(note.title.as_str(), title_style),
        ]));
        for content_line in note.content.split('\n') {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(content_line, Style::default().fg(Color::White)),
            ]));
        }

        if is_sel {
            sel_end = lines.len();
        }
    }

    (lines, sel_start, sel_end)
}

fn centered_lines(area: Rect, lines: Vec<Line<'_>>) -> Vec<Line<'_>> {
    let pad = (area.height as usize).saturating_sub(lines.len()) / 2;
    let mut out: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    out.extend(lines);
    out
}
