use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

/// Draws a bordered panel with a yellow title and returns the inner area.
pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    detail: &str,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if !detail.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            detail.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
