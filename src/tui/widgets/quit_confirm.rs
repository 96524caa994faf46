//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Renders a small centered confirmation dialog.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let width = 34u16.min(area.width);
    let height = 3u16.min(area.height);
    let popup = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let line = Line::from(vec![
        Span::raw("Quit covidash? "),
        Span::styled("y", Style::default().fg(Color::Yellow)),
        Span::raw("/"),
        Span::styled("n", Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block).centered(), popup);
}
