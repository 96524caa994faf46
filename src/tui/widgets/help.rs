//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 70);
    let popup_height = (area.height * 70 / 100).clamp(10, 24);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let visible = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let key = Style::default().fg(Color::Yellow);
    let entry = |k: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<11}"), key),
            Span::raw(text),
        ])
    };
    vec![
        Line::from(Span::styled(
            "Navigation",
            Style::default().fg(Color::Cyan),
        )),
        entry("Tab / S-Tab", "next / previous tab"),
        entry("1-8", "jump to a tab"),
        entry("Up/Down", "select chart, or scroll text tabs"),
        entry("n / p", "next / previous chart in section"),
        entry("[ / ]", "walk the chart's bars or points"),
        Line::default(),
        Line::from(Span::styled("Animation", Style::default().fg(Color::Cyan))),
        entry("Left/Right", "step date frames (pauses playback)"),
        entry("Space", "pause / resume playback"),
        Line::default(),
        Line::from(Span::styled("Data", Style::default().fg(Color::Cyan))),
        entry("r", "draw a new random sample"),
        Line::default(),
        Line::from(Span::styled("General", Style::default().fg(Color::Cyan))),
        entry("?", "toggle this help"),
        entry("q", "quit (asks first)"),
        entry("Ctrl-C", "quit immediately"),
    ]
}
