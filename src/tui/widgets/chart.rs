//! Chart tab dispatcher.
//!
//! Picks the selected gallery entry of the current section and hands it to
//! the renderer for its kind. Entries that failed to prepare render as an
//! in-place error block; the rest of the gallery is unaffected.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::prepare::PreparedChart;

use super::bar::{render_animated_bar, render_bar};
use super::line::render_line;
use super::map::render_map;
use super::scatter::render_scatter;

/// Renders the selected chart of the current section.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let charts = state.current_charts();
    let Some(entry) = state.current_entry() else {
        frame.render_widget(
            Paragraph::new("(no charts in this section)").style(Styles::dim()),
            area,
        );
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

    let title = Line::from(vec![
        Span::styled(
            format!("[{}] {}", entry.spec.id, entry.spec.title),
            Styles::chart_title(),
        ),
        Span::styled(
            format!("  ({}/{} in section)", state.selected_chart() + 1, charts.len()),
            Styles::dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    match &entry.result {
        Err(err) => render_chart_error(frame, chunks[1], &err.to_string()),
        Ok(PreparedChart::Bar(bar)) => render_bar(frame, chunks[1], bar, state.element),
        Ok(PreparedChart::Scatter(scatter)) => {
            render_scatter(frame, chunks[1], scatter, state.element)
        }
        Ok(PreparedChart::Line(line)) => render_line(frame, chunks[1], line),
        Ok(PreparedChart::Map(map)) => {
            render_map(frame, chunks[1], map, state.frame, state.paused)
        }
        Ok(PreparedChart::AnimatedBar(bar)) => {
            render_animated_bar(frame, chunks[1], bar, state.frame, state.paused, state.element)
        }
    }
}

fn render_chart_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::error())
        .title(" chart not available ");
    let paragraph = Paragraph::new(format!("{message}\n\nOther charts are unaffected."))
        .style(Styles::error())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
