//! Sample data tab: a random handful of rows from each table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::text_table::text_table;

/// Renders the random samples of all three tables. `r` redraws them.
pub fn render_sample(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for (sample, summary) in state.samples.iter().zip(&state.summaries) {
        lines.push(Line::from(Span::styled(
            format!(
                "Random sample of {} ({} of {} rows)",
                summary.name,
                sample.row_count(),
                summary.shape.0
            ),
            Styles::section_header(),
        )));

        let rows: Vec<Vec<String>> = sample
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        lines.extend(text_table(sample.headers(), &rows));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Press r to draw a new sample",
        Styles::help(),
    )));

    let max_scroll = lines.len().saturating_sub(area.height as usize);
    if state.sample_scroll > max_scroll {
        state.sample_scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines).scroll((state.sample_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
