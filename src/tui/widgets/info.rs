//! Dataset information tab: shape, size, column types, head preview.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::util::group_digits;
use crate::view::DatasetSummary;

use super::text_table::text_table;

/// Renders all three dataset summaries as one scrollable column.
pub fn render_info(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for summary in &state.summaries {
        lines.extend(summary_lines(summary));
        lines.push(Line::default());
    }

    let max_scroll = lines.len().saturating_sub(area.height as usize);
    if state.info_scroll > max_scroll {
        state.info_scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines).scroll((state.info_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn summary_lines(summary: &DatasetSummary) -> Vec<Line<'static>> {
    let (rows, cols) = summary.shape;
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} — {} rows x {} columns ({} cells)",
            summary.name,
            group_digits(rows as u64),
            group_digits(cols as u64),
            group_digits(summary.cell_count as u64)
        ),
        Styles::section_header(),
    ))];

    lines.push(Line::from(Span::styled("Columns:", Styles::dim())));
    let name_width = summary
        .columns
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    for column in &summary.columns {
        lines.push(Line::from(Span::styled(
            format!(
                "  {:<name_width$}  {:<6} {} non-null",
                column.name,
                column.dtype.name(),
                group_digits(column.non_null as u64),
                name_width = name_width
            ),
            Styles::default(),
        )));
    }

    lines.push(Line::from(Span::styled("First rows:", Styles::dim())));
    for line in text_table(&summary.headers, &summary.head) {
        lines.push(line);
    }
    lines
}
