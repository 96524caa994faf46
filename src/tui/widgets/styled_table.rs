//! Styled table tab: the cleaned per-country table with the original
//! purple-to-white colorscale.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::data::load::OVERALL_FILE;
use crate::tui::state::{AppState, STYLED_ROWS};
use crate::tui::style::Styles;
use crate::util::truncate;

/// Widest a single column may render.
const MAX_COL: u16 = 18;

/// Renders the first 15 rows of the cleaned overall table.
pub fn render_styled_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" First {STYLED_ROWS} rows of {OVERALL_FILE} "));

    let table = match &state.styled {
        Ok(table) => table,
        Err(err) => {
            let paragraph = Paragraph::new(format!("cannot build table view: {err}"))
                .style(Styles::error())
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let widths: Vec<Constraint> = table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let content = table
                .rows()
                .iter()
                .map(|row| row[i].to_string().chars().count())
                .chain([header.chars().count()])
                .max()
                .unwrap_or(0);
            Constraint::Length((content as u16).min(MAX_COL))
        })
        .collect();

    let header = Row::new(
        table
            .headers()
            .iter()
            .map(|h| Cell::from(truncate(h, MAX_COL as usize))),
    )
    .style(Styles::styled_table_header());

    let rows = table.rows().iter().enumerate().map(|(i, row)| {
        Row::new(
            row.iter()
                .map(|cell| Cell::from(truncate(&cell.to_string(), MAX_COL as usize))),
        )
        .style(Styles::styled_table_row(i))
    });

    let widget = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(widget, area);
}
