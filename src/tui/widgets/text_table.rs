//! Plain-text table formatting shared by the info and sample views.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::tui::style::Styles;
use crate::util::truncate;

/// Widest a single cell may render.
const MAX_CELL: usize = 18;

/// Formats headers and rows into aligned text lines, header first.
pub fn text_table(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row.get(i).map(|c| c.chars().count()).unwrap_or(0))
                .chain([header.chars().count()])
                .max()
                .unwrap_or(0)
                .min(MAX_CELL)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(Line::from(Span::styled(
        format_row(headers, &widths),
        Styles::default().add_modifier(Modifier::BOLD),
    )));
    for row in rows {
        lines.push(Line::from(Span::styled(
            format_row(row, &widths),
            Styles::default(),
        )));
    }
    lines
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", truncate(cell, w), w = w))
        .collect::<Vec<_>>()
        .join("  ")
}
