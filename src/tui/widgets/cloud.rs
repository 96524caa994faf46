//! Word cloud tab.
//!
//! Terminal cells cannot scale glyphs, so weight renders as a color ramp
//! plus bold for the heaviest words, ordered heaviest first.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::state::AppState;
use crate::tui::style::{Styles, rgb};
use crate::view::cloud::WordCloud;
use crate::view::scale::ColorScale;

/// Words heavier than this render bold.
const BOLD_WEIGHT: f64 = 2.0 / 3.0;

/// Renders both clouds side by side.
pub fn render_clouds(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::horizontal(vec![
        Constraint::Ratio(1, state.clouds.len().max(1) as u32);
        state.clouds.len().max(1)
    ])
    .split(area);

    for ((title, cloud), column) in state.clouds.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "));
        let paragraph = match cloud {
            Err(err) => Paragraph::new(err.to_string()).style(Styles::error()),
            Ok(cloud) if cloud.is_empty() => {
                Paragraph::new("(no words)").style(Styles::dim())
            }
            Ok(cloud) => Paragraph::new(cloud_line(cloud)).wrap(Wrap { trim: true }),
        };
        frame.render_widget(paragraph.block(block), *column);
    }
}

fn cloud_line(cloud: &WordCloud) -> Line<'_> {
    let spans: Vec<Span> = cloud
        .words()
        .iter()
        .flat_map(|w| {
            let mut style = Styles::default().fg(rgb(ColorScale::PLASMA.sample(w.weight)));
            if w.weight > BOLD_WEIGHT {
                style = style.add_modifier(Modifier::BOLD);
            }
            [Span::styled(w.word.as_str(), style), Span::raw("  ")]
        })
        .collect();
    Line::from(spans)
}
