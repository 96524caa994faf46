//! Top header bar with the tab list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

/// Renders the one-line header: program name and the tab bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" covidash ", Styles::header()), Span::raw(" ")];

    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!("{}:{}", i + 1, tab.name()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!("— {}", state.current_tab.title()),
        Styles::dim(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
