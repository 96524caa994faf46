//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, Tab};
use super::style::Styles;
use super::widgets::{
    render_chart, render_clouds, render_header, render_help, render_info, render_quit_confirm,
    render_sample, render_styled_table,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);

    // Popups overlay everything.
    if state.show_help {
        let mut scroll = state.help_scroll;
        render_help(frame, area, &mut scroll);
        state.help_scroll = scroll;
    }
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}

/// Renders content based on the current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.current_tab {
        Tab::Info => render_info(frame, area, state),
        Tab::Sample => render_sample(frame, area, state),
        Tab::StyledTable => render_styled_table(frame, area, state),
        Tab::Bars | Tab::Scatters | Tab::Maps | Tab::UnitedStates => {
            render_chart(frame, area, state)
        }
        Tab::Clouds => render_clouds(frame, area, state),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(" Tab", Styles::help_key()),
        Span::styled(" switch  ", Styles::help()),
    ];
    match state.current_tab {
        Tab::Info | Tab::Sample => {
            spans.push(Span::styled("↑↓", Styles::help_key()));
            spans.push(Span::styled(" scroll  ", Styles::help()));
        }
        Tab::Bars | Tab::Scatters | Tab::Maps | Tab::UnitedStates => {
            spans.push(Span::styled("↑↓", Styles::help_key()));
            spans.push(Span::styled(" chart  ", Styles::help()));
            if state.element_count() > 0 {
                spans.push(Span::styled("[ ]", Styles::help_key()));
                spans.push(Span::styled(" detail  ", Styles::help()));
            }
            if state.is_animated() {
                spans.push(Span::styled("←→", Styles::help_key()));
                spans.push(Span::styled(" frame  ", Styles::help()));
                spans.push(Span::styled("Space", Styles::help_key()));
                spans.push(Span::styled(" pause  ", Styles::help()));
            }
        }
        _ => {}
    }
    if state.current_tab == Tab::Sample {
        spans.push(Span::styled("r", Styles::help_key()));
        spans.push(Span::styled(" resample  ", Styles::help()));
    }
    spans.push(Span::styled("?", Styles::help_key()));
    spans.push(Span::styled(" help  ", Styles::help()));
    spans.push(Span::styled("q", Styles::help_key()));
    spans.push(Span::styled(" quit", Styles::help()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
