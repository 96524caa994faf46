//! Bar chart renderers: vertical, horizontal, and date-animated.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

use crate::tui::style::{Styles, rgb};
use crate::util::{format_magnitude, truncate};
use crate::view::prepare::{PreparedAnimatedBar, PreparedBar};

/// Widest a vertical bar may render.
const MAX_BAR_WIDTH: u16 = 9;
/// Label column width in horizontal mode.
const LABEL_WIDTH: usize = 16;

/// Renders a static bar chart in the orientation the entry asks for.
/// `selected` drives the per-bar detail readout under the chart.
pub fn render_bar(frame: &mut Frame, area: Rect, bar: &PreparedBar, selected: usize) {
    if bar.values.is_empty() {
        frame.render_widget(Paragraph::new("(no data)").style(Styles::dim()), area);
        return;
    }
    if bar.horizontal {
        render_horizontal(frame, area, bar, selected);
    } else {
        render_vertical(frame, area, bar, selected);
    }
}

fn render_vertical(frame: &mut Frame, area: Rect, bar: &PreparedBar, selected: usize) {
    let chunks = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    // Wide date axes carry more bars than the terminal has columns; keep
    // every k-th bar so the shape of the series survives.
    let capacity = (chunks[0].width / 2).max(1) as usize;
    let stride = bar.values.len().div_ceil(capacity);
    let picked: Vec<usize> = (0..bar.values.len()).step_by(stride.max(1)).collect();

    let bar_width = (chunks[0].width / picked.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(1, MAX_BAR_WIDTH);

    let bars: Vec<Bar> = picked
        .iter()
        .map(|&i| {
            let mut b = Bar::default()
                .value(bar.values[i].max(0.0) as u64)
                .style(rgb(bar.colors[i]))
                .text_value(if i == selected {
                    format_magnitude(bar.values[i])
                } else {
                    String::new()
                });
            if bar_width >= 3 {
                b = b.label(Line::from(truncate(&bar.labels[i], bar_width as usize)));
            }
            b
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, chunks[0]);

    frame.render_widget(
        Paragraph::new(detail_line(bar, selected)).style(Styles::dim()),
        chunks[1],
    );

    let note = if stride > 1 {
        format!(
            "{} by {} — showing every {}th of {} bars",
            bar.value_label,
            bar.category_label,
            stride,
            bar.values.len()
        )
    } else {
        format!("{} by {}", bar.value_label, bar.category_label)
    };
    frame.render_widget(Paragraph::new(note).style(Styles::axis()), chunks[2]);
}

fn render_horizontal(frame: &mut Frame, area: Rect, bar: &PreparedBar, selected: usize) {
    let max = bar.values.iter().copied().fold(0.0, f64::max).max(1.0);
    let track = area
        .width
        .saturating_sub((LABEL_WIDTH + 13) as u16)
        .max(8) as f64;

    let mut lines: Vec<Line> = bar
        .values
        .iter()
        .zip(&bar.labels)
        .zip(&bar.colors)
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, ((&value, label), &color))| {
            let run = ((value / max) * track).round().max(0.0) as usize;
            let marker = if i == selected { "▸" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!(
                        "{marker}{:<width$} ",
                        truncate(label, LABEL_WIDTH),
                        width = LABEL_WIDTH
                    ),
                    Styles::default(),
                ),
                Span::styled("█".repeat(run.max(1)), rgb(color)),
                Span::styled(format!(" {}", format_magnitude(value)), Styles::dim()),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        detail_line(bar, selected),
        Styles::dim(),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} by {}", bar.value_label, bar.category_label),
        Styles::axis(),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Readout for the highlighted bar: label, value, and its detail columns.
fn detail_line(bar: &PreparedBar, selected: usize) -> String {
    let Some(label) = bar.labels.get(selected) else {
        return String::new();
    };
    let value = format_magnitude(bar.values[selected]);
    let detail = &bar.details[selected];
    if detail.is_empty() {
        format!("▸ {label}: {value}")
    } else {
        format!("▸ {label}: {value} ({detail})")
    }
}

/// Renders one frame of the per-category sums, value axis held still
/// across frames.
pub fn render_animated_bar(
    frame: &mut Frame,
    area: Rect,
    bar: &PreparedAnimatedBar,
    frame_index: usize,
    paused: bool,
    selected: usize,
) {
    let Some(current) = bar.frames.get(frame_index.min(bar.frames.len().saturating_sub(1)))
    else {
        frame.render_widget(Paragraph::new("(no data)").style(Styles::dim()), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let status = Line::from(vec![
        Span::styled(current.label.clone(), Styles::chart_title()),
        Span::styled(
            format!(
                "  frame {}/{} {}",
                frame_index + 1,
                bar.frames.len(),
                if paused { "[paused]" } else { "[playing]" }
            ),
            Styles::dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    let bar_width = (chunks[1].width / bar.categories.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(1, 2 * MAX_BAR_WIDTH);
    let bars: Vec<Bar> = bar
        .categories
        .iter()
        .zip(&current.values)
        .zip(&bar.colors)
        .map(|((category, &value), &color)| {
            Bar::default()
                .value(value.max(0.0) as u64)
                .style(rgb(color))
                .text_value(format_magnitude(value))
                .label(Line::from(truncate(category, bar_width as usize)))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(bar.max_value.max(1.0) as u64);
    frame.render_widget(chart, chunks[1]);

    frame.render_widget(
        Paragraph::new(truncate(
            &category_line(bar, current.values.as_slice(), selected),
            chunks[2].width as usize,
        ))
        .style(Styles::dim()),
        chunks[2],
    );
}

/// Readout for the highlighted category: its sum this frame and the
/// countries feeding it.
fn category_line(bar: &PreparedAnimatedBar, values: &[f64], selected: usize) -> String {
    let Some(category) = bar.categories.get(selected) else {
        return String::new();
    };
    let value = values.get(selected).copied().unwrap_or(0.0);
    let detail = &bar.details[selected];
    if detail.is_empty() {
        format!("▸ {category}: {}", format_magnitude(value))
    } else {
        format!("▸ {category}: {} ({detail})", format_magnitude(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared() -> PreparedBar {
        PreparedBar {
            labels: vec!["USA".into(), "India".into()],
            values: vec![100.0, 80.0],
            colors: vec![(0, 0, 0); 2],
            details: vec!["USA, North America".into(), "India, Asia".into()],
            horizontal: false,
            category_label: "Country/Region",
            value_label: "TotalCases",
        }
    }

    #[test]
    fn detail_line_names_the_highlighted_bar() {
        let bar = prepared();
        assert_eq!(detail_line(&bar, 0), "▸ USA: 100 (USA, North America)");
        assert_eq!(detail_line(&bar, 1), "▸ India: 80 (India, Asia)");
        assert_eq!(detail_line(&bar, 9), "");
    }

    #[test]
    fn category_line_lists_the_region_members() {
        let bar = PreparedAnimatedBar {
            categories: vec!["Americas".into(), "South-East Asia".into()],
            colors: vec![(0, 0, 0); 2],
            details: vec!["US".into(), "India".into()],
            frames: Vec::new(),
            max_value: 3.0,
            value_label: "Confirmed",
        };
        assert_eq!(category_line(&bar, &[3.0, 2.0], 0), "▸ Americas: 3.0 (US)");
        assert_eq!(
            category_line(&bar, &[3.0, 2.0], 1),
            "▸ South-East Asia: 2.0 (India)"
        );
    }
}
