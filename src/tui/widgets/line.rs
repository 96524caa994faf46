//! Line chart renderer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use crate::tui::style::{Styles, Theme};
use crate::util::format_magnitude;
use crate::view::prepare::PreparedLine;

pub fn render_line(frame: &mut Frame, area: Rect, line: &PreparedLine) {
    if line.points.is_empty() {
        frame.render_widget(Paragraph::new("(no data)").style(Styles::dim()), area);
        return;
    }

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Theme::ACCENT)
        .data(&line.points);

    let x_max = (line.points.len().saturating_sub(1)).max(1) as f64;
    let x_axis = Axis::default()
        .title(Span::styled(line.x_label, Styles::axis()))
        .bounds([0.0, x_max])
        .labels(edge_labels(&line.x_labels));
    let y_axis = Axis::default()
        .title(Span::styled(line.y_label, Styles::axis()))
        .bounds([line.y_bounds.0, line.y_bounds.1])
        .labels(vec![
            format_magnitude(line.y_bounds.0),
            format_magnitude((line.y_bounds.0 + line.y_bounds.1) / 2.0),
            format_magnitude(line.y_bounds.1),
        ]);

    let chart = Chart::new(vec![dataset]).x_axis(x_axis).y_axis(y_axis);
    frame.render_widget(chart, area);
}

/// First, middle, and last positions of the x axis.
fn edge_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_labels_pick_first_middle_last() {
        let labels: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(edge_labels(&labels), ["a", "c", "e"]);
        assert_eq!(edge_labels(&labels[..1]), ["a"]);
        assert!(edge_labels(&[]).is_empty());
    }
}
