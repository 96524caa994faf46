//! Scatter plot renderer.
//!
//! Bubble size collapses to three marker weights (braille, dot, block);
//! per-point colors come from the prepared chart. A categorical color
//! binding also gets a legend column.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use crate::tui::style::{Styles, rgb};
use crate::util::{format_magnitude, truncate};
use crate::view::prepare::{PreparedScatter, SizeTier};

/// Legend column width when a categorical binding is present.
const LEGEND_WIDTH: u16 = 22;

/// Renders a scatter plot; `selected` highlights one point and drives the
/// detail readout under the chart.
pub fn render_scatter(frame: &mut Frame, area: Rect, scatter: &PreparedScatter, selected: usize) {
    if scatter.points.is_empty() {
        frame.render_widget(Paragraph::new("(no data)").style(Styles::dim()), area);
        return;
    }

    let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    let plot = rows[0];

    let (chart_area, legend_area) = if scatter.legend.is_empty() || plot.width < 2 * LEGEND_WIDTH
    {
        (plot, None)
    } else {
        let chunks =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(LEGEND_WIDTH)])
                .split(plot);
        (chunks[0], Some(chunks[1]))
    };

    // One ratatui dataset per (tier, color) group; a dataset has a single
    // style, the points do not.
    let mut groups: HashMap<(SizeTier, (u8, u8, u8)), Vec<(f64, f64)>> = HashMap::new();
    for point in &scatter.points {
        groups
            .entry((point.tier, point.color))
            .or_default()
            .push((point.x, point.y));
    }
    let groups: Vec<((SizeTier, (u8, u8, u8)), Vec<(f64, f64)>)> =
        groups.into_iter().collect();

    let highlight: Vec<(f64, f64)> = scatter
        .points
        .get(selected)
        .map(|p| (p.x, p.y))
        .into_iter()
        .collect();

    let mut datasets: Vec<Dataset> = groups
        .iter()
        .map(|((tier, color), data)| {
            Dataset::default()
                .marker(marker_for(*tier))
                .graph_type(GraphType::Scatter)
                .style(rgb(*color))
                .data(data)
        })
        .collect();
    // The highlighted point draws last, on top of its group.
    if !highlight.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White))
                .data(&highlight),
        );
    }

    let x_title = axis_title(scatter.x_label, scatter.log_x);
    let y_title = axis_title(scatter.y_label, scatter.log_y);

    let x_axis = Axis::default()
        .title(Span::styled(x_title, Styles::axis()))
        .bounds([scatter.x_bounds.0, scatter.x_bounds.1])
        .labels(x_labels(scatter, chart_area.width));
    let y_axis = Axis::default()
        .title(Span::styled(y_title, Styles::axis()))
        .bounds([scatter.y_bounds.0, scatter.y_bounds.1])
        .labels(numeric_labels(scatter.y_bounds, scatter.log_y));

    let chart = Chart::new(datasets).x_axis(x_axis).y_axis(y_axis);
    frame.render_widget(chart, chart_area);

    if let Some(legend_area) = legend_area {
        render_legend(frame, legend_area, scatter);
    }

    frame.render_widget(
        Paragraph::new(readout(scatter, selected)).style(Styles::dim()),
        rows[1],
    );
}

/// Readout for the highlighted point: its detail columns and coordinates,
/// log axes reported in original units.
fn readout(scatter: &PreparedScatter, selected: usize) -> String {
    let Some(point) = scatter.points.get(selected) else {
        return String::new();
    };
    let x = match &scatter.x_categories {
        Some(categories) => categories
            .get(point.x.round().max(0.0) as usize)
            .cloned()
            .unwrap_or_default(),
        None => axis_text(point.x, scatter.log_x),
    };
    let y = axis_text(point.y, scatter.log_y);
    let detail = &scatter.details[selected];
    if detail.is_empty() {
        format!(
            "▸ point {}/{}: {} {x}, {} {y}",
            selected + 1,
            scatter.points.len(),
            scatter.x_label,
            scatter.y_label
        )
    } else {
        format!("▸ {detail}: {} {x}, {} {y}", scatter.x_label, scatter.y_label)
    }
}

fn axis_text(v: f64, log: bool) -> String {
    if log {
        format_magnitude(10f64.powf(v))
    } else {
        format_magnitude(v)
    }
}

fn render_legend(frame: &mut Frame, area: Rect, scatter: &PreparedScatter) {
    let mut lines = vec![Line::from(Span::styled("Legend", Styles::section_header()))];
    for (label, color) in scatter
        .legend
        .iter()
        .take(area.height.saturating_sub(1) as usize)
    {
        lines.push(Line::from(vec![
            Span::styled("■ ", rgb(*color)),
            Span::styled(
                truncate(label, LEGEND_WIDTH as usize - 2),
                Styles::default(),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn marker_for(tier: SizeTier) -> Marker {
    match tier {
        SizeTier::Small => Marker::Braille,
        SizeTier::Medium => Marker::Dot,
        SizeTier::Large => Marker::Block,
    }
}

fn axis_title(label: &str, log: bool) -> String {
    if log {
        format!("{label} (log)")
    } else {
        label.to_string()
    }
}

/// Labels for the x axis: category names when textual, numbers otherwise.
fn x_labels(scatter: &PreparedScatter, width: u16) -> Vec<String> {
    match &scatter.x_categories {
        Some(categories) => {
            // Evenly spaced axis labels; thin terminals get a subset.
            let max = (width / 12).max(2) as usize;
            let stride = categories.len().div_ceil(max).max(1);
            categories
                .iter()
                .step_by(stride)
                .map(|c| truncate(c, 10))
                .collect()
        }
        None => numeric_labels(scatter.x_bounds, scatter.log_x),
    }
}

/// Three labels across a numeric axis. Log axes label the original values.
fn numeric_labels((min, max): (f64, f64), log: bool) -> Vec<String> {
    [min, (min + max) / 2.0, max]
        .into_iter()
        .map(|v| axis_text(v, log))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::prepare::PreparedPoint;

    #[test]
    fn tiers_map_to_increasingly_heavy_markers() {
        assert_eq!(marker_for(SizeTier::Small), Marker::Braille);
        assert_eq!(marker_for(SizeTier::Medium), Marker::Dot);
        assert_eq!(marker_for(SizeTier::Large), Marker::Block);
    }

    #[test]
    fn log_axes_label_original_values() {
        let labels = numeric_labels((0.0, 2.0), true);
        assert_eq!(labels, ["1.0", "10", "100"]);

        let plain = numeric_labels((0.0, 2000.0), false);
        assert_eq!(plain, ["0", "1.0K", "2.0K"]);
    }

    #[test]
    fn readout_names_the_highlighted_point() {
        let scatter = PreparedScatter {
            points: vec![PreparedPoint {
                x: 0.0,
                y: 100.0,
                tier: SizeTier::Large,
                color: (0, 0, 0),
            }],
            details: vec!["USA, North America".into()],
            x_categories: Some(vec!["North America".into()]),
            legend: Vec::new(),
            x_bounds: (-0.5, 0.5),
            y_bounds: (0.0, 110.0),
            log_x: false,
            log_y: false,
            x_label: "Continent",
            y_label: "TotalCases",
        };
        assert_eq!(
            readout(&scatter, 0),
            "▸ USA, North America: Continent North America, TotalCases 100"
        );
        assert_eq!(readout(&scatter, 5), "");
    }
}
