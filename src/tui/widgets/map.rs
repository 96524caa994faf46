//! Choropleth renderer: countries plotted at their centroid over the
//! world-map canvas, stepped through date frames.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::{Styles, Theme, rgb};
use crate::util::{format_magnitude, truncate};
use crate::view::prepare::PreparedMap;

/// Width of the per-frame value readout.
const READOUT_WIDTH: u16 = 26;

pub fn render_map(
    frame: &mut Frame,
    area: Rect,
    map: &PreparedMap,
    frame_index: usize,
    paused: bool,
) {
    let Some(current) = map.frames.get(frame_index.min(map.frames.len().saturating_sub(1)))
    else {
        frame.render_widget(Paragraph::new("(no data)").style(Styles::dim()), area);
        return;
    };

    let (canvas_area, readout_area) = if area.width < 2 * READOUT_WIDTH {
        (area, None)
    } else {
        let chunks =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(READOUT_WIDTH)])
                .split(area);
        (chunks[0], Some(chunks[1]))
    };

    let title = format!(
        " {}  frame {}/{} {} ",
        current.label,
        frame_index + 1,
        map.frames.len(),
        if paused { "[paused]" } else { "[playing]" }
    );
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Theme::MAP_LAND,
                resolution: MapResolution::High,
            });
            for point in &current.points {
                ctx.draw(&Points {
                    coords: &[(point.lon, point.lat)],
                    color: rgb(point.color),
                });
            }
        });
    frame.render_widget(canvas, canvas_area);

    if let Some(readout_area) = readout_area {
        render_readout(frame, readout_area, map, frame_index);
    }
}

/// Value readout beside the canvas: color range plus the heaviest
/// locations of the current frame.
fn render_readout(frame: &mut Frame, area: Rect, map: &PreparedMap, frame_index: usize) {
    let current = &map.frames[frame_index.min(map.frames.len() - 1)];

    let mut lines = vec![
        Line::from(Span::styled(map.value_label, Styles::section_header())),
        Line::from(vec![
            Span::styled("▇", rgb(map.scale.sample(0.0))),
            Span::styled("▇", rgb(map.scale.sample(0.5))),
            Span::styled("▇ ", rgb(map.scale.sample(1.0))),
            Span::styled(
                format!(
                    "{} – {}",
                    format_magnitude(map.min_value),
                    format_magnitude(map.max_value)
                ),
                Styles::dim(),
            ),
        ]),
        Line::default(),
    ];
    // Points arrive sorted by value descending.
    for point in current
        .points
        .iter()
        .take(area.height.saturating_sub(3) as usize)
    {
        lines.push(Line::from(vec![
            Span::styled("■ ", rgb(point.color)),
            Span::styled(
                format!(
                    "{:<14} {}",
                    truncate(&point.name, 14),
                    format_magnitude(point.value)
                ),
                Styles::default(),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
