//! Chart preparation.
//!
//! Resolves every [`ChartSpec`] against the loaded tables into render-ready
//! geometry: bar lists, scatter points with size tiers, line series, map
//! frames. Charts are prepared independently; one bad binding marks that
//! entry failed and leaves the rest of the gallery alone.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use tracing::warn;

use crate::data::load::VOLATILE_COLUMNS;
use crate::data::{DataTable, Datasets, MissingColumn, Value};

use super::scale::{ColorScale, qualitative};
use super::spec::{ChartKind, ChartSpec, ColorBinding, GALLERY, Section, Slice, Source};

/// Default marker color for charts with no color binding.
const DEFAULT_MARKER: (u8, u8, u8) = (99, 110, 250);

/// Hover fields are joined with this when building a detail readout.
const DETAIL_SEPARATOR: &str = ", ";

/// Why a single gallery entry could not be prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// A binding referenced a column the source table does not have.
    MissingColumn(MissingColumn),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::MissingColumn(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<MissingColumn> for GalleryError {
    fn from(inner: MissingColumn) -> Self {
        GalleryError::MissingColumn(inner)
    }
}

/// Marker size class for bubble plots. Bubbles collapse to three tiers,
/// drawn with increasingly heavy glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

/// A bar chart ready to draw. Parallel vectors, one slot per bar.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBar {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<(u8, u8, u8)>,
    /// Detail readout per bar, empty string when the chart has no
    /// hover fields.
    pub details: Vec<String>,
    pub horizontal: bool,
    pub category_label: &'static str,
    pub value_label: &'static str,
}

/// One scatter marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedPoint {
    pub x: f64,
    pub y: f64,
    pub tier: SizeTier,
    pub color: (u8, u8, u8),
}

/// A scatter plot ready to draw. Log axes store already-transformed
/// coordinates; the flags only drive axis labelling.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedScatter {
    pub points: Vec<PreparedPoint>,
    /// Detail readout per point, empty string when the chart has no
    /// hover fields.
    pub details: Vec<String>,
    /// Category labels when the x axis is textual; points then use the
    /// label index as their x coordinate.
    pub x_categories: Option<Vec<String>>,
    /// Category color legend, present only for categorical color bindings.
    pub legend: Vec<(String, (u8, u8, u8))>,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    pub log_x: bool,
    pub log_y: bool,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// A line chart ready to draw. Points run left to right in calendar order;
/// `x_labels[i]` names position `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLine {
    pub points: Vec<(f64, f64)>,
    pub x_labels: Vec<String>,
    pub y_bounds: (f64, f64),
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// One plotted location within a map frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub lon: f64,
    pub lat: f64,
    pub color: (u8, u8, u8),
    pub name: String,
    pub value: f64,
}

/// One animation frame of a map, points sorted by value descending.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    pub label: String,
    pub points: Vec<MapPoint>,
}

/// A choropleth ready to draw. Colors are normalized over all frames so a
/// location keeps its shade while stepping through dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMap {
    pub frames: Vec<MapFrame>,
    pub scale: ColorScale,
    pub min_value: f64,
    pub max_value: f64,
    pub value_label: &'static str,
}

/// One animation frame of a grouped bar chart, aligned with `categories`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub label: String,
    pub values: Vec<f64>,
}

/// Per-category sums stepped over dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAnimatedBar {
    pub categories: Vec<String>,
    pub colors: Vec<(u8, u8, u8)>,
    /// Detail readout per category: the distinct hover values feeding that
    /// bar, in first-seen order. Empty strings without hover fields.
    pub details: Vec<String>,
    pub frames: Vec<BarFrame>,
    /// Largest per-frame sum, so the value axis holds still during playback.
    pub max_value: f64,
    pub value_label: &'static str,
}

/// A chart resolved against its source table.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedChart {
    Bar(PreparedBar),
    Scatter(PreparedScatter),
    Line(PreparedLine),
    Map(PreparedMap),
    AnimatedBar(PreparedAnimatedBar),
}

impl PreparedChart {
    /// Number of animation frames. Static charts count as one.
    pub fn frame_count(&self) -> usize {
        match self {
            PreparedChart::Map(map) => map.frames.len().max(1),
            PreparedChart::AnimatedBar(bar) => bar.frames.len().max(1),
            _ => 1,
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(
            self,
            PreparedChart::Map(_) | PreparedChart::AnimatedBar(_)
        )
    }
}

/// One gallery slot: the chart description plus its preparation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub spec: &'static ChartSpec,
    pub result: Result<PreparedChart, GalleryError>,
}

/// The whole gallery prepared against one dataset bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Prepares every catalog entry. Failures are recorded per entry and
    /// logged; they never abort the rest of the gallery.
    pub fn prepare(datasets: &Datasets) -> Gallery {
        let overall = derived_overall(datasets);
        let us = derived_us(datasets);

        let entries = GALLERY
            .iter()
            .map(|spec| {
                let result = source_table(spec.source, &overall, &datasets.time_series, &us)
                    .and_then(|table| prepare(spec, table));
                if let Err(err) = &result {
                    warn!("chart {} ({}) not prepared: {}", spec.id, spec.title, err);
                }
                GalleryEntry { spec, result }
            })
            .collect();

        Gallery { entries }
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Entries of one section, in display order.
    pub fn section(&self, section: Section) -> Vec<&GalleryEntry> {
        self.entries
            .iter()
            .filter(|e| e.spec.section == section)
            .collect()
    }

    pub fn entry(&self, id: usize) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| e.spec.id == id)
    }
}

/// Per-country table with the volatile columns dropped.
pub fn derived_overall(datasets: &Datasets) -> Result<DataTable, MissingColumn> {
    datasets.overall.drop_columns(&VOLATILE_COLUMNS)
}

/// Time series narrowed to the United States.
pub fn derived_us(datasets: &Datasets) -> Result<DataTable, MissingColumn> {
    datasets.time_series.filter_eq("Country/Region", "US")
}

fn source_table<'a>(
    source: Source,
    overall: &'a Result<DataTable, MissingColumn>,
    time_series: &'a DataTable,
    us: &'a Result<DataTable, MissingColumn>,
) -> Result<&'a DataTable, GalleryError> {
    match source {
        Source::Overall => overall.as_ref().map_err(|e| e.clone().into()),
        Source::TimeSeries => Ok(time_series),
        Source::UnitedStates => us.as_ref().map_err(|e| e.clone().into()),
    }
}

/// Prepares one chart against its already-resolved source table.
pub fn prepare(spec: &ChartSpec, table: &DataTable) -> Result<PreparedChart, GalleryError> {
    let sliced = match spec.slice {
        Slice::All => table.clone(),
        Slice::Head(n) => table.head(n),
    };

    match spec.kind {
        ChartKind::Bar {
            x,
            y,
            color,
            horizontal,
        } => prepare_bar(spec, &sliced, x, y, color, horizontal).map(PreparedChart::Bar),
        ChartKind::Scatter {
            x,
            y,
            color,
            size,
            log_x,
            log_y,
        } => prepare_scatter(spec, &sliced, x, y, color, size, log_x, log_y)
            .map(PreparedChart::Scatter),
        ChartKind::Line { x, y } => prepare_line(&sliced, x, y).map(PreparedChart::Line),
        ChartKind::Choropleth {
            locations,
            value,
            name,
            scale,
            frames,
        } => prepare_map(&sliced, locations, value, name, scale, frames).map(PreparedChart::Map),
        ChartKind::AnimatedBar {
            category,
            value,
            frames,
        } => prepare_animated_bar(spec, &sliced, category, value, frames)
            .map(PreparedChart::AnimatedBar),
    }
}

fn prepare_bar(
    spec: &ChartSpec,
    table: &DataTable,
    x: &'static str,
    y: &'static str,
    color: ColorBinding,
    horizontal: bool,
) -> Result<PreparedBar, GalleryError> {
    // In horizontal mode the category column sits on y and the value on x.
    let (category_label, value_label) = if horizontal { (y, x) } else { (x, y) };
    let cat_idx = table.require_column(category_label)?;
    let val_idx = table.require_column(value_label)?;
    let detail_idx: Vec<usize> = spec
        .hover
        .iter()
        .map(|h| table.require_column(h))
        .collect::<Result<_, _>>()?;
    let color_idx = match color {
        ColorBinding::Numeric { column, .. } => Some(table.require_column(column)?),
        ColorBinding::Category { column } => Some(table.require_column(column)?),
        ColorBinding::None => None,
    };

    let mut labels = Vec::new();
    let mut values = Vec::new();
    let mut details = Vec::new();
    let mut color_cells = Vec::new();
    for row in table.rows() {
        let Some(value) = row[val_idx].as_f64() else {
            continue;
        };
        if row[cat_idx].is_null() {
            continue;
        }
        labels.push(row[cat_idx].to_string());
        values.push(value);
        details.push(join_detail(row, &detail_idx));
        color_cells.push(color_idx.map(|i| row[i].clone()));
    }

    let colors = bind_colors(&color, &color_cells);

    let mut bar = PreparedBar {
        labels,
        values,
        colors,
        details,
        horizontal,
        category_label,
        value_label,
    };
    if let Some(order) = calendar_permutation(&bar.labels) {
        bar.labels = permute(&bar.labels, &order);
        bar.values = permute(&bar.values, &order);
        bar.colors = permute(&bar.colors, &order);
        bar.details = permute(&bar.details, &order);
    }
    Ok(bar)
}

#[allow(clippy::too_many_arguments)]
fn prepare_scatter(
    spec: &ChartSpec,
    table: &DataTable,
    x: &'static str,
    y: &'static str,
    color: ColorBinding,
    size: Option<&'static str>,
    log_x: bool,
    log_y: bool,
) -> Result<PreparedScatter, GalleryError> {
    let x_idx = table.require_column(x)?;
    let y_idx = table.require_column(y)?;
    let size_idx = size.map(|c| table.require_column(c)).transpose()?;
    let detail_idx: Vec<usize> = spec
        .hover
        .iter()
        .map(|h| table.require_column(h))
        .collect::<Result<_, _>>()?;
    let color_idx = match color {
        ColorBinding::Numeric { column, .. } => Some(table.require_column(column)?),
        ColorBinding::Category { column } => Some(table.require_column(column)?),
        ColorBinding::None => None,
    };

    let textual_x = is_text_column(table, x_idx);
    let mut categories: Vec<String> = Vec::new();

    // First pass: collect coordinates and the cells driving size and color.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut details = Vec::new();
    let mut size_values = Vec::new();
    let mut color_cells = Vec::new();
    for row in table.rows() {
        let Some(y_pos) = axis_value(&row[y_idx], log_y) else {
            continue;
        };
        let size_value = match size_idx {
            Some(i) => match row[i].as_f64() {
                Some(v) => Some(v),
                None => continue,
            },
            None => None,
        };
        // The category list must only grow for rows that actually plot,
        // so the x binding is checked last.
        let x_pos = if textual_x {
            let Some(label) = non_null_label(&row[x_idx]) else {
                continue;
            };
            category_position(&mut categories, &label) as f64
        } else {
            let Some(v) = axis_value(&row[x_idx], log_x) else {
                continue;
            };
            v
        };
        xs.push(x_pos);
        ys.push(y_pos);
        details.push(join_detail(row, &detail_idx));
        size_values.push(size_value);
        color_cells.push(color_idx.map(|i| row[i].clone()));
    }

    let tiers = size_tiers(&size_values);
    let colors = bind_colors(&color, &color_cells);
    let legend = match color {
        ColorBinding::Category { .. } => category_legend(&color_cells),
        _ => Vec::new(),
    };

    let points = xs
        .iter()
        .zip(&ys)
        .zip(tiers.iter().zip(&colors))
        .map(|((&x, &y), (&tier, &color))| PreparedPoint { x, y, tier, color })
        .collect::<Vec<_>>();

    let x_bounds = if textual_x {
        // Half a slot of air on each side keeps edge categories visible.
        (-0.5, categories.len() as f64 - 0.5)
    } else {
        padded_bounds(&xs)
    };
    let y_bounds = padded_bounds(&ys);

    Ok(PreparedScatter {
        points,
        details,
        x_categories: textual_x.then_some(categories),
        legend,
        x_bounds,
        y_bounds,
        log_x,
        log_y,
        x_label: x,
        y_label: y,
    })
}

fn prepare_line(
    table: &DataTable,
    x: &'static str,
    y: &'static str,
) -> Result<PreparedLine, GalleryError> {
    let x_idx = table.require_column(x)?;
    let y_idx = table.require_column(y)?;

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for row in table.rows() {
        let Some(label) = non_null_label(&row[x_idx]) else {
            continue;
        };
        let Some(value) = row[y_idx].as_f64() else {
            continue;
        };
        labels.push(label);
        values.push(value);
    }
    if let Some(order) = calendar_permutation(&labels) {
        labels = permute(&labels, &order);
        values = permute(&values, &order);
    }

    let y_bounds = padded_bounds(&values);
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    Ok(PreparedLine {
        points,
        x_labels: labels,
        y_bounds,
        x_label: x,
        y_label: y,
    })
}

fn prepare_map(
    table: &DataTable,
    locations: &'static str,
    value: &'static str,
    name: &'static str,
    scale: ColorScale,
    frames: &'static str,
) -> Result<PreparedMap, GalleryError> {
    let loc_idx = table.require_column(locations)?;
    let val_idx = table.require_column(value)?;
    let name_idx = table.require_column(name)?;
    let frame_idx = table.require_column(frames)?;

    // First pass over plottable rows to fix the global color range.
    struct Raw {
        frame: String,
        lon: f64,
        lat: f64,
        value: f64,
        name: String,
    }
    let mut raw = Vec::new();
    for row in table.rows() {
        let Some(code) = row[loc_idx].as_str() else {
            continue;
        };
        let Some((lon, lat)) = crate::data::geo::centroid(code) else {
            continue;
        };
        let Some(v) = row[val_idx].as_f64() else {
            continue;
        };
        let Some(frame) = non_null_label(&row[frame_idx]) else {
            continue;
        };
        raw.push(Raw {
            frame,
            lon,
            lat,
            value: v,
            name: row[name_idx].to_string(),
        });
    }

    let min_value = raw.iter().map(|r| r.value).fold(f64::INFINITY, f64::min);
    let max_value = raw
        .iter()
        .map(|r| r.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let (min_value, max_value) = if raw.is_empty() {
        (0.0, 0.0)
    } else {
        (min_value, max_value)
    };

    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<MapPoint>> = HashMap::new();
    for r in raw {
        let point = MapPoint {
            lon: r.lon,
            lat: r.lat,
            color: scale.sample_in(r.value, min_value, max_value),
            name: r.name,
            value: r.value,
        };
        if !grouped.contains_key(&r.frame) {
            order.push(r.frame.clone());
        }
        grouped.entry(r.frame).or_default().push(point);
    }
    sort_frame_labels(&mut order);

    let frames = order
        .into_iter()
        .map(|label| {
            let mut points = grouped.remove(&label).unwrap_or_default();
            points.sort_by(|a, b| b.value.total_cmp(&a.value));
            MapFrame { label, points }
        })
        .collect();

    Ok(PreparedMap {
        frames,
        scale,
        min_value,
        max_value,
        value_label: value,
    })
}

fn prepare_animated_bar(
    spec: &ChartSpec,
    table: &DataTable,
    category: &'static str,
    value: &'static str,
    frames: &'static str,
) -> Result<PreparedAnimatedBar, GalleryError> {
    let cat_idx = table.require_column(category)?;
    let val_idx = table.require_column(value)?;
    let frame_idx = table.require_column(frames)?;
    let detail_idx: Vec<usize> = spec
        .hover
        .iter()
        .map(|h| table.require_column(h))
        .collect::<Result<_, _>>()?;

    let categories = table.distinct(category)?;
    let category_slot: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Vec<f64>> = HashMap::new();
    let mut members: Vec<Vec<String>> = vec![Vec::new(); categories.len()];
    for row in table.rows() {
        let Some(label) = non_null_label(&row[frame_idx]) else {
            continue;
        };
        let Some(slot) = row[cat_idx]
            .as_str()
            .and_then(|c| category_slot.get(c).copied())
        else {
            continue;
        };
        let Some(v) = row[val_idx].as_f64() else {
            continue;
        };
        if !detail_idx.is_empty() {
            let detail = join_detail(row, &detail_idx);
            if !members[slot].contains(&detail) {
                members[slot].push(detail);
            }
        }
        if !sums.contains_key(&label) {
            order.push(label.clone());
        }
        sums.entry(label).or_insert_with(|| vec![0.0; categories.len()])[slot] += v;
    }
    sort_frame_labels(&mut order);
    let details: Vec<String> = members
        .into_iter()
        .map(|m| m.join(DETAIL_SEPARATOR))
        .collect();

    let frames: Vec<BarFrame> = order
        .into_iter()
        .map(|label| {
            let values = sums.remove(&label).unwrap_or_default();
            BarFrame { label, values }
        })
        .collect();
    let max_value = frames
        .iter()
        .flat_map(|f| f.values.iter().copied())
        .fold(0.0, f64::max);
    let colors = (0..categories.len()).map(qualitative).collect();

    Ok(PreparedAnimatedBar {
        categories,
        colors,
        details,
        frames,
        max_value,
        value_label: value,
    })
}

/// Maps color cells to concrete RGB per the binding.
fn bind_colors(binding: &ColorBinding, cells: &[Option<Value>]) -> Vec<(u8, u8, u8)> {
    match binding {
        ColorBinding::None => vec![DEFAULT_MARKER; cells.len()],
        ColorBinding::Numeric { scale, .. } => {
            let numeric: Vec<Option<f64>> = cells
                .iter()
                .map(|c| c.as_ref().and_then(Value::as_f64))
                .collect();
            let present = numeric.iter().filter_map(|v| *v);
            let min = present.clone().fold(f64::INFINITY, f64::min);
            let max = present.fold(f64::NEG_INFINITY, f64::max);
            numeric
                .iter()
                .map(|v| match v {
                    Some(v) if min.is_finite() => scale.sample_in(*v, min, max),
                    _ => scale.sample(0.0),
                })
                .collect()
        }
        ColorBinding::Category { .. } => {
            let mut seen: Vec<String> = Vec::new();
            cells
                .iter()
                .map(|c| {
                    let label = c
                        .as_ref()
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    qualitative(category_position(&mut seen, &label))
                })
                .collect()
        }
    }
}

/// Legend rows for a categorical color binding, in first-seen order.
fn category_legend(cells: &[Option<Value>]) -> Vec<(String, (u8, u8, u8))> {
    let mut seen: Vec<String> = Vec::new();
    for cell in cells {
        let label = cell.as_ref().map(|v| v.to_string()).unwrap_or_default();
        category_position(&mut seen, &label);
    }
    seen.into_iter()
        .enumerate()
        .map(|(i, label)| (label, qualitative(i)))
        .collect()
}

/// Index of `label` in `seen`, appending it on first sight.
fn category_position(seen: &mut Vec<String>, label: &str) -> usize {
    match seen.iter().position(|c| c == label) {
        Some(i) => i,
        None => {
            seen.push(label.to_string());
            seen.len() - 1
        }
    }
}

/// Splits bubble sizes into thirds of the observed range. Unsized charts
/// get uniform medium markers.
fn size_tiers(values: &[Option<f64>]) -> Vec<SizeTier> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|v| match v {
            None => SizeTier::Medium,
            Some(v) => {
                if max - min <= f64::EPSILON {
                    SizeTier::Medium
                } else {
                    let t = (v - min) / (max - min);
                    if t < 1.0 / 3.0 {
                        SizeTier::Small
                    } else if t < 2.0 / 3.0 {
                        SizeTier::Medium
                    } else {
                        SizeTier::Large
                    }
                }
            }
        })
        .collect()
}

/// Numeric axis coordinate of a cell; log axes drop non-positive values.
fn axis_value(cell: &Value, log: bool) -> Option<f64> {
    let v = cell.as_f64()?;
    if log {
        if v <= 0.0 {
            return None;
        }
        Some(v.log10())
    } else {
        Some(v)
    }
}

fn non_null_label(cell: &Value) -> Option<String> {
    if cell.is_null() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn join_detail(row: &[Value], detail_idx: &[usize]) -> String {
    if detail_idx.is_empty() {
        return String::new();
    }
    detail_idx
        .iter()
        .map(|&i| row[i].to_string())
        .collect::<Vec<_>>()
        .join(DETAIL_SEPARATOR)
}

/// Bounds with a little air, so extreme markers do not sit on the frame.
fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() <= f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn parse_date(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(label, "%m/%d/%Y"))
        .ok()
}

/// Permutation putting `labels` into calendar order, if every label parses
/// as a date. Non-date axes keep their row order.
fn calendar_permutation(labels: &[String]) -> Option<Vec<usize>> {
    if labels.is_empty() {
        return None;
    }
    let dates: Option<Vec<NaiveDate>> = labels.iter().map(|l| parse_date(l)).collect();
    let dates = dates?;
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by_key(|&i| dates[i]);
    Some(order)
}

fn permute<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| items[i].clone()).collect()
}

/// Frame labels play back in calendar order; labels that are not dates
/// fall back to lexical order.
fn sort_frame_labels(labels: &mut [String]) {
    let dates: Option<Vec<NaiveDate>> = labels.iter().map(|l| parse_date(l)).collect();
    match dates {
        Some(_) => labels.sort_by_key(|l| parse_date(l)),
        None => labels.sort(),
    }
}

fn is_text_column(table: &DataTable, idx: usize) -> bool {
    table
        .rows()
        .iter()
        .any(|row| matches!(row[idx], Value::Str(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::spec::GALLERY;

    fn row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|c| Value::parse(c)).collect()
    }

    fn overall_fixture() -> DataTable {
        let headers = [
            "Country/Region",
            "Continent",
            "TotalCases",
            "TotalDeaths",
            "TotalTests",
            "Tests/1M pop",
            "NewCases",
            "NewDeaths",
            "NewRecovered",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        DataTable::new(
            "covid.csv",
            headers,
            vec![
                row(&[
                    "USA",
                    "North America",
                    "5032179",
                    "162804",
                    "63139605",
                    "190640",
                    "",
                    "",
                    "",
                ]),
                row(&[
                    "Brazil",
                    "South America",
                    "2917562",
                    "98644",
                    "13206188",
                    "62085",
                    "",
                    "",
                    "",
                ]),
                row(&[
                    "India",
                    "Asia",
                    "2025409",
                    "41638",
                    "22149351",
                    "16035",
                    "",
                    "",
                    "",
                ]),
            ],
        )
    }

    fn time_series_fixture() -> DataTable {
        let headers = [
            "Date",
            "Country/Region",
            "Confirmed",
            "Deaths",
            "Recovered",
            "New cases",
            "WHO Region",
            "iso_alpha",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        // Rows deliberately start at the later date.
        DataTable::new(
            "covid_grouped.csv",
            headers,
            vec![
                row(&["2020-01-23", "US", "3", "0", "1", "2", "Americas", "USA"]),
                row(&["2020-01-22", "US", "1", "0", "0", "0", "Americas", "USA"]),
                row(&[
                    "2020-01-22",
                    "India",
                    "0",
                    "0",
                    "0",
                    "0",
                    "South-East Asia",
                    "IND",
                ]),
                row(&[
                    "2020-01-23",
                    "India",
                    "2",
                    "0",
                    "0",
                    "2",
                    "South-East Asia",
                    "IND",
                ]),
            ],
        )
    }

    fn conditions_fixture() -> DataTable {
        DataTable::new(
            "coviddeath.csv",
            vec!["Condition Group".to_string(), "Condition".to_string()],
            vec![
                row(&["Respiratory diseases", "Influenza and pneumonia"]),
                row(&["Respiratory diseases", "Respiratory failure"]),
            ],
        )
    }

    fn datasets_fixture() -> Datasets {
        Datasets {
            overall: overall_fixture(),
            time_series: time_series_fixture(),
            conditions: conditions_fixture(),
        }
    }

    #[test]
    fn gallery_prepares_every_entry() {
        let gallery = Gallery::prepare(&datasets_fixture());
        assert_eq!(gallery.entries().len(), 28);
        for entry in gallery.entries() {
            assert!(
                entry.result.is_ok(),
                "chart {} failed: {:?}",
                entry.spec.id,
                entry.result
            );
        }
    }

    #[test]
    fn first_bar_keeps_row_order() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(1).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Bar(bar) => {
                assert_eq!(bar.labels[0], "USA");
                assert!(bar.values[0] > bar.values[1]);
                assert_eq!(bar.details[0], "USA, North America");
            }
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_only_fails_charts_bound_to_it() {
        let mut datasets = datasets_fixture();
        datasets.overall = datasets.overall.drop_columns(&["TotalDeaths"]).unwrap();

        let gallery = Gallery::prepare(&datasets);
        let death_bound = [2, 12, 15, 16];
        for entry in gallery.entries() {
            if death_bound.contains(&entry.spec.id) {
                let err = entry.result.as_ref().unwrap_err();
                assert!(
                    err.to_string().contains("TotalDeaths"),
                    "chart {} error should name the column",
                    entry.spec.id
                );
            } else {
                assert!(
                    entry.result.is_ok(),
                    "chart {} should be unaffected",
                    entry.spec.id
                );
            }
        }
    }

    #[test]
    fn broken_derived_source_fails_only_its_charts() {
        let mut datasets = datasets_fixture();
        // Without NewCases the volatile-column drop cannot run, so every
        // per-country chart inherits the failure.
        datasets.overall = datasets.overall.drop_columns(&["NewCases"]).unwrap();

        let gallery = Gallery::prepare(&datasets);
        for entry in gallery.entries() {
            if entry.spec.source == Source::Overall {
                assert!(entry.result.is_err(), "chart {}", entry.spec.id);
            } else {
                assert!(entry.result.is_ok(), "chart {}", entry.spec.id);
            }
        }
    }

    #[test]
    fn map_frames_play_in_calendar_order() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(17).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Map(map) => {
                let labels: Vec<&str> = map.frames.iter().map(|f| f.label.as_str()).collect();
                assert_eq!(labels, ["2020-01-22", "2020-01-23"]);
            }
            other => panic!("expected a map, got {other:?}"),
        }
    }

    #[test]
    fn map_colors_are_normalized_over_all_frames() {
        let table = time_series_fixture();
        let PreparedChart::Map(map) = prepare(&GALLERY[16], &table).unwrap() else {
            panic!("entry 17 must prepare as a map");
        };
        // Confirmed spans 0..=3 across both frames; the day-two US point
        // carries the global maximum and must hit the top of the scale.
        let top = map.frames[1]
            .points
            .iter()
            .find(|p| p.name == "US")
            .unwrap();
        assert_eq!(top.value, 3.0);
        assert_eq!(top.color, map.scale.sample(1.0));
        let bottom = map.frames[0]
            .points
            .iter()
            .find(|p| p.name == "India")
            .unwrap();
        assert_eq!(bottom.color, map.scale.sample(0.0));
    }

    #[test]
    fn unknown_locations_do_not_plot() {
        let headers = ["Date", "Country/Region", "Confirmed", "iso_alpha"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let table = DataTable::new(
            "covid_grouped.csv",
            headers,
            vec![
                row(&["2020-01-22", "US", "5", "USA"]),
                row(&["2020-01-22", "Atlantis", "9", "ATL"]),
            ],
        );
        let PreparedChart::Map(map) = prepare(&GALLERY[16], &table).unwrap() else {
            panic!("entry 17 must prepare as a map");
        };
        assert_eq!(map.frames.len(), 1);
        assert_eq!(map.frames[0].points.len(), 1);
        assert_eq!(map.frames[0].points[0].name, "US");
    }

    #[test]
    fn animated_bar_sums_each_region_per_frame() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(20).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::AnimatedBar(bar) => {
                assert_eq!(bar.categories, ["Americas", "South-East Asia"]);
                assert_eq!(bar.frames[0].label, "2020-01-22");
                assert_eq!(bar.frames[0].values, [1.0, 0.0]);
                assert_eq!(bar.frames[1].values, [3.0, 2.0]);
                assert_eq!(bar.max_value, 3.0);
            }
            other => panic!("expected animated bars, got {other:?}"),
        }
    }

    #[test]
    fn scatter_points_carry_a_detail_readout() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(6).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Scatter(scatter) => {
                assert_eq!(scatter.details.len(), scatter.points.len());
                assert_eq!(scatter.details[0], "USA, North America");
            }
            other => panic!("expected a scatter, got {other:?}"),
        }
    }

    #[test]
    fn animated_bar_details_list_the_countries_per_region() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(20).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::AnimatedBar(bar) => {
                assert_eq!(bar.categories, ["Americas", "South-East Asia"]);
                assert_eq!(bar.details, ["US", "India"]);
            }
            other => panic!("expected animated bars, got {other:?}"),
        }
    }

    #[test]
    fn log_scatter_drops_nonpositive_values() {
        let headers = ["Country/Region", "Continent", "TotalCases"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let table = DataTable::new(
            "covid.csv",
            headers,
            vec![
                row(&["A", "Asia", "10"]),
                row(&["B", "Asia", "100"]),
                row(&["C", "Europe", "0"]),
            ],
        );
        // Entry 7: cases by continent with a log y axis.
        let PreparedChart::Scatter(scatter) = prepare(&GALLERY[6], &table).unwrap() else {
            panic!("entry 7 must prepare as a scatter");
        };
        assert_eq!(scatter.points.len(), 2);
        assert!((scatter.points[0].y - 1.0).abs() < 1e-9);
        assert!((scatter.points[1].y - 2.0).abs() < 1e-9);
        assert_eq!(scatter.x_categories.as_deref(), Some(&["Asia".to_string()][..]));
    }

    #[test]
    fn size_tiers_split_the_range_in_thirds() {
        let tiers = size_tiers(&[Some(1.0), Some(50.0), Some(100.0)]);
        assert_eq!(tiers, [SizeTier::Small, SizeTier::Medium, SizeTier::Large]);
        assert_eq!(size_tiers(&[None, None]), [SizeTier::Medium; 2]);
    }

    #[test]
    fn us_line_runs_in_calendar_order() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(25).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Line(line) => {
                assert_eq!(line.x_labels, ["2020-01-22", "2020-01-23"]);
                assert_eq!(line.points, [(0.0, 1.0), (1.0, 3.0)]);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn us_charts_see_only_us_rows() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(21).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Bar(bar) => {
                assert_eq!(bar.labels, ["2020-01-22", "2020-01-23"]);
                assert_eq!(bar.values, [1.0, 3.0]);
            }
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn unbound_scatter_uses_uniform_markers() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(28).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Scatter(scatter) => {
                assert!(scatter.points.iter().all(|p| p.color == DEFAULT_MARKER));
                assert!(scatter.points.iter().all(|p| p.tier == SizeTier::Medium));
                assert!(scatter.legend.is_empty());
            }
            other => panic!("expected a scatter, got {other:?}"),
        }
    }

    #[test]
    fn empty_us_slice_prepares_empty_charts() {
        let mut datasets = datasets_fixture();
        datasets.time_series = datasets
            .time_series
            .filter_eq("Country/Region", "Nowhere")
            .unwrap();

        let gallery = Gallery::prepare(&datasets);
        let chart = gallery.entry(21).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Bar(bar) => assert!(bar.labels.is_empty()),
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn categorical_color_builds_a_legend() {
        let gallery = Gallery::prepare(&datasets_fixture());
        let chart = gallery.entry(12).unwrap().result.as_ref().unwrap();
        match chart {
            PreparedChart::Scatter(scatter) => {
                let labels: Vec<&str> = scatter.legend.iter().map(|(l, _)| l.as_str()).collect();
                assert_eq!(labels, ["USA", "Brazil", "India"]);
                assert_eq!(scatter.legend[0].1, qualitative(0));
            }
            other => panic!("expected a scatter, got {other:?}"),
        }
    }
}
