//! Application state management.

use crate::data::{DataTable, Datasets, MissingColumn};
use crate::view::cloud::WordCloud;
use crate::view::inspect::{DatasetSummary, SAMPLE_ROWS};
use crate::view::prepare::{Gallery, GalleryEntry, PreparedChart, derived_overall};
use crate::view::spec::Section;

/// Rows shown by the styled table view.
pub const STYLED_ROWS: usize = 15;

/// Dashboard tabs, in the order the original page lays its sections out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Info,
    Sample,
    StyledTable,
    Bars,
    Scatters,
    Maps,
    UnitedStates,
    Clouds,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Info,
            Tab::Sample,
            Tab::StyledTable,
            Tab::Bars,
            Tab::Scatters,
            Tab::Maps,
            Tab::UnitedStates,
            Tab::Clouds,
        ]
    }

    /// Full section title, as the original page headers read.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Info => "Dataset Information",
            Tab::Sample => "Sample Data",
            Tab::StyledTable => "Table Visualization",
            Tab::Bars => "Bar Charts",
            Tab::Scatters => "Scatter Plots",
            Tab::Maps => "Choropleth Maps",
            Tab::UnitedStates => "US Data Visualizations",
            Tab::Clouds => "Word Clouds",
        }
    }

    /// Short name for the tab bar.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Info => "Info",
            Tab::Sample => "Sample",
            Tab::StyledTable => "Table",
            Tab::Bars => "Bars",
            Tab::Scatters => "Scatter",
            Tab::Maps => "Maps",
            Tab::UnitedStates => "US",
            Tab::Clouds => "Clouds",
        }
    }

    /// Returns the next tab, wrapping around.
    pub fn next(&self) -> Tab {
        let all = Tab::all();
        let i = all.iter().position(|t| t == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    /// Returns the previous tab, wrapping around.
    pub fn prev(&self) -> Tab {
        let all = Tab::all();
        let i = all.iter().position(|t| t == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }

    /// Gallery section shown by this tab, for the chart tabs.
    pub fn section(&self) -> Option<Section> {
        match self {
            Tab::Bars => Some(Section::Bars),
            Tab::Scatters => Some(Section::Scatters),
            Tab::Maps => Some(Section::Maps),
            Tab::UnitedStates => Some(Section::UnitedStates),
            _ => None,
        }
    }
}

/// All mutable TUI state plus the prepared, read-only view models.
pub struct AppState {
    pub current_tab: Tab,

    // Prepared once at startup; immutable afterwards. Only the samples are
    // ever rebuilt, on explicit request.
    pub summaries: Vec<DatasetSummary>,
    pub samples: Vec<DataTable>,
    pub styled: Result<DataTable, MissingColumn>,
    pub gallery: Gallery,
    pub clouds: Vec<(&'static str, Result<WordCloud, MissingColumn>)>,

    /// Selected chart per section, indexed by section position.
    chart_sel: [usize; 4],
    /// Highlighted element (bar, point, category) within the selected chart.
    pub element: usize,
    /// Animation frame of the selected chart.
    pub frame: usize,
    /// Frame playback on hold.
    pub paused: bool,

    pub show_help: bool,
    pub help_scroll: usize,
    pub show_quit_confirm: bool,
    pub info_scroll: usize,
    pub sample_scroll: usize,
}

impl AppState {
    /// Prepares every view model against the loaded datasets.
    pub fn new(datasets: &Datasets) -> AppState {
        let summaries = vec![
            DatasetSummary::of(&datasets.overall),
            DatasetSummary::of(&datasets.time_series),
            DatasetSummary::of(&datasets.conditions),
        ];
        let styled = derived_overall(datasets).map(|t| t.head(STYLED_ROWS));
        let gallery = Gallery::prepare(datasets);
        let clouds = vec![
            (
                "Condition",
                WordCloud::from_column(&datasets.conditions, "Condition"),
            ),
            (
                "Condition Group",
                WordCloud::from_column(&datasets.conditions, "Condition Group"),
            ),
        ];

        let mut state = AppState {
            current_tab: Tab::default(),
            summaries,
            samples: Vec::new(),
            styled,
            gallery,
            clouds,
            chart_sel: [0; 4],
            element: 0,
            frame: 0,
            paused: false,
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
            info_scroll: 0,
            sample_scroll: 0,
        };
        state.regenerate_samples(datasets);
        state
    }

    /// Redraws the random samples. A view only; the tables never change.
    pub fn regenerate_samples(&mut self, datasets: &Datasets) {
        let mut rng = rand::rng();
        self.samples = [&datasets.overall, &datasets.time_series, &datasets.conditions]
            .into_iter()
            .map(|t| t.sample(SAMPLE_ROWS, &mut rng))
            .collect();
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.current_tab != tab {
            self.current_tab = tab;
            self.frame = 0;
            self.element = 0;
        }
    }

    fn section_slot(section: Section) -> usize {
        Section::all().iter().position(|s| *s == section).unwrap_or(0)
    }

    /// Charts of the section shown by the current tab.
    pub fn current_charts(&self) -> Vec<&GalleryEntry> {
        match self.current_tab.section() {
            Some(section) => self.gallery.section(section),
            None => Vec::new(),
        }
    }

    /// Position of the selected chart within the current section.
    pub fn selected_chart(&self) -> usize {
        match self.current_tab.section() {
            Some(section) => self.chart_sel[Self::section_slot(section)],
            None => 0,
        }
    }

    /// The selected gallery entry, when a chart tab is active.
    pub fn current_entry(&self) -> Option<&GalleryEntry> {
        let charts = self.current_charts();
        charts.get(self.selected_chart()).copied()
    }

    /// Steps to an adjacent chart in the current section, wrapping.
    pub fn step_chart(&mut self, delta: isize) {
        let Some(section) = self.current_tab.section() else {
            return;
        };
        let count = self.gallery.section(section).len();
        if count == 0 {
            return;
        }
        let slot = Self::section_slot(section);
        let current = self.chart_sel[slot] as isize;
        self.chart_sel[slot] = (current + delta).rem_euclid(count as isize) as usize;
        self.frame = 0;
        self.element = 0;
    }

    /// Elements of the selected chart open to the detail cursor.
    pub fn element_count(&self) -> usize {
        let Some(chart) = self
            .current_entry()
            .and_then(|e| e.result.as_ref().ok())
        else {
            return 0;
        };
        match chart {
            PreparedChart::Bar(bar) => bar.labels.len(),
            PreparedChart::Scatter(scatter) => scatter.points.len(),
            PreparedChart::AnimatedBar(bar) => bar.categories.len(),
            _ => 0,
        }
    }

    /// Moves the detail cursor to an adjacent element, wrapping.
    pub fn step_element(&mut self, delta: isize) {
        let count = self.element_count() as isize;
        if count == 0 {
            return;
        }
        self.element = ((self.element as isize + delta).rem_euclid(count)) as usize;
    }

    /// Frames of the selected chart; static charts count as one.
    pub fn frame_count(&self) -> usize {
        self.current_entry()
            .and_then(|e| e.result.as_ref().ok())
            .map(|chart| chart.frame_count())
            .unwrap_or(1)
    }

    /// Steps the animation frame by hand and pauses playback.
    pub fn step_frame(&mut self, delta: isize) {
        let count = self.frame_count() as isize;
        if count <= 1 {
            return;
        }
        self.frame = ((self.frame as isize + delta).rem_euclid(count)) as usize;
        self.paused = true;
    }

    /// Advances playback on a timer tick.
    pub fn tick_frame(&mut self) {
        if self.paused {
            return;
        }
        let count = self.frame_count();
        if count > 1 {
            self.frame = (self.frame + 1) % count;
        }
    }

    /// True while the selected chart animates.
    pub fn is_animated(&self) -> bool {
        self.frame_count() > 1
    }

    pub fn any_popup_open(&self) -> bool {
        self.show_help || self.show_quit_confirm
    }
}
