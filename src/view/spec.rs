//! Declarative chart catalog.
//!
//! Every chart in the gallery is one [`ChartSpec`] entry in [`GALLERY`]:
//! source table, row slice, kind and bindings. Rendering code never
//! hard-codes a chart; it walks this list.

use super::scale::ColorScale;

/// Gallery section a chart belongs to. Sections map one-to-one onto
/// dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Bar charts over the per-country table.
    Bars,
    /// Scatter and bubble plots over the per-country table.
    Scatters,
    /// World maps and region bars animated over dates.
    Maps,
    /// United States time-series views.
    UnitedStates,
}

impl Section {
    /// All sections in display order.
    pub fn all() -> [Section; 4] {
        [
            Section::Bars,
            Section::Scatters,
            Section::Maps,
            Section::UnitedStates,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Bars => "Bar Charts",
            Section::Scatters => "Scatter Plots",
            Section::Maps => "Choropleth Maps",
            Section::UnitedStates => "US Data",
        }
    }
}

/// Source table a chart reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Per-country table with the volatile columns dropped.
    Overall,
    /// Full per-(country, date) table.
    TimeSeries,
    /// Per-(country, date) table filtered to `Country/Region == "US"`.
    UnitedStates,
}

/// Row slice taken before plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    /// Every row.
    All,
    /// First `n` rows in file order, clamped to the table length.
    Head(usize),
}

/// How the color channel of a chart is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorBinding {
    /// Color follows a numeric column through a gradient.
    Numeric {
        column: &'static str,
        scale: ColorScale,
    },
    /// Each distinct value of a column gets its own palette color.
    Category { column: &'static str },
    /// Single neutral color.
    None,
}

/// Chart kind with its axis bindings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    /// One bar per row.
    Bar {
        x: &'static str,
        y: &'static str,
        color: ColorBinding,
        horizontal: bool,
    },
    /// One marker per row; `size` scales markers by a numeric column.
    Scatter {
        x: &'static str,
        y: &'static str,
        color: ColorBinding,
        size: Option<&'static str>,
        log_x: bool,
        log_y: bool,
    },
    /// Connected series of `y` over `x`.
    Line { x: &'static str, y: &'static str },
    /// World map colored by `value`, one frame per value of `frames`.
    Choropleth {
        locations: &'static str,
        value: &'static str,
        name: &'static str,
        scale: ColorScale,
        frames: &'static str,
    },
    /// Per-category sums of `value`, one frame per value of `frames`.
    AnimatedBar {
        category: &'static str,
        value: &'static str,
        frames: &'static str,
    },
}

/// One gallery entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    /// Stable ordinal, 1-based, in display order.
    pub id: usize,
    pub section: Section,
    pub title: &'static str,
    pub source: Source,
    pub slice: Slice,
    pub kind: ChartKind,
    /// Extra columns surfaced in the per-element detail readout.
    pub hover: &'static [&'static str],
}

const PLASMA: ColorScale = ColorScale::PLASMA;

/// The full gallery in display order.
pub const GALLERY: &[ChartSpec] = &[
    ChartSpec {
        id: 1,
        section: Section::Bars,
        title: "Total cases by country",
        source: Source::Overall,
        slice: Slice::Head(15),
        kind: ChartKind::Bar {
            x: "Country/Region",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalCases",
                scale: PLASMA,
            },
            horizontal: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 2,
        section: Section::Bars,
        title: "Total cases by country, shaded by deaths",
        source: Source::Overall,
        slice: Slice::Head(15),
        kind: ChartKind::Bar {
            x: "Country/Region",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalDeaths",
                scale: PLASMA,
            },
            horizontal: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 3,
        section: Section::Bars,
        title: "Total cases by country, shaded by tests",
        source: Source::Overall,
        slice: Slice::Head(15),
        kind: ChartKind::Bar {
            x: "Country/Region",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalTests",
                scale: PLASMA,
            },
            horizontal: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 4,
        section: Section::Bars,
        title: "Total tests by country",
        source: Source::Overall,
        slice: Slice::Head(15),
        kind: ChartKind::Bar {
            x: "TotalTests",
            y: "Country/Region",
            color: ColorBinding::Numeric {
                column: "TotalTests",
                scale: PLASMA,
            },
            horizontal: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 5,
        section: Section::Bars,
        title: "Total tests by continent",
        source: Source::Overall,
        slice: Slice::Head(15),
        kind: ChartKind::Bar {
            x: "TotalTests",
            y: "Continent",
            color: ColorBinding::Numeric {
                column: "TotalTests",
                scale: PLASMA,
            },
            horizontal: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 6,
        section: Section::Scatters,
        title: "Cases by continent",
        source: Source::Overall,
        slice: Slice::All,
        kind: ChartKind::Scatter {
            x: "Continent",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalCases",
                scale: PLASMA,
            },
            size: Some("TotalCases"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 7,
        section: Section::Scatters,
        title: "Cases by continent, log scale",
        source: Source::Overall,
        slice: Slice::Head(57),
        kind: ChartKind::Scatter {
            x: "Continent",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalCases",
                scale: PLASMA,
            },
            size: Some("TotalCases"),
            log_x: false,
            log_y: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 8,
        section: Section::Scatters,
        title: "Tests by continent",
        source: Source::Overall,
        slice: Slice::Head(54),
        kind: ChartKind::Scatter {
            x: "Continent",
            y: "TotalTests",
            color: ColorBinding::Numeric {
                column: "TotalTests",
                scale: PLASMA,
            },
            size: Some("TotalTests"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 9,
        section: Section::Scatters,
        title: "Tests by continent, log scale",
        source: Source::Overall,
        slice: Slice::Head(50),
        kind: ChartKind::Scatter {
            x: "Continent",
            y: "TotalTests",
            color: ColorBinding::Numeric {
                column: "TotalTests",
                scale: PLASMA,
            },
            size: Some("TotalTests"),
            log_x: false,
            log_y: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 10,
        section: Section::Scatters,
        title: "Cases by country",
        source: Source::Overall,
        slice: Slice::Head(100),
        kind: ChartKind::Scatter {
            x: "Country/Region",
            y: "TotalCases",
            color: ColorBinding::Numeric {
                column: "TotalCases",
                scale: PLASMA,
            },
            size: Some("TotalCases"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 11,
        section: Section::Scatters,
        title: "Cases by country, log scale",
        source: Source::Overall,
        slice: Slice::Head(30),
        kind: ChartKind::Scatter {
            x: "Country/Region",
            y: "TotalCases",
            color: ColorBinding::Category {
                column: "Country/Region",
            },
            size: Some("TotalCases"),
            log_x: false,
            log_y: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 12,
        section: Section::Scatters,
        title: "Deaths by country",
        source: Source::Overall,
        slice: Slice::Head(10),
        kind: ChartKind::Scatter {
            x: "Country/Region",
            y: "TotalDeaths",
            color: ColorBinding::Category {
                column: "Country/Region",
            },
            size: Some("TotalDeaths"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 13,
        section: Section::Scatters,
        title: "Tests per million by country",
        source: Source::Overall,
        slice: Slice::Head(30),
        kind: ChartKind::Scatter {
            x: "Country/Region",
            y: "Tests/1M pop",
            color: ColorBinding::Category {
                column: "Country/Region",
            },
            size: Some("Tests/1M pop"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 14,
        section: Section::Scatters,
        title: "Tests per million by country, shaded",
        source: Source::Overall,
        slice: Slice::Head(30),
        kind: ChartKind::Scatter {
            x: "Country/Region",
            y: "Tests/1M pop",
            color: ColorBinding::Numeric {
                column: "Tests/1M pop",
                scale: PLASMA,
            },
            size: Some("Tests/1M pop"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 15,
        section: Section::Scatters,
        title: "Deaths against cases",
        source: Source::Overall,
        slice: Slice::Head(30),
        kind: ChartKind::Scatter {
            x: "TotalCases",
            y: "TotalDeaths",
            color: ColorBinding::Numeric {
                column: "TotalDeaths",
                scale: PLASMA,
            },
            size: Some("TotalDeaths"),
            log_x: false,
            log_y: false,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 16,
        section: Section::Scatters,
        title: "Deaths against cases, log-log",
        source: Source::Overall,
        slice: Slice::Head(30),
        kind: ChartKind::Scatter {
            x: "TotalCases",
            y: "TotalDeaths",
            color: ColorBinding::Numeric {
                column: "TotalDeaths",
                scale: PLASMA,
            },
            size: Some("TotalDeaths"),
            log_x: true,
            log_y: true,
        },
        hover: &["Country/Region", "Continent"],
    },
    ChartSpec {
        id: 17,
        section: Section::Maps,
        title: "Confirmed cases worldwide",
        source: Source::TimeSeries,
        slice: Slice::All,
        kind: ChartKind::Choropleth {
            locations: "iso_alpha",
            value: "Confirmed",
            name: "Country/Region",
            scale: ColorScale::BLUES,
            frames: "Date",
        },
        hover: &[],
    },
    ChartSpec {
        id: 18,
        section: Section::Maps,
        title: "Deaths worldwide",
        source: Source::TimeSeries,
        slice: Slice::All,
        kind: ChartKind::Choropleth {
            locations: "iso_alpha",
            value: "Deaths",
            name: "Country/Region",
            scale: ColorScale::VIRIDIS,
            frames: "Date",
        },
        hover: &[],
    },
    ChartSpec {
        id: 19,
        section: Section::Maps,
        title: "Recoveries worldwide",
        source: Source::TimeSeries,
        slice: Slice::All,
        kind: ChartKind::Choropleth {
            locations: "iso_alpha",
            value: "Recovered",
            name: "Country/Region",
            scale: ColorScale::RD_YL_GN,
            frames: "Date",
        },
        hover: &[],
    },
    ChartSpec {
        id: 20,
        section: Section::Maps,
        title: "Confirmed cases by WHO region",
        source: Source::TimeSeries,
        slice: Slice::All,
        kind: ChartKind::AnimatedBar {
            category: "WHO Region",
            value: "Confirmed",
            frames: "Date",
        },
        hover: &["Country/Region"],
    },
    ChartSpec {
        id: 21,
        section: Section::UnitedStates,
        title: "US confirmed cases by date",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Bar {
            x: "Date",
            y: "Confirmed",
            color: ColorBinding::Numeric {
                column: "Confirmed",
                scale: PLASMA,
            },
            horizontal: false,
        },
        hover: &[],
    },
    ChartSpec {
        id: 22,
        section: Section::UnitedStates,
        title: "US recoveries by date",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Bar {
            x: "Date",
            y: "Recovered",
            color: ColorBinding::Numeric {
                column: "Recovered",
                scale: PLASMA,
            },
            horizontal: false,
        },
        hover: &[],
    },
    ChartSpec {
        id: 23,
        section: Section::UnitedStates,
        title: "US recoveries over time",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Line {
            x: "Date",
            y: "Recovered",
        },
        hover: &[],
    },
    ChartSpec {
        id: 24,
        section: Section::UnitedStates,
        title: "US deaths over time",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Line {
            x: "Date",
            y: "Deaths",
        },
        hover: &[],
    },
    ChartSpec {
        id: 25,
        section: Section::UnitedStates,
        title: "US confirmed cases over time",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Line {
            x: "Date",
            y: "Confirmed",
        },
        hover: &[],
    },
    ChartSpec {
        id: 26,
        section: Section::UnitedStates,
        title: "US new cases over time",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Line {
            x: "Date",
            y: "New cases",
        },
        hover: &[],
    },
    ChartSpec {
        id: 27,
        section: Section::UnitedStates,
        title: "US new cases by date",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Bar {
            x: "Date",
            y: "New cases",
            color: ColorBinding::None,
            horizontal: false,
        },
        hover: &[],
    },
    ChartSpec {
        id: 28,
        section: Section::UnitedStates,
        title: "US deaths against confirmed cases",
        source: Source::UnitedStates,
        slice: Slice::All,
        kind: ChartKind::Scatter {
            x: "Confirmed",
            y: "Deaths",
            color: ColorBinding::None,
            size: None,
            log_x: false,
            log_y: false,
        },
        hover: &[],
    },
];

/// Charts of one section, in display order.
pub fn section_charts(section: Section) -> impl Iterator<Item = &'static ChartSpec> {
    GALLERY.iter().filter(move |c| c.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_has_every_chart_once() {
        assert_eq!(GALLERY.len(), 28);
        for (i, chart) in GALLERY.iter().enumerate() {
            assert_eq!(chart.id, i + 1, "ids must follow display order");
        }
    }

    #[test]
    fn sections_partition_the_gallery() {
        assert_eq!(section_charts(Section::Bars).count(), 5);
        assert_eq!(section_charts(Section::Scatters).count(), 11);
        assert_eq!(section_charts(Section::Maps).count(), 4);
        assert_eq!(section_charts(Section::UnitedStates).count(), 8);
    }

    #[test]
    fn per_country_charts_all_carry_the_detail_columns() {
        // Entries 1-16 plot the per-country table; every one of them names
        // the country and continent in its detail readout.
        for chart in &GALLERY[..16] {
            assert_eq!(
                chart.hover,
                ["Country/Region", "Continent"],
                "chart {} detail columns",
                chart.id
            );
        }
    }

    #[test]
    fn horizontal_bars_swap_axes() {
        let chart = &GALLERY[3];
        match chart.kind {
            ChartKind::Bar { x, y, horizontal, .. } => {
                assert!(horizontal);
                assert_eq!(x, "TotalTests");
                assert_eq!(y, "Country/Region");
            }
            _ => panic!("entry 4 must be a bar chart"),
        }
    }

    #[test]
    fn log_log_scatter_flags_both_axes() {
        match GALLERY[15].kind {
            ChartKind::Scatter { log_x, log_y, .. } => {
                assert!(log_x && log_y);
            }
            _ => panic!("entry 16 must be a scatter"),
        }
    }

    #[test]
    fn map_scales_differ() {
        let scales: Vec<ColorScale> = GALLERY[16..19]
            .iter()
            .map(|c| match c.kind {
                ChartKind::Choropleth { scale, .. } => scale,
                _ => panic!("entries 17-19 must be choropleths"),
            })
            .collect();
        assert_eq!(
            scales,
            vec![
                ColorScale::BLUES,
                ColorScale::VIRIDIS,
                ColorScale::RD_YL_GN
            ]
        );
    }

    #[test]
    fn final_scatter_is_unbound() {
        match GALLERY[27].kind {
            ChartKind::Scatter { color, size, .. } => {
                assert_eq!(color, ColorBinding::None);
                assert_eq!(size, None);
            }
            _ => panic!("entry 28 must be a scatter"),
        }
    }

    #[test]
    fn us_charts_all_read_the_filtered_source() {
        for chart in section_charts(Section::UnitedStates) {
            assert_eq!(chart.source, Source::UnitedStates);
        }
    }
}
