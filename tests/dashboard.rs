//! End-to-end test: load fixture CSV files from disk, derive the views,
//! and prepare the whole gallery the way the binary does at startup.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use covidash::data::{Datasets, LoadError, Value};
use covidash::data::load::{CONDITION_FILE, OVERALL_FILE, TIME_SERIES_FILE};
use covidash::view::cloud::WordCloud;
use covidash::view::prepare::{Gallery, PreparedChart, derived_overall, derived_us};

const OVERALL: &str = "\
Country/Region,Continent,TotalCases,TotalDeaths,TotalTests,Tests/1M pop,NewCases,NewDeaths,NewRecovered
USA,North America,100,5,1000,3000,7,1,2
India,Asia,80,3,900,650,,,
Brazil,South America,70,4,800,3800,5,,1
";

const TIME_SERIES: &str = "\
Date,Country/Region,Confirmed,Deaths,Recovered,New cases,WHO Region,iso_alpha
2020-01-23,US,3,0,1,2,Americas,USA
2020-01-22,US,1,0,0,0,Americas,USA
2020-01-22,India,0,0,0,0,South-East Asia,IND
2020-01-23,India,2,0,0,2,South-East Asia,IND
";

const CONDITIONS: &str = "\
Condition Group,Condition
Respiratory diseases,Influenza and pneumonia
Respiratory diseases,Respiratory failure
Circulatory diseases,Cardiac arrest
";

fn write_datasets(dir: &Path) {
    fs::write(dir.join(OVERALL_FILE), OVERALL).unwrap();
    fs::write(dir.join(TIME_SERIES_FILE), TIME_SERIES).unwrap();
    fs::write(dir.join(CONDITION_FILE), CONDITIONS).unwrap();
}

#[test]
fn startup_sequence_prepares_everything() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());

    let datasets = Datasets::load(dir.path()).unwrap();

    // Cleaned table: exactly three fewer columns, same rows.
    let cleaned = derived_overall(&datasets).unwrap();
    assert_eq!(cleaned.column_count(), datasets.overall.column_count() - 3);
    assert_eq!(cleaned.row_count(), datasets.overall.row_count());
    for gone in ["NewCases", "NewDeaths", "NewRecovered"] {
        assert!(cleaned.column_index(gone).is_none());
    }

    // US view: only rows with the literal country "US".
    let us = derived_us(&datasets).unwrap();
    assert_eq!(us.row_count(), 2);
    let country = us.column_index("Country/Region").unwrap();
    assert!(us.rows().iter().all(|r| r[country] == Value::Str("US".into())));

    // Whole gallery prepares; the first bar chart orders USA above India.
    let gallery = Gallery::prepare(&datasets);
    assert_eq!(gallery.entries().len(), 28);
    assert!(gallery.entries().iter().all(|e| e.result.is_ok()));

    let PreparedChart::Bar(bar) = gallery.entry(1).unwrap().result.as_ref().unwrap() else {
        panic!("entry 1 must be a bar chart");
    };
    let usa = bar.labels.iter().position(|l| l == "USA").unwrap();
    let india = bar.labels.iter().position(|l| l == "India").unwrap();
    assert!(usa < india);
    assert!(bar.values[usa] > bar.values[india]);

    // Both word clouds build from the condition table.
    let condition = WordCloud::from_column(&datasets.conditions, "Condition").unwrap();
    let group = WordCloud::from_column(&datasets.conditions, "Condition Group").unwrap();
    assert!(!condition.is_empty());
    assert_eq!(group.words()[0].word, "diseases");
}

#[test]
fn loading_twice_yields_identical_tables() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());

    let first = Datasets::load(dir.path()).unwrap();
    let second = Datasets::load(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_file_aborts_with_a_named_diagnostic() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(OVERALL_FILE), OVERALL).unwrap();
    fs::write(dir.path().join(CONDITION_FILE), CONDITIONS).unwrap();

    let err = Datasets::load(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains(TIME_SERIES_FILE));
}

#[test]
fn choropleth_frames_follow_the_calendar() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());

    let datasets = Datasets::load(dir.path()).unwrap();
    let gallery = Gallery::prepare(&datasets);

    let PreparedChart::Map(map) = gallery.entry(17).unwrap().result.as_ref().unwrap() else {
        panic!("entry 17 must be a choropleth");
    };
    let labels: Vec<&str> = map.frames.iter().map(|f| f.label.as_str()).collect();
    // The fixture lists 2020-01-23 first; frames still play in date order.
    assert_eq!(labels, ["2020-01-22", "2020-01-23"]);
}
