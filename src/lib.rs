//! covidash - COVID-19 dataset dashboard library.
//!
//! Loads three CSV datasets once, derives a few read-only views, and
//! prepares a fixed gallery of charts that the terminal frontend renders
//! as a tabbed application.

pub mod data;
pub mod tui;
pub mod util;
pub mod view;
