//! Terminal user interface for the covidash viewer.
//!
//! An interactive tabbed dashboard: dataset summaries, a sample table, the
//! styled overview table, the chart gallery, and the word clouds.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, Tab};
