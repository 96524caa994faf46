//! TUI widgets for covidash.

mod bar;
mod chart;
mod cloud;
mod header;
mod help;
mod info;
mod line;
mod map;
mod quit_confirm;
mod sample;
mod scatter;
mod styled_table;
mod text_table;

pub use chart::render_chart;
pub use cloud::render_clouds;
pub use header::render_header;
pub use help::render_help;
pub use info::render_info;
pub use quit_confirm::render_quit_confirm;
pub use sample::render_sample;
pub use styled_table::render_styled_table;
