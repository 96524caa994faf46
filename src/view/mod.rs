//! UI-agnostic view models.
//!
//! Each sub-module turns loaded tables into plain data a frontend can draw:
//! chart geometry, dataset summaries, word weights, RGB colors. The TUI maps
//! these to framework-specific widgets; nothing here imports a rendering
//! crate.

pub mod cloud;
pub mod inspect;
pub mod prepare;
pub mod scale;
pub mod spec;

pub use cloud::WordCloud;
pub use inspect::DatasetSummary;
pub use prepare::{Gallery, GalleryEntry, GalleryError, PreparedChart};
pub use spec::{ChartSpec, GALLERY, Section};
