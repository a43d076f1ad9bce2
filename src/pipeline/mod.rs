// file: src/pipeline/mod.rs
// description: site build pipeline module exports
// reference: internal module structure

pub mod orchestrator;
pub mod progress;

pub use orchestrator::{LoadedContent, SiteBuilder};
pub use progress::{BuildStats, ProgressTracker};
