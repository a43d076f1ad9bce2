// file: src/pages/mod.rs
// description: page planning module exports
// reference: internal module structure

pub mod planner;

pub use planner::{PagePlanner, PageSink, with_neighbors};
