// file: src/source/mod.rs
// description: content source ingestion module exports
// reference: internal module structure

pub mod scanner;

pub use scanner::{ContentSource, FileScanner, ScannedFile};
