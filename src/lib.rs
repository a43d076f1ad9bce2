// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod content;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pages;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod utils;

pub use config::{BuildConfig, Config, PartialThemeOptions, SiteConfig, ThemeOptions};
pub use content::{ContentClassifier, ContentQuery, ContentStore, NavigationData, QueryResult};
pub use error::{QueryError, Result, SiteError};
pub use exporter::{JsonExporter, PlanManifest};
pub use models::{Document, Entity, EntityId, PageContext, PageRequest, Template};
pub use pages::{PagePlanner, PageSink};
pub use parser::{Frontmatter, FrontmatterParser, MarkdownRenderer};
pub use pipeline::{BuildStats, LoadedContent, ProgressTracker, SiteBuilder};
pub use render::{RenderedPage, RenderingSink, TemplateRenderer};
pub use source::{ContentSource, FileScanner, ScannedFile};
pub use utils::Validator;
