// file: src/content/mod.rs
// description: course content classification, slugs and the content store
// reference: internal module structure

pub mod classifier;
pub mod query;
pub mod slug;
pub mod store;

pub use classifier::ContentClassifier;
pub use query::{ContentQuery, LessonSummary, ModuleSummary, NavigationData, QueryResult};
pub use store::ContentStore;
