// file: src/content/query.rs
// description: query results over classified content, sorted for navigation
// reference: internal query interface

use crate::error::QueryError;
use crate::models::EntityId;
use serde::Serialize;

/// Outcome of a content query: data and errors may both be present, the
/// same way a partial graph response carries both.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    pub errors: Vec<QueryError>,
}

impl<T> QueryResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub id: EntityId,
    pub slug: String,
    pub module: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    pub id: EntityId,
    pub slug: String,
    pub module: u32,
    pub lesson: u32,
    pub description: String,
}

/// Modules sorted by module number and lessons sorted by (module, lesson).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationData {
    pub modules: Vec<ModuleSummary>,
    pub lessons: Vec<LessonSummary>,
}

pub trait ContentQuery {
    fn navigation(&self) -> QueryResult<NavigationData>;
}
