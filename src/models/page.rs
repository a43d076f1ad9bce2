// file: src/models/page.rs
// description: page build requests produced by the planner
// reference: internal data structures

use crate::models::ids::EntityId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Course,
    Module,
    Lesson,
}

/// Data handed to a template. Templates look up everything else themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

impl PageContext {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
