// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod entity;
pub mod ids;
pub mod page;

pub use document::Document;
pub use entity::{
    Course, CourseFields, Entity, EntityKind, Lesson, LessonFields, Module, ModuleFields, Node,
    NodeFields,
};
pub use ids::{DocumentId, EntityId};
pub use page::{PageContext, PageRequest, Template};
