// file: src/models/entity.rs
// description: derived course, module and lesson entities
// reference: internal data structures

use crate::error::Result;
use crate::models::ids::{DocumentId, EntityId};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Field set of a derived entity type.
pub trait NodeFields: Serialize {
    const TYPE_NAME: &'static str;
    const DESCRIPTION: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseFields {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFields {
    pub title: Option<String>,
    pub module: Option<u32>,
    pub description: Option<String>,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonFields {
    pub title: Option<String>,
    pub slug: String,
    pub lesson: Option<u32>,
    pub module: Option<u32>,
    pub description: Option<String>,
}

impl NodeFields for CourseFields {
    const TYPE_NAME: &'static str = "MarkdownCourse";
    const DESCRIPTION: &'static str = "Markdown implementation of the Course interface";
}

impl NodeFields for ModuleFields {
    const TYPE_NAME: &'static str = "MarkdownModule";
    const DESCRIPTION: &'static str = "Markdown implementation of the Module interface";
}

impl NodeFields for LessonFields {
    const TYPE_NAME: &'static str = "MarkdownLesson";
    const DESCRIPTION: &'static str = "Markdown implementation of the Lesson interface";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Internal {
    pub type_name: &'static str,
    pub content_digest: String,
    pub content: String,
    pub description: &'static str,
}

/// A derived entity. Holds only a reference to its parent document; the
/// body is rendered from the parent on demand (see `ContentStore::body`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<F> {
    pub id: EntityId,
    pub parent: DocumentId,
    #[serde(flatten)]
    pub fields: F,
    pub internal: Internal,
}

pub type Course = Node<CourseFields>;
pub type Module = Node<ModuleFields>;
pub type Lesson = Node<LessonFields>;

impl<F: NodeFields> Node<F> {
    pub fn new(parent: DocumentId, fields: F) -> Result<Self> {
        let content = serde_json::to_string(&fields)?;
        let content_digest = content_digest(&content);

        Ok(Self {
            id: EntityId::derive(parent, F::TYPE_NAME),
            parent,
            fields,
            internal: Internal {
                type_name: F::TYPE_NAME,
                content_digest,
                content,
                description: F::DESCRIPTION,
            },
        })
    }
}

fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Course,
    Module,
    Lesson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Entity {
    Course(Course),
    Module(Module),
    Lesson(Lesson),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Course(node) => node.id,
            Entity::Module(node) => node.id,
            Entity::Lesson(node) => node.id,
        }
    }

    pub fn parent(&self) -> DocumentId {
        match self {
            Entity::Course(node) => node.parent,
            Entity::Module(node) => node.parent,
            Entity::Lesson(node) => node.parent,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Course(_) => EntityKind::Course,
            Entity::Module(_) => EntityKind::Module,
            Entity::Lesson(_) => EntityKind::Lesson,
        }
    }

    pub fn internal(&self) -> &Internal {
        match self {
            Entity::Course(node) => &node.internal,
            Entity::Module(node) => &node.internal,
            Entity::Lesson(node) => &node.internal,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Entity::Course(_) => None,
            Entity::Module(node) => Some(&node.fields.slug),
            Entity::Lesson(node) => Some(&node.fields.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module_fields(title: &str) -> ModuleFields {
        ModuleFields {
            title: Some(title.to_string()),
            module: Some(1),
            description: Some("d".to_string()),
            slug: "/module-1/".to_string(),
        }
    }

    #[test]
    fn test_digest_tracks_field_changes() {
        let parent = DocumentId::derive("courses", "module-1/index.md");
        let a = Module::new(parent, module_fields("Intro")).unwrap();
        let b = Module::new(parent, module_fields("Intro")).unwrap();
        let c = Module::new(parent, module_fields("Introduction")).unwrap();

        assert_eq!(a.internal.content_digest, b.internal.content_digest);
        assert_ne!(a.internal.content_digest, c.internal.content_digest);
        assert_eq!(a.id, c.id);
    }

    #[test]
    fn test_internal_content_is_field_json() {
        let parent = DocumentId::derive("courses", "index.md");
        let course = Course::new(
            parent,
            CourseFields {
                title: Some("Rust".to_string()),
                description: None,
            },
        )
        .unwrap();

        assert_eq!(course.internal.type_name, "MarkdownCourse");
        assert_eq!(
            course.internal.content,
            r#"{"title":"Rust","description":null}"#
        );
    }
}
