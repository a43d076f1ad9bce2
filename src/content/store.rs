// file: src/content/store.rs
// description: read-only index of documents and derived entities with lazy body resolution
// reference: internal content graph

use crate::content::query::{
    ContentQuery, LessonSummary, ModuleSummary, NavigationData, QueryResult,
};
use crate::error::{QueryError, Result, SiteError};
use crate::models::{
    Course, Document, DocumentId, Entity, EntityId, Lesson, LessonFields, Module, ModuleFields,
    NodeFields,
};
use crate::parser::{Heading, MarkdownRenderer};
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub struct ContentStore {
    documents: HashMap<DocumentId, Document>,
    entities: HashMap<EntityId, Entity>,
    children: HashMap<DocumentId, Vec<EntityId>>,
    /// Entity ids in creation order; sorts are stable over this order.
    order: Vec<EntityId>,
    module_numbers: HashSet<u32>,
    lesson_numbers: HashSet<(u32, u32)>,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    pub fn new(renderer: MarkdownRenderer) -> Self {
        Self {
            documents: HashMap::new(),
            entities: HashMap::new(),
            children: HashMap::new(),
            order: Vec::new(),
            module_numbers: HashSet::new(),
            lesson_numbers: HashSet::new(),
            renderer,
        }
    }

    pub fn add_document(&mut self, document: Document) -> Result<DocumentId> {
        let id = document.id;
        if self.documents.contains_key(&id) {
            return Err(SiteError::DuplicateContent(format!(
                "document {} ingested twice",
                document.relative_path
            )));
        }
        self.documents.insert(id, document);
        Ok(id)
    }

    /// Register a derived entity and link it to its parent document.
    /// Duplicate courses, module numbers and (module, lesson) pairs are rejected.
    pub fn create_node(&mut self, entity: Entity) -> Result<EntityId> {
        let parent = entity.parent();
        let parent_path = self
            .documents
            .get(&parent)
            .map(|doc| doc.relative_path.clone())
            .ok_or_else(|| SiteError::MissingNode(format!("parent document {}", parent)))?;

        if self.entities.contains_key(&entity.id()) {
            return Err(SiteError::DuplicateContent(format!(
                "{} already has a derived entity",
                parent_path
            )));
        }

        match &entity {
            Entity::Course(_) => {
                if let Some(existing) = self.course() {
                    return Err(SiteError::DuplicateContent(format!(
                        "second course landing page {} (first from {})",
                        parent_path,
                        self.document_path(existing.parent)
                    )));
                }
            }
            Entity::Module(module) => {
                if let Some(number) = module.fields.module
                    && !self.module_numbers.insert(number)
                {
                    return Err(SiteError::DuplicateContent(format!(
                        "module number {} used again by {}",
                        number, parent_path
                    )));
                }
            }
            Entity::Lesson(lesson) => {
                if let (Some(module), Some(number)) = (lesson.fields.module, lesson.fields.lesson)
                    && !self.lesson_numbers.insert((module, number))
                {
                    return Err(SiteError::DuplicateContent(format!(
                        "lesson {}.{} used again by {}",
                        module, number, parent_path
                    )));
                }
            }
        }

        let id = entity.id();
        debug!(
            "Created {} node {} for {}",
            entity.internal().type_name,
            id,
            parent_path
        );
        self.children.entry(parent).or_default().push(id);
        self.order.push(id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    fn document_path(&self, id: DocumentId) -> &str {
        self.documents
            .get(&id)
            .map(|doc| doc.relative_path.as_str())
            .unwrap_or("<unknown>")
    }

    pub fn node(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn children(&self, parent: DocumentId) -> &[EntityId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn course(&self) -> Option<&Course> {
        self.entities.values().find_map(|entity| match entity {
            Entity::Course(course) => Some(course),
            _ => None,
        })
    }

    pub fn module(&self, id: EntityId) -> Option<&Module> {
        match self.entities.get(&id) {
            Some(Entity::Module(module)) => Some(module),
            _ => None,
        }
    }

    pub fn lesson(&self, id: EntityId) -> Option<&Lesson> {
        match self.entities.get(&id) {
            Some(Entity::Lesson(lesson)) => Some(lesson),
            _ => None,
        }
    }

    fn in_order(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// All modules, sorted by module number. Modules without a number sort last.
    pub fn modules_sorted(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self
            .in_order()
            .filter_map(|entity| match entity {
                Entity::Module(module) => Some(module),
                _ => None,
            })
            .collect();
        modules.sort_by_key(|module| module.fields.module.unwrap_or(u32::MAX));
        modules
    }

    /// Lessons of one module, sorted by lesson number.
    pub fn lessons_in_module(&self, module: u32) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self
            .in_order()
            .filter_map(|entity| match entity {
                Entity::Lesson(lesson) if lesson.fields.module == Some(module) => Some(lesson),
                _ => None,
            })
            .collect();
        lessons.sort_by_key(|lesson| lesson.fields.lesson.unwrap_or(u32::MAX));
        lessons
    }

    fn parent_document(&self, id: EntityId) -> Result<&Document> {
        let entity = self
            .entities
            .get(&id)
            .ok_or_else(|| SiteError::MissingNode(format!("entity {}", id)))?;
        self.documents.get(&entity.parent()).ok_or_else(|| {
            SiteError::MissingNode(format!("parent document {}", entity.parent()))
        })
    }

    /// Render the body of `id` from its parent document. Nothing is cached:
    /// every call goes back to the parent.
    pub fn body(&self, id: EntityId) -> Result<String> {
        let document = self.parent_document(id)?;
        Ok(self.renderer.render(&document.body))
    }

    pub fn headings(&self, id: EntityId) -> Result<Vec<Heading>> {
        let document = self.parent_document(id)?;
        Ok(self.renderer.headings(&document.body))
    }
}

fn required<T: Clone>(
    value: &Option<T>,
    type_name: &str,
    field: &str,
    id: EntityId,
    errors: &mut Vec<QueryError>,
) -> Option<T> {
    if value.is_none() {
        errors.push(QueryError::non_nullable(type_name, field, &id.to_string()));
    }
    value.clone()
}

fn module_summary(module: &Module, errors: &mut Vec<QueryError>) -> Option<ModuleSummary> {
    let type_name = ModuleFields::TYPE_NAME;
    let number = required(&module.fields.module, type_name, "module", module.id, errors);
    let description = required(
        &module.fields.description,
        type_name,
        "description",
        module.id,
        errors,
    );

    Some(ModuleSummary {
        id: module.id,
        slug: module.fields.slug.clone(),
        module: number?,
        description: description?,
    })
}

fn lesson_summary(lesson: &Lesson, errors: &mut Vec<QueryError>) -> Option<LessonSummary> {
    let type_name = LessonFields::TYPE_NAME;
    let module = required(&lesson.fields.module, type_name, "module", lesson.id, errors);
    let number = required(&lesson.fields.lesson, type_name, "lesson", lesson.id, errors);
    let description = required(
        &lesson.fields.description,
        type_name,
        "description",
        lesson.id,
        errors,
    );

    Some(LessonSummary {
        id: lesson.id,
        slug: lesson.fields.slug.clone(),
        module: module?,
        lesson: number?,
        description: description?,
    })
}

impl ContentQuery for ContentStore {
    fn navigation(&self) -> QueryResult<NavigationData> {
        let mut errors = Vec::new();
        let mut modules = Vec::new();
        let mut lessons = Vec::new();

        for entity in self.in_order() {
            match entity {
                Entity::Module(module) => {
                    if let Some(summary) = module_summary(module, &mut errors) {
                        modules.push(summary);
                    }
                }
                Entity::Lesson(lesson) => {
                    if let Some(summary) = lesson_summary(lesson, &mut errors) {
                        lessons.push(summary);
                    }
                }
                Entity::Course(_) => {}
            }
        }

        modules.sort_by_key(|m| m.module);
        lessons.sort_by_key(|l| (l.module, l.lesson));

        QueryResult {
            data: Some(NavigationData { modules, lessons }),
            errors,
        }
    }
}
