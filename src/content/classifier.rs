// file: src/content/classifier.rs
// description: classification of course documents into course, module and lesson entities
// reference: course hierarchy rules

use crate::config::ThemeOptions;
use crate::content::slug;
use crate::error::Result;
use crate::models::{
    Course, CourseFields, Document, Entity, Lesson, LessonFields, Module, ModuleFields,
};
use tracing::debug;

pub struct ContentClassifier {
    options: ThemeOptions,
}

impl ContentClassifier {
    pub fn new(options: ThemeOptions) -> Self {
        Self { options }
    }

    /// Derive at most one entity from `document`. Documents from any other
    /// content source are ignored. No field validation happens here.
    pub fn classify(&self, document: &Document) -> Result<Option<Entity>> {
        if document.source != self.options.course_path {
            debug!(
                "Ignoring {} from source {}",
                document.relative_path, document.source
            );
            return Ok(None);
        }

        let frontmatter = &document.frontmatter;
        let slug = slug::resolve_slug(
            &self.options.base_path,
            frontmatter.slug.as_deref(),
            &document.relative_path,
        );

        let entity = if document.is_index() {
            match frontmatter.module {
                Some(module) => Entity::Module(Module::new(
                    document.id,
                    ModuleFields {
                        title: frontmatter.title.clone(),
                        module: Some(module),
                        description: frontmatter.description.clone(),
                        slug,
                    },
                )?),
                None => Entity::Course(Course::new(
                    document.id,
                    CourseFields {
                        title: frontmatter.title.clone(),
                        description: frontmatter.description.clone(),
                    },
                )?),
            }
        } else {
            Entity::Lesson(Lesson::new(
                document.id,
                LessonFields {
                    title: frontmatter.title.clone(),
                    slug,
                    lesson: frontmatter.lesson,
                    module: frontmatter.module,
                    description: frontmatter.description.clone(),
                },
            )?)
        };

        debug!(
            "Classified {} as {:?} ({})",
            document.relative_path,
            entity.kind(),
            entity.id()
        );

        Ok(Some(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;
    use crate::parser::Frontmatter;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn options() -> ThemeOptions {
        ThemeOptions {
            course_path: "courses".to_string(),
            base_path: "/courses".to_string(),
            asset_path: "assets".to_string(),
        }
    }

    fn document(source: &str, relative_path: &str, frontmatter: Frontmatter) -> Document {
        Document::new(
            source,
            relative_path,
            PathBuf::from(relative_path),
            frontmatter,
            "body".to_string(),
        )
    }

    #[test]
    fn test_index_with_module_number_is_module() {
        let classifier = ContentClassifier::new(options());
        let doc = document(
            "courses",
            "module-1/index.md",
            Frontmatter {
                title: Some("Intro".to_string()),
                module: Some(1),
                description: Some("d".to_string()),
                ..Default::default()
            },
        );

        let Some(Entity::Module(module)) = classifier.classify(&doc).unwrap() else {
            panic!("expected a module");
        };

        assert_eq!(
            module.fields,
            ModuleFields {
                title: Some("Intro".to_string()),
                module: Some(1),
                description: Some("d".to_string()),
                slug: "/courses/module-1/".to_string(),
            }
        );
        assert_eq!(module.parent, doc.id);
    }

    #[test]
    fn test_index_without_module_number_is_course() {
        let classifier = ContentClassifier::new(options());
        let doc = document(
            "courses",
            "index.md",
            Frontmatter {
                title: Some("Rust".to_string()),
                description: Some("Learn Rust".to_string()),
                ..Default::default()
            },
        );

        let entity = classifier.classify(&doc).unwrap().unwrap();
        assert_eq!(entity.kind(), EntityKind::Course);
        assert_eq!(entity.slug(), None);
    }

    #[test]
    fn test_non_index_is_lesson() {
        let classifier = ContentClassifier::new(options());
        let doc = document(
            "courses",
            "module-2/borrowing.md",
            Frontmatter {
                title: Some("Borrowing".to_string()),
                module: Some(2),
                lesson: Some(3),
                ..Default::default()
            },
        );

        let Some(Entity::Lesson(lesson)) = classifier.classify(&doc).unwrap() else {
            panic!("expected a lesson");
        };

        assert_eq!(lesson.fields.module, Some(2));
        assert_eq!(lesson.fields.lesson, Some(3));
        assert_eq!(lesson.fields.slug, "/courses/module-2/borrowing/");
    }

    #[test]
    fn test_lesson_without_numbers_still_classified() {
        let classifier = ContentClassifier::new(options());
        let doc = document("courses", "notes.md", Frontmatter::default());

        let entity = classifier.classify(&doc).unwrap().unwrap();
        assert_eq!(entity.kind(), EntityKind::Lesson);
    }

    #[test]
    fn test_other_source_ignored() {
        let classifier = ContentClassifier::new(options());
        let doc = document("blog", "index.md", Frontmatter::default());

        assert!(classifier.classify(&doc).unwrap().is_none());
    }

    #[test]
    fn test_frontmatter_slug_overrides_path() {
        let classifier = ContentClassifier::new(options());
        let absolute = document(
            "courses",
            "module-1/a.md",
            Frontmatter {
                slug: Some("/elsewhere".to_string()),
                ..Default::default()
            },
        );
        let relative = document(
            "courses",
            "module-1/b.md",
            Frontmatter {
                slug: Some("custom//".to_string()),
                ..Default::default()
            },
        );

        let absolute = classifier.classify(&absolute).unwrap().unwrap();
        let relative = classifier.classify(&relative).unwrap().unwrap();

        assert_eq!(absolute.slug(), Some("/elsewhere/"));
        assert_eq!(relative.slug(), Some("/courses/custom/"));
    }
}
