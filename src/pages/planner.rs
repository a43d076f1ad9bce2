// file: src/pages/planner.rs
// description: ordering of modules and lessons into page build requests with sibling links
// reference: internal page planning

use crate::config::ThemeOptions;
use crate::content::{ContentQuery, NavigationData};
use crate::error::{QueryError, Result, SiteError};
use crate::models::{PageContext, PageRequest, Template};
use tracing::{error, info};

/// Receives page build requests once a plan has succeeded.
pub trait PageSink {
    fn create_page(&mut self, request: PageRequest) -> Result<()>;
}

impl PageSink for Vec<PageRequest> {
    fn create_page(&mut self, request: PageRequest) -> Result<()> {
        self.push(request);
        Ok(())
    }
}

/// Pair every item with its previous and next sibling.
pub fn with_neighbors<T>(items: &[T]) -> impl Iterator<Item = (Option<&T>, &T, Option<&T>)> {
    items.iter().enumerate().map(move |(index, item)| {
        let previous = index.checked_sub(1).and_then(|i| items.get(i));
        let next = items.get(index + 1);
        (previous, item, next)
    })
}

pub struct PagePlanner {
    options: ThemeOptions,
}

impl PagePlanner {
    pub fn new(options: ThemeOptions) -> Self {
        Self { options }
    }

    /// Build the full list of page requests. Any query error aborts the plan
    /// and no request is produced.
    pub fn plan(&self, query: &impl ContentQuery) -> Result<Vec<PageRequest>> {
        let result = query.navigation();

        if result.has_errors() {
            for err in &result.errors {
                error!("Content query error: {}", err);
            }
            return Err(SiteError::Query(result.errors));
        }

        let data = result.data.ok_or_else(|| {
            SiteError::Query(vec![QueryError {
                message: "navigation query returned no data".to_string(),
                path: vec!["navigation".to_string()],
            }])
        })?;

        let pages = self.plan_navigation(&data);
        info!(
            "Planned {} pages ({} modules, {} lessons)",
            pages.len(),
            data.modules.len(),
            data.lessons.len()
        );
        Ok(pages)
    }

    /// Plan first, then hand every request to `sink`. The sink is never
    /// touched when planning fails.
    pub fn plan_into<S: PageSink>(&self, query: &impl ContentQuery, sink: &mut S) -> Result<usize> {
        let pages = self.plan(query)?;
        let count = pages.len();
        for page in pages {
            sink.create_page(page)?;
        }
        Ok(count)
    }

    fn plan_navigation(&self, data: &NavigationData) -> Vec<PageRequest> {
        let mut pages = Vec::with_capacity(data.modules.len() + data.lessons.len() + 1);

        for (previous, module, next) in with_neighbors(&data.modules) {
            pages.push(PageRequest {
                path: module.slug.clone(),
                template: Template::Module,
                context: PageContext {
                    id: Some(module.id),
                    slug: Some(module.slug.clone()),
                    module: Some(module.module),
                    lesson: None,
                    previous_id: previous.map(|m| m.id),
                    next_id: next.map(|m| m.id),
                },
            });
        }

        for (previous, lesson, next) in with_neighbors(&data.lessons) {
            pages.push(PageRequest {
                path: lesson.slug.clone(),
                template: Template::Lesson,
                context: PageContext {
                    id: Some(lesson.id),
                    slug: Some(lesson.slug.clone()),
                    module: Some(lesson.module),
                    lesson: Some(lesson.lesson),
                    previous_id: previous.map(|l| l.id),
                    next_id: next.map(|l| l.id),
                },
            });
        }

        pages.push(PageRequest {
            path: self.options.base_path.clone(),
            template: Template::Course,
            context: PageContext::default(),
        });

        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LessonSummary, ModuleSummary, QueryResult};
    use crate::models::{DocumentId, EntityId};
    use pretty_assertions::assert_eq;

    struct FixedQuery(QueryResult<NavigationData>);

    impl ContentQuery for FixedQuery {
        fn navigation(&self) -> QueryResult<NavigationData> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct CountingSink {
        calls: usize,
    }

    impl PageSink for CountingSink {
        fn create_page(&mut self, _request: PageRequest) -> Result<()> {
            self.calls += 1;
            Ok(())
        }
    }

    fn id(name: &str) -> EntityId {
        EntityId::derive(DocumentId::derive("courses", name), "test")
    }

    fn lesson(module: u32, lesson: u32) -> LessonSummary {
        let name = format!("{}-{}", module, lesson);
        LessonSummary {
            id: id(&name),
            slug: format!("/courses/{}/", name),
            module,
            lesson,
            description: String::new(),
        }
    }

    fn module(number: u32) -> ModuleSummary {
        ModuleSummary {
            id: id(&format!("module-{}", number)),
            slug: format!("/courses/module-{}/", number),
            module: number,
            description: String::new(),
        }
    }

    fn planner() -> PagePlanner {
        PagePlanner::new(ThemeOptions {
            course_path: "courses".to_string(),
            base_path: "/courses".to_string(),
            asset_path: "assets".to_string(),
        })
    }

    #[test]
    fn test_with_neighbors_edges() {
        let items = [1, 2, 3, 4];
        let triples: Vec<_> = with_neighbors(&items)
            .map(|(p, x, n)| (p.copied(), *x, n.copied()))
            .collect();

        assert_eq!(
            triples,
            vec![
                (None, 1, Some(2)),
                (Some(1), 2, Some(3)),
                (Some(2), 3, Some(4)),
                (Some(3), 4, None),
            ]
        );
    }

    #[test]
    fn test_with_neighbors_single_and_empty() {
        let single = [7];
        let triples: Vec<_> = with_neighbors(&single).collect();
        assert_eq!(triples, vec![(None, &7, None)]);

        let empty: [u8; 0] = [];
        assert_eq!(with_neighbors(&empty).count(), 0);
    }

    #[test]
    fn test_lesson_neighbors() {
        let data = NavigationData {
            modules: vec![],
            lessons: vec![lesson(1, 1), lesson(1, 2), lesson(2, 1)],
        };
        let pages = planner().plan(&FixedQuery(QueryResult::ok(data))).unwrap();

        let middle = &pages[1];
        assert_eq!(middle.template, Template::Lesson);
        assert_eq!(middle.context.lesson, Some(2));
        assert_eq!(middle.context.previous_id, Some(lesson(1, 1).id));
        assert_eq!(middle.context.next_id, Some(lesson(2, 1).id));
        assert_eq!(pages[0].context.previous_id, None);
        assert_eq!(pages[2].context.next_id, None);
    }

    #[test]
    fn test_module_and_lesson_index_spaces_are_independent() {
        let data = NavigationData {
            modules: vec![module(1), module(2)],
            lessons: vec![lesson(1, 1)],
        };
        let pages = planner().plan(&FixedQuery(QueryResult::ok(data))).unwrap();

        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].context.next_id, Some(module(2).id));
        assert_eq!(pages[1].context.previous_id, Some(module(1).id));
        assert_eq!(pages[2].context.previous_id, None);
        assert_eq!(pages[2].context.next_id, None);
    }

    #[test]
    fn test_module_page_request() {
        let data = NavigationData {
            modules: vec![module(1)],
            lessons: vec![],
        };
        let pages = planner().plan(&FixedQuery(QueryResult::ok(data))).unwrap();

        assert_eq!(
            pages[0],
            PageRequest {
                path: "/courses/module-1/".to_string(),
                template: Template::Module,
                context: PageContext {
                    id: Some(module(1).id),
                    slug: Some("/courses/module-1/".to_string()),
                    module: Some(1),
                    lesson: None,
                    previous_id: None,
                    next_id: None,
                },
            }
        );
    }

    #[test]
    fn test_course_page_always_emitted() {
        let pages = planner()
            .plan(&FixedQuery(QueryResult::ok(NavigationData::default())))
            .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, "/courses");
        assert_eq!(pages[0].template, Template::Course);
        assert!(pages[0].context.is_empty());
    }

    #[test]
    fn test_query_error_creates_no_pages() {
        let result = QueryResult {
            data: Some(NavigationData {
                modules: vec![module(1)],
                lessons: vec![lesson(1, 1)],
            }),
            errors: vec![QueryError::non_nullable("MarkdownLesson", "lesson", "x")],
        };
        let mut sink = CountingSink::default();

        let err = planner()
            .plan_into(&FixedQuery(result), &mut sink)
            .unwrap_err();

        assert!(matches!(err, SiteError::Query(ref errors) if errors.len() == 1));
        assert_eq!(sink.calls, 0);
    }

    #[test]
    fn test_plan_into_commits_all_pages() {
        let data = NavigationData {
            modules: vec![module(1)],
            lessons: vec![lesson(1, 1), lesson(1, 2)],
        };
        let mut sink: Vec<PageRequest> = Vec::new();

        let count = planner()
            .plan_into(&FixedQuery(QueryResult::ok(data)), &mut sink)
            .unwrap();

        assert_eq!(count, 4);
        assert_eq!(sink.len(), 4);
    }
}
