// file: src/render/templates.rs
// description: html templates for course, module and lesson pages
// reference: https://maud.lambda.xyz

use crate::content::ContentStore;
use crate::error::{Result, SiteError};
use crate::models::{Course, EntityId, Lesson, Module, PageContext, PageRequest, Template};
use crate::parser::Heading;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLESHEET: &str = "body{max-width:46rem;margin:0 auto;padding:1rem;font-family:system-ui,sans-serif;line-height:1.6}\
header{border-bottom:1px solid #ddd;margin-bottom:1.5rem}\
nav.pager{display:flex;justify-content:space-between;margin-top:2rem;border-top:1px solid #ddd;padding-top:1rem}\
ul.entries{list-style:none;padding:0}ul.entries h3{margin-bottom:0}";

/// One entry of a module or lesson listing.
struct ListItem<'a> {
    number: Option<u32>,
    title: &'a str,
    slug: &'a str,
    description: &'a str,
}

struct PagerLink<'a> {
    slug: &'a str,
    label: String,
}

pub struct TemplateRenderer {
    site_title: String,
    base_path: String,
}

impl TemplateRenderer {
    pub fn new(site_title: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            base_path: base_path.into(),
        }
    }

    pub fn render(&self, store: &ContentStore, request: &PageRequest) -> Result<String> {
        let markup = match request.template {
            Template::Course => self.course_page(store)?,
            Template::Module => self.module_page(store, &request.context)?,
            Template::Lesson => self.lesson_page(store, &request.context)?,
        };
        Ok(markup.into_string())
    }

    fn course_page(&self, store: &ContentStore) -> Result<Markup> {
        let course = require_course(store)?;
        let body = store.body(course.id)?;
        let modules = store.modules_sorted();
        let items: Vec<ListItem<'_>> = modules
            .iter()
            .map(|module| ListItem {
                number: module.fields.module,
                title: text(&module.fields.title),
                slug: &module.fields.slug,
                description: text(&module.fields.description),
            })
            .collect();

        let title = text(&course.fields.title);
        let content = html! {
            h1 { (title) }
            (PreEscaped(body))
            h2 { "List of modules:" }
            (list(&items))
        };

        Ok(self.layout(title, course.fields.description.as_deref(), content))
    }

    fn module_page(&self, store: &ContentStore, context: &PageContext) -> Result<Markup> {
        let module = require_module(store, context.id)?;
        let body = store.body(module.id)?;
        let previous = optional(context.previous_id, |id| store.module(id));
        let next = optional(context.next_id, |id| store.module(id));
        let lessons = context
            .module
            .map(|number| store.lessons_in_module(number))
            .unwrap_or_default();
        let items: Vec<ListItem<'_>> = lessons
            .iter()
            .map(|lesson| ListItem {
                number: lesson.fields.lesson,
                title: text(&lesson.fields.title),
                slug: &lesson.fields.slug,
                description: text(&lesson.fields.description),
            })
            .collect();

        let title = text(&module.fields.title);
        let content = html! {
            h1 { (title) }
            (PreEscaped(body))
            @if !items.is_empty() {
                h2 { "Lessons:" }
                (list(&items))
            }
            (pager(
                previous.map(|m| PagerLink { slug: &m.fields.slug, label: module_label(m) }),
                next.map(|m| PagerLink { slug: &m.fields.slug, label: module_label(m) }),
            ))
        };

        Ok(self.layout(title, module.fields.description.as_deref(), content))
    }

    fn lesson_page(&self, store: &ContentStore, context: &PageContext) -> Result<Markup> {
        let lesson = require_lesson(store, context.id)?;
        let body = store.body(lesson.id)?;
        let headings = store.headings(lesson.id)?;
        let previous = optional(context.previous_id, |id| store.lesson(id));
        let next = optional(context.next_id, |id| store.lesson(id));
        let course_title = store.course().and_then(|course| course.fields.title.as_deref());

        let title = text(&lesson.fields.title);
        let content = html! {
            @if let Some(course_title) = course_title {
                p.course { a href=(self.base_path) { (course_title) } }
            }
            h1 { (title) }
            (outline(&headings))
            (PreEscaped(body))
            (pager(
                previous.map(|l| PagerLink { slug: &l.fields.slug, label: lesson_label(l) }),
                next.map(|l| PagerLink { slug: &l.fields.slug, label: lesson_label(l) }),
            ))
        };

        Ok(self.layout(title, lesson.fields.description.as_deref(), content))
    }

    fn layout(&self, title: &str, description: Option<&str>, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " | " (self.site_title) }
                    @if let Some(description) = description {
                        meta name="description" content=(description);
                    }
                    style { (PreEscaped(STYLESHEET)) }
                }
                body {
                    header {
                        a href=(self.base_path) { (self.site_title) }
                    }
                    main { (content) }
                }
            }
        }
    }
}

fn list(items: &[ListItem<'_>]) -> Markup {
    html! {
        ul.entries {
            @for item in items {
                li {
                    a href=(item.slug) {
                        h3 {
                            @if let Some(number) = item.number { (number) ": " }
                            (item.title)
                        }
                    }
                    p { (item.description) }
                }
            }
        }
    }
}

fn pager(previous: Option<PagerLink<'_>>, next: Option<PagerLink<'_>>) -> Markup {
    html! {
        @if previous.is_some() || next.is_some() {
            nav.pager {
                @if let Some(previous) = previous {
                    a rel="prev" href=(previous.slug) { "← " (previous.label) }
                } @else {
                    span {}
                }
                @if let Some(next) = next {
                    a rel="next" href=(next.slug) { (next.label) " →" }
                }
            }
        }
    }
}

fn outline(headings: &[Heading]) -> Markup {
    let sections: Vec<&Heading> = headings.iter().filter(|h| h.level == 2).collect();
    html! {
        @if sections.len() > 1 {
            details.outline {
                summary { "On this page" }
                ul {
                    @for heading in sections { li { (heading.text) } }
                }
            }
        }
    }
}

fn module_label(module: &Module) -> String {
    match module.fields.module {
        Some(number) => format!("{}: {}", number, text(&module.fields.title)),
        None => text(&module.fields.title).to_string(),
    }
}

fn lesson_label(lesson: &Lesson) -> String {
    match (lesson.fields.module, lesson.fields.lesson) {
        (Some(module), Some(number)) => {
            format!("{}.{} {}", module, number, text(&lesson.fields.title))
        }
        _ => text(&lesson.fields.title).to_string(),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn optional<'a, T>(id: Option<EntityId>, lookup: impl Fn(EntityId) -> Option<&'a T>) -> Option<&'a T> {
    id.and_then(lookup)
}

fn require_course(store: &ContentStore) -> Result<&Course> {
    store.course().ok_or_else(|| {
        SiteError::MissingNode("course landing page (index without a module number)".to_string())
    })
}

fn require_module(store: &ContentStore, id: Option<EntityId>) -> Result<&Module> {
    let id = id.ok_or_else(|| SiteError::MissingNode("module page without an id".to_string()))?;
    store
        .module(id)
        .ok_or_else(|| SiteError::MissingNode(format!("module {}", id)))
}

fn require_lesson(store: &ContentStore, id: Option<EntityId>) -> Result<&Lesson> {
    let id = id.ok_or_else(|| SiteError::MissingNode("lesson page without an id".to_string()))?;
    store
        .lesson(id)
        .ok_or_else(|| SiteError::MissingNode(format!("lesson {}", id)))
}
