// file: src/parser/markdown.rs
// description: markdown to html rendering with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u32,
    pub text: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    pub fn render(&self, content: &str) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut output = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }

    pub fn headings(&self, content: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut current: Option<(u32, String)> = None;

        for event in Parser::new_ext(content, self.options) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some((level as u32, String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, text)) = current.take() {
                        headings.push(Heading {
                            level,
                            text: text.trim().to_string(),
                        });
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, ref mut heading_text)) = current {
                        heading_text.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        headings
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Title\n\nSome *content* here.");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>content</em>"));
    }

    #[test]
    fn test_render_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_headings() {
        let renderer = MarkdownRenderer::new();
        let headings = renderer.headings("# One\n\ntext\n\n## Two `code`\n");

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "One");
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[1].text, "Two code");
    }
}
