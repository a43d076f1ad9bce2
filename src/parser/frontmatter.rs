// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction from markdown
// reference: https://docs.rs/yaml-rust

use crate::error::{Result, SiteError};
use serde::Serialize;
use yaml_rust::{Yaml, YamlLoader};

pub struct FrontmatterParser;

/// Frontmatter fields the course hierarchy reads. Other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub module: Option<u32>,
    pub lesson: Option<u32>,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Split `content` into frontmatter and body. The block opens with a
    /// `---` line and closes at the next line that is exactly `---`
    /// (trailing whitespace allowed). Without both fences the whole content
    /// is body and the frontmatter is empty.
    pub fn extract(&self, file: &str, content: &str) -> Result<(Frontmatter, String)> {
        let Some((yaml_content, remaining_content)) = split_fences(content) else {
            return Ok((Frontmatter::default(), content.to_string()));
        };

        let docs = YamlLoader::load_from_str(yaml_content.trim()).map_err(|e| {
            SiteError::Frontmatter {
                file: file.to_string(),
                message: format!("YAML parse error: {}", e),
            }
        })?;

        let frontmatter = match docs.first() {
            Some(Yaml::Null) | None => Frontmatter::default(),
            Some(doc) if matches!(doc, Yaml::Hash(_)) => self.read_fields(file, doc)?,
            Some(_) => {
                return Err(SiteError::Frontmatter {
                    file: file.to_string(),
                    message: "frontmatter must be a mapping".to_string(),
                });
            }
        };

        Ok((
            frontmatter,
            remaining_content.trim_start_matches(['\r', '\n']).to_string(),
        ))
    }

    fn read_fields(&self, file: &str, doc: &Yaml) -> Result<Frontmatter> {
        Ok(Frontmatter {
            title: scalar_string(&doc["title"]),
            description: scalar_string(&doc["description"]),
            slug: scalar_string(&doc["slug"]),
            module: number_field(file, "module", &doc["module"])?,
            lesson: number_field(file, "lesson", &doc["lesson"])?,
        })
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Locate the frontmatter block. Returns the text between the fences and
/// everything after the closing fence line.
fn split_fences(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    if !is_fence(lines.next()?) {
        return None;
    }

    let yaml_start = content.find('\n')? + 1;
    let mut offset = yaml_start;
    for line in lines {
        if is_fence(line) {
            return Some((&content[yaml_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn scalar_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Ordering numbers must be positive integers. A zero or missing value is
/// treated as absent, the same as an unset field.
fn number_field(file: &str, key: &str, value: &Yaml) -> Result<Option<u32>> {
    let parsed = match value {
        Yaml::Integer(i) => Some(*i),
        Yaml::String(s) => s.trim().parse::<i64>().ok(),
        Yaml::Null | Yaml::BadValue => return Ok(None),
        _ => None,
    };

    match parsed {
        Some(0) => Ok(None),
        Some(n) if n > 0 && n <= u32::MAX as i64 => Ok(Some(n as u32)),
        _ => Err(SiteError::Frontmatter {
            file: file.to_string(),
            message: format!("`{}` must be a positive integer, got {:?}", key, value),
        }),
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}
