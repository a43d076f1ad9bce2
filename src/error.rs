// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Frontmatter error in {file}: {message}")]
    Frontmatter { file: String, message: String },

    #[error("Duplicate content: {0}")]
    DuplicateContent(String),

    #[error("Query failed with {} error(s): {}", .0.len(), QueryErrors(.0))]
    Query(Vec<QueryError>),

    #[error("Node not found: {0}")]
    MissingNode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Serialization(err.to_string())
    }
}

/// A single error reported by the content query layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub message: String,
    pub path: Vec<String>,
}

impl QueryError {
    pub fn non_nullable(type_name: &str, field: &str, id: &str) -> Self {
        Self {
            message: format!("Cannot return null for non-nullable field {type_name}.{field}"),
            path: vec![type_name.to_string(), id.to_string(), field.to_string()],
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.path.join("."))
    }
}

struct QueryErrors<'a>(&'a [QueryError]);

impl fmt::Display for QueryErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_display_lists_every_error() {
        let err = SiteError::Query(vec![
            QueryError::non_nullable("MdxLesson", "lesson", "a"),
            QueryError::non_nullable("MdxModule", "title", "b"),
        ]);

        let text = err.to_string();
        assert!(text.starts_with("Query failed with 2 error(s)"));
        assert!(text.contains("MdxLesson.lesson"));
        assert!(text.contains("MdxModule.title"));
    }
}
