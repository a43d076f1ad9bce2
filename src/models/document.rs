// file: src/models/document.rs
// description: raw ingested document with parsed frontmatter and body
// reference: internal data structures

use crate::models::ids::DocumentId;
use crate::parser::Frontmatter;
use serde::Serialize;
use std::path::PathBuf;

/// A markdown file read from a content source. Read-only once ingested.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: DocumentId,
    /// Name of the content source the file was found in.
    pub source: String,
    /// File name without extension.
    pub name: String,
    /// Path relative to the content source root, always `/`-separated.
    pub relative_path: String,
    pub file_path: PathBuf,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    pub fn new(
        source: impl Into<String>,
        relative_path: impl Into<String>,
        file_path: PathBuf,
        frontmatter: Frontmatter,
        body: String,
    ) -> Self {
        let source = source.into();
        let relative_path = relative_path.into().replace('\\', "/");
        let name = relative_path
            .rsplit('/')
            .next()
            .map(|file| match file.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem,
                _ => file,
            })
            .unwrap_or_default()
            .to_string();
        let id = DocumentId::derive(&source, &relative_path);

        Self {
            id,
            source,
            name,
            relative_path,
            file_path,
            frontmatter,
            body,
        }
    }

    pub fn is_index(&self) -> bool {
        self.name == "index"
    }
}
