// file: src/source/scanner.rs
// description: content source walking and markdown document ingestion
// reference: https://docs.rs/walkdir

use crate::config::BuildConfig;
use crate::error::{Result, SiteError};
use crate::models::Document;
use crate::parser::FrontmatterParser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// A named directory of content files.
#[derive(Debug, Clone)]
pub struct ContentSource {
    pub name: String,
    pub root: PathBuf,
}

pub struct FileScanner {
    config: BuildConfig,
    frontmatter: FrontmatterParser,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
}

impl ContentSource {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

impl FileScanner {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            frontmatter: FrontmatterParser::new(),
        }
    }

    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed to read entry under {}: {}", root.display(), err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            if self.should_skip(&relative_path) {
                debug!("Skipping file: {}", relative_path);
                continue;
            }

            if let Some(extension) = path.extension().and_then(|e| e.to_str())
                && MARKDOWN_EXTENSIONS.contains(&extension)
            {
                let size = match entry.metadata() {
                    Ok(metadata) => metadata.len(),
                    Err(err) => {
                        warn!("Failed to read metadata for {}: {}", path.display(), err);
                        continue;
                    }
                };
                let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

                if size > max_size {
                    debug!(
                        "Skipping large file ({} MB): {}",
                        size / 1024 / 1024,
                        path.display()
                    );
                    continue;
                }

                files.push(ScannedFile {
                    path: path.to_path_buf(),
                    relative_path,
                });
            }
        }

        info!("Found {} markdown files", files.len());
        Ok(files)
    }

    /// Read every markdown file of `source` into a document.
    pub fn load_documents(&self, source: &ContentSource) -> Result<Vec<Document>> {
        let files = self.scan_directory(&source.root)?;
        files.iter().map(|file| self.load_document(source, file)).collect()
    }

    pub fn load_document(&self, source: &ContentSource, file: &ScannedFile) -> Result<Document> {
        let content = fs::read_to_string(&file.path).map_err(|e| SiteError::FileOperation {
            path: file.path.clone(),
            source: e,
        })?;

        let (frontmatter, body) = self.frontmatter.extract(&file.relative_path, &content)?;

        Ok(Document::new(
            source.name.clone(),
            file.relative_path.clone(),
            file.path.clone(),
            frontmatter,
            body,
        ))
    }

    /// Skip patterns apply to the path relative to the source root, so the
    /// location of the root itself never matches.
    fn should_skip(&self, relative_path: &str) -> bool {
        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if relative_path.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if relative_path.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(skip_patterns: Vec<String>) -> BuildConfig {
        BuildConfig {
            parallel_workers: 1,
            skip_patterns,
            max_file_size_mb: 10,
            copy_assets: false,
        }
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("module-1")).unwrap();
        fs::write(temp.path().join("index.md"), "# Course").unwrap();
        fs::write(temp.path().join("module-1/lesson.md"), "# Lesson").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let scanner = FileScanner::new(config(vec![]));
        let files = scanner.scan_directory(temp.path()).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["index.md", "module-1/lesson.md"]);
    }

    #[test]
    fn test_skip_patterns() {
        let scanner = FileScanner::new(config(vec!["*.swp".to_string(), "drafts/".to_string()]));

        assert!(scanner.should_skip("lesson.swp"));
        assert!(scanner.should_skip("module-1/drafts/lesson.md"));
        assert!(!scanner.should_skip("module-1/lesson.md"));
    }

    #[test]
    fn test_skip_patterns_ignore_the_root_location() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("drafts/.git/course");
        fs::create_dir_all(root.join("module-1/drafts")).unwrap();
        fs::write(root.join("index.md"), "# Course").unwrap();
        fs::write(root.join("module-1/lesson.md"), "# Lesson").unwrap();
        fs::write(root.join("module-1/drafts/wip.md"), "# Later").unwrap();

        let scanner = FileScanner::new(config(vec!["drafts/".to_string(), ".git/".to_string()]));
        let files = scanner.scan_directory(&root).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["index.md", "module-1/lesson.md"]);
    }

    #[test]
    fn test_unreadable_entries_are_logged_not_fatal() {
        let temp = TempDir::new().unwrap();
        let scanner = FileScanner::new(config(vec![]));

        let files = scanner.scan_directory(&temp.path().join("missing")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_load_documents() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("module-1")).unwrap();
        fs::write(
            temp.path().join("module-1/index.md"),
            "---\ntitle: Intro\nmodule: 1\ndescription: d\n---\nWelcome",
        )
        .unwrap();

        let scanner = FileScanner::new(config(vec![]));
        let source = ContentSource::new("courses", temp.path());
        let documents = scanner.load_documents(&source).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source, "courses");
        assert_eq!(documents[0].name, "index");
        assert_eq!(documents[0].frontmatter.module, Some(1));
        assert_eq!(documents[0].body, "Welcome");
    }
}
