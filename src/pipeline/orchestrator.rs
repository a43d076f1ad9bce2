// file: src/pipeline/orchestrator.rs
// description: end to end site build: bootstrap, ingest, classify, plan, render, write
// reference: application bootstrap and orchestration

use crate::config::{Config, ThemeOptions};
use crate::content::{ContentClassifier, ContentQuery, ContentStore};
use crate::error::{QueryError, Result, SiteError};
use crate::models::{Entity, PageRequest};
use crate::pages::PagePlanner;
use crate::parser::MarkdownRenderer;
use crate::pipeline::progress::{BuildStats, ProgressTracker};
use crate::render::{RenderingSink, TemplateRenderer, write_pages};
use crate::source::{ContentSource, FileScanner};
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct SiteBuilder {
    config: Config,
    options: ThemeOptions,
    show_progress: bool,
}

/// Classified content plus the counts gathered while loading it.
pub struct LoadedContent {
    pub store: ContentStore,
    pub stats: BuildStats,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        let options = config.theme_options();
        Self {
            config,
            options,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    fn root(&self) -> &Path {
        &self.config.site.root
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.config.site.output_dir)
    }

    /// Make sure the content source and asset directories exist.
    pub fn bootstrap(&self) -> Result<Vec<PathBuf>> {
        let dirs = [
            self.options.content_dir(self.root()),
            self.options.asset_dir(self.root()),
        ];
        let mut created = Vec::new();

        for dir in dirs {
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(|e| SiteError::FileOperation {
                    path: dir.clone(),
                    source: e,
                })?;
                info!("Created directory {}", dir.display());
                created.push(dir);
            }
        }

        Ok(created)
    }

    pub fn course_source(&self) -> ContentSource {
        ContentSource::new(
            self.options.course_path.clone(),
            self.options.content_dir(self.root()),
        )
    }

    /// Ingest the course source and classify every document into the store.
    pub fn load_content(&self) -> Result<LoadedContent> {
        let source = self.course_source();
        Validator::validate_directory(&source.root)?;

        let scanner = FileScanner::new(self.config.build.clone());
        let classifier = ContentClassifier::new(self.options.clone());
        let mut store = ContentStore::new(MarkdownRenderer::new());
        let mut stats = BuildStats::new();

        for document in scanner.load_documents(&source)? {
            stats.documents_ingested += 1;
            let entity = classifier.classify(&document)?;
            store.add_document(document)?;

            match entity {
                Some(entity) => {
                    match &entity {
                        Entity::Course(_) => stats.courses += 1,
                        Entity::Module(_) => stats.modules += 1,
                        Entity::Lesson(_) => stats.lessons += 1,
                    }
                    store.create_node(entity)?;
                }
                None => stats.documents_ignored += 1,
            }
        }

        info!(
            "Classified {} documents: {} course, {} modules, {} lessons",
            stats.documents_ingested, stats.courses, stats.modules, stats.lessons
        );

        if stats.courses == 0 {
            warn!("No course landing page found (index without a module number)");
        }

        Ok(LoadedContent { store, stats })
    }

    pub fn plan(&self, store: &ContentStore) -> Result<Vec<PageRequest>> {
        PagePlanner::new(self.options.clone()).plan(store)
    }

    /// Query errors for the loaded content, without planning or writing anything.
    pub fn check(&self, store: &ContentStore) -> Vec<QueryError> {
        store.navigation().errors
    }

    pub async fn build(&self, clean: bool) -> Result<BuildStats> {
        let start = Instant::now();
        Validator::validate_workers(self.config.build.parallel_workers)?;

        self.bootstrap()?;
        let LoadedContent { store, mut stats } = self.load_content()?;

        let output_dir = self.output_dir();
        let templates = TemplateRenderer::new(
            self.config.site.title.clone(),
            self.options.base_path.clone(),
        );
        let mut sink = RenderingSink::new(&store, &templates, &output_dir);
        PagePlanner::new(self.options.clone()).plan_into(&store, &mut sink)?;
        let pages = sink.into_pages();

        // Only touch the previous output once every page has rendered.
        if clean && output_dir.exists() {
            info!("Cleaning {}", output_dir.display());
            tokio::fs::remove_dir_all(&output_dir)
                .await
                .map_err(|e| SiteError::FileOperation {
                    path: output_dir.clone(),
                    source: e,
                })?;
        }

        let progress = Arc::new(if self.show_progress {
            ProgressTracker::new(pages.len(), colored::control::SHOULD_COLORIZE.should_colorize())
        } else {
            ProgressTracker::hidden()
        });

        stats.pages_written =
            write_pages(pages, self.config.build.parallel_workers, Arc::clone(&progress)).await?;
        stats.total_bytes_written = progress.bytes_written();
        progress.finish();

        if self.config.build.copy_assets {
            stats.assets_copied = self.copy_assets(&output_dir)?;
        }

        stats.duration_ms = start.elapsed().as_millis();
        info!(
            "Build complete: {} pages in {} ms",
            stats.pages_written, stats.duration_ms
        );
        Ok(stats)
    }

    fn copy_assets(&self, output_dir: &Path) -> Result<usize> {
        let asset_dir = self.options.asset_dir(self.root());
        if !asset_dir.is_dir() {
            return Ok(0);
        }

        let target_root = output_dir.join(&self.options.asset_path);
        let mut copied = 0;

        for entry in WalkDir::new(&asset_dir).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed to read asset entry: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&asset_dir).unwrap_or(entry.path());
            let target = target_root.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| SiteError::FileOperation {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            fs::copy(entry.path(), &target).map_err(|e| SiteError::FileOperation {
                path: target.clone(),
                source: e,
            })?;
            debug!("Copied asset {}", relative.display());
            copied += 1;
        }

        info!("Copied {} assets", copied);
        Ok(copied)
    }
}
