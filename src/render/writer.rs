// file: src/render/writer.rs
// description: renders planned pages and writes them to the output directory
// reference: https://docs.rs/futures

use crate::content::ContentStore;
use crate::error::{Result, SiteError};
use crate::models::{PageRequest, Template};
use crate::pages::PageSink;
use crate::pipeline::ProgressTracker;
use crate::render::TemplateRenderer;
use crate::utils::Validator;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: String,
    pub template: Template,
    pub output: PathBuf,
    pub html: String,
}

/// Page sink that renders each request as it is committed. Two pages
/// claiming the same output path are rejected.
pub struct RenderingSink<'a> {
    store: &'a ContentStore,
    templates: &'a TemplateRenderer,
    output_dir: PathBuf,
    pages: Vec<RenderedPage>,
    claimed: HashMap<PathBuf, String>,
}

impl<'a> RenderingSink<'a> {
    pub fn new(
        store: &'a ContentStore,
        templates: &'a TemplateRenderer,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            templates,
            output_dir: output_dir.into(),
            pages: Vec::new(),
            claimed: HashMap::new(),
        }
    }

    pub fn into_pages(self) -> Vec<RenderedPage> {
        self.pages
    }
}

impl PageSink for RenderingSink<'_> {
    fn create_page(&mut self, request: PageRequest) -> Result<()> {
        let output = output_file(&self.output_dir, &request.path)?;

        if let Some(existing) = self.claimed.get(&output) {
            return Err(SiteError::DuplicateContent(format!(
                "pages {} and {} both write {}",
                existing,
                request.path,
                output.display()
            )));
        }

        let html = self.templates.render(self.store, &request)?;
        debug!("Rendered {:?} page {}", request.template, request.path);

        self.claimed.insert(output.clone(), request.path.clone());
        self.pages.push(RenderedPage {
            path: request.path,
            template: request.template,
            output,
            html,
        });
        Ok(())
    }
}

/// `/a/b/` under `public` becomes `public/a/b/index.html`.
pub fn output_file(output_dir: &Path, page_path: &str) -> Result<PathBuf> {
    Validator::validate_page_path(page_path)?;

    let mut file = output_dir.to_path_buf();
    for segment in page_path.split('/').filter(|s| !s.is_empty()) {
        file.push(segment);
    }
    file.push("index.html");
    Ok(file)
}

/// Write rendered pages with at most `workers` writes in flight.
pub async fn write_pages(
    pages: Vec<RenderedPage>,
    workers: usize,
    progress: Arc<ProgressTracker>,
) -> Result<usize> {
    let results = stream::iter(pages.into_iter().map(|page| {
        let progress = Arc::clone(&progress);
        async move {
            if let Some(parent) = page.output.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| SiteError::FileOperation {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
            }

            tokio::fs::write(&page.output, page.html.as_bytes())
                .await
                .map_err(|e| SiteError::FileOperation {
                    path: page.output.clone(),
                    source: e,
                })?;

            progress.page_written(&page.path, page.html.len() as u64);
            Ok::<_, SiteError>(())
        }
    }))
    .buffer_unordered(workers.max(1))
    .collect::<Vec<_>>()
    .await;

    let mut written = 0;
    for result in results {
        result?;
        written += 1;
    }

    info!("Wrote {} pages", written);
    Ok(written)
}
