// file: src/exporter/json.rs
// description: json export of the planned page set

use crate::error::Result;
use crate::models::PageRequest;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanManifest<'a> {
    pub exported_at: String,
    pub base_path: &'a str,
    pub total_pages: usize,
    pub pages: &'a [PageRequest],
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn manifest<'a>(&self, base_path: &'a str, pages: &'a [PageRequest]) -> PlanManifest<'a> {
        PlanManifest {
            exported_at: Utc::now().to_rfc3339(),
            base_path,
            total_pages: pages.len(),
            pages,
        }
    }

    pub fn to_json(&self, manifest: &PlanManifest<'_>) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(manifest)?
        } else {
            serde_json::to_string(manifest)?
        };
        Ok(json)
    }

    pub fn export(&self, manifest: &PlanManifest<'_>, output: &Path) -> Result<PathBuf> {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(output, self.to_json(manifest)?)?;
        info!(
            "Exported plan with {} pages to {}",
            manifest.total_pages,
            output.display()
        );
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageContext, Template};
    use tempfile::tempdir;

    fn pages() -> Vec<PageRequest> {
        vec![PageRequest {
            path: "/".to_string(),
            template: Template::Course,
            context: PageContext::default(),
        }]
    }

    #[test]
    fn test_manifest_json_shape() {
        let exporter = JsonExporter::new(false);
        let pages = pages();
        let manifest = exporter.manifest("/", &pages);

        let value: serde_json::Value =
            serde_json::from_str(&exporter.to_json(&manifest).unwrap()).unwrap();

        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["pages"][0]["template"], "course");
        assert_eq!(value["pages"][0]["context"], serde_json::json!({}));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(true);
        let pages = pages();
        let manifest = exporter.manifest("/", &pages);

        let path = exporter
            .export(&manifest, &dir.path().join("out/plan.json"))
            .unwrap();
        assert!(path.is_file());
    }
}
