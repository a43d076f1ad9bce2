// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SiteError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_COURSE_PATH: &str = "course";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_ASSET_PATH: &str = "assets";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub theme: PartialThemeOptions,
    pub site: SiteConfig,
    pub build: BuildConfig,
}

/// Resolved theme options. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOptions {
    /// Name of the content source to scan; also its directory under the site root.
    pub course_path: String,
    /// URL prefix for every generated page.
    pub base_path: String,
    /// Directory ensured to exist before the build.
    pub asset_path: String,
}

/// Theme options as written by the user; anything left out falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartialThemeOptions {
    pub course_path: Option<String>,
    pub base_path: Option<String>,
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub root: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    pub parallel_workers: usize,
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    #[serde(default = "default_copy_assets")]
    pub copy_assets: bool,
}

fn default_copy_assets() -> bool {
    true
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            course_path: DEFAULT_COURSE_PATH.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            asset_path: DEFAULT_ASSET_PATH.to_string(),
        }
    }
}

impl ThemeOptions {
    /// Fill unspecified options from the defaults. Pure: no I/O, no validation.
    pub fn merge(partial: &PartialThemeOptions) -> Self {
        let defaults = Self::default();
        Self {
            course_path: partial.course_path.clone().unwrap_or(defaults.course_path),
            base_path: partial.base_path.clone().unwrap_or(defaults.base_path),
            asset_path: partial.asset_path.clone().unwrap_or(defaults.asset_path),
        }
    }

    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.course_path)
    }

    pub fn asset_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_path)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("COURSE_SITE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SiteError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SiteError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            theme: PartialThemeOptions::default(),
            site: SiteConfig {
                title: "Course".to_string(),
                root: PathBuf::from("."),
                output_dir: PathBuf::from("public"),
            },
            build: BuildConfig {
                parallel_workers: 4,
                skip_patterns: vec![".git/".to_string(), "*.swp".to_string()],
                max_file_size_mb: 10,
                copy_assets: true,
            },
        }
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions::merge(&self.theme)
    }

    pub fn validate(&self) -> Result<()> {
        if self.build.parallel_workers == 0 {
            return Err(SiteError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        let theme = self.theme_options();

        if theme.base_path.is_empty() {
            return Err(SiteError::Config("base_path must not be empty".to_string()));
        }

        if !theme.base_path.starts_with('/') {
            return Err(SiteError::Config(format!(
                "base_path must start with '/': {}",
                theme.base_path
            )));
        }

        if theme.course_path.trim().is_empty() {
            return Err(SiteError::Config("course_path must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_falls_back_to_defaults() {
        let merged = ThemeOptions::merge(&PartialThemeOptions::default());
        assert_eq!(merged, ThemeOptions::default());
    }

    #[test]
    fn test_merge_keeps_specified_options() {
        let partial = PartialThemeOptions {
            course_path: Some("courses".to_string()),
            base_path: None,
            asset_path: Some("static".to_string()),
        };

        let merged = ThemeOptions::merge(&partial);
        assert_eq!(merged.course_path, "courses");
        assert_eq!(merged.base_path, DEFAULT_BASE_PATH);
        assert_eq!(merged.asset_path, "static");
    }

    #[test]
    fn test_validate_rejects_relative_base_path() {
        let mut config = Config::default_config();
        config.theme.base_path = Some("courses".to_string());
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = Config::default_config();
        config.build.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[theme]
course_path = "courses"
base_path = "/courses"

[site]
title = "Rust 101"
root = "."
output_dir = "public"

[build]
parallel_workers = 2
skip_patterns = []
max_file_size_mb = 5
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let theme = config.theme_options();

        assert_eq!(config.site.title, "Rust 101");
        assert_eq!(theme.course_path, "courses");
        assert_eq!(theme.base_path, "/courses");
        assert_eq!(theme.asset_path, DEFAULT_ASSET_PATH);
        assert!(config.build.copy_assets);
    }
}
