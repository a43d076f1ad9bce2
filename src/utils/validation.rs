// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SiteError};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SiteError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(SiteError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Page paths are absolute url paths that stay inside the output directory.
    pub fn validate_page_path(path: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(SiteError::Validation(format!(
                "Page path must start with '/': {}",
                path
            )));
        }

        if path.split('/').any(|segment| segment == ".." || segment == ".") {
            return Err(SiteError::Validation(format!(
                "Page path must not contain relative segments: {}",
                path
            )));
        }

        if path.contains('\\') || path.contains('\0') {
            return Err(SiteError::Validation(format!(
                "Page path contains an invalid character: {:?}",
                path
            )));
        }

        Ok(())
    }

    pub fn validate_workers(workers: usize) -> Result<()> {
        if workers == 0 {
            return Err(SiteError::Validation(
                "Worker count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_page_path() {
        assert!(Validator::validate_page_path("/").is_ok());
        assert!(Validator::validate_page_path("/courses/module-1/").is_ok());
        assert!(Validator::validate_page_path("courses/").is_err());
        assert!(Validator::validate_page_path("/a/../b/").is_err());
        assert!(Validator::validate_page_path("/a/./b/").is_err());
        assert!(Validator::validate_page_path("/a\\b/").is_err());
    }

    #[test]
    fn test_validate_workers() {
        assert!(Validator::validate_workers(4).is_ok());
        assert!(Validator::validate_workers(0).is_err());
    }
}
