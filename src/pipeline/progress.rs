// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for site builds
// reference: uses indicatif for progress bars and tracks build metrics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub documents_ingested: usize,
    pub documents_ignored: usize,
    pub courses: usize,
    pub modules: usize,
    pub lessons: usize,
    pub pages_written: usize,
    pub assets_copied: usize,
    pub total_bytes_written: u64,
    pub duration_ms: u128,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> usize {
        self.courses + self.modules + self.lessons
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} documents ({} ignored) -> {} course, {} modules, {} lessons | {} pages, {} assets, {} KB in {} ms",
            "✓".green().bold(),
            self.documents_ingested,
            self.documents_ignored,
            self.courses,
            self.modules,
            self.lessons,
            self.pages_written.to_string().cyan(),
            self.assets_copied,
            self.total_bytes_written / 1024,
            self.duration_ms
        )
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    pages_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl ProgressTracker {
    pub fn new(total_pages: usize, colored: bool) -> Self {
        Self::with_bar(create_progress_bar(total_pages as u64, colored))
    }

    /// Tracker that counts without drawing anything.
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            pages_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        }
    }

    pub fn page_written(&self, path: &str, bytes: u64) {
        self.pages_written.fetch_add(1, Ordering::SeqCst);
        self.bytes_written.fetch_add(bytes, Ordering::SeqCst);
        self.bar.inc(1);
        self.bar.set_message(path.to_string());
    }

    pub fn pages_written(&self) -> usize {
        self.pages_written.load(Ordering::SeqCst)
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::SeqCst)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stats_calculations() {
        let mut stats = BuildStats::new();
        stats.courses = 1;
        stats.modules = 2;
        stats.lessons = 5;
        stats.pages_written = 8;

        assert_eq!(stats.entities(), 8);
    }

    #[test]
    fn test_summary_reports_ignored_documents() {
        let mut stats = BuildStats::new();
        stats.documents_ingested = 9;
        stats.documents_ignored = 2;
        stats.lessons = 7;

        let summary = stats.summary();
        assert!(summary.contains("9 documents (2 ignored)"));
        assert!(summary.contains("7 lessons"));
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden();

        tracker.page_written("/a/", 100);
        tracker.page_written("/b/", 24);

        assert_eq!(tracker.pages_written(), 2);
        assert_eq!(tracker.bytes_written(), 124);
    }
}
