//! Build results and their console summary

use std::path::PathBuf;

/// A page whose output file was written this run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    /// Page identifier (route path)
    pub page_id: String,

    /// Output file name, e.g. `docs_intro.md`
    pub file_name: String,

    /// Where the file was written
    pub path: PathBuf,

    /// True when the content came from the cache
    pub from_cache: bool,
}

/// A page that did not make it through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct FailedPage {
    /// Page identifier (route path)
    pub page_id: String,

    /// Rendered error
    pub message: String,
}

/// Outcome of one build over the configured pages
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Pages written, in processing order
    pub generated: Vec<GeneratedPage>,

    /// Pages that failed, in processing order
    pub failed: Vec<FailedPage>,
}

impl BuildReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages served from the cache
    pub fn cache_hits(&self) -> usize {
        self.generated.iter().filter(|p| p.from_cache).count()
    }

    /// Number of pages that went through the transformer
    pub fn transformed(&self) -> usize {
        self.generated.iter().filter(|p| !p.from_cache).count()
    }

    /// Total pages attempted
    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }

    /// Returns true when every page was generated
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Formats the end-of-run summary printed by the CLI
pub fn format_summary(report: &BuildReport) -> String {
    let mut out = String::new();

    out.push_str("=== Build Summary ===\n");
    out.push_str(&format!("  Pages attempted: {}\n", report.total()));
    out.push_str(&format!("  Generated: {}\n", report.generated.len()));
    out.push_str(&format!("    from cache: {}\n", report.cache_hits()));
    out.push_str(&format!("    transformed: {}\n", report.transformed()));
    out.push_str(&format!("  Failed: {}\n", report.failed.len()));

    for failed in &report.failed {
        out.push_str(&format!("    - {}: {}\n", failed.page_id, failed.message));
    }

    out
}

/// Prints the summary to stdout
pub fn print_summary(report: &BuildReport) {
    print!("{}", format_summary(report));
}
