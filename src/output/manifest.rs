//! Discovery artifacts: the `llms.txt` manifest and the robots.txt snippet
//!
//! Both are rebuilt from scratch on every run from the pages generated in
//! that run, so a page that failed drops out of both.

use crate::output::markdown::public_url;
use crate::output::report::GeneratedPage;

/// File name of the manifest, written to the site root
pub const MANIFEST_FILE_NAME: &str = "llms.txt";

/// File name of the robots snippet, written to the output directory
pub const ROBOTS_SNIPPET_FILE_NAME: &str = "robots-snippet.txt";

/// Heading line of the manifest
pub const MANIFEST_HEADING: &str = "# AI Agent Map";

/// Formats the `llms.txt` manifest
///
/// # Example
///
/// ```
/// use agent_pages::output::{format_manifest, GeneratedPage};
/// use std::path::PathBuf;
///
/// let pages = vec![GeneratedPage {
///     page_id: "/docs/intro".to_string(),
///     file_name: "docs_intro.md".to_string(),
///     path: PathBuf::from("public/ai/docs_intro.md"),
///     from_cache: false,
/// }];
/// assert_eq!(
///     format_manifest(&pages, "/ai"),
///     "# AI Agent Map\n\n- [/docs/intro](/ai/docs_intro.md): Content for /docs/intro"
/// );
/// ```
pub fn format_manifest(pages: &[GeneratedPage], public_path: &str) -> String {
    let mut lines = vec![MANIFEST_HEADING.to_string(), String::new()];

    for page in pages {
        lines.push(format!(
            "- [{}]({}): Content for {}",
            page.page_id,
            public_url(public_path, &page.file_name),
            page.page_id
        ));
    }

    lines.join("\n")
}

/// Formats the robots.txt allow-list for the generated files
pub fn format_robots_snippet(pages: &[GeneratedPage], public_path: &str) -> String {
    let mut lines = vec!["User-agent: *".to_string()];

    for page in pages {
        lines.push(format!(
            "Allow: {}",
            public_url(public_path, &page.file_name)
        ));
    }

    lines.join("\n")
}
