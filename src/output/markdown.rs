//! Per-page Markdown files

/// Maps a page identifier to its output file name
///
/// One leading slash is stripped, remaining slashes become underscores, and
/// the root page becomes `index.md`.
///
/// # Example
///
/// ```
/// use agent_pages::output::page_file_name;
///
/// assert_eq!(page_file_name("/docs/intro"), "docs_intro.md");
/// assert_eq!(page_file_name("/"), "index.md");
/// ```
pub fn page_file_name(page_id: &str) -> String {
    let stem = page_id.strip_prefix('/').unwrap_or(page_id).replace('/', "_");

    if stem.is_empty() {
        "index.md".to_string()
    } else {
        format!("{}.md", stem)
    }
}

/// Public URL of a generated file under `public_path`
pub fn public_url(public_path: &str, file_name: &str) -> String {
    format!("{}/{}", public_path.trim_end_matches('/'), file_name)
}
