use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default directory for generated page files
pub const DEFAULT_OUTPUT_DIR: &str = "./public/ai";

/// Default directory holding the transformation cache
pub const DEFAULT_CACHE_DIR: &str = ".next/cache/agent-pages";

/// Default language model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default target language for the transformed pages
pub const DEFAULT_LANGUAGE: &str = "Polish";

/// Default Gemini API endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Main configuration structure for Agent-Pages
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub transformer: TransformerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// The site being converted
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the running site (e.g. "http://localhost:3000")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Route paths to convert, processed in this order
    pub pages: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one Markdown file per page
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Public URL prefix of the output directory (defaults to "/<dir name>")
    #[serde(rename = "public-path", default)]
    pub public_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            public_path: None,
        }
    }
}

impl OutputConfig {
    /// Directory the manifest is written to: the parent of the output directory
    pub fn site_root(&self) -> PathBuf {
        match Path::new(&self.dir).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Public URL prefix under which the generated files are served
    pub fn resolved_public_path(&self) -> String {
        if let Some(path) = &self.public_path {
            return format!("/{}", path.trim_matches('/'));
        }

        let name = Path::new(&self.dir)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/{}", name)
    }
}

/// Language model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TransformerConfig {
    /// Model name passed to the generateContent endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to the GEMINI_API_KEY environment variable
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    /// Natural language the pages are translated into
    #[serde(default = "default_language")]
    pub language: String,

    /// API base URL
    #[serde(rename = "api-base", default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            language: default_language(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Directory holding cache.json
    #[serde(default = "default_cache_dir")]
    pub dir: String,

    /// Keep the raw page body next to each record
    #[serde(rename = "keep-raw-content", default = "default_true")]
    pub keep_raw_content: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            keep_raw_content: true,
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_cache_dir() -> String {
    DEFAULT_CACHE_DIR.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
