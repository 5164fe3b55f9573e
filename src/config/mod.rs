//! Configuration module for Agent-Pages
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use agent_pages::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("agent-pages.toml")).unwrap();
//! println!("Converting {} pages", config.site.pages.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, OutputConfig, SiteConfig, TransformerConfig, DEFAULT_API_BASE,
    DEFAULT_CACHE_DIR, DEFAULT_LANGUAGE, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_env, load_config_with_hash, starter_config,
    API_KEY_ENV,
};
