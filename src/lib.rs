//! Agent-Pages: AI-agent friendly page generator
//!
//! This crate fetches rendered pages from a running site, reduces their markup,
//! has a language model rewrite them as Markdown, and caches the results by
//! content fingerprint so unchanged pages never hit the model twice.

pub mod cache;
pub mod config;
pub mod fingerprint;
pub mod output;
pub mod pipeline;
pub mod state;
pub mod storage;
pub mod transform;

use thiserror::Error;

/// Main error type for Agent-Pages operations
#[derive(Debug, Error)]
pub enum AgentPagesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::PageState,
        to: state::PageState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file not found at {0}")]
    NotFound(String),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

/// Errors raised while retrieving a page from the site
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors raised by the text transformation service
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Transformer request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transformer rejected credentials ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Transformer returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed transformer response: {0}")]
    MalformedResponse(String),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

/// Result type alias for Agent-Pages operations
pub type Result<T> = std::result::Result<T, AgentPagesError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cache::{CacheRecord, CacheStore};
pub use config::Config;
pub use fingerprint::{digest, Fingerprint};
pub use state::PageState;
