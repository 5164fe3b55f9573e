use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Environment variable consulted when the config carries no API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads and parses a configuration file from the given path
///
/// The API key falls back to the `GEMINI_API_KEY` environment variable when
/// the file does not set one.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use agent_pages::config::load_config;
///
/// let config = load_config(Path::new("agent-pages.toml")).unwrap();
/// println!("Pages: {}", config.site.pages.len());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_env(path, std::env::var(API_KEY_ENV).ok())
}

/// Loads a configuration, using `env_api_key` when the file has no API key
pub fn load_config_with_env(
    path: &Path,
    env_api_key: Option<String>,
) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let mut config: Config = toml::from_str(&content)?;

    let has_key = config
        .transformer
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if !has_key {
        config.transformer.api_key = env_api_key.filter(|key| !key.trim().is_empty());
    }

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Starter configuration written by `agent-pages init`
pub fn starter_config() -> &'static str {
    r#"[site]
base-url = "http://localhost:3000"
pages = ["/"]

[output]
dir = "./public/ai"

[transformer]
model = "gemini-2.5-pro" # or "gemini-2.0-flash"
language = "Polish"
# api-key = "..." # or set GEMINI_API_KEY

[cache]
dir = ".next/cache/agent-pages"
"#
}
