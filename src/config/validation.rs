use crate::config::types::{CacheConfig, Config, OutputConfig, SiteConfig, TransformerConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    validate_transformer_config(&config.transformer)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

/// Validates the site URL and page list
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    validate_pages(&config.pages)
}

/// Validates the page list: non-empty, no blank or duplicate identifiers
fn validate_pages(pages: &[String]) -> Result<(), ConfigError> {
    if pages.is_empty() {
        return Err(ConfigError::Validation(
            "pages must list at least one route".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for page in pages {
        if page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "pages cannot contain an empty route".to_string(),
            ));
        }

        if page.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "route '{}' cannot contain whitespace",
                page
            )));
        }

        if !seen.insert(page.as_str()) {
            return Err(ConfigError::Validation(format!(
                "route '{}' is listed more than once",
                page
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output dir cannot be empty".to_string(),
        ));
    }

    if config.resolved_public_path() == "/" {
        return Err(ConfigError::Validation(format!(
            "cannot derive a public path from output dir '{}', set public-path",
            config.dir
        )));
    }

    Ok(())
}

/// Validates transformer configuration
fn validate_transformer_config(config: &TransformerConfig) -> Result<(), ConfigError> {
    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if config.language.trim().is_empty() {
        return Err(ConfigError::Validation(
            "language cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.api_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api-base: {}", e)))?;

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "cache dir cannot be empty".to_string(),
        ));
    }
    Ok(())
}
