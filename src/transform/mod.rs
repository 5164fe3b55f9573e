//! Transformation module: markup reduction and the language model
//!
//! This module contains:
//! - HTML normalization (denylisted elements and attributes removed)
//! - The [`Transformer`] service interface with Gemini and mock backends
//! - The orchestrator tying normalization, prompt and service together

mod gemini;
mod normalizer;
mod orchestrator;
mod transformer;

pub use gemini::GeminiTransformer;
pub use normalizer::{normalize, DENYLIST};
pub use orchestrator::{render_prompt, TransformOrchestrator, PROMPT_TEMPLATE};
pub use transformer::{MockTransformer, Transformer, MOCK_API_KEY};

use crate::config::TransformerConfig;
use crate::{ConfigError, TransformError};
use std::sync::Arc;

/// Builds the transformer selected by the configuration
///
/// The literal API key `MOCK` selects [`MockTransformer`].
///
/// # Returns
///
/// * `Ok(Arc<dyn Transformer>)` - Ready-to-use transformer
/// * `Err(ConfigError::MissingCredential)` - No API key is configured
pub fn build_transformer(config: &TransformerConfig) -> Result<Arc<dyn Transformer>, ConfigError> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            ConfigError::MissingCredential(
                "GEMINI_API_KEY is not set (config transformer.api-key or environment)"
                    .to_string(),
            )
        })?;

    if api_key == MOCK_API_KEY {
        tracing::warn!("Using mock transformer; output will not reflect page content");
        return Ok(Arc::new(MockTransformer::new()));
    }

    tracing::info!("Using Gemini model: {}", config.model);
    GeminiTransformer::from_config(api_key, config)
        .map(|t| Arc::new(t) as Arc<dyn Transformer>)
        .map_err(|e| match e {
            TransformError::InvalidApiKey(msg) => ConfigError::MissingCredential(msg),
            other => ConfigError::Validation(format!("failed to build transformer: {}", other)),
        })
}
