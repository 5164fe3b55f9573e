//! Text transformation service interface

use crate::TransformError;
use async_trait::async_trait;

/// API key value that selects [`MockTransformer`] instead of a real service
pub const MOCK_API_KEY: &str = "MOCK";

/// Trait for external text transformation services
///
/// Implementations turn a prompt into generated text. Callers never parse or
/// rewrite the returned text.
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &str;

    /// Generates text for `prompt`
    ///
    /// Timeouts, rejected credentials and malformed responses are all
    /// reported as [`TransformError`]; no retry is attempted.
    async fn generate(&self, prompt: &str) -> Result<String, TransformError>;
}

/// Offline transformer returning a fixed document
///
/// Useful for trying a configuration without spending model calls.
#[derive(Debug, Clone, Default)]
pub struct MockTransformer;

impl MockTransformer {
    /// Text returned for every prompt
    pub const OUTPUT: &'static str = "# TEST TRANSLATION (POLISH)\n\nConverted content from mock.";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transformer for MockTransformer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, TransformError> {
        Ok(Self::OUTPUT.to_string())
    }
}
