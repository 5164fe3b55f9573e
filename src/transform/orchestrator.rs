//! Raw page → normalized markup → transformer output

use crate::transform::normalizer::normalize;
use crate::transform::transformer::Transformer;
use crate::TransformError;
use std::sync::Arc;

/// Instruction template; `{language}` and `{content}` are substituted
pub const PROMPT_TEMPLATE: &str = "You are an expert AI optimization engine and translator.

Task:
1. Analyze the following HTML content.
2. Convert it into a clean, structured Markdown format optimized for AI Agents (concise, clear, hierarchical).
3. CRITICAL: Translate the content into high-quality {language} language.

The output must be ONLY the Markdown content in {language}. No preambles.

Content:
{content}
";

/// Renders the prompt for one page
///
/// The normalized markup is embedded verbatim.
pub fn render_prompt(language: &str, normalized: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{content}", normalized)
}

/// Runs a page through normalization and the transformer
///
/// The transformer's response is returned untouched. Failures are passed
/// straight through: no retry, no substitute content.
pub struct TransformOrchestrator {
    transformer: Arc<dyn Transformer>,
    language: String,
}

impl TransformOrchestrator {
    /// Creates an orchestrator targeting `language`
    pub fn new(transformer: Arc<dyn Transformer>, language: impl Into<String>) -> Self {
        Self {
            transformer,
            language: language.into(),
        }
    }

    /// Name of the underlying transformer
    pub fn transformer_name(&self) -> &str {
        self.transformer.name()
    }

    /// Transforms one page of raw HTML
    pub async fn transform(&self, raw_html: &str) -> Result<String, TransformError> {
        let normalized = normalize(raw_html);
        if normalized.is_empty() {
            tracing::debug!("Normalized markup is empty, submitting anyway");
        } else {
            tracing::debug!(
                "Normalized {} bytes of HTML to {} bytes",
                raw_html.len(),
                normalized.len()
            );
        }

        let prompt = render_prompt(&self.language, &normalized);
        self.transformer.generate(&prompt).await
    }
}
