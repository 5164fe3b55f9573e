//! Gemini `generateContent` client

use crate::config::TransformerConfig;
use crate::transform::transformer::Transformer;
use crate::TransformError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transformer backed by the Gemini REST API
pub struct GeminiTransformer {
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiTransformer {
    /// Builds a client for `model` at `api_base`
    ///
    /// # Arguments
    ///
    /// * `api_key` - Key sent in the `x-goog-api-key` header
    /// * `api_base` - Service root, e.g. `https://generativelanguage.googleapis.com`
    /// * `model` - Model name, e.g. `gemini-2.5-pro`
    /// * `timeout` - Per-request timeout
    pub fn new(
        api_key: &str,
        api_base: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, TransformError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.trim()).map_err(|_| {
            TransformError::InvalidApiKey("not a valid header value".to_string())
        })?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            api_base.trim_end_matches('/'),
            model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
        })
    }

    /// Builds a client from the transformer section of the config
    pub fn from_config(api_key: &str, config: &TransformerConfig) -> Result<Self, TransformError> {
        Self::new(
            api_key,
            &config.api_base,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl Transformer for GeminiTransformer {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, TransformError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TransformError::Auth {
                    status: status.as_u16(),
                    body,
                },
                _ => TransformError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            TransformError::MalformedResponse(format!("failed to parse response: {}", e))
        })?;

        extract_text(parsed)
    }
}

/// Joins the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> Result<String, TransformError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| TransformError::MalformedResponse("no candidates".to_string()))?;

    let parts: Vec<String> = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if parts.is_empty() {
        return Err(TransformError::MalformedResponse(
            "candidate has no text parts".to_string(),
        ));
    }

    Ok(parts.concat())
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
