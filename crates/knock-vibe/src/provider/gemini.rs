//! Gemini provider
//!
//! Calls the Gemini `generateContent` REST endpoint. One request per call,
//! no retries. The credential is checked before anything touches the
//! network, and the key travels only as a query parameter, never in logs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{BadgeProvider, ProviderError};
use crate::config::GeneratorConfig;
use crate::prompt::BadgePrompt;

/// Provider backed by the Gemini generateContent API.
pub struct GeminiProvider {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    config: GeneratorConfig,
}

impl GeminiProvider {
    /// Create a provider from the given configuration.
    ///
    /// The client carries the configured request timeout, so even callers
    /// bypassing the workflow's own deadline get a bounded call.
    pub fn new(config: GeneratorConfig) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl BadgeProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, prompt: &BadgePrompt) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ProviderError::MissingApiKey)?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: prompt.system_instruction(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: prompt.user_prompt(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        log::debug!(
            "GeminiProvider: sending generation request (model {})",
            self.config.model
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text)
    }
}

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// generateContent response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}
