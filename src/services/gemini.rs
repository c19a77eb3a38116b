// src/services/gemini.rs
//! Minimal client for the Gemini `generateContent` endpoint.
//!
//! Every call sends exactly one user turn. Nothing is remembered between
//! calls, so two identical prompts are answered independently.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::generator::TextGenerator;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Connection failures and timeouts.
    #[error("{0}")]
    Network(String),

    /// Non-2xx answer from the API (bad key, quota, invalid request).
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("invalid response from Gemini: {0}")]
    Parse(String),

    #[error("prompt was blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn into_text(self) -> Result<String, GeminiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(GeminiError::Blocked(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            if let Some(reason) = candidate.finish_reason.filter(|r| r != "STOP") {
                return Err(GeminiError::Blocked(reason));
            }
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let start = Instant::now();

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::single_turn(prompt))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| e.to_string());
            warn!(status = %status, body = %body, "Gemini API error");
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );

        parsed.into_text()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_carries_one_user_turn() {
        let body = serde_json::to_value(GenerateContentRequest::single_turn("Hello")).unwrap();
        assert_eq!(
            body,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }] })
        );
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let text = response(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hi " }, { "text": "there!" }] },
                  "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .into_text()
        .unwrap();
        assert_eq!(text, "Hi there!");
    }

    #[test]
    fn blocked_prompt_reports_reason() {
        let err = response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
            .into_text()
            .unwrap_err();
        assert!(matches!(err, GeminiError::Blocked(ref r) if r == "SAFETY"));
    }

    #[test]
    fn candidate_without_text_is_an_error() {
        let err = response(json!({ "candidates": [{ "finishReason": "STOP" }] }))
            .into_text()
            .unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));

        let err = response(json!({ "candidates": [{ "finishReason": "RECITATION" }] }))
            .into_text()
            .unwrap_err();
        assert!(matches!(err, GeminiError::Blocked(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GeminiClient::new("k", Duration::from_secs(1))
            .unwrap()
            .with_base_url("http://localhost:9/v1beta/")
            .with_model("m");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/m:generateContent"
        );
    }
}
