//! Anthropic Messages API evaluator.
//!
//! Sends the scoring rubric and the candidate's answer to the model and
//! validates the reply. Used by the evaluation endpoint server.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use interviewsim_core::model::{ResponseEvaluation, Role};

use crate::error::ProviderError;
use crate::evaluation::{evaluation_prompt, parse_evaluation, rubric};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Grades responses with an Anthropic model.
///
/// The credential is supplied per call, since the endpoint server may use
/// either its own key or one forwarded by the caller.
pub struct AnthropicEvaluator {
    base_url: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

impl AnthropicEvaluator {
    pub fn new(base_url: Option<String>, model: Option<String>, max_tokens: Option<u32>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<AnthropicMessage>,
}

#[derive(Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Deserialize)]
struct AnthropicContent {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

impl AnthropicEvaluator {
    /// Score one response. The reply must be exactly the two-field JSON object
    /// requested by the rubric.
    #[instrument(skip(self, api_key, response), fields(model = %self.model))]
    pub async fn evaluate(
        &self,
        api_key: &str,
        response: &str,
        role: Role,
    ) -> Result<ResponseEvaluation, ProviderError> {
        let start = Instant::now();

        let body = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: rubric(role),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: evaluation_prompt(role, response),
            }],
        };

        let reply = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, DEFAULT_TIMEOUT_SECS))?;

        let status = reply.status().as_u16();
        if status == 429 {
            let retry_after = reply
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5)
                * 1000;
            return Err(ProviderError::RateLimited {
                retry_after_ms: retry_after,
            });
        }
        if status == 401 {
            let body = reply.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::AuthenticationFailed(message));
        }
        if status >= 400 {
            let body = reply.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::ApiError { status, message });
        }

        let api_response: AnthropicResponse =
            reply
                .json()
                .await
                .map_err(|e| ProviderError::NetworkError(format!("failed to parse response: {e}")))?;

        let text = api_response
            .content
            .first()
            .map(|c| c.text.trim().to_string())
            .unwrap_or_default();
        debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            raw = %text,
            "model evaluation received"
        );

        parse_evaluation(&text)
    }
}
