//! HTTP client for the evaluation endpoint.

use async_trait::async_trait;
use tracing::{debug, instrument};

use interviewsim_core::error::EvaluationError;
use interviewsim_core::model::ResponseEvaluation;
use interviewsim_core::traits::{EvaluationRequest, ResponseScorer};

use crate::error::ProviderError;
use crate::evaluation::{parse_evaluation, ErrorReply, EvaluateRequestBody};

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Remote-evaluation scorer: forwards each response to `POST /api/evaluate`.
///
/// Requires a credential. Without one, every call fails with
/// [`EvaluationError::Configuration`] before any request is made.
pub struct RemoteEvaluationClient {
    endpoint_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl RemoteEvaluationClient {
    pub fn new(endpoint_url: Option<String>, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            endpoint_url: endpoint_url
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client,
        }
    }

    async fn call(
        &self,
        api_key: &str,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, ProviderError> {
        let body = EvaluateRequestBody {
            response: request.response.clone(),
            role: request.role,
            question_index: request.question_index,
            api_key: Some(api_key.to_string()),
        };

        let reply = self
            .client
            .post(format!("{}/api/evaluate", self.endpoint_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, DEFAULT_TIMEOUT_SECS))?;

        let status = reply.status();
        let text = reply
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, DEFAULT_TIMEOUT_SECS))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorReply>(&text)
                .map(|e| match e.details {
                    Some(details) => format!("{}: {details}", e.error),
                    None => e.error,
                })
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        debug!(raw = %text, "evaluation endpoint replied");
        parse_evaluation(&text)
    }
}

#[async_trait]
impl ResponseScorer for RemoteEvaluationClient {
    fn name(&self) -> &str {
        "remote-evaluation"
    }

    #[instrument(skip(self, request), fields(role = %request.role, question_index = request.question_index))]
    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, EvaluationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EvaluationError::Configuration(
                "remote evaluation requires an API key".to_string(),
            ));
        };
        Ok(self.call(api_key, request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interviewsim_core::model::Role;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> EvaluationRequest {
        EvaluationRequest::new("We rebuilt the ETL pipeline", Role::DataEngineer, 2)
    }

    #[tokio::test]
    async fn forwards_request_and_parses_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/evaluate"))
            .and(body_json(serde_json::json!({
                "response": "We rebuilt the ETL pipeline",
                "role": "data-engineer",
                "questionIndex": 2,
                "apiKey": "sk-test"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"score": 8, "note": "Solid"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RemoteEvaluationClient::new(Some(server.uri()), Some("sk-test".into()));
        let eval = client.evaluate(&request()).await.unwrap();
        assert_eq!(eval, ResponseEvaluation::new(8, "Solid"));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_call() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for key in [None, Some("   ".to_string())] {
            let client = RemoteEvaluationClient::new(Some(server.uri()), key);
            let err = client.evaluate(&request()).await.unwrap_err();
            assert!(matches!(err, EvaluationError::Configuration(_)));
        }
    }

    #[tokio::test]
    async fn non_success_status_is_a_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/evaluate"))
            .respond_with(
                ResponseTemplate::new(502)
                    .set_body_json(serde_json::json!({"error": "Failed to evaluate response"})),
            )
            .mount(&server)
            .await;

        let client = RemoteEvaluationClient::new(Some(server.uri()), Some("k".into()));
        let err = client.evaluate(&request()).await.unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("HTTP 502"));
        assert!(err.to_string().contains("Failed to evaluate response"));
    }

    #[tokio::test]
    async fn out_of_range_score_is_a_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/evaluate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"score": 12, "note": "Too generous"})),
            )
            .mount(&server)
            .await;

        let client = RemoteEvaluationClient::new(Some(format!("{}/", server.uri())), Some("k".into()));
        match client.evaluate(&request()).await.unwrap_err() {
            EvaluationError::RemoteEvaluation { raw, .. } => {
                assert!(raw.unwrap().contains("Too generous"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
