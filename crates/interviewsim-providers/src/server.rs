//! The evaluation endpoint.
//!
//! A small HTTP service that holds (or receives) the model-provider
//! credential and grades responses on behalf of remote-evaluation clients.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::anthropic::AnthropicEvaluator;
use crate::config::InterviewsimConfig;
use crate::error::ProviderError;
use crate::evaluation::{ErrorReply, EvaluateReply, EvaluateRequestBody};

/// Shared state for endpoint handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Server-side credential. Takes precedence over one sent by the caller.
    pub api_key: Option<String>,
    pub evaluator: Arc<AnthropicEvaluator>,
}

impl ServerState {
    pub fn from_config(config: &InterviewsimConfig) -> Self {
        Self {
            api_key: config.anthropic.api_key.clone(),
            evaluator: Arc::new(AnthropicEvaluator::new(
                Some(config.anthropic.base_url.clone()),
                Some(config.anthropic.model.clone()),
                Some(config.anthropic.max_tokens),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyStatus {
    pub has_api_key: bool,
}

/// Create the HTTP router with all routes.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/check-api-key", get(check_api_key))
        .route("/api/evaluate", post(evaluate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `addr` and serve until the process exits.
pub async fn serve(addr: SocketAddr, state: ServerState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("evaluation endpoint listening on {}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// GET /health
async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/check-api-key
async fn check_api_key(State(state): State<ServerState>) -> Json<ApiKeyStatus> {
    Json(ApiKeyStatus {
        has_api_key: state.api_key.is_some(),
    })
}

fn error_response(status: StatusCode, body: ErrorReply) -> Response {
    (status, Json(body)).into_response()
}

/// POST /api/evaluate
async fn evaluate(
    State(state): State<ServerState>,
    Json(req): Json<EvaluateRequestBody>,
) -> Response {
    let api_key = state
        .api_key
        .clone()
        .or(req.api_key)
        .filter(|k| !k.trim().is_empty());
    let Some(api_key) = api_key else {
        return error_response(StatusCode::BAD_REQUEST, ErrorReply::new("API key is required"));
    };

    match state
        .evaluator
        .evaluate(&api_key, &req.response, req.role)
        .await
    {
        Ok(eval) => Json(EvaluateReply {
            score: eval.score,
            note: eval.note,
        })
        .into_response(),
        Err(ProviderError::InvalidEvaluation { reason, raw }) => {
            error!(raw = %raw, "model returned an invalid evaluation: {reason}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorReply {
                    error: "Invalid response format from model".to_string(),
                    details: Some(reason),
                    raw_response: Some(raw),
                },
            )
        }
        Err(e @ (ProviderError::Timeout(_) | ProviderError::NetworkError(_))) => {
            error!("evaluation request failed: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorReply {
                    error: "Internal server error".to_string(),
                    details: Some(e.to_string()),
                    raw_response: None,
                },
            )
        }
        Err(e) => {
            error!("model provider error: {e}");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let message = match e {
                ProviderError::AuthenticationFailed(message)
                | ProviderError::ApiError { message, .. } => message,
                other => other.to_string(),
            };
            error_response(status, ErrorReply::new(message))
        }
    }
}
