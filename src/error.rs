use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::services::providers::ProviderError;

// User-facing messages, keyed by outcome. Raw provider detail never reaches
// these; it is logged server-side and attached only outside production.
const MSG_MALFORMED: &str = "잘못된 요청 형식입니다.";
const MSG_MALFORMED_DETAIL: &str = "JSON 형식이 올바르지 않습니다.";
const MSG_INVALID_PREFERENCE: &str = "입력 정보를 확인해주세요.";
const MSG_INVALID_OUTFIT: &str = "의상 입력 정보를 확인해주세요.";
const MSG_RATE_LIMITED: &str = "요청이 너무 많습니다. 잠시 후 다시 시도해주세요.";
const MSG_INTERNAL: &str = "AI 처리 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
const MSG_UNAVAILABLE: &str = "서비스를 일시적으로 사용할 수 없습니다. 잠시 후 다시 시도해주세요.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("malformed request body")]
    MalformedRequest,

    #[error("generation credential is not configured")]
    MissingCredential,

    #[error("invalid user preference: {0:?}")]
    InvalidPreference(Vec<String>),

    #[error("invalid outfit input: {0:?}")]
    InvalidOutfit(Vec<String>),

    #[error("upstream quota exhausted")]
    RateLimited { detail: Option<String> },

    #[error("upstream unavailable")]
    UpstreamUnavailable { detail: Option<String> },

    #[error("upstream generation failed")]
    Upstream { detail: Option<String> },
}

impl AppError {
    /// Classify a provider failure into the response taxonomy.
    ///
    /// Structured signals win: the provider's HTTP status and transport
    /// error kind are checked before falling back to substring heuristics
    /// on the error text. `expose_detail` attaches the raw message to the
    /// response body (non-production only); the caller is responsible for
    /// logging the raw error regardless.
    pub fn from_provider(err: ProviderError, expose_detail: bool) -> Self {
        let message = err.to_string();
        let detail = expose_detail.then(|| message.clone());

        match &err {
            ProviderError::MissingCredential => AppError::MissingCredential,
            ProviderError::Api { status, .. } if *status == 429 => {
                AppError::RateLimited { detail }
            }
            ProviderError::Api { status, .. } if *status == 503 => {
                AppError::UpstreamUnavailable { detail }
            }
            ProviderError::Transport(e) if e.is_timeout() || e.is_connect() => {
                AppError::UpstreamUnavailable { detail }
            }
            _ => classify_message(&message, detail),
        }
    }
}

/// Substring fallback for providers that surface no structured code
fn classify_message(message: &str, detail: Option<String>) -> AppError {
    let lower = message.to_lowercase();
    if lower.contains("quota") || lower.contains("rate limit") {
        AppError::RateLimited { detail }
    } else if lower.contains("unavailable") || lower.contains("timeout") {
        AppError::UpstreamUnavailable { detail }
    } else {
        AppError::Upstream { detail }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details): (StatusCode, &str, Option<Value>) = match self {
            AppError::MalformedRequest => (
                StatusCode::BAD_REQUEST,
                MSG_MALFORMED,
                Some(json!(MSG_MALFORMED_DETAIL)),
            ),
            AppError::MissingCredential => {
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL, None)
            }
            AppError::InvalidPreference(errors) => (
                StatusCode::BAD_REQUEST,
                MSG_INVALID_PREFERENCE,
                Some(json!(errors)),
            ),
            AppError::InvalidOutfit(errors) => (
                StatusCode::BAD_REQUEST,
                MSG_INVALID_OUTFIT,
                Some(json!(errors)),
            ),
            AppError::RateLimited { detail } => (
                StatusCode::TOO_MANY_REQUESTS,
                MSG_RATE_LIMITED,
                detail.map(|d| json!(d)),
            ),
            AppError::UpstreamUnavailable { detail } => (
                StatusCode::SERVICE_UNAVAILABLE,
                MSG_UNAVAILABLE,
                detail.map(|d| json!(d)),
            ),
            AppError::Upstream { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_INTERNAL,
                detail.map(|d| json!(d)),
            ),
        };

        let mut body = json!({ "error": message });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
