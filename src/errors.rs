use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error types for everything around the calculators.
/// The calculators themselves never fail; bad numbers flow through as inf/NaN.
/// Callers validate first and surface these as HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no Finnhub API key saved")]
    MissingCredential,

    #[error("no quote for symbol {0}")]
    UnknownSymbol(String),

    #[error("HTTP {status}")]
    QuoteApi { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),
}

impl AppError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MissingCredential => StatusCode::UNAUTHORIZED,
            Self::UnknownSymbol(_) => StatusCode::NOT_FOUND,
            Self::QuoteApi { .. } | Self::Network(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::Storage(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_error_reads_as_http_status() {
        let e = AppError::QuoteApi { status: 429, body: "limit".into() };
        assert_eq!(e.to_string(), "HTTP 429");
        assert_eq!(e.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::invalid("x").status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::MissingCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::UnknownSymbol("ZZZ".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Storage("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
