use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{relay::RelayError, types::ErrResp};

pub const NO_MESSAGE: &str = "No message provided";

/// Errors surfaced by HTTP handlers, each rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// A request body the JSON extractor refused, with the status it chose.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    pub fn no_message() -> Self {
        ApiError::BadRequest(NO_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Relay(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Relay(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrResp {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode as UpstreamStatus;

    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::no_message().status(), StatusCode::BAD_REQUEST);
        let rejected = ApiError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".into(),
        };
        assert_eq!(rejected.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(ApiError::NotFound("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden("x").status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(RelayError::EmptyCompletion).status(),
            StatusCode::BAD_GATEWAY
        );
        let upstream = RelayError::Upstream {
            status: UpstreamStatus::TOO_MANY_REQUESTS,
            message: "quota".into(),
        };
        assert_eq!(ApiError::from(upstream).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn relay_error_text_is_preserved() {
        let err = ApiError::from(RelayError::Upstream {
            status: UpstreamStatus::UNAUTHORIZED,
            message: "Incorrect API key provided".into(),
        });
        assert_eq!(
            err.to_string(),
            "Completion API returned 401 Unauthorized: Incorrect API key provided"
        );
    }
}
