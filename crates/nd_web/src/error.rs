use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use nd_core::Error;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::views;

pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_failure(status: StatusCode, err: &Error) {
    if status.is_server_error() {
        error!("❌ {}", err);
    } else {
        warn!("⚠️ {}", err);
    }
}

/// Error body for the JSON API.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        log_failure(status, &self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Error page for the HTML screens.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PageError(#[from] pub Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        log_failure(status, &self.0);
        (status, Html(views::error_page(status, &self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::NotFound("source 9".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&Error::Validation("x".into())), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(&Error::Storage("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
