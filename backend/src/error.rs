use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use deepfake_shared::ErrorDetail;

use crate::upload::UploadError;
use crate::upstream::UpstreamError;

/// Failures of the analysis route, rendered as `{"detail": ...}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("Analysis service unavailable")]
    Upstream(#[from] UpstreamError),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Upload(UploadError::TooLarge) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Upload(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail::new(self.to_string()))
    }
}
