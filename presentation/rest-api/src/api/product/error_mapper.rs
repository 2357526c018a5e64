use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::{ErrorKind, ProductError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self.kind() {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                self.to_string(),
            ),
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                ProductError::NotFound.to_string(),
            ),
            ErrorKind::Storage => {
                // Driver details stay in the logs.
                tracing::error!(error = ?self, "product request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
