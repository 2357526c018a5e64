use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every non-2xx response.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Error family: ValidationError, NotFound or InternalError
    pub name: String,
    /// Code-style identifier of the failure
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// 400 body for input rejected before reaching a use case.
    pub fn validation(message: impl Into<String>) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
