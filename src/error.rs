use axum::Json;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use monynha_contact::ValidateError;
use monynha_notification::RelayError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidBody(_) | AppError::Validate(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            // Provider rejections keep the provider's own status
            AppError::Relay(RelayError::Provider { status, .. }) => *status,
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        match self {
            AppError::MethodNotAllowed(_) => {
                (status, [(header::ALLOW, "POST")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
