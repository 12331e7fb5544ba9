use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Method;
use axum::response::IntoResponse;
use monynha_contact::ContactSubmission;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::AppState;

/// Relay one contact-form submission to the studio inbox.
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

    let submission = ContactSubmission::from_payload(&payload)?;
    let id = app_state.email.send_contact(&submission).await?;

    Ok(Json(json!({ "success": true, "id": id })))
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
