use axum::{
    Router,
    routing::{get, post},
};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub email: monynha_notification::EmailService,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/contact",
            // Non-POST verbs answer 405 before any body inspection
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .fallback_service(crate::assets::AssetsService::new())
        .with_state(app_state)
}
