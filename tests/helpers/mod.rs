#![allow(dead_code)]

use monynha::AppState;
use monynha_notification::{EmailConfig, EmailService};

/// Build the app router with the relay pointed at the given provider
/// endpoint, the way the server assembles it.
pub fn test_app(endpoint: &str, api_key: &str) -> axum::Router {
    let email = EmailService::new(&EmailConfig {
        api_key: api_key.to_string(),
        endpoint: endpoint.to_string(),
        ..EmailConfig::default()
    })
    .expect("failed to build email service");

    monynha::router(AppState { email })
}
