use anyhow::Result;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting Monynha Softwares server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let email = monynha_notification::EmailService::new(&config.email)?;
    if email.is_configured() {
        tracing::info!("Email service configured");
    } else {
        tracing::warn!("email.api_key is not set. Contact form will not work.");
    }

    let app = crate::routes::router(AppState { email })
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        "Server listening, API endpoint: POST /api/contact"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
