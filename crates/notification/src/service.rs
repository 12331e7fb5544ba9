//! Email relay forwarding contact submissions to the transactional-email
//! provider over HTTPS.

use std::time::Duration;

use askama::Template;
use monynha_contact::ContactSubmission;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::ContactEmailTemplate;

/// Total request timeout for the outbound provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("The email service is not properly configured on the server.")]
    NotConfigured,

    /// Non-2xx provider response. The status is forwarded verbatim to
    /// the caller together with the provider's own reason when present.
    #[error("{reason}")]
    Provider { status: StatusCode, reason: String },

    #[error("A critical error occurred while attempting to deliver the signal.")]
    Transport(#[from] reqwest::Error),

    #[error("A critical error occurred while attempting to deliver the signal.")]
    Template(#[from] askama::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider API key. Empty means the relay is not configured and
    /// every delivery attempt fails closed without a network call.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "Monynha Softwares <hello@monynha.com>".to_string()
}

fn default_contact_address() -> String {
    "hello@monynha.com".to_string()
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    html: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Email relay for contact-form notifications.
///
/// Holds the provider credential injected at construction time. Each
/// submission results in at most one outbound call; nothing is retried.
#[derive(Clone)]
pub struct EmailService {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from: config.from_address.clone(),
            to: config.contact_address.clone(),
        })
    }

    /// Whether a provider credential is present. Used for the startup
    /// warning; delivery re-checks and fails closed on its own.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Deliver one contact submission to the studio inbox.
    ///
    /// Exactly one outbound call is made, and only when a credential is
    /// configured. Returns the provider-assigned message id on success.
    pub async fn send_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<String, RelayError> {
        if self.api_key.is_empty() {
            tracing::error!("provider API key is missing, refusing to relay");
            return Err(RelayError::NotConfigured);
        }

        let request = SendEmailRequest {
            from: &self.from,
            to: &self.to,
            reply_to: &submission.email,
            subject: format!("New contact form submission — {}", submission.name),
            html: ContactEmailTemplate::new(submission).render()?,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "provider call failed"))?;

        let status = response.status();
        if status.is_success() {
            let body: SendEmailResponse = response
                .json()
                .await
                .inspect_err(|err| tracing::error!(error = %err, "malformed provider response"))?;

            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                id = %body.id,
                "contact form submission delivered"
            );

            Ok(body.id)
        } else {
            let reason = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    "The email service rejected the transmission. Please check the logs."
                        .to_string()
                });

            tracing::error!(status = %status, reason = %reason, "provider rejected the email");

            Err(RelayError::Provider { status, reason })
        }
    }
}
