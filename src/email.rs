//! Email state + SendGrid dispatch.
//!
//! Every failure mode collapses into the same [`EmailResult`] shape; callers
//! branch on `is_success` only and read the strings for diagnostics.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::config::ApiConfig;
use crate::routes::SendEmailRequest;
use crate::template_data;

/// Domain errors for the send path. All four variants are folded into an
/// [`EmailResult`] failure before they reach the handler layer.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("SendGrid API Key not configured")]
    ApiKeyMissing,
    #[error("Destination email or Template ID are required")]
    MissingFields,
    #[error("SendGrid error: {status} - {body}")]
    Provider { status: u16, body: String },
    #[error("Internal error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Uniform outcome of a send attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailResult {
    pub is_success: bool,
    pub message: Option<String>,
    pub error_details: Option<String>,
}

impl EmailResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: Some(message.into()),
            error_details: None,
        }
    }

    pub fn failure(error_details: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: Some("Failed to send email".into()),
            error_details: Some(error_details.into()),
        }
    }
}

/// App-wide email state (outbound HTTP client + SendGrid addressing).
#[derive(Clone)]
pub struct EmailState {
    http: Client,
    api_key: String,
    from_email: String,
    from_name: String,
    base_url: String,
}

impl EmailState {
    /// Build state from config. The client is constructed once and reused
    /// across requests; 15s timeout on the outbound call.
    pub fn from_config(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            api_key: cfg.sendgrid_api_key.clone(),
            from_email: cfg.sendgrid_from_email.clone(),
            from_name: cfg.sendgrid_from_name.clone(),
            base_url: cfg.sendgrid_base_url.clone(),
        })
    }

    /// Send a templated email through SendGrid. Infallible by construction:
    /// every error branch is logged and returned as an `EmailResult` failure.
    pub async fn send_templated(&self, request: &SendEmailRequest) -> EmailResult {
        match self.dispatch(request).await {
            Ok(()) => {
                info!("Email sent successfully to {}", request.to_email);
                EmailResult::success("Email sent successfully")
            }
            Err(e) => {
                error!("Failed to send email to {}: {e}", request.to_email);
                EmailResult::failure(e.to_string())
            }
        }
    }

    /// Validate, build the SendGrid v3 payload, and perform the call.
    /// Preconditions short-circuit before any network traffic.
    async fn dispatch(&self, request: &SendEmailRequest) -> Result<(), EmailError> {
        if self.api_key.is_empty() {
            return Err(EmailError::ApiKeyMissing);
        }
        if request.to_email.is_empty() || request.template_id.is_empty() {
            return Err(EmailError::MissingFields);
        }

        let data = template_data::normalize(request.template_data.as_ref());
        let payload = json!({
            "from": {
                "email": self.from_email,
                "name": self.from_name,
            },
            "personalizations": [{
                "to": [{ "email": request.to_email }],
                "dynamic_template_data": data,
            }],
            "template_id": request.template_id,
        });

        info!(
            "Sending email to {} with template {}",
            request.to_email, request.template_id
        );

        let url = format!("{}/v3/mail/send", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }
}
