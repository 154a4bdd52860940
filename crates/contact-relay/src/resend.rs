//! Resend API client
//!
//! Sends the notification with one `POST` to Resend's `/emails` endpoint.
//! Failures are reported, never retried.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::config::RelayConfig;
use crate::types::{SendEmailRequest, SendEmailResponse};

/// Outbound email delivery
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send one email, returning the provider's message id
    async fn send(
        &self,
        config: &RelayConfig,
        request: &SendEmailRequest,
    ) -> Result<String, DeliveryError>;
}

/// Delivery errors
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The provider answered with a non-success status
    #[error("Resend rejected the email ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The provider could not be reached
    #[error("Resend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Resend API error response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResendErrorResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status_code: Option<u16>,
}

/// Resend transport on a shared HTTP client
#[derive(Debug, Clone, Default)]
pub struct ResendTransport {
    client: reqwest::Client,
}

impl ResendTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("contact-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EmailTransport for ResendTransport {
    #[instrument(skip_all, fields(to = ?request.to, subject = %request.subject))]
    async fn send(
        &self,
        config: &RelayConfig,
        request: &SendEmailRequest,
    ) -> Result<String, DeliveryError> {
        let response = self
            .client
            .post(&config.api_url)
            .bearer_auth(&config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ResendErrorResponse>(&body) {
                Ok(err) => error!(
                    status = status.as_u16(),
                    name = ?err.name,
                    message = ?err.message,
                    status_code = ?err.status_code,
                    "Resend error"
                ),
                Err(_) => error!(status = status.as_u16(), body = %body, "Resend error"),
            }
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match response.json::<SendEmailResponse>().await {
            Ok(sent) => {
                info!(id = %sent.id, "Email sent via Resend");
                Ok(sent.id)
            }
            Err(e) => {
                // Accepted by the provider, only the receipt is unreadable
                warn!(error = %e, "Resend response parse error");
                Ok("resend:unknown".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resend_error_response_parsing() {
        let error_json =
            r#"{"statusCode":422,"message":"Invalid `to` field.","name":"validation_error"}"#;
        let error: ResendErrorResponse = serde_json::from_str(error_json).unwrap();
        assert_eq!(error.status_code, Some(422));
        assert_eq!(error.message.as_deref(), Some("Invalid `to` field."));
        assert_eq!(error.name.as_deref(), Some("validation_error"));
    }

    #[test]
    fn test_rejected_error_display() {
        let err = DeliveryError::Rejected {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Resend rejected the email (401): unauthorized");
    }

    #[test]
    fn test_transport_is_shareable() {
        fn _assert_transport<T: EmailTransport + Clone + 'static>() {}
        _assert_transport::<ResendTransport>();
    }
}
