//! The contact request pipeline
//!
//! `Gate → Normalize → Validate → Compose → Deliver → Respond`. Each stage
//! may end the request early with a [`RelayError`]; the result is always
//! turned into a [`RelayResponse`], never propagated.

use http::{Method, StatusCode};
use tracing::{debug, info, instrument};

use crate::compose::compose;
use crate::config::Settings;
use crate::error::RelayError;
use crate::form::ContactForm;
use crate::resend::{EmailTransport, ResendTransport};
use crate::types::{ReplyBody, SendEmailRequest};
use crate::validation::validate;

/// Runtime-neutral response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: ReplyBody,
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK,
            body: ReplyBody::Ok { ok: true },
        }
    }

    /// Serialized JSON body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

impl From<&RelayError> for RelayResponse {
    fn from(err: &RelayError) -> Self {
        Self {
            status: err.status(),
            body: ReplyBody::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Contact form relay
///
/// Holds the process-wide settings and the email transport. Both are
/// read-only, so one relay serves concurrent requests.
#[derive(Debug)]
pub struct ContactRelay<T = ResendTransport> {
    settings: Settings,
    transport: T,
}

impl<T: EmailTransport> ContactRelay<T> {
    pub fn new(settings: Settings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one request
    #[instrument(skip_all, fields(method = %method))]
    pub async fn handle(&self, method: &Method, body: Option<&[u8]>) -> RelayResponse {
        match self.process(method, body).await {
            Ok(id) => {
                info!(id = %id, "Contact request relayed");
                RelayResponse::ok()
            }
            Err(err) => {
                err.log();
                RelayResponse::from(&err)
            }
        }
    }

    async fn process(&self, method: &Method, body: Option<&[u8]>) -> Result<String, RelayError> {
        if *method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }
        let config = self.settings.resolve()?;

        let form = ContactForm::from_body(body)?;
        let submission = validate(form, &config.link_policy)?;
        debug!(has_phone = submission.phone().is_some(), "Submission valid");

        let email = compose(&submission);
        let request = SendEmailRequest::notification(&config, &submission, email);

        Ok(self.transport.send(&config, &request).await?)
    }
}
