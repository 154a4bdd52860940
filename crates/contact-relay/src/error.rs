//! Error taxonomy for the relay pipeline
//!
//! `Display` on [`RelayError`] is the message returned to the caller.
//! Details that must stay server-side live in the error sources and are
//! only logged.

use http::StatusCode;
use tracing::{error, info};

use crate::config::ConfigError;
use crate::form::FormError;
use crate::resend::DeliveryError;
use crate::validation::ValidationError;

/// Coarse error categories, each mapping to one status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MethodNotAllowed,
    Configuration,
    InvalidInput,
    Provider,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Provider => StatusCode::BAD_GATEWAY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Serverkonfiguration unvollständig.")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serverfehler.")]
    MalformedBody(#[from] FormError),

    #[error("{}", delivery_message(.0))]
    Delivery(#[from] DeliveryError),
}

fn delivery_message(err: &DeliveryError) -> &'static str {
    match err {
        DeliveryError::Rejected { .. } => "Mailversand fehlgeschlagen.",
        DeliveryError::Transport(_) => "Serverfehler.",
    }
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            RelayError::Config(_) => ErrorKind::Configuration,
            RelayError::Validation(_) => ErrorKind::InvalidInput,
            RelayError::MalformedBody(_) => ErrorKind::Internal,
            RelayError::Delivery(DeliveryError::Rejected { .. }) => ErrorKind::Provider,
            RelayError::Delivery(DeliveryError::Transport(_)) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    /// Log the server-side detail of this error
    pub fn log(&self) {
        match self {
            RelayError::MethodNotAllowed => info!("Rejected non-POST request"),
            RelayError::Config(ConfigError::Missing(keys)) => {
                error!(missing = ?keys, "Missing env vars")
            }
            RelayError::Validation(e) => info!(rule = ?e, "Submission rejected"),
            RelayError::MalformedBody(e) => error!(error = %e, "Function error: malformed body"),
            // Provider status and body are logged by the transport
            RelayError::Delivery(DeliveryError::Rejected { status, .. }) => {
                error!(status, "Mail delivery failed")
            }
            RelayError::Delivery(DeliveryError::Transport(e)) => {
                error!(error = %e, "Function error: provider unreachable")
            }
        }
    }
}
