//! Contact Relay Lambda - website contact form to Resend
//!
//! Accepts the JSON `POST` of a "contact us" form, validates and sanitizes it,
//! and forwards it as a plain-text + HTML notification through Resend's
//! `/emails` API.
//!
//! ## Pipeline
//!
//! ```text
//! Request Gate → Normalize → Validate → Compose → Deliver → Respond
//!      │             │           │                    │
//!     405/500       500         400                  502/500
//! ```
//!
//! - **Request Gate** - only `POST`, and only with `RESEND_API_KEY` and
//!   `MAIL_TO` configured
//! - **Normalize** - trims fields, coerces consent to a boolean
//! - **Validate** - required fields, email shape, minimum length, link spam
//! - **Compose** - subject, plain text and escaped HTML
//! - **Deliver** - one Resend call, reply-to set to the visitor
//!
//! ## Responses
//!
//! Every outcome is a JSON body, `{"ok": true}` or `{"error": "..."}`.
//!
//! ## Usage
//!
//! Deploy the `contact-relay` binary as an AWS Lambda function behind API
//! Gateway or a function URL. See `main.rs`.

pub mod compose;
pub mod config;
pub mod error;
pub mod form;
pub mod lambda;
pub mod relay;
pub mod resend;
pub mod types;
pub mod validation;

pub use compose::{compose, escape_html, ComposedEmail};
pub use config::{ConfigError, RelayConfig, Settings};
pub use error::{ErrorKind, RelayError};
pub use form::{ContactForm, FormError};
pub use relay::{ContactRelay, RelayResponse};
pub use resend::{DeliveryError, EmailTransport, ResendTransport};
pub use types::{ReplyBody, SendEmailRequest, SendEmailResponse};
pub use validation::{validate, LinkPolicy, Submission, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
