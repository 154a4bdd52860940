//! AWS Lambda handler for the contact relay
//!
//! ## Deployment
//!
//! ```bash
//! # Install cargo-lambda
//! cargo install cargo-lambda
//!
//! # Build for ARM64
//! cargo lambda build --release --arm64 --bin contact-relay
//!
//! # Deploy with the required secrets
//! cargo lambda deploy contact-relay \
//!     --env-var RESEND_API_KEY=re_xxx \
//!     --env-var MAIL_TO=kontakt@example.com
//! ```

use std::sync::Arc;

use contact_relay::{lambda::handle_event, ContactRelay, ResendTransport, Settings};
use lambda_http::{run, service_fn, Error, Request};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch-optimized logging: no colors, CloudWatch adds its own timestamp
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_current_span(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contact_relay=info")),
        )
        .init();

    info!(version = contact_relay::VERSION, "Starting contact relay Lambda");

    let relay = Arc::new(ContactRelay::new(
        Settings::from_env(),
        ResendTransport::new()?,
    ));

    let missing = relay.settings().missing();
    if !missing.is_empty() {
        // Keep serving: every request answers 500 until this is fixed
        warn!(missing = ?missing, "Missing env vars");
    }

    run(service_fn(move |event: Request| {
        let relay = Arc::clone(&relay);
        async move { handle_event(&relay, event).await }
    }))
    .await
}
