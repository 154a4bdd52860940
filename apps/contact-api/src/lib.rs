//! Contact API - the contact relay as a plain HTTP server
//!
//! Runs the same pipeline as the Lambda function for local development
//! and self-hosting. The Netlify-style path is kept so the website's form
//! can post to either deployment unchanged.

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use contact_relay::EmailTransport;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Contact endpoint path
pub const CONTACT_PATH: &str = "/api/contact";

/// Path the website's form posts to on Netlify
pub const NETLIFY_FUNCTION_PATH: &str = "/.netlify/functions/send-email";

/// Build the application router
pub fn router<T: EmailTransport + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Contact form
        .route(CONTACT_PATH, any(handlers::contact::<T>))
        .route(NETLIFY_FUNCTION_PATH, any(handlers::contact::<T>))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
