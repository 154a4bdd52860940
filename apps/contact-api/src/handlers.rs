//! HTTP handlers for the contact API

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use contact_relay::{EmailTransport, RelayResponse};

use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Contact form endpoint
///
/// Accepts every method so the relay itself answers non-POST requests.
pub async fn contact<T: EmailTransport + 'static>(
    State(state): State<Arc<AppState<T>>>,
    method: Method,
    body: Bytes,
) -> Response {
    let body = (!body.is_empty()).then_some(&body[..]);
    let response = state.relay.handle(&method, body).await;
    json_response(response)
}

/// Create a JSON response
fn json_response(response: RelayResponse) -> Response {
    (response.status, Json(response.body)).into_response()
}
