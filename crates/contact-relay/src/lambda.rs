//! AWS Lambda adapter
//!
//! Translates API Gateway / function URL events into relay calls and the
//! relay's response back into a Lambda HTTP response.

use lambda_http::{http::header::CONTENT_TYPE, Body, Error, Request, Response};

use crate::relay::{ContactRelay, RelayResponse};
use crate::resend::EmailTransport;

/// Handle one Lambda HTTP event
pub async fn handle_event<T: EmailTransport>(
    relay: &ContactRelay<T>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body().as_ref();
    let body = (!body.is_empty()).then_some(body);

    let response = relay.handle(event.method(), body).await;
    json_response(&response)
}

/// Create a JSON response
fn json_response(response: &RelayResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(response.status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(response.to_json()?))?)
}
