//! Contact API Server - local runner for the contact relay
//!
//! ```bash
//! RESEND_API_KEY=re_xxx MAIL_TO=kontakt@example.com cargo run -p contact-api
//! ```

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use contact_api::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contact_api=info".parse()?)
                .add_directive("contact_relay=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing contact API...");
    let state = Arc::new(AppState::from_env()?);

    let app = router(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8888);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting contact API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
