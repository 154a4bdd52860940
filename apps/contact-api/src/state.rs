//! Application state for the contact API

use anyhow::Result;
use contact_relay::{ContactRelay, EmailTransport, ResendTransport, Settings};

pub struct AppState<T = ResendTransport> {
    pub relay: ContactRelay<T>,
}

impl AppState {
    /// Build state from the process environment
    pub fn from_env() -> Result<Self> {
        let relay = ContactRelay::new(Settings::from_env(), ResendTransport::new()?);

        let missing = relay.settings().missing();
        if missing.is_empty() {
            tracing::info!(settings = ?relay.settings(), "Loaded relay settings");
        } else {
            tracing::warn!(missing = ?missing, "Missing env vars, contact requests will fail");
        }

        Ok(Self::with_relay(relay))
    }
}

impl<T: EmailTransport> AppState<T> {
    pub fn with_relay(relay: ContactRelay<T>) -> Self {
        Self { relay }
    }
}
