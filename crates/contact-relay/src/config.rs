//! Relay configuration
//!
//! Settings are read from the environment once per process. Every request
//! resolves them into a [`RelayConfig`]; a deployment missing one of the
//! required secrets keeps answering with a configuration error instead of
//! failing at start-up.

use std::fmt;

use crate::validation::LinkPolicy;

/// Default sender used when `MAIL_FROM` is not set
pub const DEFAULT_FROM_ADDRESS: &str = "Website <onboarding@resend.dev>";

/// Resend send endpoint
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

pub const ENV_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_MAIL_TO: &str = "MAIL_TO";
pub const ENV_MAIL_FROM: &str = "MAIL_FROM";
pub const ENV_API_URL: &str = "RESEND_API_URL";
pub const ENV_MAX_LINKS: &str = "CONTACT_MAX_LINKS";

/// Raw settings as found in the environment
///
/// Empty values are treated as unset.
#[derive(Clone, Default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub mail_to: Option<String>,
    pub mail_from: Option<String>,
    pub api_url: Option<String>,
    pub max_links: Option<usize>,
}

impl Settings {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let max_links = read(ENV_MAX_LINKS).and_then(|raw| match raw.trim().parse() {
            Ok(limit) => Some(limit),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid {ENV_MAX_LINKS}");
                None
            }
        });

        Self {
            api_key: read(ENV_API_KEY),
            mail_to: read(ENV_MAIL_TO),
            mail_from: read(ENV_MAIL_FROM),
            api_url: read(ENV_API_URL),
            max_links,
        }
    }

    /// Names of the required variables that are not set
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.api_key.is_none() {
            missing.push(ENV_API_KEY);
        }
        if self.mail_to.is_none() {
            missing.push(ENV_MAIL_TO);
        }
        missing
    }

    /// Resolve into a complete configuration
    pub fn resolve(&self) -> Result<RelayConfig, ConfigError> {
        match (&self.api_key, &self.mail_to) {
            (Some(api_key), Some(mail_to)) => Ok(RelayConfig {
                api_key: api_key.clone(),
                mail_to: mail_to.clone(),
                mail_from: self
                    .mail_from
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
                api_url: self
                    .api_url
                    .clone()
                    .unwrap_or_else(|| RESEND_API_URL.to_string()),
                link_policy: self
                    .max_links
                    .map(LinkPolicy::new)
                    .unwrap_or_default(),
            }),
            _ => Err(ConfigError::Missing(self.missing())),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("mail_to", &self.mail_to)
            .field("mail_from", &self.mail_from)
            .field("api_url", &self.api_url)
            .field("max_links", &self.max_links)
            .finish()
    }
}

/// Complete configuration for one relay invocation
#[derive(Clone)]
pub struct RelayConfig {
    /// Resend API key (re_xxxxxxxxxx)
    pub api_key: String,
    /// Destination address for contact requests
    pub mail_to: String,
    /// Sender address
    pub mail_from: String,
    /// Resend send endpoint
    pub api_url: String,
    /// Spam heuristic applied to the message body
    pub link_policy: LinkPolicy,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("mail_to", &self.mail_to)
            .field("mail_from", &self.mail_from)
            .field("api_url", &self.api_url)
            .field("link_policy", &self.link_policy)
            .finish()
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing env vars: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_resolve_with_defaults() {
        let config = settings(&[(ENV_API_KEY, "re_123"), (ENV_MAIL_TO, "team@example.com")])
            .resolve()
            .unwrap();

        assert_eq!(config.api_key, "re_123");
        assert_eq!(config.mail_to, "team@example.com");
        assert_eq!(config.mail_from, DEFAULT_FROM_ADDRESS);
        assert_eq!(config.api_url, RESEND_API_URL);
        assert_eq!(config.link_policy.max_links(), 2);
    }

    #[test]
    fn test_resolve_with_overrides() {
        let config = settings(&[
            (ENV_API_KEY, "re_123"),
            (ENV_MAIL_TO, "team@example.com"),
            (ENV_MAIL_FROM, "Kontakt <kontakt@example.com>"),
            (ENV_API_URL, "http://127.0.0.1:9999/emails"),
            (ENV_MAX_LINKS, "5"),
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.mail_from, "Kontakt <kontakt@example.com>");
        assert_eq!(config.api_url, "http://127.0.0.1:9999/emails");
        assert_eq!(config.link_policy.max_links(), 5);
    }

    #[test]
    fn test_missing_keys_are_reported() {
        assert_eq!(
            settings(&[]).resolve().unwrap_err(),
            ConfigError::Missing(vec![ENV_API_KEY, ENV_MAIL_TO])
        );
        assert_eq!(
            settings(&[(ENV_MAIL_TO, "team@example.com")])
                .resolve()
                .unwrap_err(),
            ConfigError::Missing(vec![ENV_API_KEY])
        );
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = settings(&[(ENV_API_KEY, ""), (ENV_MAIL_TO, "   ")])
            .resolve()
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec![ENV_API_KEY, ENV_MAIL_TO]));
    }

    #[test]
    fn test_invalid_link_limit_falls_back_to_default() {
        let config = settings(&[
            (ENV_API_KEY, "re_123"),
            (ENV_MAIL_TO, "team@example.com"),
            (ENV_MAX_LINKS, "lots"),
        ])
        .resolve()
        .unwrap();
        assert_eq!(config.link_policy.max_links(), 2);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = settings(&[(ENV_API_KEY, "re_secret"), (ENV_MAIL_TO, "a@b.de")]);
        assert!(!format!("{:?}", settings).contains("re_secret"));
        assert!(!format!("{:?}", settings.resolve().unwrap()).contains("re_secret"));
    }
}
