//! Submission validation
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. required fields and privacy consent
//! 2. email shape
//! 3. minimum message length
//! 4. link-count spam heuristic

use lazy_static::lazy_static;
use regex::Regex;

use crate::form::ContactForm;

lazy_static! {
    /// Basic `local@domain.tld` shape
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Link prefixes counted by the spam heuristic
    static ref LINK_PATTERN: Regex = Regex::new(r"(?i)https?://").unwrap();
}

/// Minimum message length in UTF-16 code units, as a browser counts it
pub const MIN_MESSAGE_CHARS: usize = 20;

/// Default number of links a message may contain
pub const DEFAULT_MAX_LINKS: usize = 2;

/// Link-count spam heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    max_links: usize,
}

impl LinkPolicy {
    pub fn new(max_links: usize) -> Self {
        Self { max_links }
    }

    pub fn max_links(&self) -> usize {
        self.max_links
    }

    /// Whether a message carries more links than allowed
    pub fn exceeded_by(&self, message: &str) -> bool {
        count_links(message) > self.max_links
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINKS)
    }
}

/// A contact form that passed every rule
///
/// Only [`validate`] creates one, so holding a `Submission` means it is safe
/// to compose and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) message: String,
    pub(crate) consent: bool,
}

impl Submission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, `None` when left blank
    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.as_str()).filter(|phone| !phone.is_empty())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn consent(&self) -> bool {
        self.consent
    }
}

/// Rule violations, displayed as the message shown to the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Bitte Pflichtfelder ausfüllen und Datenschutzzustimmung erteilen.")]
    MissingRequired,

    #[error("Bitte eine gültige E-Mail-Adresse eingeben.")]
    InvalidEmail,

    #[error("Bitte eine aussagekräftige Nachricht (mind. 20 Zeichen) eingeben.")]
    MessageTooShort,

    #[error("Zu viele Links in der Nachricht.")]
    TooManyLinks,
}

/// Run all rules against a normalized form
pub fn validate(form: ContactForm, links: &LinkPolicy) -> Result<Submission, ValidationError> {
    if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() || !form.consent
    {
        return Err(ValidationError::MissingRequired);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.message.encode_utf16().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    if links.exceeded_by(&form.message) {
        return Err(ValidationError::TooManyLinks);
    }

    Ok(Submission {
        name: form.name,
        email: form.email,
        phone: form.phone,
        message: form.message,
        consent: form.consent,
    })
}

/// Check the basic email shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Count `http://` and `https://` occurrences, ignoring case
pub fn count_links(text: &str) -> usize {
    LINK_PATTERN.find_iter(text).count()
}
