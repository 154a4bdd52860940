//! Wire types for the Resend API and the relay's own responses

use serde::{Deserialize, Serialize};

use crate::compose::ComposedEmail;
use crate::config::RelayConfig;
use crate::validation::Submission;

/// Email send request - Resend `POST /emails` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender address
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    /// Reply-to address, the visitor who filled in the form
    pub reply_to: String,

    /// Email subject
    pub subject: String,

    /// Plain text body
    pub text: String,

    /// HTML body
    pub html: String,
}

impl SendEmailRequest {
    /// Address a composed notification to the configured inbox
    ///
    /// Replies go straight to the visitor.
    pub fn notification(
        config: &RelayConfig,
        submission: &Submission,
        email: ComposedEmail,
    ) -> Self {
        Self {
            from: config.mail_from.clone(),
            to: vec![config.mail_to.clone()],
            reply_to: submission.email().to_string(),
            subject: email.subject,
            text: email.text,
            html: email.html,
        }
    }
}

/// Resend API success response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}

/// JSON body returned to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Ok { ok: bool },
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_request_serialization() {
        let request = SendEmailRequest {
            from: "Website <onboarding@resend.dev>".to_string(),
            to: vec!["team@example.com".to_string()],
            reply_to: "anna@example.com".to_string(),
            subject: "Neue BU-Anfrage von Anna".to_string(),
            text: "Hallo".to_string(),
            html: "<p>Hallo</p>".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "Website <onboarding@resend.dev>",
                "to": ["team@example.com"],
                "reply_to": "anna@example.com",
                "subject": "Neue BU-Anfrage von Anna",
                "text": "Hallo",
                "html": "<p>Hallo</p>",
            })
        );
    }

    #[test]
    fn test_reply_body_shapes() {
        assert_eq!(
            serde_json::to_string(&ReplyBody::Ok { ok: true }).unwrap(),
            r#"{"ok":true}"#
        );
        assert_eq!(
            serde_json::to_string(&ReplyBody::Error {
                error: "Serverfehler.".to_string()
            })
            .unwrap(),
            r#"{"error":"Serverfehler."}"#
        );
    }

    #[test]
    fn test_success_response_ignores_extra_fields() {
        let response: SendEmailResponse =
            serde_json::from_str(r#"{"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794","object":"email"}"#)
                .unwrap();
        assert_eq!(response.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    }
}
