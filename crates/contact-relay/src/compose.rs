//! Notification email rendering
//!
//! Every visitor-supplied value in the HTML body goes through
//! [`escape_html`]. The plain-text body is sent verbatim.

use crate::validation::Submission;

/// Placeholder shown when no phone number was given
const NO_PHONE: &str = "-";

/// Rendered notification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Render subject, plain text and HTML for a submission
pub fn compose(submission: &Submission) -> ComposedEmail {
    let phone = submission.phone().unwrap_or(NO_PHONE);
    let consent = if submission.consent() { "ja" } else { "nein" };

    let subject = format!("Neue BU-Anfrage von {}", submission.name());

    let text = format!(
        "Neue Anfrage über die Website:\n\n\
        Name:    {name}\n\
        E-Mail:  {email}\n\
        Telefon: {phone}\n\n\
        Nachricht:\n\
        {message}\n\n\
        Einwilligung Datenschutz: {consent}",
        name = submission.name(),
        email = submission.email(),
        message = submission.message(),
    );

    let html = format!(
        r#"<h2>Neue BU-Anfrage</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>E-Mail:</strong> {email}</p>
<p><strong>Telefon:</strong> {phone}</p>
<p><strong>Nachricht:</strong><br>{message}</p>
<p><strong>Einwilligung Datenschutz:</strong> {consent}</p>"#,
        name = escape_html(submission.name()),
        email = escape_html(submission.email()),
        phone = escape_html(phone),
        message = escape_html(submission.message()).replace('\n', "<br>"),
    );

    ComposedEmail {
        subject,
        text,
        html,
    }
}

/// Escape `& < > " '` for safe inclusion in HTML
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
