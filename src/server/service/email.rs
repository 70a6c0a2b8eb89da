//! Outgoing account emails.
//!
//! Messages are posted as JSON to a transactional email HTTP API. Without an API URL
//! configured the message is written to the log instead, which is what local
//! development and tests rely on.

use dioxus_logger::tracing;
use serde::Serialize;

use crate::server::error::AppError;

#[derive(Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Rendered message ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn email_confirmation(link: &str) -> Self {
        Self {
            subject: "Confirm your email address".to_string(),
            body: format!(
                "Welcome!\n\nPlease confirm your email address by opening the link below. \
                 The link is valid for 24 hours.\n\n{}\n\nIf you did not create an account \
                 you can ignore this message.",
                link
            ),
        }
    }

    pub fn password_reset(link: &str) -> Self {
        Self {
            subject: "Reset your password".to_string(),
            body: format!(
                "Someone asked to reset the password of your account.\n\nOpen the link below \
                 to choose a new password. The link is valid for one hour and can be used \
                 once.\n\n{}\n\nIf you did not ask for this you can ignore this message.",
                link
            ),
        }
    }
}

#[derive(Clone)]
pub struct EmailService {
    http_client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
}

impl EmailService {
    pub fn new(
        http_client: reqwest::Client,
        api_url: Option<String>,
        api_key: Option<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
            from: from.into(),
        }
    }

    /// Service that only logs messages.
    pub fn log_only(from: impl Into<String>) -> Self {
        Self::new(reqwest::Client::new(), None, None, from)
    }

    /// Sends `message` to `to`.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the API, or logged when no API is configured
    /// - `Err(AppError::ReqwestErr(_))` - API unreachable or returned a non-success status
    pub async fn send(&self, to: &str, message: &EmailMessage) -> Result<(), AppError> {
        let Some(api_url) = &self.api_url else {
            tracing::info!(
                "Email delivery not configured, message to {}: {}\n{}",
                to,
                message.subject,
                message.body
            );
            return Ok(());
        };

        let mut request = self.http_client.post(api_url).json(&OutgoingEmail {
            from: &self.from,
            to,
            subject: &message.subject,
            text: &message.body,
        });

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        request.send().await?.error_for_status()?;

        tracing::debug!("Sent \"{}\" to {}", message.subject, to);

        Ok(())
    }
}
