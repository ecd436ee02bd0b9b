use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::NotificationEmailSender,
    infra::http_client,
};

#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: secrecy::SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_key: secrecy::SecretString, from: String) -> Self {
        Self {
            client: http_client::build_client(),
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

#[async_trait]
impl NotificationEmailSender for ResendEmailSender {
    async fn send(&self, to: &str, reply_to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
            reply_to,
        };

        let response = self
            .client
            .post("https://api.resend.com/emails")
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .text()
                .await
                .ok()
                .and_then(|payload| extract_provider_message(&payload))
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(AppError::EmailDelivery(format!("Email API error: {reason}")));
        }

        Ok(())
    }
}

/// Resend reports failures as `{"statusCode", "name", "message"}`;
/// pull the human-readable part out if the payload is well-formed.
fn extract_provider_message(payload: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(payload).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_from_error_payload() {
        let payload = r#"{"statusCode":422,"name":"validation_error","message":"Invalid `from` field"}"#;
        assert_eq!(
            extract_provider_message(payload),
            Some("Invalid `from` field".to_string())
        );
    }

    #[test]
    fn test_unparseable_payload_yields_none() {
        assert_eq!(extract_provider_message("<html>bad gateway</html>"), None);
        assert_eq!(extract_provider_message(r#"{"error":true}"#), None);
    }
}
