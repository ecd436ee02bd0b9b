use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::email_templates,
    domain::entities::submission::WaitlistSubmission,
};

#[async_trait]
pub trait NotificationEmailSender: Send + Sync {
    async fn send(&self, to: &str, reply_to: &str, subject: &str, html: &str) -> AppResult<()>;
}

pub struct WaitlistUseCases {
    /// `None` when no API key is configured; submissions are still
    /// accepted, the notification is just reported as undelivered.
    email_sender: Option<Arc<dyn NotificationEmailSender>>,
    recipient: String,
}

impl WaitlistUseCases {
    pub fn new(email_sender: Option<Arc<dyn NotificationEmailSender>>, recipient: String) -> Self {
        Self {
            email_sender,
            recipient,
        }
    }

    /// Records the submission and makes exactly one delivery attempt
    /// for the notification email. Returns whether the email went out;
    /// delivery problems are logged here and never bubble up.
    pub async fn submit(&self, submission: &WaitlistSubmission) -> bool {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            company = ?submission.company,
            role = ?submission.role,
            message = ?submission.message,
            submitted_at = %submission.submitted_at,
            "New waitlist submission"
        );

        match self.dispatch_notification(submission).await {
            Ok(()) => {
                tracing::info!(recipient = %self.recipient, "Waitlist notification email sent");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Waitlist notification email was not delivered");
                false
            }
        }
    }

    async fn dispatch_notification(&self, submission: &WaitlistSubmission) -> AppResult<()> {
        let Some(sender) = &self.email_sender else {
            return Err(AppError::EmailDelivery(
                "Email service is not configured".to_string(),
            ));
        };

        let (subject, html) = email_templates::waitlist_notification_email(submission);

        // Replies to the notification should land with the submitter.
        sender
            .send(&self.recipient, &submission.email, &subject, &html)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingEmailSender, InMemoryEmailSender};

    fn submission() -> WaitlistSubmission {
        WaitlistSubmission::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn submit_without_sender_reports_not_sent() {
        let use_cases = WaitlistUseCases::new(None, "team@example.com".to_string());

        assert!(!use_cases.submit(&submission()).await);
    }

    #[tokio::test]
    async fn submit_delivers_to_configured_recipient() {
        let sender = Arc::new(InMemoryEmailSender::new());
        let use_cases =
            WaitlistUseCases::new(Some(sender.clone()), "team@example.com".to_string());

        assert!(use_cases.submit(&submission()).await);

        let emails = sender.captured_emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to, "team@example.com");
        assert_eq!(emails[0].reply_to, "ada@example.com");
        assert_eq!(emails[0].subject, "New Waitlist Signup: Ada");
    }

    #[tokio::test]
    async fn submit_swallows_delivery_failure() {
        let sender = Arc::new(FailingEmailSender::new("provider unavailable"));
        let use_cases = WaitlistUseCases::new(Some(sender), "team@example.com".to_string());

        assert!(!use_cases.submit(&submission()).await);
    }
}
