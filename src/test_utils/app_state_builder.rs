//! Test app state builder for HTTP-level testing.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{NotificationEmailSender, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryEmailSender,
};

/// Builder for creating `AppState` with mock email delivery.
///
/// # Example
///
/// ```ignore
/// let (app_state, email_sender) = TestAppStateBuilder::new()
///     .with_recipient("team@bands.test")
///     .build_with_email_mock();
/// ```
pub struct TestAppStateBuilder {
    email_sender: Option<Arc<dyn NotificationEmailSender>>,
    recipient: String,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            email_sender: None,
            recipient: "team@bands.test".to_string(),
        }
    }

    /// Set a custom email sender. Leaving it unset models the
    /// unconfigured deployment.
    pub fn with_email_sender(mut self, sender: Arc<dyn NotificationEmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    pub fn with_recipient(mut self, recipient: &str) -> Self {
        self.recipient = recipient.to_string();
        self
    }

    /// Build with an in-memory sender and return it for assertions.
    pub fn build_with_email_mock(self) -> (AppState, Arc<InMemoryEmailSender>) {
        let email_sender = Arc::new(InMemoryEmailSender::new());

        let app_state = self.with_email_sender(email_sender.clone()).build();

        (app_state, email_sender)
    }

    pub fn build(self) -> AppState {
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            resend_api_key: None,
            waitlist_recipient: self.recipient.clone(),
            email_from: "Bands Waitlist <onboarding@resend.dev>".to_string(),
        });

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(self.email_sender, self.recipient));

        AppState {
            config,
            waitlist_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
