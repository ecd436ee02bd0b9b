//! In-memory mock implementations of the notification email port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::NotificationEmailSender,
};

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that records every message instead of delivering it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    emails: Mutex<Vec<CapturedEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationEmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, reply_to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.emails.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            reply_to: reply_to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Email sender that fails every send with a fixed provider reason.
pub struct FailingEmailSender {
    reason: String,
}

impl FailingEmailSender {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl NotificationEmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _reply_to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::EmailDelivery(self.reason.clone()))
    }
}
