use chrono::{DateTime, Utc};

/// A single waitlist signup. Lives for the duration of one request:
/// it is built from the request body, logged, projected into the
/// notification email, and dropped.
#[derive(Debug, Clone)]
pub struct WaitlistSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
    /// Assigned by the server at receipt, never taken from the client.
    pub submitted_at: DateTime<Utc>,
}

impl WaitlistSubmission {
    pub fn new(
        name: String,
        email: String,
        company: Option<String>,
        role: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            company,
            role,
            message,
            submitted_at: Utc::now(),
        }
    }
}
