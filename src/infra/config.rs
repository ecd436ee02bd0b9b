use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Unset means outbound email is disabled; submissions are still
    /// accepted and reported as not sent.
    pub resend_api_key: Option<SecretString>,
    /// Mailbox that receives the signup notifications.
    pub waitlist_recipient: String,
    /// "From" display address handed to Resend.
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let resend_api_key: Option<SecretString> = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::new(key.into()));

        let waitlist_recipient: String = get_env_default(
            "WAITLIST_RECIPIENT",
            "eliotshytaj05@gmail.com".to_string(),
        );
        let email_from: String = get_env_default(
            "EMAIL_FROM",
            "Bands Waitlist <onboarding@resend.dev>".to_string(),
        );

        Self {
            bind_addr,
            cors_origin,
            resend_api_key,
            waitlist_recipient,
            email_from,
        }
    }
}
