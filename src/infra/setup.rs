use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    application::use_cases::waitlist::{NotificationEmailSender, WaitlistUseCases},
    infra::config::AppConfig,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> anyhow::Result<AppState> {
    init_tracing();

    let config = AppConfig::from_env();

    let email_sender: Option<Arc<dyn NotificationEmailSender>> =
        config.resend_api_key.clone().map(|api_key| {
            Arc::new(ResendEmailSender::new(api_key, config.email_from.clone()))
                as Arc<dyn NotificationEmailSender>
        });

    if email_sender.is_none() {
        tracing::warn!("RESEND_API_KEY not configured, waitlist notifications will not be sent");
    }

    let waitlist_use_cases = WaitlistUseCases::new(email_sender, config.waitlist_recipient.clone());

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bands_site=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
