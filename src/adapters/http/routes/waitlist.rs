//! Waitlist signup endpoint.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::submission::WaitlistSubmission,
};

#[derive(Deserialize)]
struct JoinWaitlistPayload {
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    role: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct SubmissionEcho {
    name: String,
    email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinWaitlistResponse {
    message: &'static str,
    data: SubmissionEcho,
    email_sent: bool,
}

#[derive(Serialize)]
struct StatusResponse {
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist).get(waitlist_status))
}

/// POST /api/waitlist
/// Validates the submission, logs it, and attempts the notification
/// email. A valid submission always gets 200; `emailSent` reports
/// whether the notification actually went out.
async fn join_waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<JoinWaitlistPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // A body we cannot parse at all is an internal failure, not a
    // validation error the form can act on.
    let Json(payload) =
        payload.map_err(|e| AppError::Internal(format!("Unreadable request body: {e}")))?;

    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    if name.is_empty() || email.is_empty() {
        return Err(AppError::InvalidInput(
            "Name and email are required".to_string(),
        ));
    }

    if !is_valid_email(&email) {
        return Err(AppError::InvalidInput("Invalid email format".to_string()));
    }

    let submission = WaitlistSubmission::new(
        name,
        email,
        non_empty(payload.company),
        non_empty(payload.role),
        non_empty(payload.message),
    );

    let email_sent = app_state.waitlist_use_cases.submit(&submission).await;

    Ok(Json(JoinWaitlistResponse {
        message: "Successfully joined waitlist",
        data: SubmissionEcho {
            name: submission.name,
            email: submission.email,
        },
        email_sent,
    }))
}

/// GET /api/waitlist
/// Liveness probe; no inputs, no side effects.
async fn waitlist_status() -> impl IntoResponse {
    Json(StatusResponse {
        message: "Waitlist API is running",
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
