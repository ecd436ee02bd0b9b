//! Server-rendered marketing pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, response::IntoResponse, routing::get};

use crate::adapters::http::app_state::AppState;

/// Landing page: hero headline plus the compact waitlist form.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
struct LandingTemplate {}

async fn landing() -> impl IntoResponse {
    LandingTemplate {}
}

/// Pitch copy plus the compact waitlist form.
#[derive(Template, WebTemplate)]
#[template(path = "learn_more.html")]
struct LearnMoreTemplate {}

async fn learn_more() -> impl IntoResponse {
    LearnMoreTemplate {}
}

/// Full waitlist form (name, email, company, role, message).
#[derive(Template, WebTemplate)]
#[template(path = "waitlist.html")]
struct WaitlistPageTemplate {}

async fn waitlist_page() -> impl IntoResponse {
    WaitlistPageTemplate {}
}

/// Placeholder card; there is nothing to sign in to yet.
#[derive(Template, WebTemplate)]
#[template(path = "sign_in.html")]
struct SignInTemplate {}

async fn sign_in() -> impl IntoResponse {
    SignInTemplate {}
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/learn-more", get(learn_more))
        .route("/waitlist", get(waitlist_page))
        .route("/sign-in", get(sign_in))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use crate::test_utils::TestAppStateBuilder;

    fn test_server() -> TestServer {
        let app_state = TestAppStateBuilder::new().build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn landing_page_renders() {
        let response = test_server().get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("Sell Your Products on ChatGPT"));
    }

    #[tokio::test]
    async fn learn_more_page_renders() {
        let response = test_server().get("/learn-more").await;

        response.assert_status_ok();
        assert!(response.text().contains("Agentic Commerce Protocol"));
    }

    #[tokio::test]
    async fn waitlist_page_renders_full_form() {
        let response = test_server().get("/waitlist").await;

        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains("Join the Waitlist"));
        for field in ["name", "email", "company", "role", "message"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing field {field}");
        }
    }

    #[tokio::test]
    async fn sign_in_page_renders() {
        let response = test_server().get("/sign-in").await;

        response.assert_status_ok();
    }
}
