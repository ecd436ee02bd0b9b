pub mod pages;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    waitlist::router()
}
