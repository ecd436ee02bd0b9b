//! Test utilities for HTTP-level testing.
//!
//! This module provides:
//! - In-memory and failing email senders for mocking delivery
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod email_mocks;

pub use app_state_builder::*;
pub use email_mocks::*;
