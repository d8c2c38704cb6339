//! A small web service for browsing a school's extracurricular activities
//! and signing students up for them.

mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

pub use app::{App, AppState, InternalState};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact, human readable console logging for local development and tests.
/// Honours `RUST_LOG`, falls back to `debug`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(env_filter_or("debug"))
        .compact()
        .init();
}

/// JSON logging for production. Honours `RUST_LOG`, falls back to `info`.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(env_filter_or("info"))
        .init();
}

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
