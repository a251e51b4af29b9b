//! # coursecardd
//!
//! Course card daemon.
//!
//! Composition root that loads the catalog and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` from the configured filter
//! - Build the axum router around the catalog
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no rendering logic belongs here.

mod catalog;
mod config;

use coursecard_adapter_http_axum::router;
use coursecard_adapter_http_axum::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(env_filter(&config.logging.filter)?)
        .with(fmt::layer())
        .init();

    let courses = config.catalog();
    tracing::info!(
        courses = courses.len(),
        configured = !config.courses.is_empty(),
        "catalog loaded"
    );

    let mut state = AppState::new(courses);
    if let Some(dir) = &config.dashboard.dist_dir {
        state = state.with_dashboard_dir(dir);
    }
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "coursecardd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("coursecardd stopped");
    Ok(())
}

/// Build the log filter from the configured directive.
///
/// A malformed directive is an error rather than a silent fallback, so a
/// typo in `RUST_LOG` or `COURSECARD_LOG` stops startup.
fn env_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_default_log_filter() {
        let config = Config::default();
        assert!(env_filter(&config.logging.filter).is_ok());
    }

    #[test]
    fn should_reject_malformed_log_filter() {
        assert!(env_filter("coursecardd=loudest").is_err());
    }
}
