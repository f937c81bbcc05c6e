//! Diagnostics
//!
//! Installs the `tracing` subscriber for the sales board. Events go to stderr
//! so they never interleave with the board written to stdout.

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// The configured level applies to this crate and the board binary; other
/// crates log at `warn`. A `RUST_LOG` value replaces these directives.
///
/// # Errors
///
/// Returns [`ObservabilityError::Init`] if a subscriber is already installed.
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(true),
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(true),
        ),
    }
}

fn filter_directives(log_level: &str) -> String {
    format!("warn,flash_sales={log_level},sales_board={log_level}")
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.log_level)))
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_scoped_to_the_board() {
        assert_eq!(
            filter_directives("debug"),
            "warn,flash_sales=debug,sales_board=debug"
        );
    }

    #[test]
    fn directives_form_a_valid_filter() {
        assert!(EnvFilter::try_new(filter_directives("trace")).is_ok());
    }
}
