//! Logging setup on top of `tracing-subscriber`.
//!
//! Libraries in the workspace only emit `tracing` events; binaries call
//! [`init_logging`] once at startup to install a subscriber.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Environment variable holding filter directives (`RUST_LOG` syntax).
pub const LOG_ENV_VAR: &str = "W3MAIL_LOG";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when no directive matches (`info`, `debug`, ...).
    pub level: String,
    /// Extra filter directives, e.g. `w3mail_utils=trace`.
    pub directives: Vec<String>,
    /// Include the event target in output.
    pub with_target: bool,
    /// Colorize output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directives: Vec::new(),
            with_target: true,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Reads directives from [`LOG_ENV_VAR`], falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_directives(std::env::var(LOG_ENV_VAR).ok().as_deref())
    }

    /// Builds a config from a comma-separated directive string.
    ///
    /// A bare level (`debug`) becomes the default level; everything else is
    /// kept as a directive.
    #[must_use]
    pub fn from_directives(directives: Option<&str>) -> Self {
        let mut config = Self::default();
        for part in directives.unwrap_or_default().split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            if part.contains('=') {
                config.directives.push(part.to_string());
            } else {
                config.level = part.to_lowercase();
            }
        }
        config
    }

    /// Filter string in `RUST_LOG` syntax.
    #[must_use]
    pub fn filter_string(&self) -> String {
        std::iter::once(self.level.as_str())
            .chain(self.directives.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parsed filter.
    ///
    /// # Errors
    ///
    /// Returns `Error::Logging` if a directive is malformed.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(self.filter_string()).map_err(|e| Error::Logging(e.to_string()))
    }
}

/// Installs a global formatting subscriber.
///
/// # Errors
///
/// Returns `Error::Logging` if the filter is invalid or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.with_target)
                .with_ansi(config.ansi),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(filter = %config.filter_string(), "Logging initialized");
    Ok(())
}
