#![deny(unused_crate_dependencies)]

//! Logging setup shared by the binaries of the workspace.
//!
//! The format of the logs in `stdout` can be `plain` or `json` and is set by
//! the `LOG_FORMAT` env variable. Filtering follows `RUST_LOG`.
//!
//! Full documentation for the `tracing` crate here <https://docs.rs/tracing/>
//!
//! Integration with sentry is enabled by setting `SENTRY_URL`
//! <https://docs.sentry.io/platforms/rust/>

use std::{backtrace::Backtrace, borrow::Cow, str::FromStr};

use sentry::{types::Dsn, ClientInitGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing::{debug, error, info, trace, warn};

/// Format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    Plain,

    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!("unexpected log format {other}")),
        }
    }
}

fn get_sentry_url() -> Option<Dsn> {
    let sentry_url = std::env::var("SENTRY_URL").ok()?;

    Dsn::from_str(sentry_url.as_str()).ok()
}

/// Initialize logging with tracing and set up log format
///
/// An unknown `LOG_FORMAT` falls back to `plain` with a warning.
///
/// If the sentry URL is provided via an environment variable, this function will also initialize sentry.
/// Returns a sentry client guard. The full description can be found in the official documentation:
/// <https://docs.sentry.io/platforms/rust/#configure>
#[must_use]
pub fn init() -> Option<ClientInitGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "plain".to_string());
    let parsed = log_format.parse::<LogFormat>();

    match parsed.clone().unwrap_or(LogFormat::Plain) {
        LogFormat::Plain => {
            tracing_subscriber::registry()
                .with(fmt::Layer::default())
                .with(EnvFilter::from_default_env())
                .init();
        }
        LogFormat::Json => {
            let timer = fmt::time::UtcTime::rfc_3339();
            // must be set before sentry hook for sentry to function
            install_pretty_panic_hook();

            tracing_subscriber::registry()
                .with(
                    fmt::Layer::default()
                        .with_file(true)
                        .with_line_number(true)
                        .with_timer(timer)
                        .json(),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    }

    if let Err(e) = parsed {
        tracing::warn!("{e}, using plain logs");
    }

    get_sentry_url().map(|sentry_url| {
        let environment = std::env::var("SENTRY_ENVIRONMENT").ok().map(Cow::from);

        let options = sentry::ClientOptions {
            release: sentry::release_name!(),
            environment,
            attach_stacktrace: true,
            ..Default::default()
        };

        sentry::init((sentry_url, options))
    })
}

/// Format panics like tracing::error
fn install_pretty_panic_hook() {
    // The previous hook is not chained, it would log every panic twice.
    std::panic::set_hook(Box::new(move |panic_info| {
        let backtrace = Backtrace::capture();
        let timestamp = chrono::Utc::now();
        let panic_message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Panic occurred without additional info"
        };

        let panic_location = panic_info
            .location()
            .map(|val| val.to_string())
            .unwrap_or_else(|| "Unknown location".to_owned());

        println!(
            "{}",
            serde_json::json!({
                "timestamp": timestamp.format("%Y-%m-%dT%H:%M:%S%.fZ").to_string(),
                "level": "CRITICAL",
                "fields": {
                    "message": panic_message,
                    "location": panic_location,
                    "backtrace": backtrace.to_string(),
                }
            })
        );
    }));
}

#[cfg(test)]
mod tests {
    use super::LogFormat;

    #[test]
    fn log_formats() {
        assert_eq!("plain".parse::<LogFormat>(), Ok(LogFormat::Plain));
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
