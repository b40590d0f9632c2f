//! Process-wide `tracing` subscriber.
//!
//! `RUST_LOG` picks the filter; `LOG_FORMAT=json` switches the stdout output
//! from compact lines to one JSON object per event.
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. SQL statements show up under
/// `sea_orm` only when `database.sqlx_logging` is on.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sea_orm=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Compact`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT").map(|v| Self::parse(&v)).unwrap_or_default()
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(env_filter).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
