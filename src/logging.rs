//! Diagnostics go to stderr through `tracing`, so stdout carries only the
//! report.
//!
//! The filter is read from `SYSINFO_TOOL_LOG` (same syntax as `RUST_LOG`)
//! and defaults to [`DEFAULT_FILTER`].

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_ENV_VAR: &str = "SYSINFO_TOOL_LOG";
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `directives`, falling back to [`DEFAULT_FILTER`]
/// when they are missing or invalid.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_logging() -> Result<()> {
    let directives = std::env::var(LOG_ENV_VAR).ok();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .with_filter(build_filter(directives.as_deref()));

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_custom_filter() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        assert_eq!(build_filter(Some("sysinfo_tool=loud")).to_string(), DEFAULT_FILTER);
    }
}
