//! Log subscriber setup for the CLI.
//!
//! Logs go to stderr so `OK <path>` lines on stdout stay machine-readable.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// Covers both the library and this binary, whose crate name is also `rawgen`.
const VERBOSE_FILTER: &str = "rawgen=trace";
const DEFAULT_FILTER: &str = "warn";

/// `RUST_LOG` wins when set; otherwise `verbose` picks the trace filter.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

pub fn init(verbose: bool) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
