use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_LOG_FILTER: &str = "challonge_proxy=info,actix_web=info";

/// Builds the filter from an explicit directive string, then `RUST_LOG`, then the default.
#[must_use]
pub fn build_filter(explicit: Option<&str>) -> EnvFilter {
    explicit
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. `log` records (actix-web's request logger) are
/// forwarded into it by `tracing-subscriber`'s `tracing-log` bridge.
///
/// # Errors
///
/// Will return `Err` if a global subscriber was already installed
pub fn setup_logging(
    explicit: Option<&str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::Layer::new().with_target(true).with_filter(build_filter(explicit)))
        .try_init()
}
