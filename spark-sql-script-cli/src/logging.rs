use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr: stdout carries the banner followed by the driver's own
/// output and nothing else. An unparsable `filter` falls back to the default
/// level rather than failing the launch.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
