use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["SERVEBENCH_LOG", "RUST_LOG"];

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// First set variable in [`LOG_ENV_VARS`] wins; an unparsable directive
/// falls back to the default level.
fn resolve_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = default_directive(verbose);
    directive.map_or_else(
        || EnvFilter::new(fallback),
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(fallback)),
    )
}

/// Installs the global `tracing` subscriber on stderr so that the report on
/// stdout stays machine-readable.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let filter = resolve_filter(directive.as_deref(), verbose);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => debug!("Logging initialised"),
        Err(err) => eprintln!("Failed to set global default subscriber: {}", err),
    }
}
