use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log filter, in `EnvFilter` syntax.
const LOG_ENV: &str = "RECON_LOG";

/// Installs a logger writing to stderr.
///
/// Logging is off unless `verbose` is set or `RECON_LOG` names a filter, so that a failed run
/// writes nothing to stderr but its diagnostic.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "librecon=debug,recon=debug"
    } else {
        "off"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
