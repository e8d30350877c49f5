//! Tracing subscriber setup for hosts embedding the connector.

use roster_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides
/// `logging.level`.
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Install a global `fmt` subscriber.
///
/// The filter comes from `ROSTER_LOG` when set and valid, otherwise from
/// `config.level`. `config.json` switches to JSON lines.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
