use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. Logs go to stderr; stdout carries prompts
/// and results. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second init (e.g. from tests) keeps the first subscriber.
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
