use tracing_subscriber::EnvFilter;

use crate::config::ScreenerConfig;
use crate::error::SessionError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &ScreenerConfig) -> Result<(), SessionError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SessionError::Telemetry(format!("invalid log level '{}': {e}", config.log_level))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(|e| SessionError::Telemetry(e.to_string()))
}
