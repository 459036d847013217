use std::{error::Error, io::stdout};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use iconsmith_application::infrastructure_config::{Config, LogFormat, LoggingConfig};

const SERVICE_NAME: &str = "iconsmith";

/// `RUST_LOG` wins over the configured level. A level string the filter
/// cannot parse falls back to `info`.
fn build_env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn setup_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let env_filter = build_env_filter(&config.logging);

    match config.logging.format {
        LogFormat::Json => {
            let formatting_layer = BunyanFormattingLayer::new(SERVICE_NAME.to_string(), stdout);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let format = fmt::format()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(config.logging.include_location)
                .with_line_number(config.logging.include_location)
                .compact();

            tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(env_filter)
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn logging(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }

    #[test]
    fn configured_directives_are_used() {
        if env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_env_filter(&logging("warn,iconsmith_adapters=debug"));
        let rendered = filter.to_string();
        assert!(rendered.contains("warn"));
        assert!(rendered.contains("iconsmith_adapters=debug"));
    }

    #[test]
    fn second_install_is_an_error() {
        let config = Config::default();
        let _first = setup_logging(&config);
        assert!(setup_logging(&config).is_err());
    }

    #[test]
    fn unparsable_level_falls_back() {
        let filter = build_env_filter(&logging("=[bad"));
        assert!(!filter.to_string().is_empty());
    }
}
